//! Analysis result display: status alert, severity badge, confidence bar,
//! treatment and prevention guidance, and the report download action.

use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};

use crate::detection::{DetectionResult, HealthStatus};
use crate::report::{report_file_name, report_json};

#[component]
pub fn ResultPanel(result: DetectionResult, image_name: String) -> impl IntoView {
    let (alert_class, alert_text) = match result.status {
        HealthStatus::Healthy => ("status-alert status-healthy", "Plant appears healthy!"),
        HealthStatus::Diseased => (
            "status-alert status-diseased",
            "Disease detected in your plant",
        ),
    };

    let severity_class = result.severity.badge_class();
    let severity_text = format!("{} Severity", result.severity.label());
    let confidence = result.confidence;

    let download_result = result.clone();
    let download_name = image_name.clone();
    let on_download = move |_| {
        if let Err(e) = trigger_download(&download_name, &download_result) {
            web_sys::console::error_1(&e);
        }
    };

    view! {
        <div class="result-panel">
            <style>{include_str!("result_panel.css")}</style>

            <div class=alert_class>{alert_text}</div>

            <div class="condition-header">
                <h4>"Detected Condition"</h4>
                <span class=severity_class>{severity_text}</span>
            </div>

            <div class="condition-card">
                <h5 class="condition-name">{result.disease.clone()}</h5>
                <div class="confidence-row">
                    <span class="confidence-label">"Confidence:"</span>
                    <div class="confidence-track">
                        <div
                            class="confidence-fill"
                            style=format!("width: {}%", confidence)
                        ></div>
                    </div>
                    <span class="confidence-value">{format!("{}%", confidence)}</span>
                </div>
            </div>

            <div class="guidance-section">
                <h5>"Treatment Recommendations"</h5>
                <div class="guidance-card guidance-treatment">
                    <p>{result.treatment.clone()}</p>
                </div>
            </div>

            <div class="guidance-section">
                <h5>"Prevention Tips"</h5>
                <div class="guidance-card guidance-prevention">
                    <p>{result.prevention.clone()}</p>
                </div>
            </div>

            <div class="result-actions">
                <button class="btn btn-primary" on:click=on_download>
                    "Download Report"
                </button>
                <button class="btn btn-secondary">"Consult Expert"</button>
            </div>
        </div>
    }
}

/// Serialize the report and hand it to the browser as a JSON file download.
fn trigger_download(image_name: &str, result: &DetectionResult) -> Result<(), JsValue> {
    let json = report_json(image_name, result);

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&json));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(parts.as_ref(), &options)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: web_sys::HtmlAnchorElement =
        document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&report_file_name(image_name));
    anchor.click();
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}
