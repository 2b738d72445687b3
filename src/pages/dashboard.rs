//! Dashboard page owning the upload → analyze → result workflow.
//!
//! Analysis is simulated by a fixed-interval progress ticker; the state
//! machine itself lives in [`crate::detection`]. Exactly one ticker is live at
//! a time: starting a new analysis always clears the previous interval first.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::header::DashboardHeader;
use crate::components::result_panel::ResultPanel;
use crate::components::stat_card::StatCard;
use crate::components::upload_zone::UploadZone;
use crate::detection::{AnalysisState, ScanStats, UploadedImage, TICK_INTERVAL_MS};

/// Clear a live interval handle, if any.
fn clear_tick(handle: StoredValue<Option<i32>>) {
    if let Some(id) = handle.get_value() {
        if let Some(win) = web_sys::window() {
            win.clear_interval_with_handle(id);
        }
        handle.set_value(None);
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (state, set_state) = signal(AnalysisState::Idle);
    let (image, set_image) = signal::<Option<UploadedImage>>(None);
    let (stats, set_stats) = signal(ScanStats::default());
    let tick_handle = StoredValue::new(None::<i32>);

    // Start (or restart) the simulated analysis. Clearing the old handle
    // first keeps the single-ticker invariant when the user re-uploads
    // mid-analysis.
    let start_analysis = move || {
        clear_tick(tick_handle);
        set_state.update(|s| s.begin());

        let callback = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            let mut finished = false;
            set_state.update(|s| finished = s.advance());
            if finished {
                clear_tick(tick_handle);
                if let AnalysisState::Complete { ref result } = state.get_untracked() {
                    set_stats.update(|st| st.record(result));
                }
            }
        }) as Box<dyn Fn()>);

        let id = web_sys::window()
            .unwrap()
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                TICK_INTERVAL_MS,
            )
            .unwrap();
        callback.forget();
        tick_handle.set_value(Some(id));
    };

    // A successful upload replaces the image and kicks off analysis; there is
    // no separate submit step.
    let on_image = Callback::new(move |uploaded: UploadedImage| {
        set_image.set(Some(uploaded));
        start_analysis();
    });

    let on_reset = Callback::new(move |_: ()| {
        clear_tick(tick_handle);
        set_state.update(|s| s.reset());
        set_image.set(None);
    });

    on_cleanup(move || clear_tick(tick_handle));

    view! {
        <div class="page dashboard-page">
            <style>{include_str!("dashboard.css")}</style>

            <DashboardHeader />

            <main class="dashboard-main">
                <div class="stats-grid">
                    <StatCard
                        label="Total Scans"
                        value=Signal::derive(move || stats.get().total_scans.to_string())
                        accent="accent-blue"
                    />
                    <StatCard
                        label="Healthy Plants"
                        value=Signal::derive(move || stats.get().healthy_plants.to_string())
                        accent="accent-green"
                    />
                    <StatCard
                        label="Diseases Found"
                        value=Signal::derive(move || stats.get().diseases_found.to_string())
                        accent="accent-red"
                    />
                    <StatCard
                        label="Accuracy Rate"
                        value=Signal::derive(move || {
                            format!("{}%", stats.get().accuracy_percent)
                        })
                        accent="accent-purple"
                    />
                </div>

                <div class="workspace-grid">
                    <section class="card upload-card">
                        <h3 class="card-title">"Upload Plant Photo"</h3>
                        <UploadZone image=image on_image=on_image on_reset=on_reset />

                        <Show when=move || state.get().is_analyzing()>
                            <div class="analysis-progress">
                                <div class="progress-label">
                                    <span class="progress-spinner"></span>
                                    <span>"Analyzing your plant..."</span>
                                </div>
                                <div class="progress-track">
                                    <div
                                        class="progress-fill"
                                        style=move || {
                                            format!("width: {}%", state.get().progress())
                                        }
                                    ></div>
                                </div>
                                <p class="progress-percent">
                                    {move || format!("{}% Complete", state.get().progress())}
                                </p>
                            </div>
                        </Show>
                    </section>

                    <section class="card results-card">
                        <h3 class="card-title">"Analysis Results"</h3>
                        {move || match state.get() {
                            AnalysisState::Idle => view! {
                                <div class="results-empty">
                                    <h4>"Ready for Analysis"</h4>
                                    <p>
                                        "Upload a photo to get started with AI-powered \
                                         plant health detection"
                                    </p>
                                </div>
                            }
                                .into_any(),
                            AnalysisState::Analyzing { .. } => view! {
                                <div class="results-empty">
                                    <h4>"Analysis in progress"</h4>
                                    <p>"Results will appear here in a moment"</p>
                                </div>
                            }
                                .into_any(),
                            AnalysisState::Complete { result } => {
                                let image_name = image
                                    .get()
                                    .map(|img| img.file_name)
                                    .unwrap_or_default();
                                view! {
                                    <ResultPanel result=result image_name=image_name />
                                }
                                    .into_any()
                            }
                        }}
                    </section>
                </div>
            </main>
        </div>
    }
}
