//! Upload intake: drag-and-drop target plus click-to-browse.
//!
//! The MIME gate runs before the file is read; a non-image selection raises a
//! blocking alert and mutates nothing.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::detection::{is_image_mime, UploadedImage};
use crate::error::UploadError;

const FILE_INPUT_ID: &str = "plant-photo-input";

#[component]
pub fn UploadZone(
    /// Currently uploaded image, if any
    image: ReadSignal<Option<UploadedImage>>,
    /// Fired once a file has been validated and read
    on_image: Callback<UploadedImage>,
    /// Fired when the user resets the workflow
    on_reset: Callback<()>,
) -> impl IntoView {
    let (is_over, set_is_over) = signal(false);

    let handle_file = move |file: web_sys::File| {
        let mime = file.type_();
        if !is_image_mime(&mime) {
            let msg: String = UploadError::NotAnImage { mime }.into();
            if let Some(win) = web_sys::window() {
                let _ = win.alert_with_message(&msg);
            }
            return;
        }

        spawn_local(async move {
            match read_uploaded_file(file).await {
                Ok(uploaded) => on_image.run(uploaded),
                Err(e) => {
                    web_sys::console::error_1(&String::from(e).into());
                }
            }
        });
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);

        if let Some(dt) = ev.data_transfer() {
            if let Some(files) = dt.files() {
                if let Some(file) = files.get(0) {
                    handle_file(file);
                }
            }
        }
    };

    let on_input_change = move |ev: web_sys::Event| {
        let input: Option<web_sys::HtmlInputElement> =
            ev.target().and_then(|t| t.dyn_into().ok());
        if let Some(input) = input {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                handle_file(file);
            }
            // Allow picking the same file again after a reset.
            input.set_value("");
        }
    };

    // "Upload New" re-opens the hidden picker.
    let open_picker = move |_| {
        if let Some(input) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(FILE_INPUT_ID))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            input.click();
        }
    };

    view! {
        <div class="upload-zone-wrapper">
            <style>{include_str!("upload_zone.css")}</style>

            <div
                class="drop-zone"
                class:drop-zone-active=move || is_over.get()
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_is_over.set(true);
                }
                on:dragleave=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_is_over.set(false);
                }
                on:drop=on_drop
            >
                {move || match image.get() {
                    Some(uploaded) => view! {
                        <div class="upload-preview">
                            <img
                                src=uploaded.data_url
                                class="preview-image"
                                alt="Uploaded plant"
                            />
                            <p class="preview-name">{uploaded.file_name}</p>
                            <div class="preview-actions">
                                <button class="btn btn-secondary btn-small" on:click=open_picker>
                                    "Upload New"
                                </button>
                                <button
                                    class="btn btn-secondary btn-small"
                                    on:click=move |_| on_reset.run(())
                                >
                                    "Reset"
                                </button>
                            </div>
                        </div>
                    }
                        .into_any(),
                    None => view! {
                        <div class="drop-zone-content">
                            <h4 class="drop-main">"Drop your plant photo here"</h4>
                            <p class="drop-hint">"or click to browse from your device"</p>
                            <label for=FILE_INPUT_ID class="btn btn-primary">
                                "Choose Photo"
                            </label>
                            <p class="drop-formats">
                                "Supported formats: JPG, JPEG, PNG (Max 10MB)"
                            </p>
                        </div>
                    }
                        .into_any(),
                }}
            </div>

            <input
                type="file"
                id=FILE_INPUT_ID
                accept="image/*"
                style="display: none"
                on:change=on_input_change
            />
        </div>
    }
}

/// Read a validated file into an in-memory data-URL representation.
async fn read_uploaded_file(file: web_sys::File) -> Result<UploadedImage, UploadError> {
    use js_sys::{ArrayBuffer, Uint8Array};
    use wasm_bindgen_futures::JsFuture;

    let name = file.name();
    let mime = file.type_();

    let array_buffer: ArrayBuffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| UploadError::Unreadable(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|_| UploadError::Unreadable("not an ArrayBuffer".to_string()))?;

    let bytes = Uint8Array::new(&array_buffer).to_vec();
    UploadedImage::new(&name, &mime, &bytes)
}
