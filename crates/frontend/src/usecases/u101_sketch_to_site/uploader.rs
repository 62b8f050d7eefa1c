use super::view_model::SketchToSiteVm;
use crate::shared::icons::icon;
use contracts::domain::a001_sketch_image::is_image_mime;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drop-zone / file picker for the sketch, or the thumbnail once one is selected
#[component]
#[allow(non_snake_case)]
pub fn SketchUploader() -> impl IntoView {
    let vm = use_context::<SketchToSiteVm>().expect("SketchToSiteVm context not found");

    // Picker path: the OS dialog already filtered by `accept`, no extra check
    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                vm.select_file(file);
            }
            // Clear input so the same file can be picked again
            input.set_value("");
        }
    };

    let handle_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        vm.is_dragging.set(false);

        let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        else {
            return;
        };

        if !is_image_mime(&file.type_()) {
            log::warn!("Ignoring dropped non-image file {} ({})", file.name(), file.type_());
            return;
        }
        vm.select_file(file);
    };

    let handle_drag_over = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        vm.is_dragging.set(true);
    };

    let handle_drag_leave = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        vm.is_dragging.set(false);
    };

    let selected = Memo::new(move |_| vm.state.with(|s| s.image().cloned()));
    let is_generating = Memo::new(move |_| vm.state.with(|s| s.is_generating()));

    move || match selected.get() {
        Some(image) => view! {
            <div class="sketch-uploader sketch-uploader--selected">
                <img class="sketch-uploader__thumbnail" src=image.data_url() alt="Sketch Preview" />
                <div class="sketch-uploader__overlay">
                    <button
                        class="sketch-uploader__remove"
                        disabled=move || is_generating.get()
                        on:click=move |_| vm.clear_image()
                    >
                        {icon("close")}
                        " Remove Sketch"
                    </button>
                </div>
            </div>
        }
        .into_any(),
        None => view! {
            <div
                class=move || {
                    if vm.is_dragging.get() {
                        "sketch-uploader sketch-uploader--dragging"
                    } else {
                        "sketch-uploader"
                    }
                }
                on:drop=handle_drop
                on:dragover=handle_drag_over
                on:dragleave=handle_drag_leave
            >
                <label class="sketch-uploader__label">
                    <div class="sketch-uploader__icon">{icon("upload")}</div>
                    <p class="sketch-uploader__title">"Upload your UI Sketch"</p>
                    <p class="sketch-uploader__hint">"Drag & drop or click to browse"</p>
                    <p class="sketch-uploader__formats">"Supports JPG, PNG, WEBP"</p>
                    <input
                        type="file"
                        accept="image/*"
                        style="display: none;"
                        on:change=handle_file_select
                    />
                </label>
            </div>
        }
        .into_any(),
    }
}
