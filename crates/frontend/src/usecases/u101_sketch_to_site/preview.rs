use super::view_model::SketchToSiteVm;
use crate::shared::icons::icon;
use contracts::enums::PreviewDevice;
use leptos::prelude::*;

/// Live preview of the current artifact
///
/// The iframe only gets `allow-scripts`: generated code runs in an opaque origin
/// with no access to the host page DOM or storage.
#[component]
#[allow(non_snake_case)]
pub fn PreviewFrame() -> impl IntoView {
    let vm = use_context::<SketchToSiteVm>().expect("SketchToSiteVm context not found");

    // Memo: srcdoc must not be re-set (and the frame reloaded) on unrelated state changes
    let document = Memo::new(move |_| vm.state.with(|s| s.preview_document().to_string()));
    let is_generating = Memo::new(move |_| vm.state.with(|s| s.is_generating()));

    view! {
        <div class="preview-frame">
            <div class="preview-frame__bar">
                <div class="preview-frame__title">
                    <div class="preview-frame__dots">
                        <span class="preview-frame__dot preview-frame__dot--red"></span>
                        <span class="preview-frame__dot preview-frame__dot--yellow"></span>
                        <span class="preview-frame__dot preview-frame__dot--green"></span>
                    </div>
                    <span class="preview-frame__filename">"live-preview.html"</span>
                </div>

                <div class="preview-frame__devices">
                    {PreviewDevice::all()
                        .into_iter()
                        .map(|device| {
                            view! {
                                <button
                                    class=move || {
                                        if vm.device.get() == device {
                                            "preview-frame__device preview-frame__device--active"
                                        } else {
                                            "preview-frame__device"
                                        }
                                    }
                                    title=device.title()
                                    on:click=move |_| vm.device.set(device)
                                >
                                    {icon(device.icon_name())}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="preview-frame__viewport">
                <Show when=move || is_generating.get()>
                    <div class="preview-frame__busy">
                        <div class="preview-frame__spinner">{icon("refresh")}</div>
                        <p class="preview-frame__busy-text">"Generative AI at work..."</p>
                    </div>
                </Show>

                <iframe
                    title="Generated Preview"
                    sandbox="allow-scripts"
                    srcdoc=move || document.get()
                    class=move || {
                        if vm.device.get() == PreviewDevice::Mobile {
                            "preview-frame__iframe preview-frame__iframe--mobile"
                        } else {
                            "preview-frame__iframe"
                        }
                    }
                    style=move || format!("width: {};", vm.device.get().frame_width())
                ></iframe>
            </div>
        </div>
    }
}
