//! Sketch → Site - View Components

use super::code_panel::CodePanel;
use super::composer::RefineComposer;
use super::preview::PreviewFrame;
use super::uploader::SketchUploader;
use super::view_model::SketchToSiteVm;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Left panel: upload → generate → refine
#[component]
#[allow(non_snake_case)]
pub fn WorkflowPanel() -> impl IntoView {
    let vm = use_context::<SketchToSiteVm>().expect("SketchToSiteVm context not found");

    let can_generate = Memo::new(move |_| vm.state.with(|s| s.can_generate()));
    let is_generating = Memo::new(move |_| vm.state.with(|s| s.is_generating()));
    let has_artifact = Memo::new(move |_| vm.state.with(|s| s.has_artifact()));
    let error_message =
        Memo::new(move |_| vm.state.with(|s| s.error_message().map(str::to_string)));

    view! {
        <div class="workflow-panel">
            <section class="workflow-panel__step">
                <h2 class="workflow-panel__heading">"1. Upload Sketch"</h2>
                <p class="workflow-panel__text">
                    "Upload a photo of your hand-drawn wireframe or UI sketch."
                </p>
                <SketchUploader />
            </section>

            <section class="workflow-panel__step">
                <h2 class="workflow-panel__heading">"2. Generate Code"</h2>
                <p class="workflow-panel__text">
                    "Gemini will analyze your sketch and write the code."
                </p>
                <div class="workflow-panel__generate">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !can_generate.get())
                        on_click=move |_| vm.generate()
                    >
                        {move || {
                            if is_generating.get() {
                                view! { "Generating..." }.into_any()
                            } else {
                                view! { {icon("play")} " Generate Website" }.into_any()
                            }
                        }}
                    </Button>
                </div>

                {move || {
                    error_message
                        .get()
                        .map(|message| {
                            view! {
                                <div class="workflow-panel__error">
                                    {icon("alert")}
                                    <span>{message}</span>
                                </div>
                            }
                        })
                }}
            </section>

            <Show when=move || has_artifact.get()>
                <section class="workflow-panel__step workflow-panel__step--grow">
                    <h2 class="workflow-panel__heading">"3. Refine Result"</h2>
                    <p class="workflow-panel__text">"Not quite right? Describe changes below."</p>
                    <RefineComposer />
                </section>
            </Show>
        </div>
    }
}

/// Center panel: preview with the optional source overlay
#[component]
#[allow(non_snake_case)]
pub fn PreviewPanel() -> impl IntoView {
    view! {
        <div class="preview-panel">
            <CodePanel />
            <PreviewFrame />
        </div>
    }
}
