use super::view_model::SketchToSiteVm;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Read-only source of the current artifact, overlaid on the preview
#[component]
#[allow(non_snake_case)]
pub fn CodePanel() -> impl IntoView {
    let vm = use_context::<SketchToSiteVm>().expect("SketchToSiteVm context not found");

    let visible = Memo::new(move |_| vm.show_code.get() && vm.state.with(|s| s.has_artifact()));

    view! {
        <Show when=move || visible.get()>
            <div class="code-panel">
                <div class="code-panel__bar">
                    <h3 class="code-panel__title">{icon("code")} " Source Code"</h3>
                    <button class="code-panel__close" on:click=move |_| vm.show_code.set(false)>
                        {icon("close")}
                    </button>
                </div>
                <textarea
                    class="code-panel__source"
                    readonly=true
                    prop:value=move || vm.state.with(|s| s.artifact().to_string())
                ></textarea>
            </div>
        </Show>
    }
}
