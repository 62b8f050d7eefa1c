use super::view_model::SketchToSiteVm;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Refinement instruction input. Enter sends, Shift+Enter inserts a newline.
#[component]
#[allow(non_snake_case)]
pub fn RefineComposer() -> impl IntoView {
    let vm = use_context::<SketchToSiteVm>().expect("SketchToSiteVm context not found");

    let is_generating = Memo::new(move |_| vm.state.with(|s| s.is_generating()));
    let can_send = Memo::new(move |_| vm.state.with(|s| s.can_refine()));

    view! {
        <div class="refine-composer">
            <textarea
                class="refine-composer__input"
                placeholder="e.g., 'Make the hero button larger and blue', 'Add a footer with copyright'"
                prop:value=move || vm.state.with(|s| s.refinement_prompt().to_string())
                disabled=move || is_generating.get()
                on:input=move |ev| vm.set_refinement_prompt(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" && !ev.shift_key() {
                        ev.prevent_default();
                        vm.refine();
                    }
                }
            ></textarea>
            <div class="refine-composer__send">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !can_send.get())
                    on_click=move |_| vm.refine()
                >
                    {icon("arrow-right")}
                </Button>
            </div>
        </div>
    }
}
