//! TopHeader component - application top bar.
//!
//! Contains the brand, the model caption and the source-code toggle.

use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader(show_code: RwSignal<bool>) -> impl IntoView {
    let toggle_code = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        show_code.update(|v| *v = !*v);
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <div class="top-header__logo">{icon("wand")}</div>
                <span class="top-header__title">"Sketch2Site"</span>
                <span class="top-header__badge">"Beta"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__caption">
                    {icon("sparkles")}
                    "Powered by Gemini 2.5 Flash"
                </span>
                <a href="#" class="top-header__link" on:click=toggle_code>
                    {move || if show_code.get() { "Hide Code" } else { "View Code" }}
                </a>
            </div>
        </header>
    }
}
