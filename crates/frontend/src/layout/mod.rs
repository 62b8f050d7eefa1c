pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Workflow (Left)  |     Preview (Center)  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(show_code: RwSignal<bool>, left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader show_code=show_code />

            <div class="app-body">
                <aside class="app-left">{left()}</aside>
                <main class="app-main">{center()}</main>
            </div>
        </div>
    }
}
