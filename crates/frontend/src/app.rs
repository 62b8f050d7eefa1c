use crate::layout::Shell;
use crate::usecases::u101_sketch_to_site::{PreviewPanel, SketchToSiteVm, WorkflowPanel};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Single session per page; widgets pick the view model up from context.
    let vm = SketchToSiteVm::new();
    provide_context(vm);

    view! {
        <Shell
            show_code=vm.show_code
            left=|| view! { <WorkflowPanel /> }.into_any()
            center=|| view! { <PreviewPanel /> }.into_any()
        />
    }
}
