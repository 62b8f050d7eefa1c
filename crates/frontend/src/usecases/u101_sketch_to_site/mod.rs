//! Sketch → Site UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: Gemini client wiring and API calls
//! - view_model.rs: SketchToSiteVm with RwSignals and named transitions
//! - view.rs: WorkflowPanel (left) and PreviewPanel (center)
//! - uploader.rs: drag & drop / file picker widget
//! - composer.rs: refinement input
//! - preview.rs: sandboxed iframe preview
//! - code_panel.rs: read-only source overlay

mod code_panel;
mod composer;
mod model;
mod preview;
mod uploader;
mod view;
mod view_model;

pub use view::{PreviewPanel, WorkflowPanel};
pub use view_model::SketchToSiteVm;
