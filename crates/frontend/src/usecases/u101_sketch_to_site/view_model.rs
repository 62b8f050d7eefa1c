//! Sketch → Site - View Model

use super::model::{build_client, generate_site, refine_site, SketchClient};
use crate::shared::file_reader::read_sketch;
use contracts::enums::PreviewDevice;
use contracts::usecases::u101_sketch_to_site::AppState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

/// Состояние страницы. Сессия целиком живёт в `state`; остальное - чисто отображение.
#[derive(Clone, Copy)]
pub struct SketchToSiteVm {
    pub state: RwSignal<AppState>,
    pub device: RwSignal<PreviewDevice>,
    pub show_code: RwSignal<bool>,
    pub is_dragging: RwSignal<bool>,
    client: StoredValue<Arc<SketchClient>>,
}

impl SketchToSiteVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AppState::new()),
            device: RwSignal::new(PreviewDevice::default()),
            show_code: RwSignal::new(false),
            is_dragging: RwSignal::new(false),
            client: StoredValue::new(Arc::new(build_client())),
        }
    }

    /// Read the file and publish it as the current sketch. Unreadable files are ignored.
    pub fn select_file(&self, file: web_sys::File) {
        let state = self.state;
        spawn_local(async move {
            match read_sketch(file).await {
                Ok(image) => state.update(|s| s.select_image(image)),
                Err(e) => log::warn!("Ignoring unreadable sketch: {}", e),
            }
        });
    }

    pub fn clear_image(&self) {
        self.state.update(|s| s.clear_image());
    }

    pub fn set_refinement_prompt(&self, text: String) {
        self.state.update(|s| s.set_refinement_prompt(text));
    }

    pub fn generate(&self) {
        let Some(image) = self.state.try_update(|s| s.begin_generate()).flatten() else {
            return;
        };
        let client = self.client.get_value();
        let state = self.state;
        spawn_local(async move {
            let result = generate_site(&client, image).await;
            state.update(|s| s.finish_generate(result));
        });
    }

    pub fn refine(&self) {
        let Some(request) = self.state.try_update(|s| s.begin_refine()).flatten() else {
            return;
        };
        let client = self.client.get_value();
        let state = self.state;
        spawn_local(async move {
            let result = refine_site(&client, request).await;
            state.update(|s| s.finish_refine(result));
        });
    }
}
