//! Sketch → Site use case
//!
//! Состояние сессии и таблица переходов `Idle → Generating → Success/Error`.
//! UI меняет состояние только через именованные переходы [`AppState`].

pub mod state;

pub use state::{
    AppState, RefineRequest, GENERATE_FAILED_MESSAGE, PREVIEW_PLACEHOLDER,
    REFINE_FAILED_MESSAGE,
};
