use crate::domain::a001_sketch_image::SketchImage;
use crate::enums::AppStatus;
use crate::shared::llm::GenerationError;

pub const GENERATE_FAILED_MESSAGE: &str = "Failed to generate code. Please try again.";
pub const REFINE_FAILED_MESSAGE: &str = "Failed to refine code. Please try again.";

/// Документ превью, пока артефакта нет
pub const PREVIEW_PLACEHOLDER: &str = r#"<div style="display:flex;height:100%;align-items:center;justify-content:center;color:#64748b;font-family:sans-serif;">Ready to visualize your sketch</div>"#;

/// Запрос на доработку, снятый со состояния в момент старта
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefineRequest {
    pub current_html: String,
    pub instruction: String,
}

/// Какой вызов модели сейчас в полёте
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingCall {
    Generate,
    Refine,
}

/// Состояние сессии Sketch → Site
///
/// Каждый асинхронный вызов модели разбит на пару `begin_*`/`finish_*`:
/// `begin_*` проверяет guard и переводит в `Generating`, `finish_*` применяет результат.
/// Пока статус `Generating`, новые запуски игнорируются (single-flight).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    image: Option<SketchImage>,
    status: AppStatus,
    artifact: String,
    refinement_prompt: String,
    error_message: Option<String>,
    pending: Option<PendingCall>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<&SketchImage> {
        self.image.as_ref()
    }

    pub fn status(&self) -> AppStatus {
        self.status
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn refinement_prompt(&self) -> &str {
        &self.refinement_prompt
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_generating(&self) -> bool {
        self.status.is_busy()
    }

    pub fn has_artifact(&self) -> bool {
        !self.artifact.is_empty()
    }

    pub fn can_generate(&self) -> bool {
        self.image.is_some() && !self.is_generating()
    }

    pub fn can_refine(&self) -> bool {
        self.has_artifact()
            && !self.refinement_prompt.trim().is_empty()
            && !self.is_generating()
    }

    /// HTML для iframe: артефакт или нейтральная заглушка
    pub fn preview_document(&self) -> &str {
        if self.has_artifact() {
            &self.artifact
        } else {
            PREVIEW_PLACEHOLDER
        }
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    pub fn select_image(&mut self, image: SketchImage) {
        self.image = Some(image);
        self.reset_session();
    }

    pub fn clear_image(&mut self) {
        self.image = None;
        self.reset_session();
    }

    fn reset_session(&mut self) {
        self.status = AppStatus::Idle;
        self.artifact.clear();
        self.refinement_prompt.clear();
        self.error_message = None;
        self.pending = None;
    }

    pub fn set_refinement_prompt(&mut self, text: impl Into<String>) {
        self.refinement_prompt = text.into();
    }

    /// Start a generation. Returns the image to send, or `None` when generation is not allowed.
    pub fn begin_generate(&mut self) -> Option<SketchImage> {
        if !self.can_generate() {
            return None;
        }
        self.status = AppStatus::Generating;
        self.error_message = None;
        self.pending = Some(PendingCall::Generate);
        self.image.clone()
    }

    /// Apply a generation result. On failure the previous artifact is kept.
    pub fn finish_generate(&mut self, result: Result<String, GenerationError>) {
        if self.pending != Some(PendingCall::Generate) {
            log::debug!("Dropping stale generation result (status {})", self.status);
            return;
        }
        self.pending = None;
        match result {
            Ok(code) => {
                self.artifact = code;
                self.status = AppStatus::Success;
            }
            Err(e) => {
                log::error!("Generation failed: {}", e);
                self.error_message = Some(GENERATE_FAILED_MESSAGE.to_string());
                self.status = AppStatus::Error;
            }
        }
    }

    /// Start a refinement. The instruction is taken out of the composer immediately.
    pub fn begin_refine(&mut self) -> Option<RefineRequest> {
        if !self.can_refine() {
            return None;
        }
        let instruction = std::mem::take(&mut self.refinement_prompt);
        self.status = AppStatus::Generating;
        self.error_message = None;
        self.pending = Some(PendingCall::Refine);
        Some(RefineRequest {
            current_html: self.artifact.clone(),
            instruction,
        })
    }

    /// Apply a refinement result. A failure returns to `Success` so the old artifact stays visible.
    pub fn finish_refine(&mut self, result: Result<String, GenerationError>) {
        if self.pending != Some(PendingCall::Refine) {
            log::debug!("Dropping stale refinement result (status {})", self.status);
            return;
        }
        self.pending = None;
        match result {
            Ok(code) => {
                self.artifact = code;
            }
            Err(e) => {
                log::error!("Refinement failed: {}", e);
                self.error_message = Some(REFINE_FAILED_MESSAGE.to_string());
            }
        }
        self.status = AppStatus::Success;
    }
}
