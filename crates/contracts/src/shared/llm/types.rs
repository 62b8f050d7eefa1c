use crate::domain::a001_sketch_image::SketchImage;
use async_trait::async_trait;
use thiserror::Error;

/// Ошибки генерации
///
/// Пользователь их не видит: состояние сессии заменяет любую ошибку общим сообщением.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("API_KEY environment variable is missing")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Transport(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Model returned no text")]
    EmptyResponse,

    #[error("Request timed out after {0}s")]
    Timeout(u32),
}

/// Генератор сайта по эскизу
///
/// Узкая граница над внешней моделью; в тестах подменяется двойником.
#[async_trait(?Send)]
pub trait SiteGenerator {
    /// Сгенерировать HTML-документ по изображению эскиза
    async fn generate(&self, image: &SketchImage, prompt: &str) -> Result<String, GenerationError>;

    /// Доработать текущий HTML по текстовой инструкции
    async fn refine(&self, html: &str, instruction: &str) -> Result<String, GenerationError>;
}
