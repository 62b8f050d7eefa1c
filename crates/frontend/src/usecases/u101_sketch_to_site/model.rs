//! Sketch → Site - Model (API functions)

use crate::shared::llm::FetchTransport;
use contracts::domain::a001_sketch_image::SketchImage;
use contracts::shared::llm::prompts::DEFAULT_SKETCH_PROMPT;
use contracts::shared::llm::{GeminiClient, GeminiConfig, GenerationError, SiteGenerator};
use contracts::usecases::u101_sketch_to_site::RefineRequest;

pub type SketchClient = GeminiClient<FetchTransport>;

/// Клиент Gemini с ключом, вшитым при сборке
pub fn build_client() -> SketchClient {
    let config = GeminiConfig::from_build_env();
    if config.api_key().is_err() {
        log::warn!("API_KEY was not set at build time; every generation will fail");
    }
    let transport = FetchTransport::new(config.timeout_secs);
    GeminiClient::new(config, transport)
}

/// Сгенерировать сайт по эскизу
pub async fn generate_site(
    client: &SketchClient,
    image: SketchImage,
) -> Result<String, GenerationError> {
    client.generate(&image, DEFAULT_SKETCH_PROMPT).await
}

/// Доработать текущий сайт по инструкции
pub async fn refine_site(
    client: &SketchClient,
    request: RefineRequest,
) -> Result<String, GenerationError> {
    client
        .refine(&request.current_html, &request.instruction)
        .await
}
