use super::types::GenerationError;
use serde::Deserialize;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Низкая температура для генерации по эскизу: код детерминированнее
pub const DEFAULT_SKETCH_TEMPERATURE: f32 = 0.4;
pub const DEFAULT_TIMEOUT_SECS: u32 = 120;

/// Настройки клиента Gemini
///
/// В браузере нет окружения процесса, поэтому ключ вшивается при сборке бандла
/// (`API_KEY=... trunk build`) и проверяется при каждом вызове.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_sketch_temperature")]
    pub sketch_temperature: f32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u32,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_sketch_temperature() -> f32 {
    DEFAULT_SKETCH_TEMPERATURE
}

fn default_timeout_secs() -> u32 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            endpoint: default_endpoint(),
            sketch_temperature: default_sketch_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeminiConfig {
    /// Load configuration captured from the build environment
    ///
    /// `API_KEY` takes precedence over `GEMINI_API_KEY`; `GEMINI_MODEL` overrides the model.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("API_KEY").or(option_env!("GEMINI_API_KEY")),
            option_env!("GEMINI_MODEL"),
        )
    }

    pub fn from_values(api_key: Option<&str>, model: Option<&str>) -> Self {
        let mut config = Self::default();
        config.api_key = api_key.map(str::to_string);
        if let Some(model) = model.map(str::trim).filter(|m| !m.is_empty()) {
            config.model = model.to_string();
        }
        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Ключ API; пустой ключ считается отсутствующим
    pub fn api_key(&self) -> Result<&str, GenerationError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(GenerationError::MissingApiKey)
    }

    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}
