//! Gemini `generateContent` client
//!
//! Wire DTOs, the transport seam and [`GeminiClient`], which implements
//! [`SiteGenerator`] on top of any [`GeminiTransport`].

use super::config::GeminiConfig;
use super::fences::strip_code_fences;
use super::prompts::{refine_prompt, SYSTEM_INSTRUCTION};
use super::types::{GenerationError, SiteGenerator};
use crate::domain::a001_sketch_image::SketchImage;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts,
        }
    }

    pub fn system(text: &str) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }
}

/// Часть сообщения: либо текст, либо inline-данные
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    pub fn image(image: &SketchImage) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: image.mime_type().to_string(),
                data: image.data().to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Текст первого кандидата, у которого он есть (все текстовые части подряд)
    pub fn text(&self) -> Option<String> {
        self.candidates.iter().find_map(|candidate| {
            let parts = &candidate.content.as_ref()?.parts;
            let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
            if text.is_empty() {
                None
            } else {
                Some(text)
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Map a non-success HTTP response to [`GenerationError::Api`]
///
/// Uses the Google error envelope message when the body carries one.
pub fn api_error(status: u16, body: &str) -> GenerationError {
    let message = match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(code) => format!("{} ({})", envelope.error.message, code),
            None => envelope.error.message,
        },
        Err(_) => body.trim().to_string(),
    };
    GenerationError::Api { status, message }
}

// ============================================================================
// Transport seam
// ============================================================================

/// HTTP-транспорт для `generateContent`
///
/// В браузере реализуется через fetch, в тестах — записывающим двойником.
#[async_trait(?Send)]
pub trait GeminiTransport {
    async fn generate_content(
        &self,
        url: &str,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError>;
}

// ============================================================================
// Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct GeminiClient<T> {
    config: GeminiConfig,
    transport: T,
}

impl<T: GeminiTransport> GeminiClient<T> {
    pub fn new(config: GeminiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn sketch_request(&self, image: &SketchImage, prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(vec![Part::image(image), Part::text(prompt)])],
            system_instruction: Some(Content::system(SYSTEM_INSTRUCTION)),
            generation_config: Some(GenerationConfig {
                temperature: Some(self.config.sketch_temperature),
            }),
        }
    }

    pub fn refine_request(&self, html: &str, instruction: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(vec![Part::text(refine_prompt(
                html,
                instruction,
            ))])],
            system_instruction: Some(Content::system(SYSTEM_INSTRUCTION)),
            generation_config: None,
        }
    }

    async fn call(
        &self,
        api_key: &str,
        request: GenerateContentRequest,
    ) -> Result<String, GenerationError> {
        let url = self.config.generate_content_url();
        let response = self
            .transport
            .generate_content(&url, api_key, &request)
            .await?;

        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            log::warn!("Gemini blocked the prompt: {}", reason);
        }

        let text = response.text().ok_or(GenerationError::EmptyResponse)?;
        Ok(strip_code_fences(&text))
    }
}

#[async_trait(?Send)]
impl<T: GeminiTransport> SiteGenerator for GeminiClient<T> {
    async fn generate(&self, image: &SketchImage, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self.config.api_key()?;
        log::debug!(
            "Gemini generate: model={}, mime={}, payload={} bytes",
            self.config.model,
            image.mime_type(),
            image.data().len()
        );
        self.call(api_key, self.sketch_request(image, prompt)).await
    }

    async fn refine(&self, html: &str, instruction: &str) -> Result<String, GenerationError> {
        let api_key = self.config.api_key()?;
        log::debug!(
            "Gemini refine: model={}, html={} chars, instruction={} chars",
            self.config.model,
            html.len(),
            instruction.len()
        );
        self.call(api_key, self.refine_request(html, instruction)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::llm::testing::{scripted_client, ScriptedTransport};
    use futures::executor::block_on;

    fn sketch() -> SketchImage {
        SketchImage::from_bytes("image/jpeg", b"jpeg-bytes").unwrap()
    }

    #[test]
    fn test_generate_sends_image_prompt_and_low_temperature() {
        let client = scripted_client(ScriptedTransport::new().reply_text("```html<div>hi</div>```"));

        let html = block_on(client.generate(&sketch(), "build it")).unwrap();
        assert_eq!(html, "<div>hi</div>");

        let calls = client.transport().calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(calls[0].api_key, "test-key");

        let request = &calls[0].request;
        let parts = &request.contents[0].parts;
        assert_eq!(parts.len(), 2);
        let inline = parts[0].inline_data.as_ref().unwrap();
        assert_eq!(inline.mime_type, "image/jpeg");
        assert_eq!(inline.data, sketch().data());
        assert_eq!(parts[1].text.as_deref(), Some("build it"));
        assert_eq!(
            request.generation_config,
            Some(GenerationConfig {
                temperature: Some(0.4)
            })
        );
        assert!(request.system_instruction.is_some());
    }

    #[test]
    fn test_refine_sends_composite_prompt_without_temperature() {
        let client = scripted_client(
            ScriptedTransport::new().reply_text("<div style=\"color:red\">hi</div>"),
        );

        let html = block_on(client.refine("<div>hi</div>", "make it red")).unwrap();
        assert_eq!(html, "<div style=\"color:red\">hi</div>");

        assert!(client.transport().calls.borrow()[0]
            .request
            .generation_config
            .is_none());
        let prompt = client.transport().last_prompt().unwrap();
        assert!(prompt.contains("<div>hi</div>"));
        assert!(prompt.contains("User Instruction: make it red"));
    }

    #[test]
    fn test_missing_key_fails_before_transport() {
        let client = GeminiClient::new(GeminiConfig::default(), ScriptedTransport::new());

        assert_eq!(
            block_on(client.generate(&sketch(), "x")),
            Err(GenerationError::MissingApiKey)
        );
        assert_eq!(
            block_on(client.refine("<p></p>", "x")),
            Err(GenerationError::MissingApiKey)
        );
        assert_eq!(client.transport().call_count(), 0);
    }

    #[test]
    fn test_transport_error_propagates_unchanged() {
        let error = GenerationError::Api {
            status: 429,
            message: "quota".to_string(),
        };
        let client = scripted_client(ScriptedTransport::new().reply_error(error.clone()));
        assert_eq!(block_on(client.generate(&sketch(), "x")), Err(error));
    }

    #[test]
    fn test_empty_candidates_is_error() {
        let client = scripted_client(ScriptedTransport::new().reply(Ok(
            GenerateContentResponse {
                candidates: vec![],
                prompt_feedback: Some(PromptFeedback {
                    block_reason: Some("SAFETY".to_string()),
                }),
            },
        )));
        assert_eq!(
            block_on(client.generate(&sketch(), "x")),
            Err(GenerationError::EmptyResponse)
        );
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let client = scripted_client(ScriptedTransport::new());
        let json = serde_json::to_value(client.sketch_request(&sketch(), "p")).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(
            json["contents"][0]["parts"][0]["inlineData"]["mimeType"],
            "image/jpeg"
        );
        assert_eq!(json["contents"][0]["parts"][1]["text"], "p");
        assert!(json["contents"][0]["parts"][1].get("inlineData").is_none());
        assert!(json["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("Tailwind"));
        assert!(json["generationConfig"]["temperature"].is_number());
    }

    #[test]
    fn test_response_text_joins_parts_of_first_candidate_with_text() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": []}, "finishReason": "SAFETY"},
                {"content": {"role": "model", "parts": [{"text": "<p>"}, {"text": "ok</p>"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text().as_deref(), Some("<p>ok</p>"));
    }

    #[test]
    fn test_api_error_uses_envelope_message() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(
            api_error(400, body),
            GenerationError::Api {
                status: 400,
                message: "API key not valid (INVALID_ARGUMENT)".to_string()
            }
        );
        assert_eq!(
            api_error(502, " Bad Gateway \n"),
            GenerationError::Api {
                status: 502,
                message: "Bad Gateway".to_string()
            }
        );
    }
}
