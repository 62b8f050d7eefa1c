//! Тестовые двойники транспорта Gemini

use super::config::GeminiConfig;
use super::gemini::{
    Candidate, Content, GeminiClient, GeminiTransport, GenerateContentRequest,
    GenerateContentResponse, Part,
};
use super::types::GenerationError;
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;

pub(crate) struct RecordedCall {
    pub url: String,
    pub api_key: String,
    pub request: GenerateContentRequest,
}

/// Отдаёт ответы из очереди и записывает каждый запрос
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<GenerateContentResponse, GenerationError>>>,
    pub calls: RefCell<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, reply: Result<GenerateContentResponse, GenerationError>) -> Self {
        self.replies.borrow_mut().push_back(reply);
        self
    }

    pub fn reply_text(self, text: &str) -> Self {
        self.reply(Ok(text_response(text)))
    }

    pub fn reply_error(self, error: GenerationError) -> Self {
        self.reply(Err(error))
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Текст первой части последнего запроса
    pub fn last_prompt(&self) -> Option<String> {
        let calls = self.calls.borrow();
        let parts = &calls.last()?.request.contents.first()?.parts;
        parts.iter().rev().find_map(|p| p.text.clone())
    }
}

#[async_trait(?Send)]
impl GeminiTransport for ScriptedTransport {
    async fn generate_content(
        &self,
        url: &str,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        self.calls.borrow_mut().push(RecordedCall {
            url: url.to_string(),
            api_key: api_key.to_string(),
            request: request.clone(),
        });
        self.replies
            .borrow_mut()
            .pop_front()
            .expect("unexpected Gemini call")
    }
}

pub(crate) fn text_response(text: &str) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Some(Content {
                role: Some("model".to_string()),
                parts: vec![Part::text(text)],
            }),
            finish_reason: Some("STOP".to_string()),
        }],
        prompt_feedback: None,
    }
}

/// Клиент с тестовым ключом поверх скриптового транспорта
pub(crate) fn scripted_client(transport: ScriptedTransport) -> GeminiClient<ScriptedTransport> {
    GeminiClient::new(GeminiConfig::default().with_api_key("test-key"), transport)
}
