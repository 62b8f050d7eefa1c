//! Browser fetch transport for the Gemini API
//!
//! Calls the model directly from the page; there is no backend in between.

use async_trait::async_trait;
use contracts::shared::llm::gemini::{
    api_error, GeminiTransport, GenerateContentRequest, GenerateContentResponse,
};
use contracts::shared::llm::{with_deadline, GenerationError};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

#[derive(Debug, Clone, Copy)]
pub struct FetchTransport {
    timeout_secs: u32,
}

impl FetchTransport {
    pub fn new(timeout_secs: u32) -> Self {
        Self { timeout_secs }
    }

    async fn send(
        url: &str,
        api_key: &str,
        request: &GenerateContentRequest,
        signal: Option<&web_sys::AbortSignal>,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let response = Request::post(url)
            .header("x-goog-api-key", api_key)
            .abort_signal(signal)
            .json(request)
            .map_err(|e| GenerationError::Transport(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| GenerationError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Transport(format!("Failed to read response: {}", e)))?;

        if !response.ok() {
            return Err(api_error(status, &body));
        }

        serde_json::from_str::<GenerateContentResponse>(&body)
            .map_err(|e| GenerationError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait(?Send)]
impl GeminiTransport for FetchTransport {
    async fn generate_content(
        &self,
        url: &str,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        // Without a controller the fetch still times out, it just keeps running in the background
        let controller = web_sys::AbortController::new().ok();
        let signal = controller.as_ref().map(|c| c.signal());

        with_deadline(
            Self::send(url, api_key, request, signal.as_ref()),
            TimeoutFuture::new(self.timeout_secs.saturating_mul(1000)),
            self.timeout_secs,
            || {
                if let Some(controller) = &controller {
                    controller.abort();
                }
            },
        )
        .await
    }
}
