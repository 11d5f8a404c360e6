#[cfg(test)]
#[path = "ask_endpoint_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::domain::models::Backend;
use crate::domain::models::BackendPrompt;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct AskRequest {
    question: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct AskResponse {
    response: String,
}

/// The remote question-answering service. Takes `{"question": ...}` and
/// answers with `{"response": ...}`.
pub struct AskEndpoint {
    url: String,
}

impl AskEndpoint {
    pub fn new(url: String) -> AskEndpoint {
        return AskEndpoint {
            url: url.trim_end_matches('/').to_string(),
        };
    }
}

#[async_trait]
impl Backend for AskEndpoint {
    #[allow(clippy::implicit_return)]
    async fn ask(&self, prompt: &BackendPrompt) -> Result<String> {
        let req = AskRequest {
            question: prompt.question.to_string(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/ask", url = self.url))
            .json(&req)
            .send()
            .await
            .context("Failed to reach the assistant")?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Assistant returned a non-success status"
            );
            bail!("Assistant returned status {}", res.status().as_u16());
        }

        let body = res
            .json::<AskResponse>()
            .await
            .context("Assistant returned a malformed body")?;
        tracing::debug!(body = ?body, "Ask response");

        return Ok(body.response);
    }
}
