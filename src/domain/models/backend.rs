#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;

pub struct BackendPrompt {
    pub question: String,
}

impl BackendPrompt {
    pub fn new(question: String) -> BackendPrompt {
        return BackendPrompt { question };
    }
}

/// Terminal outcome of a single question. Every request produces exactly one
/// of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendResponse {
    Answered(String),
    Failed(String),
}

impl From<Result<String>> for BackendResponse {
    fn from(res: Result<String>) -> BackendResponse {
        match res {
            Ok(text) => return BackendResponse::Answered(text),
            Err(err) => return BackendResponse::Failed(format!("{err:#}")),
        }
    }
}

#[async_trait]
pub trait Backend {
    /// Sends a single question to the assistant and returns the answer text
    /// verbatim. Transport errors, non-success statuses and malformed bodies
    /// are all returned as `Err`; callers don't distinguish between them.
    async fn ask(&self, prompt: &BackendPrompt) -> Result<String>;
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;
