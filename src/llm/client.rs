use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use crate::config::Settings;
use crate::llm::gemini::GeminiClient;
use crate::PrecisError;

/// Summary generation request payload.
pub struct SummaryRequest<'a> {
    pub text: &'a str,
}

/// Why a summary could not be produced.
#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("response did not contain summary text")]
    EmptyResponse,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn summarize(
        &self,
        request: SummaryRequest<'_>,
    ) -> std::result::Result<String, SummarizeError>;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn LlmProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "gemini" => Ok(Box::new(GeminiClient::from_settings(settings)?)),
        other => Err(PrecisError::Provider(format!(
            "Unsupported llm.provider '{}'. Supported providers: gemini",
            other
        ))
        .into()),
    }
}
