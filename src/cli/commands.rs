//! CLI command implementations

use anyhow::{Context, Result};

use crate::config::{Settings, API_KEY_ENV};
use crate::extract::Extractor;
use crate::handler::SummarizeHandler;
use crate::llm::build_provider;
use crate::PrecisError;

/// Explain how to configure the API key after [`Settings::require_api_key`] failed.
pub fn api_key_help(err: &PrecisError) -> String {
    let config_hint = Settings::config_path()
        .map(|path| format!("Or set llm.api_key in {}", path.display()))
        .unwrap_or_else(|_| "Or set llm.api_key in the config file".to_string());

    format!(
        "Error: No valid {env} found ({err})\n\
         Please add a valid Gemini API key to your environment or .env file:\n\
         {env}=your_gemini_api_key_here\n\
         {config_hint}",
        env = API_KEY_ENV,
    )
}

/// Build the summarize handler from settings.
pub fn build_handler(settings: &Settings) -> Result<SummarizeHandler> {
    let provider = build_provider(settings).context("Error configuring Gemini API")?;
    let extractor =
        Extractor::from_settings(settings).context("Error configuring content extraction")?;

    Ok(SummarizeHandler::new(extractor, provider))
}

/// Summarize one input and print the result.
pub async fn summarize(handler: &SummarizeHandler, input: &str) {
    let outcome = handler.handle(input).await;

    println!();
    println!("SUMMARY:");
    println!("{}", outcome);
}
