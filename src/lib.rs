//! precis - Summarize text, web articles and YouTube videos with Gemini
//!
//! "precis" as in a précis: a short account of the essential points of a text.

pub mod cli;
pub mod config;
pub mod extract;
pub mod handler;
pub mod llm;

use thiserror::Error;

/// Main error type for precis
#[derive(Error, Debug)]
pub enum PrecisError {
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    #[error("LLM provider error: {0}")]
    Provider(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PrecisError>;

/// Application name
pub const APP_NAME: &str = "precis";
