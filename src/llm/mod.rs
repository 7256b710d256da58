//! LLM module for precis
//!
//! Handles summary generation using the Gemini API.

mod client;
mod gemini;
mod prompts;

pub use client::{build_provider, LlmProvider, SummarizeError, SummaryRequest};
pub use gemini::GeminiClient;
pub use prompts::build_summary_prompt;
