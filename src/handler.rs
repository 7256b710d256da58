//! Summarize command handling
//!
//! Classifies the input, extracts its text and asks the LLM provider for a
//! summary. Every expected failure ends up as an [`Outcome`] whose `Display`
//! is the message shown to the user.

use std::fmt;

use crate::extract::{ExtractError, Extractor, SourceKind};
use crate::llm::{LlmProvider, SummarizeError, SummaryRequest};

const PREVIEW_CHARS: usize = 50;

/// Result of handling one summarize request.
#[derive(Debug)]
pub enum Outcome {
    /// The generated summary.
    Summary(String),
    /// The input was empty or whitespace.
    NoInput,
    ExtractionFailed {
        kind: SourceKind,
        reason: ExtractError,
    },
    SummarizationFailed {
        kind: SourceKind,
        reason: SummarizeError,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Summary(summary) => f.write_str(summary),
            Self::NoInput => f.write_str("Error: No text provided for summarization."),
            Self::ExtractionFailed { kind, .. } => {
                write!(f, "Failed to extract content from this {}.", kind.label())
            }
            Self::SummarizationFailed { kind, .. } => {
                write!(f, "Failed to generate summary for this {}.", kind.label())
            }
        }
    }
}

/// Runs the classify, extract, summarize pipeline.
pub struct SummarizeHandler {
    extractor: Extractor,
    provider: Box<dyn LlmProvider>,
}

impl SummarizeHandler {
    pub fn new(extractor: Extractor, provider: Box<dyn LlmProvider>) -> Self {
        Self {
            extractor,
            provider,
        }
    }

    /// Summarize a piece of text, an article URL or a YouTube URL.
    pub async fn handle(&self, input: &str) -> Outcome {
        if input.trim().is_empty() {
            return Outcome::NoInput;
        }

        tracing::info!("Processing input: {}...", preview(input));

        let kind = SourceKind::classify(input);
        match kind {
            SourceKind::YouTube => tracing::info!("Detected YouTube URL, fetching transcript..."),
            SourceKind::Article => tracing::info!("Detected URL, fetching content from: {}", input),
            SourceKind::Text => tracing::info!("Processing direct text input..."),
        }

        let text = match self.extractor.extract(kind, input).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => {
                tracing::warn!("No text content found in this {}", kind.label());
                return Outcome::ExtractionFailed {
                    kind,
                    reason: ExtractError::EmptyContent,
                };
            }
            Err(reason) => return Outcome::ExtractionFailed { kind, reason },
        };

        tracing::info!(
            "Extracted {} characters of text. Summarizing...",
            text.chars().count()
        );

        match self.provider.summarize(SummaryRequest { text: &text }).await {
            Ok(summary) => {
                tracing::info!("Summarization successful!");
                Outcome::Summary(summary)
            }
            Err(reason) => {
                tracing::error!("Error during summarization: {}", reason);
                Outcome::SummarizationFailed { kind, reason }
            }
        }
    }
}

fn preview(input: &str) -> String {
    input.chars().take(PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::extract::web::WebFetcher;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Deterministic provider that echoes a digest of its input.
    #[derive(Clone, Default)]
    struct StubProvider {
        calls: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    #[async_trait]
    impl LlmProvider for StubProvider {
        async fn summarize(&self, request: SummaryRequest<'_>) -> Result<String, SummarizeError> {
            self.calls.lock().unwrap().push(request.text.to_string());
            if self.fail {
                return Err(SummarizeError::Status {
                    status: 429,
                    body: "quota exceeded".to_string(),
                });
            }
            Ok(format!("summary of {} words", request.text.split_whitespace().count()))
        }
    }

    fn handler_with(provider: StubProvider) -> SummarizeHandler {
        let web = WebFetcher::from_settings(&Settings::default()).unwrap();
        SummarizeHandler::new(Extractor::new(web, None), Box::new(provider))
    }

    #[tokio::test]
    async fn blank_input_short_circuits() {
        let provider = StubProvider::default();
        let handler = handler_with(provider.clone());

        for input in ["", "   ", "\n\t "] {
            let outcome = handler.handle(input).await;
            assert!(matches!(outcome, Outcome::NoInput));
            assert_eq!(
                outcome.to_string(),
                "Error: No text provided for summarization."
            );
        }
        assert!(provider.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn text_is_summarized_as_is() {
        let provider = StubProvider::default();
        let handler = handler_with(provider.clone());

        let outcome = handler.handle("The quick brown fox jumps.").await;

        assert!(matches!(outcome, Outcome::Summary(_)));
        assert_eq!(outcome.to_string(), "summary of 5 words");
        assert_eq!(
            *provider.calls.lock().unwrap(),
            vec!["The quick brown fox jumps.".to_string()]
        );
    }

    #[tokio::test]
    async fn identical_text_gives_identical_summaries() {
        let handler = handler_with(StubProvider::default());

        let first = handler.handle("same words every time").await.to_string();
        let second = handler.handle("same words every time").await.to_string();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn summarization_failure_names_the_source() {
        let provider = StubProvider {
            fail: true,
            ..Default::default()
        };
        let handler = handler_with(provider);

        let outcome = handler.handle("Some text worth summarizing.").await;

        assert!(matches!(
            outcome,
            Outcome::SummarizationFailed {
                kind: SourceKind::Text,
                reason: SummarizeError::Status { status: 429, .. }
            }
        ));
        assert_eq!(outcome.to_string(), "Failed to generate summary for this text.");
    }

    #[tokio::test]
    async fn youtube_without_transcripts_reports_video_failure() {
        let provider = StubProvider::default();
        let handler = handler_with(provider.clone());

        let outcome = handler.handle("https://www.youtube.com/watch?v=dQw4w9WgXcQ").await;

        assert_eq!(
            outcome.to_string(),
            "Failed to extract content from this YouTube video."
        );
        assert!(provider.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn preview_is_char_safe() {
        let input = "é".repeat(80);
        assert_eq!(preview(&input).chars().count(), 50);
        assert_eq!(preview("short"), "short");
    }
}
