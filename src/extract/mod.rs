//! Content extraction
//!
//! Turns an input string into plain text. YouTube links go through the
//! transcript source, other links are fetched and scraped for paragraphs, and
//! anything else is treated as the text itself.

pub mod web;
pub mod youtube;

use anyhow::Result;
use thiserror::Error;

use crate::config::Settings;
use web::WebFetcher;
use youtube::{parse_video_id, TranscriptSource, YtDlpTranscripts};

/// What kind of content an input refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    YouTube,
    Article,
    Text,
}

impl SourceKind {
    /// Classify an input string. YouTube links win over generic URLs.
    pub fn classify(input: &str) -> Self {
        if input.contains("youtube.com") || input.contains("youtu.be") {
            Self::YouTube
        } else if input.starts_with("http://") || input.starts_with("https://") {
            Self::Article
        } else {
            Self::Text
        }
    }

    /// Label used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::YouTube => "YouTube video",
            Self::Article => "article",
            Self::Text => "text",
        }
    }
}

/// Why content could not be extracted.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to fetch {url}: {message}")]
    Http { url: String, message: String },

    #[error("{url} returned HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("invalid YouTube URL format: {0}")]
    InvalidYouTubeUrl(String),

    #[error("YouTube transcripts are unavailable: {0}")]
    TranscriptUnavailable(String),

    #[error("failed to fetch transcript for video {video_id}: {message}")]
    Transcript { video_id: String, message: String },

    #[error("no text content found")]
    EmptyContent,
}

/// Dispatches extraction to the right backend for each [`SourceKind`].
pub struct Extractor {
    web: WebFetcher,
    transcripts: Option<Box<dyn TranscriptSource>>,
}

impl Extractor {
    /// Create an extractor. `transcripts` is `None` when no transcript
    /// backend is available, in which case YouTube inputs always fail.
    pub fn new(web: WebFetcher, transcripts: Option<Box<dyn TranscriptSource>>) -> Self {
        Self { web, transcripts }
    }

    /// Build the extractor from settings, probing for yt-dlp.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let web = WebFetcher::from_settings(settings)?;

        let ytdlp = YtDlpTranscripts::from_settings(settings);
        let transcripts: Option<Box<dyn TranscriptSource>> = if ytdlp.probe() {
            Some(Box::new(ytdlp))
        } else {
            tracing::warn!(
                "YouTube transcript support unavailable: '{}' was not found. \
                 YouTube video summarization will be limited.",
                ytdlp.binary().display()
            );
            tracing::warn!("To install: pip install yt-dlp");
            None
        };

        Ok(Self::new(web, transcripts))
    }

    /// Extract plain text for an already classified input.
    pub async fn extract(&self, kind: SourceKind, input: &str) -> Result<String, ExtractError> {
        let result = match kind {
            SourceKind::YouTube => self.extract_youtube(input).await,
            SourceKind::Article => self.web.fetch_text(input).await,
            SourceKind::Text => Ok(input.to_string()),
        };

        if let Err(e) = &result {
            tracing::warn!("Error extracting {}: {}", kind.label(), e);
        }

        result
    }

    async fn extract_youtube(&self, url: &str) -> Result<String, ExtractError> {
        let Some(transcripts) = &self.transcripts else {
            return Err(ExtractError::TranscriptUnavailable(format!(
                "yt-dlp is not installed (URL: {})",
                url
            )));
        };

        let video_id =
            parse_video_id(url).ok_or_else(|| ExtractError::InvalidYouTubeUrl(url.to_string()))?;
        tracing::debug!("Fetching transcript for video {}", video_id);

        let segments = transcripts.fetch_transcript(video_id).await?;

        Ok(segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect::<Vec<_>>()
            .join(" "))
    }
}
