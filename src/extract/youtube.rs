//! YouTube transcripts via yt-dlp

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::Settings;
use crate::extract::ExtractError;

/// A single caption line from a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSegment {
    pub text: String,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Something that can fetch the transcript of a YouTube video.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch_transcript(
        &self,
        video_id: &str,
    ) -> Result<Vec<TranscriptSegment>, ExtractError>;
}

/// Pull the video id out of a watch URL (`...v=ID&...`) or a short link
/// (`youtu.be/ID?...`).
pub fn parse_video_id(url: &str) -> Option<&str> {
    let id = match (url.rsplit_once("v="), url.rsplit_once("youtu.be/")) {
        (Some((_, rest)), _) => rest.split('&').next(),
        (None, Some((_, rest))) => rest.split('?').next(),
        (None, None) => None,
    };

    id.filter(|id| !id.is_empty())
}

/// Downloads captions with the `yt-dlp` executable.
pub struct YtDlpTranscripts {
    binary: PathBuf,
    languages: String,
}

impl YtDlpTranscripts {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            binary: settings.youtube.ytdlp_path.clone(),
            languages: settings.youtube.languages.clone(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Check that the executable exists and runs.
    pub fn probe(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|status| status.success())
    }
}

#[async_trait]
impl TranscriptSource for YtDlpTranscripts {
    async fn fetch_transcript(
        &self,
        video_id: &str,
    ) -> Result<Vec<TranscriptSegment>, ExtractError> {
        let failed = |message: String| ExtractError::Transcript {
            video_id: video_id.to_string(),
            message,
        };

        let dir = tempfile::tempdir()
            .map_err(|e| failed(format!("could not create temporary directory: {e}")))?;
        let output_template = dir.path().join("%(id)s.%(ext)s");
        let url = format!("https://www.youtube.com/watch?v={video_id}");

        let output = tokio::process::Command::new(&self.binary)
            .arg("--skip-download")
            .arg("--write-subs")
            .arg("--write-auto-subs")
            .arg("--sub-langs")
            .arg(&self.languages)
            .arg("--sub-format")
            .arg("json3")
            .arg("--no-playlist")
            .arg("--no-warnings")
            .arg("-o")
            .arg(&output_template)
            .arg(&url)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| failed(format!("could not run {}: {e}", self.binary.display())))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = stderr
                .lines()
                .rev()
                .find(|line| !line.trim().is_empty())
                .unwrap_or("yt-dlp exited with an error");
            return Err(failed(reason.trim().to_string()));
        }

        let track = first_caption_file(dir.path())
            .ok_or_else(|| failed("no captions available".to_string()))?;
        tracing::debug!("Reading captions from {}", track.display());

        let content = std::fs::read_to_string(&track)
            .map_err(|e| failed(format!("could not read captions: {e}")))?;

        parse_json3(&content).map_err(|e| failed(format!("malformed captions: {e}")))
    }
}

fn first_caption_file(dir: &Path) -> Option<PathBuf> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("json3"))
        .collect();
    files.sort();
    files.into_iter().next()
}

#[derive(Debug, Deserialize)]
struct Json3Track {
    #[serde(default)]
    events: Vec<Json3Event>,
}

#[derive(Debug, Deserialize)]
struct Json3Event {
    #[serde(default)]
    segs: Vec<Json3Seg>,
}

#[derive(Debug, Deserialize)]
struct Json3Seg {
    #[serde(default)]
    utf8: String,
}

/// Parse a YouTube `json3` caption track into segments, one per caption event.
fn parse_json3(content: &str) -> serde_json::Result<Vec<TranscriptSegment>> {
    let track: Json3Track = serde_json::from_str(content)?;

    Ok(track
        .events
        .into_iter()
        .map(|event| {
            event
                .segs
                .iter()
                .map(|seg| seg.utf8.as_str())
                .collect::<String>()
                .replace('\n', " ")
        })
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .map(TranscriptSegment::new)
        .collect())
}
