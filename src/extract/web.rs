//! Article fetching and paragraph extraction

use anyhow::{Context, Result};
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;

use crate::config::Settings;
use crate::extract::ExtractError;

const ARTICLE_PARAGRAPHS: &str = "article p";
const WIKIPEDIA_PARAGRAPHS: &str = "#mw-content-text .mw-parser-output > p";
const ALL_PARAGRAPHS: &str = "p";

/// Fetches web pages with a browser user agent.
pub struct WebFetcher {
    http: Client,
}

impl WebFetcher {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut builder = Client::builder().user_agent(settings.fetch.user_agent.clone());
        if settings.fetch.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(settings.fetch.timeout_secs));
        }

        Ok(Self {
            http: builder.build().context("Failed to build HTTP client")?,
        })
    }

    /// Download `url` and return the text of its paragraphs.
    pub async fn fetch_text(&self, url: &str) -> Result<String, ExtractError> {
        let http_error = |e: reqwest::Error| ExtractError::Http {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.http.get(url).send().await.map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response.text().await.map_err(http_error)?;
        tracing::debug!("Fetched {} bytes from {}", html.len(), url);

        Ok(extract_article_text(&html, url))
    }
}

/// Pull readable text out of an HTML page.
///
/// Paragraphs inside `<article>` elements win. Wikipedia pages fall back to
/// the parser output container so navigation and sidebars are skipped.
/// Anything else gets every paragraph on the page, which may be nothing.
pub fn extract_article_text(html: &str, url: &str) -> String {
    let document = Html::parse_document(html);

    let article = paragraphs(&document, ARTICLE_PARAGRAPHS);
    if !article.is_empty() {
        return article.join(" ");
    }

    if is_wikipedia(url) {
        let wiki = paragraphs(&document, WIKIPEDIA_PARAGRAPHS);
        if !wiki.is_empty() {
            return wiki.join(" ");
        }
    }

    paragraphs(&document, ALL_PARAGRAPHS).join(" ")
}

fn paragraphs(document: &Html, css: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(css) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|p| p.text().collect::<String>())
        .collect()
}

fn is_wikipedia(url: &str) -> bool {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_ascii_lowercase))
        .is_some_and(|host| host == "wikipedia.org" || host.ends_with(".wikipedia.org"))
}
