//! Concrete analyzer and classifier implementations.

mod http_analyzer;
mod lexical;
mod tei;

use std::time::Duration;

use reqwest::{Client, Url};

pub use http_analyzer::HttpAnalyzer;
pub use lexical::LexicalAnalyzer;
pub use tei::TeiClassifier;

use crate::analyzer::{Document, LinguisticAnalyzer};
use crate::error::AnalyzerError;

const USER_AGENT: &str = "triage/0.1 (emergency-triage)";

/// Analyzer chosen at start-up: the HTTP sidecar when configured, the
/// offline lexical analyzer otherwise.
pub enum AnyAnalyzer {
    Http(HttpAnalyzer),
    Lexical(LexicalAnalyzer),
}

impl AnyAnalyzer {
    /// Build from an optional sidecar URL.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError`] if `url` is set but the client cannot be built.
    pub fn from_url(url: Option<&str>, timeout_secs: u64) -> Result<Self, AnalyzerError> {
        match url {
            Some(url) => Ok(Self::Http(HttpAnalyzer::new(url, timeout_secs)?)),
            None => Ok(Self::Lexical(LexicalAnalyzer::new())),
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Http(_) => "http",
            Self::Lexical(_) => "lexical",
        }
    }
}

impl LinguisticAnalyzer for AnyAnalyzer {
    async fn analyze(&self, text: &str) -> Result<Document, AnalyzerError> {
        match self {
            Self::Http(analyzer) => analyzer.analyze(text).await,
            Self::Lexical(analyzer) => analyzer.analyze(text).await,
        }
    }
}

/// Build the sentiment classifier when a URL is configured.
///
/// A missing URL or a client that cannot be built yields `None` with a warning;
/// sentiment is then reported as `unavailable` on every request.
#[must_use]
pub fn optional_classifier(url: Option<&str>, timeout_secs: u64) -> Option<TeiClassifier> {
    let Some(url) = url else {
        tracing::warn!("no sentiment classifier configured; sentiment analysis unavailable");
        return None;
    };

    match TeiClassifier::new(url, timeout_secs) {
        Ok(classifier) => Some(classifier),
        Err(e) => {
            tracing::warn!(error = %e, url, "sentiment classifier failed to initialize");
            None
        }
    }
}

fn build_client(timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(USER_AGENT)
        .build()
}

/// Join `path` onto `base`, keeping any path prefix already on `base`.
fn endpoint_url(base: &str, path: &str) -> Result<Url, String> {
    let normalised = format!("{}/", base.trim().trim_end_matches('/'));
    Url::parse(&normalised)
        .and_then(|base| base.join(path))
        .map_err(|e| e.to_string())
}
