//! Client for an external linguistic-analysis service.
//!
//! The service wraps a Portuguese NLP model (e.g. spaCy `pt_core_news_lg`)
//! and answers `POST /analyze` with:
//!
//! ```json
//! { "tokens":   [{ "lemma": "incêndio", "is_stop": false, "is_punct": false }],
//!   "entities": [{ "label": "LOC", "text": "Avenida Paulista" }] }
//! ```

use reqwest::{Client, Url};
use serde::Serialize;

use super::{build_client, endpoint_url};
use crate::analyzer::{Document, LinguisticAnalyzer};
use crate::error::AnalyzerError;

const DEFAULT_LANGUAGE: &str = "pt";

pub struct HttpAnalyzer {
    client: Client,
    url: Url,
    language: String,
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
    language: &'a str,
}

impl HttpAnalyzer {
    /// # Errors
    ///
    /// Returns [`AnalyzerError::InvalidUrl`] if `base_url` does not parse, or
    /// [`AnalyzerError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, AnalyzerError> {
        let url = endpoint_url(base_url, "analyze").map_err(|reason| AnalyzerError::InvalidUrl {
            url: base_url.to_string(),
            reason,
        })?;
        Ok(Self {
            client: build_client(timeout_secs)?,
            url,
            language: DEFAULT_LANGUAGE.to_string(),
        })
    }

    #[must_use]
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }
}

impl LinguisticAnalyzer for HttpAnalyzer {
    async fn analyze(&self, text: &str) -> Result<Document, AnalyzerError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(&AnalyzeRequest {
                text,
                language: &self.language,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AnalyzerError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}
