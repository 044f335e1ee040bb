//! TEI (Text Embeddings Inference) sequence-classification client.

use reqwest::{Client, Url};
use serde::Serialize;

use super::{build_client, endpoint_url};
use crate::classifier::{Prediction, SentimentClassifier};
use crate::error::ClassifierError;

/// Client for the `/predict` route of a TEI server hosting a sentiment model
/// (e.g. `lxyuan/distilbert-base-multilingual-cased-sentiments-student`).
pub struct TeiClassifier {
    client: Client,
    url: Url,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    inputs: &'a str,
}

impl TeiClassifier {
    /// # Errors
    ///
    /// Returns [`ClassifierError::InvalidUrl`] if `base_url` does not parse, or
    /// [`ClassifierError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ClassifierError> {
        let url = endpoint_url(base_url, "predict").map_err(|reason| ClassifierError::InvalidUrl {
            url: base_url.to_string(),
            reason,
        })?;
        Ok(Self {
            client: build_client(timeout_secs)?,
            url,
        })
    }
}

impl SentimentClassifier for TeiClassifier {
    /// POST the text and return the highest-scoring label.
    async fn classify(&self, text: &str) -> Result<Prediction, ClassifierError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(&PredictRequest { inputs: text })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClassifierError::Status(response.status()));
        }

        let predictions: Vec<Prediction> = response.json().await?;
        predictions
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or(ClassifierError::EmptyResponse)
    }
}
