//! Sentiment normalization over an optional classifier.

use triage_core::{SentimentLabel, SentimentResult};

use crate::classifier::SentimentClassifier;

/// Wraps an optional [`SentimentClassifier`].
///
/// Without a classifier every call yields `unavailable / 0.0`. A classifier
/// failure on a given text yields `error / 0.0`; it is never propagated.
pub struct SentimentScorer<C> {
    classifier: Option<C>,
}

impl<C: SentimentClassifier> SentimentScorer<C> {
    #[must_use]
    pub fn new(classifier: Option<C>) -> Self {
        Self { classifier }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.classifier.is_some()
    }

    /// Classify `text` once and normalize the top prediction: label
    /// lower-cased, confidence rounded to 4 decimals.
    pub async fn score(&self, text: &str) -> SentimentResult {
        let Some(classifier) = &self.classifier else {
            return SentimentResult::unavailable();
        };

        match classifier.classify(text).await {
            Ok(prediction) if prediction.score.is_finite() => {
                let result = SentimentResult {
                    label: SentimentLabel::parse(&prediction.label),
                    score: round4(prediction.score).clamp(0.0, 1.0),
                };
                tracing::debug!(label = %result.label, score = result.score, "sentiment scored");
                result
            }
            Ok(prediction) => {
                tracing::warn!(
                    label = %prediction.label,
                    score = prediction.score,
                    "sentiment classifier returned a non-finite score"
                );
                SentimentResult::error()
            }
            Err(e) => {
                tracing::warn!(error = %e, "sentiment classification failed");
                SentimentResult::error()
            }
        }
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
