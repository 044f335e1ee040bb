//! Sentiment classification capability consumed by the scorer.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

/// Top-1 prediction of a sentiment classifier. `label` is the raw model label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub score: f64,
}

pub trait SentimentClassifier: Send + Sync {
    fn classify(&self, text: &str)
        -> impl Future<Output = Result<Prediction, ClassifierError>> + Send;
}
