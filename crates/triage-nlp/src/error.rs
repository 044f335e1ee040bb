use thiserror::Error;

/// Failures of a [`crate::LinguisticAnalyzer`].
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("analyzer returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid analyzer URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("analysis failed: {0}")]
    Failed(String),
}

/// Failures of a [`crate::SentimentClassifier`].
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("classifier returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("classifier returned no predictions")]
    EmptyResponse,

    #[error("invalid classifier URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("classification failed: {0}")]
    Failed(String),
}

/// Request-level failures of [`crate::TriagePipeline::process`].
#[derive(Debug, Error)]
pub enum TriageError {
    #[error("message text must not be empty")]
    EmptyText,

    #[error("linguistic analysis failed: {0}")]
    Analyzer(#[from] AnalyzerError),
}
