//! Linguistic analysis capability consumed by the extractor.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::AnalyzerError;

/// One analyzed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub lemma: String,
    #[serde(default)]
    pub is_stop: bool,
    #[serde(default)]
    pub is_punct: bool,
}

/// One named-entity span, e.g. `LOC` / `"Avenida Paulista"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub label: String,
    pub text: String,
}

/// Analysis of one text: tokens and entity spans, both in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub entities: Vec<EntitySpan>,
}

/// Portuguese tokenization, lemmatization and NER.
///
/// Implementations must tolerate concurrent calls through `&self`.
pub trait LinguisticAnalyzer: Send + Sync {
    fn analyze(&self, text: &str)
        -> impl Future<Output = Result<Document, AnalyzerError>> + Send;
}
