//! Pipeline orchestration.

use std::sync::Arc;

use triage_core::{Catalog, ProcessingResult};

use crate::analyzer::LinguisticAnalyzer;
use crate::classifier::SentimentClassifier;
use crate::error::TriageError;
use crate::extractor::{ExtractionResult, InformationExtractor};
use crate::priority::{classify_priority, priority_score};
use crate::response::ResponseGenerator;
use crate::sentiment::SentimentScorer;

/// Full triage of one message: extraction and sentiment, scoring, tiering,
/// response rendering.
///
/// Holds no per-request state; one instance can serve concurrent requests
/// when shared behind an `Arc`.
pub struct TriagePipeline<A, C> {
    catalog: Arc<Catalog>,
    extractor: InformationExtractor<A>,
    sentiment: SentimentScorer<C>,
    responder: ResponseGenerator,
}

impl<A, C> TriagePipeline<A, C>
where
    A: LinguisticAnalyzer,
    C: SentimentClassifier,
{
    /// Build a pipeline. Pass `None` for `classifier` when no sentiment model
    /// could be initialized; sentiment is then reported as `unavailable`.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, analyzer: A, classifier: Option<C>) -> Self {
        Self {
            extractor: InformationExtractor::new(analyzer, Arc::clone(&catalog)),
            sentiment: SentimentScorer::new(classifier),
            responder: ResponseGenerator::new(Arc::clone(&catalog)),
            catalog,
        }
    }

    #[must_use]
    pub fn analyzer(&self) -> &A {
        self.extractor.analyzer()
    }

    #[must_use]
    pub fn sentiment_available(&self) -> bool {
        self.sentiment.is_available()
    }

    /// Triage one message.
    ///
    /// Extraction and sentiment scoring run concurrently on the calling task.
    /// Each collaborator is called exactly once per stage; nothing is retried.
    ///
    /// # Errors
    ///
    /// - [`TriageError::EmptyText`] if `text` is empty or whitespace-only,
    ///   before any collaborator is called.
    /// - [`TriageError::Analyzer`] if linguistic analysis fails.
    ///
    /// Sentiment failures never surface here; they degrade to an `error` label.
    pub async fn process(
        &self,
        text: &str,
        message_id: Option<String>,
    ) -> Result<ProcessingResult, TriageError> {
        if text.trim().is_empty() {
            return Err(TriageError::EmptyText);
        }

        let (extraction, sentiment) =
            tokio::join!(self.extractor.extract(text), self.sentiment.score(text));
        let ExtractionResult { keywords, entities } = extraction?;

        let score = priority_score(&self.catalog, &keywords, &sentiment);
        let priority = classify_priority(score);
        tracing::debug!(score, priority = %priority, "priority classified");

        let suggested_response = self.responder.generate(priority, &keywords, &entities);

        tracing::info!(
            message_id = message_id.as_deref().unwrap_or("-"),
            priority = %priority,
            score,
            keywords = keywords.len(),
            sentiment = %sentiment.label,
            "message triaged"
        );

        Ok(ProcessingResult {
            message_id,
            original_text: text.to_string(),
            keywords,
            entities,
            sentiment,
            priority_score: score,
            priority,
            suggested_response,
        })
    }
}
