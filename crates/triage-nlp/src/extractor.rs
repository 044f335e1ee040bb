//! Keyword and named-entity extraction.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use triage_core::{Catalog, Entities, EntityCategory, KeywordSet};

use crate::analyzer::{Document, LinguisticAnalyzer};
use crate::error::AnalyzerError;

/// Lexicon keywords and categorized entities found in one message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub keywords: KeywordSet,
    pub entities: Entities,
}

pub struct InformationExtractor<A> {
    analyzer: A,
    catalog: Arc<Catalog>,
}

impl<A: LinguisticAnalyzer> InformationExtractor<A> {
    #[must_use]
    pub fn new(analyzer: A, catalog: Arc<Catalog>) -> Self {
        Self { analyzer, catalog }
    }

    #[must_use]
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Extract keywords from the lower-cased text and entities from the
    /// original-cased text. The analyzer is called once for each.
    ///
    /// # Errors
    ///
    /// Returns the analyzer's [`AnalyzerError`] unchanged.
    pub async fn extract(&self, text: &str) -> Result<ExtractionResult, AnalyzerError> {
        let lowered = text.to_lowercase();
        let doc = self.analyzer.analyze(&lowered).await?;
        let keywords = lexicon_keywords(&doc, &self.catalog);

        // Proper-noun recognition depends on case.
        let doc_original = self.analyzer.analyze(text).await?;
        let entities = categorized_entities(&doc_original);

        tracing::debug!(
            keywords = keywords.len(),
            locations = entities.loc.len(),
            people = entities.per.len(),
            organizations = entities.org.len(),
            "extraction complete"
        );

        Ok(ExtractionResult { keywords, entities })
    }
}

/// Lemmas that are neither stop words nor punctuation and belong to the lexicon.
fn lexicon_keywords(doc: &Document, catalog: &Catalog) -> KeywordSet {
    doc.tokens
        .iter()
        .filter(|token| !token.is_stop && !token.is_punct)
        .map(|token| token.lemma.to_lowercase())
        .filter(|lemma| catalog.is_keyword(lemma))
        .collect()
}

fn categorized_entities(doc: &Document) -> Entities {
    let mut entities = Entities::default();
    for span in &doc.entities {
        if let Some(category) = EntityCategory::from_label(&span.label) {
            entities.push(category, span.text.clone());
        }
    }
    entities
}
