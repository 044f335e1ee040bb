//! Templated response rendering.

use std::sync::Arc;

use triage_core::template::render;
use triage_core::{
    Catalog, Entities, KeywordSet, KnowledgeEntry, PriorityTier, DEFAULT_EVENT_LABEL,
};

/// Location phrase rendered when no `LOC` entity was found.
const UNKNOWN_LOCATION: &str = "na sua área";

/// Renders the suggested reply for a classified message.
pub struct ResponseGenerator {
    catalog: Arc<Catalog>,
}

impl ResponseGenerator {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Render the template for `tier`.
    ///
    /// `INFORMATIVE` is returned verbatim. Other tiers are filled with the
    /// dominant event (see [`ResponseGenerator::dominant_event`]), the
    /// location phrase, and the event's knowledge-base guidance.
    #[must_use]
    pub fn generate(&self, tier: PriorityTier, keywords: &KeywordSet, entities: &Entities) -> String {
        let template = self.catalog.template(tier);
        if tier == PriorityTier::Informative {
            return template.to_string();
        }

        let (event, knowledge) = self.dominant_event(keywords);
        let location = location_phrase(&entities.loc);
        tracing::debug!(%tier, event, location = %location, "rendering response");

        render(
            template,
            &[
                ("event", event),
                ("location", location.as_str()),
                ("safety_measures", knowledge.safety_measures.as_str()),
                ("contact", knowledge.contact.as_str()),
            ],
        )
        .trim()
        .to_string()
    }

    /// First keyword, in extraction order, with its own knowledge-base entry.
    /// Falls back to the generic label and the fallback entry.
    #[must_use]
    pub fn dominant_event<'a>(&'a self, keywords: &'a KeywordSet) -> (&'a str, &'a KnowledgeEntry) {
        keywords
            .iter()
            .find_map(|keyword| self.catalog.knowledge(keyword).map(|entry| (keyword, entry)))
            .unwrap_or((DEFAULT_EVENT_LABEL, self.catalog.fallback_knowledge()))
    }
}

/// `em '<A>, <B>'` for known locations, `na sua área` otherwise.
#[must_use]
pub fn location_phrase(locations: &[String]) -> String {
    if locations.is_empty() {
        UNKNOWN_LOCATION.to_string()
    } else {
        format!("em '{}'", locations.join(", "))
    }
}
