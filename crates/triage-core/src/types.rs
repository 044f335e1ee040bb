use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Discrete priority bucket derived from the numeric score.
///
/// Variants are declared least severe first so the derived `Ord` matches
/// severity: `Critical > High > Medium > Low > Informative`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriorityTier {
    Informative,
    Low,
    Medium,
    High,
    Critical,
}

impl PriorityTier {
    /// All tiers, most severe first.
    pub const ALL: [PriorityTier; 5] = [
        PriorityTier::Critical,
        PriorityTier::High,
        PriorityTier::Medium,
        PriorityTier::Low,
        PriorityTier::Informative,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PriorityTier::Critical => "CRITICAL",
            PriorityTier::High => "HIGH",
            PriorityTier::Medium => "MEDIUM",
            PriorityTier::Low => "LOW",
            PriorityTier::Informative => "INFORMATIVE",
        }
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriorityTier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown priority tier '{s}'"))
    }
}

/// Sentiment label after normalization.
///
/// Classifier labels outside the known set are kept verbatim (lower-cased)
/// in [`SentimentLabel::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
    /// No classifier was available for this process.
    Unavailable,
    /// The classifier failed on this input.
    Error,
    Other(String),
}

impl SentimentLabel {
    /// Normalize a raw classifier label: trimmed and lower-cased.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let lower = raw.trim().to_lowercase();
        match lower.as_str() {
            "positive" => SentimentLabel::Positive,
            "neutral" => SentimentLabel::Neutral,
            "negative" => SentimentLabel::Negative,
            "unavailable" => SentimentLabel::Unavailable,
            "error" => SentimentLabel::Error,
            _ => SentimentLabel::Other(lower),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Unavailable => "unavailable",
            SentimentLabel::Error => "error",
            SentimentLabel::Other(label) => label,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SentimentLabel {
    fn from(raw: String) -> Self {
        SentimentLabel::parse(&raw)
    }
}

impl From<SentimentLabel> for String {
    fn from(label: SentimentLabel) -> Self {
        label.as_str().to_string()
    }
}

/// Normalized sentiment. `score` is the classifier confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    pub score: f64,
}

impl SentimentResult {
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            label: SentimentLabel::Unavailable,
            score: 0.0,
        }
    }

    #[must_use]
    pub fn error() -> Self {
        Self {
            label: SentimentLabel::Error,
            score: 0.0,
        }
    }
}

/// Named-entity categories retained by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityCategory {
    Loc,
    Per,
    Org,
}

impl EntityCategory {
    /// Map an analyzer entity label to a retained category.
    ///
    /// Labels are matched exactly (`LOC`, `PER`, `ORG`); anything else,
    /// including `MISC`, is dropped.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "LOC" => Some(EntityCategory::Loc),
            "PER" => Some(EntityCategory::Per),
            "ORG" => Some(EntityCategory::Org),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EntityCategory::Loc => "LOC",
            EntityCategory::Per => "PER",
            EntityCategory::Org => "ORG",
        }
    }
}

/// Entity surface forms grouped by category, each list in document order.
///
/// Every category is always present; an empty list means none were found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    #[serde(rename = "LOC", default)]
    pub loc: Vec<String>,
    #[serde(rename = "PER", default)]
    pub per: Vec<String>,
    #[serde(rename = "ORG", default)]
    pub org: Vec<String>,
}

impl Entities {
    pub fn push(&mut self, category: EntityCategory, text: impl Into<String>) {
        self.list_mut(category).push(text.into());
    }

    #[must_use]
    pub fn get(&self, category: EntityCategory) -> &[String] {
        match category {
            EntityCategory::Loc => &self.loc,
            EntityCategory::Per => &self.per,
            EntityCategory::Org => &self.org,
        }
    }

    fn list_mut(&mut self, category: EntityCategory) -> &mut Vec<String> {
        match category {
            EntityCategory::Loc => &mut self.loc,
            EntityCategory::Per => &mut self.per,
            EntityCategory::Org => &mut self.org,
        }
    }
}

/// Deduplicated keyword lemmas in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a keyword, returning `false` if it was already present.
    pub fn insert(&mut self, keyword: impl Into<String>) -> bool {
        let keyword = keyword.into();
        if self.contains(&keyword) {
            return false;
        }
        self.0.push(keyword);
        true
    }

    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.0.iter().any(|k| k == keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = KeywordSet::new();
        for keyword in iter {
            set.insert(keyword);
        }
        set
    }
}

impl From<Vec<String>> for KeywordSet {
    fn from(keywords: Vec<String>) -> Self {
        keywords.into_iter().collect()
    }
}

impl From<KeywordSet> for Vec<String> {
    fn from(set: KeywordSet) -> Self {
        set.0
    }
}

/// Outcome of one triage run. Assembled once by the pipeline and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingResult {
    pub message_id: Option<String>,
    pub original_text: String,
    pub keywords: KeywordSet,
    pub entities: Entities,
    pub sentiment: SentimentResult,
    pub priority_score: f64,
    pub priority: PriorityTier,
    pub suggested_response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_order_by_severity() {
        assert!(PriorityTier::Critical > PriorityTier::High);
        assert!(PriorityTier::High > PriorityTier::Medium);
        assert!(PriorityTier::Medium > PriorityTier::Low);
        assert!(PriorityTier::Low > PriorityTier::Informative);
    }

    #[test]
    fn tier_parses_case_insensitively() {
        assert_eq!("critical".parse::<PriorityTier>(), Ok(PriorityTier::Critical));
        assert_eq!(" LOW ".parse::<PriorityTier>(), Ok(PriorityTier::Low));
        assert!("URGENT".parse::<PriorityTier>().is_err());
    }

    #[test]
    fn tier_serializes_upper_case() {
        let json = serde_json::to_string(&PriorityTier::Informative).expect("serialize");
        assert_eq!(json, "\"INFORMATIVE\"");
    }

    #[test]
    fn sentiment_label_normalizes_case() {
        assert_eq!(SentimentLabel::parse("NEGATIVE"), SentimentLabel::Negative);
        assert_eq!(
            SentimentLabel::parse("Label_2"),
            SentimentLabel::Other("label_2".to_string())
        );
    }

    #[test]
    fn sentiment_result_serializes_label_as_string() {
        let json = serde_json::to_value(SentimentResult::unavailable()).expect("serialize");
        assert_eq!(json["label"], "unavailable");
        assert_eq!(json["score"], 0.0);
    }

    #[test]
    fn keyword_set_collapses_duplicates_in_first_seen_order() {
        let set: KeywordSet = ["socorro", "incêndio", "socorro", "preso"].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), ["socorro", "incêndio", "preso"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn entities_serialize_all_categories() {
        let mut entities = Entities::default();
        entities.push(EntityCategory::Loc, "Avenida Paulista");
        let json = serde_json::to_value(&entities).expect("serialize");
        assert_eq!(json["LOC"], serde_json::json!(["Avenida Paulista"]));
        assert_eq!(json["PER"], serde_json::json!([]));
        assert_eq!(json["ORG"], serde_json::json!([]));
    }

    #[test]
    fn entity_category_drops_other_labels() {
        assert_eq!(EntityCategory::from_label("LOC"), Some(EntityCategory::Loc));
        assert_eq!(EntityCategory::from_label("MISC"), None);
        assert_eq!(EntityCategory::from_label("loc"), None);
    }
}
