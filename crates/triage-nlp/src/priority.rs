//! Priority scoring and tier classification.

use triage_core::{Catalog, KeywordSet, PriorityTier, SentimentResult};

const CRITICAL_THRESHOLD: f64 = 20.0;
const HIGH_THRESHOLD: f64 = 12.0;
const MEDIUM_THRESHOLD: f64 = 7.0;

/// Sum of lexicon weights of `keywords` plus the sentiment modifier,
/// floored at `0.0`.
///
/// Keywords missing from the lexicon and labels missing from the modifier
/// table (`unavailable`, `error`, unknown model labels) contribute `0`.
#[must_use]
pub fn priority_score(catalog: &Catalog, keywords: &KeywordSet, sentiment: &SentimentResult) -> f64 {
    let keyword_total: u64 = keywords
        .iter()
        .map(|k| u64::from(catalog.weight(k).unwrap_or(0)))
        .sum();
    let modifier = catalog.sentiment_modifier(sentiment.label.as_str());

    #[allow(clippy::cast_precision_loss)]
    let score = keyword_total as f64 + f64::from(modifier);
    score.max(0.0)
}

/// Map a score to a tier. Lower bounds are inclusive except `LOW`, which
/// needs a strictly positive score.
#[must_use]
pub fn classify_priority(score: f64) -> PriorityTier {
    if score >= CRITICAL_THRESHOLD {
        PriorityTier::Critical
    } else if score >= HIGH_THRESHOLD {
        PriorityTier::High
    } else if score >= MEDIUM_THRESHOLD {
        PriorityTier::Medium
    } else if score > 0.0 {
        PriorityTier::Low
    } else {
        PriorityTier::Informative
    }
}

#[cfg(test)]
mod tests {
    use triage_core::SentimentLabel;

    use super::*;

    fn sentiment(label: SentimentLabel) -> SentimentResult {
        SentimentResult { label, score: 0.9 }
    }

    fn keywords(words: &[&str]) -> KeywordSet {
        words.iter().copied().collect()
    }

    #[test]
    fn tier_boundaries() {
        let cases = [
            (20.0, PriorityTier::Critical),
            (35.0, PriorityTier::Critical),
            (19.999, PriorityTier::High),
            (19.99, PriorityTier::High),
            (12.0, PriorityTier::High),
            (11.99, PriorityTier::Medium),
            (7.0, PriorityTier::Medium),
            (6.99, PriorityTier::Low),
            (0.01, PriorityTier::Low),
            (0.0, PriorityTier::Informative),
        ];
        for (score, expected) in cases {
            assert_eq!(classify_priority(score), expected, "score {score}");
        }
    }

    #[test]
    fn single_incendio_with_neutral_sentiment_is_medium() {
        let catalog = Catalog::builtin();
        let score = priority_score(
            &catalog,
            &keywords(&["incêndio"]),
            &sentiment(SentimentLabel::Neutral),
        );
        assert!((score - 10.0).abs() < f64::EPSILON);
        assert_eq!(classify_priority(score), PriorityTier::Medium);
    }

    #[test]
    fn negative_sentiment_adds_five() {
        let catalog = Catalog::builtin();
        let score = priority_score(
            &catalog,
            &keywords(&["socorro", "incêndio", "preso"]),
            &sentiment(SentimentLabel::Negative),
        );
        assert!((score - 30.0).abs() < f64::EPSILON);
        assert_eq!(classify_priority(score), PriorityTier::Critical);
    }

    #[test]
    fn positive_sentiment_never_goes_below_zero() {
        let catalog = Catalog::builtin();
        let score = priority_score(&catalog, &KeywordSet::new(), &sentiment(SentimentLabel::Positive));
        assert!(score.abs() < f64::EPSILON);
        assert_eq!(classify_priority(score), PriorityTier::Informative);
    }

    #[test]
    fn no_keywords_with_neutral_unavailable_or_error_scores_zero() {
        let catalog = Catalog::builtin();
        for result in [
            sentiment(SentimentLabel::Neutral),
            SentimentResult::unavailable(),
            SentimentResult::error(),
        ] {
            let score = priority_score(&catalog, &KeywordSet::new(), &result);
            assert!(score.abs() < f64::EPSILON, "label {}", result.label);
            assert_eq!(classify_priority(score), PriorityTier::Informative);
        }
    }

    #[test]
    fn unknown_keywords_and_labels_contribute_nothing() {
        let catalog = Catalog::builtin();
        let score = priority_score(
            &catalog,
            &keywords(&["chuva", "dor"]),
            &sentiment(SentimentLabel::Other("mixed".to_string())),
        );
        assert!((score - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn adding_a_keyword_never_lowers_the_score() {
        let catalog = Catalog::builtin();
        let positive = sentiment(SentimentLabel::Positive);
        let mut set = KeywordSet::new();
        let mut previous = priority_score(&catalog, &set, &positive);
        for (keyword, _) in catalog.lexicon_entries() {
            set.insert(keyword);
            let current = priority_score(&catalog, &set, &positive);
            assert!(current >= previous, "adding {keyword} lowered {previous} to {current}");
            previous = current;
        }
    }
}
