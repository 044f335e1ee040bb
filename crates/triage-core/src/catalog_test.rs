use std::path::Path;

use super::*;

fn minimal_file() -> CatalogFile {
    let mut lexicon = BTreeMap::new();
    lexicon.insert("Incêndio".to_string(), 10);
    let mut knowledge_base = BTreeMap::new();
    knowledge_base.insert(
        FALLBACK_KNOWLEDGE_KEY.to_string(),
        KnowledgeEntry {
            safety_measures: "Mantenha a calma.".to_string(),
            contact: "190".to_string(),
        },
    );
    let mut templates = BTreeMap::new();
    templates.insert("INFORMATIVE".to_string(), "Registrado.".to_string());
    CatalogFile {
        lexicon,
        sentiment_modifiers: BTreeMap::new(),
        knowledge_base,
        templates,
    }
}

#[test]
fn builtin_has_closed_lexicon() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.lexicon_entries().len(), 29);
    assert_eq!(catalog.weight("incêndio"), Some(10));
    assert_eq!(catalog.weight("dor"), Some(6));
    assert_eq!(catalog.weight("chuva"), None);
    assert!(catalog.is_keyword("sequestro"));
}

#[test]
fn builtin_sentiment_modifiers() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.sentiment_modifier("positive"), -2);
    assert_eq!(catalog.sentiment_modifier("neutral"), 0);
    assert_eq!(catalog.sentiment_modifier("negative"), 5);
    assert_eq!(catalog.sentiment_modifier("unavailable"), 0);
    assert_eq!(catalog.sentiment_modifier("error"), 0);
}

#[test]
fn builtin_fallback_knowledge_is_geral() {
    let catalog = Catalog::builtin();
    assert_eq!(
        catalog.knowledge(FALLBACK_KNOWLEDGE_KEY),
        Some(catalog.fallback_knowledge())
    );
    assert!(catalog.fallback_knowledge().contact.contains("193"));
}

#[test]
fn builtin_has_template_for_every_tier() {
    let catalog = Catalog::builtin();
    for tier in PriorityTier::ALL {
        assert!(!catalog.template(tier).is_empty(), "missing template for {tier}");
    }
    assert_eq!(
        catalog.template(PriorityTier::Informative),
        "Obrigado por sua mensagem. A informação foi registrada."
    );
}

#[test]
fn builtin_survives_export_and_validation() {
    let exported = Catalog::builtin().to_file();
    let rebuilt = Catalog::from_file(exported).expect("builtin catalog should validate");
    assert_eq!(rebuilt.lexicon_entries(), Catalog::builtin().lexicon_entries());
}

#[test]
fn lexicon_entries_sorted_heaviest_first() {
    let catalog = Catalog::builtin();
    let entries = catalog.lexicon_entries();
    assert!(entries.windows(2).all(|w| w[0].1 >= w[1].1));
    assert_eq!(entries.last().map(|e| e.1), Some(6));
}

#[test]
fn from_file_lower_cases_keywords() {
    let catalog = Catalog::from_file(minimal_file()).expect("valid");
    assert_eq!(catalog.weight("incêndio"), Some(10));
    assert_eq!(catalog.weight("Incêndio"), None);
}

#[test]
fn missing_tier_template_falls_back_to_informative() {
    let catalog = Catalog::from_file(minimal_file()).expect("valid");
    assert_eq!(catalog.template(PriorityTier::Critical), "Registrado.");
}

#[test]
fn rejects_zero_weight() {
    let mut file = minimal_file();
    file.lexicon.insert("fogo".to_string(), 0);
    let err = Catalog::from_file(file).unwrap_err();
    assert!(err.to_string().contains("positive weight"), "got: {err}");
}

#[test]
fn rejects_duplicate_keyword_after_lower_casing() {
    let mut file = minimal_file();
    file.lexicon.insert("INCÊNDIO".to_string(), 9);
    let err = Catalog::from_file(file).unwrap_err();
    assert!(err.to_string().contains("duplicate lexicon keyword"), "got: {err}");
}

#[test]
fn rejects_negative_weight_from_yaml_as_validation_error() {
    let yaml = r"
lexicon:
  fogo: -3
sentiment_modifiers: {}
knowledge_base:
  geral:
    safety_measures: Mantenha a calma.
    contact: '190'
templates:
  INFORMATIVE: Registrado.
";
    let file: CatalogFile = serde_yaml::from_str(yaml).expect("negative weight still parses");
    let err = Catalog::from_file(file).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)), "got: {err:?}");
    assert!(err.to_string().contains("positive weight"), "got: {err}");
}

#[test]
fn rejects_weight_beyond_u32() {
    let mut file = minimal_file();
    file.lexicon.insert("fogo".to_string(), i64::from(u32::MAX) + 1);
    let err = Catalog::from_file(file).unwrap_err();
    assert!(err.to_string().contains("too large"), "got: {err}");
}

#[test]
fn rejects_knowledge_keys_differing_only_in_case() {
    let mut file = minimal_file();
    for key in ["Incêndio", "incêndio"] {
        file.knowledge_base.insert(
            key.to_string(),
            KnowledgeEntry {
                safety_measures: format!("medidas {key}"),
                contact: "193".to_string(),
            },
        );
    }
    let err = Catalog::from_file(file).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)), "got: {err:?}");
    assert!(err.to_string().contains("duplicate knowledge base key"), "got: {err}");
}

#[test]
fn rejects_sentiment_labels_differing_only_in_case() {
    let mut file = minimal_file();
    file.sentiment_modifiers.insert("Negative".to_string(), 5);
    file.sentiment_modifiers.insert("negative".to_string(), 3);
    let err = Catalog::from_file(file).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)), "got: {err:?}");
    assert!(err.to_string().contains("duplicate sentiment modifier label"), "got: {err}");
}

#[test]
fn rejects_missing_fallback_entry() {
    let mut file = minimal_file();
    file.knowledge_base.clear();
    let err = Catalog::from_file(file).unwrap_err();
    assert!(err.to_string().contains("'geral'"), "got: {err}");
}

#[test]
fn rejects_missing_informative_template() {
    let mut file = minimal_file();
    file.templates.clear();
    file.templates
        .insert("LOW".to_string(), "sobre {event}".to_string());
    let err = Catalog::from_file(file).unwrap_err();
    assert!(err.to_string().contains("INFORMATIVE"), "got: {err}");
}

#[test]
fn rejects_unknown_tier_key() {
    let mut file = minimal_file();
    file.templates
        .insert("URGENT".to_string(), "sobre {event}".to_string());
    let err = Catalog::from_file(file).unwrap_err();
    assert!(err.to_string().contains("unknown priority tier"), "got: {err}");
}

#[test]
fn rejects_unknown_placeholder() {
    let mut file = minimal_file();
    file.templates
        .insert("HIGH".to_string(), "sobre {evento} {location}".to_string());
    let err = Catalog::from_file(file).unwrap_err();
    assert!(err.to_string().contains("{evento}"), "got: {err}");
}

#[test]
fn load_catalog_reports_missing_file() {
    let err = load_catalog(Path::new("/nonexistent/catalog.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::CatalogFileIo { .. }), "got: {err:?}");
}

#[test]
fn load_catalog_from_real_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("catalog.yaml");
    assert!(
        path.exists(),
        "catalog.yaml missing at {path:?}"
    );
    let catalog = load_catalog(&path).expect("failed to load catalog.yaml");
    let builtin = Catalog::builtin();
    assert_eq!(catalog.lexicon_entries(), builtin.lexicon_entries());
    for tier in PriorityTier::ALL {
        assert_eq!(catalog.template(tier), builtin.template(tier));
    }
    assert_eq!(catalog.knowledge("incêndio"), builtin.knowledge("incêndio"));
    assert_eq!(catalog.fallback_knowledge(), builtin.fallback_knowledge());
    assert_eq!(catalog.sentiment_modifier("negative"), 5);
}
