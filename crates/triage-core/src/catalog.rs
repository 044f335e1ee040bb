//! Static triage tables: keyword lexicon, sentiment modifiers, knowledge base
//! and response templates.
//!
//! A [`Catalog`] is built once at start-up, either from the built-in tables
//! or from a YAML file, and shared read-only by every pipeline stage.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::template::{placeholder_names, PLACEHOLDERS};
use crate::types::PriorityTier;
use crate::ConfigError;

/// Knowledge-base key used when no extracted keyword has its own entry.
pub const FALLBACK_KNOWLEDGE_KEY: &str = "geral";

/// Event label rendered when no extracted keyword has a knowledge-base entry.
pub const DEFAULT_EVENT_LABEL: &str = "uma situação de emergência";

const LEXICON: &[(&str, u32)] = &[
    ("incêndio", 10),
    ("fogo", 10),
    ("preso", 8),
    ("ferido", 9),
    ("acidente", 8),
    ("desabamento", 10),
    ("afogamento", 9),
    ("socorro", 7),
    ("ajuda", 7),
    ("urgente", 8),
    ("sangue", 7),
    ("dor", 6),
    ("polícia", 7),
    ("ambulância", 8),
    ("bombeiro", 8),
    ("desespero", 6),
    ("perigo", 9),
    ("criança", 7),
    ("idoso", 7),
    ("grávida", 7),
    ("desmaiado", 8),
    ("inconsciente", 9),
    ("refém", 10),
    ("sequestro", 10),
    ("tiroteio", 9),
    ("explosão", 10),
    ("vazamento", 8),
    ("contaminação", 8),
    ("ameaça", 7),
];

const SENTIMENT_MODIFIERS: &[(&str, i32)] = &[("positive", -2), ("neutral", 0), ("negative", 5)];

const KNOWLEDGE_BASE: &[(&str, &str, &str)] = &[
    (
        "incêndio",
        "Se possível, saia do local imediatamente. Não use elevadores. Cubra o nariz e a boca com um pano úmido para ajudar na respiração. Se não puder sair, vede as frestas das portas e sinalize sua presença em uma janela.",
        "Corpo de Bombeiros (193)",
    ),
    (
        "desabamento",
        "Afaste-se da área de risco. Se estiver dentro de uma estrutura, procure abrigo sob uma viga ou móvel resistente e proteja a cabeça. Não retorne ao local até ser liberado pelas autoridades.",
        "Defesa Civil (199) e Bombeiros (193)",
    ),
    (
        "vazamento",
        "Não acione interruptores elétricos, não acenda fósforos ou isqueiros. Abra portas e janelas para ventilar o ambiente. Feche o registro de gás e saia do local.",
        "Distribuidora de gás da sua região e Bombeiros (193).",
    ),
    (
        "acidente",
        "Sinalize o local para evitar novos acidentes. Verifique o estado das vítimas sem movê-las, a menos que haja risco iminente (fogo, explosão).",
        "SAMU (192) para vítimas, Polícia Militar (190) para trânsito.",
    ),
    (
        FALLBACK_KNOWLEDGE_KEY,
        "Mantenha a calma e aguarde as instruções das equipes de resgate. Forneça informações claras e precisas quando solicitado.",
        "Para emergências, ligue para 190 (Polícia), 192 (SAMU) ou 193 (Bombeiros).",
    ),
];

const TEMPLATES: &[(PriorityTier, &str)] = &[
    (
        PriorityTier::Critical,
        "ALERTA CRÍTICO: Emergência recebida sobre {event} {location}. Equipes de resgate enviadas com prioridade máxima. {safety_measures} Contato útil: {contact}.",
    ),
    (
        PriorityTier::High,
        "ALERTA DE ALTA PRIORIDADE: Recebemos sua mensagem sobre {event} {location}. Uma equipe está sendo designada para o local. {safety_measures} Contato útil: {contact}.",
    ),
    (
        PriorityTier::Medium,
        "Aviso recebido sobre {event} {location}. Sua solicitação está sendo processada. Siga estas orientações de segurança: {safety_measures} Em caso de necessidade, ligue para {contact}.",
    ),
    (
        PriorityTier::Low,
        "Obrigado por sua mensagem sobre {event}. A situação foi registrada. Se a condição piorar, entre em contato novamente.",
    ),
    (
        PriorityTier::Informative,
        "Obrigado por sua mensagem. A informação foi registrada.",
    ),
];

/// Safety guidance and a contact reference for one event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub safety_measures: String,
    pub contact: String,
}

/// On-disk catalog layout. Every section is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub lexicon: BTreeMap<String, i64>,
    pub sentiment_modifiers: BTreeMap<String, i32>,
    pub knowledge_base: BTreeMap<String, KnowledgeEntry>,
    pub templates: BTreeMap<String, String>,
}

/// Validated, immutable triage tables.
#[derive(Debug, Clone)]
pub struct Catalog {
    lexicon: HashMap<String, u32>,
    sentiment_modifiers: HashMap<String, i32>,
    knowledge_base: HashMap<String, KnowledgeEntry>,
    fallback: KnowledgeEntry,
    templates: HashMap<PriorityTier, String>,
    informative_template: String,
}

impl Catalog {
    /// The built-in Portuguese emergency tables.
    #[must_use]
    pub fn builtin() -> Self {
        let knowledge_base: HashMap<String, KnowledgeEntry> = KNOWLEDGE_BASE
            .iter()
            .map(|&(key, safety_measures, contact)| {
                (
                    key.to_string(),
                    KnowledgeEntry {
                        safety_measures: safety_measures.to_string(),
                        contact: contact.to_string(),
                    },
                )
            })
            .collect();
        let fallback = knowledge_base
            .get(FALLBACK_KNOWLEDGE_KEY)
            .cloned()
            .unwrap_or_else(|| KnowledgeEntry {
                safety_measures: String::new(),
                contact: String::new(),
            });
        let templates: HashMap<PriorityTier, String> = TEMPLATES
            .iter()
            .map(|&(tier, text)| (tier, text.to_string()))
            .collect();
        let informative_template = templates
            .get(&PriorityTier::Informative)
            .cloned()
            .unwrap_or_default();

        Self {
            lexicon: LEXICON
                .iter()
                .map(|&(keyword, weight)| (keyword.to_string(), weight))
                .collect(),
            sentiment_modifiers: SENTIMENT_MODIFIERS
                .iter()
                .map(|&(label, modifier)| (label.to_string(), modifier))
                .collect(),
            knowledge_base,
            fallback,
            templates,
            informative_template,
        }
    }

    /// Validate a parsed catalog file and build the lookup tables.
    ///
    /// Lexicon keywords, sentiment labels and knowledge base keys are
    /// lower-cased.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if a weight is not positive, a
    /// keyword, sentiment label or knowledge base key is duplicated after
    /// lower-casing, the fallback knowledge entry or the
    /// `INFORMATIVE` template is missing, a template key is not a tier, or a
    /// template references an unknown placeholder.
    pub fn from_file(file: CatalogFile) -> Result<Self, ConfigError> {
        let mut lexicon = HashMap::with_capacity(file.lexicon.len());
        for (keyword, weight) in file.lexicon {
            let normalized = keyword.trim().to_lowercase();
            if normalized.is_empty() {
                return Err(ConfigError::Validation(
                    "lexicon keyword must be non-empty".to_string(),
                ));
            }
            if weight <= 0 {
                return Err(ConfigError::Validation(format!(
                    "lexicon keyword '{keyword}' must have a positive weight"
                )));
            }
            let weight = u32::try_from(weight).map_err(|_| {
                ConfigError::Validation(format!(
                    "lexicon keyword '{keyword}' weight {weight} is too large"
                ))
            })?;
            if lexicon.insert(normalized, weight).is_some() {
                return Err(ConfigError::Validation(format!(
                    "duplicate lexicon keyword: '{keyword}'"
                )));
            }
        }

        let mut sentiment_modifiers = HashMap::with_capacity(file.sentiment_modifiers.len());
        for (label, modifier) in file.sentiment_modifiers {
            if sentiment_modifiers
                .insert(label.trim().to_lowercase(), modifier)
                .is_some()
            {
                return Err(ConfigError::Validation(format!(
                    "duplicate sentiment modifier label: '{label}'"
                )));
            }
        }

        let mut knowledge_base = HashMap::with_capacity(file.knowledge_base.len());
        for (key, entry) in file.knowledge_base {
            if knowledge_base
                .insert(key.trim().to_lowercase(), entry)
                .is_some()
            {
                return Err(ConfigError::Validation(format!(
                    "duplicate knowledge base key: '{key}'"
                )));
            }
        }
        let fallback = knowledge_base
            .get(FALLBACK_KNOWLEDGE_KEY)
            .cloned()
            .ok_or_else(|| {
                ConfigError::Validation(format!(
                    "knowledge base must contain the '{FALLBACK_KNOWLEDGE_KEY}' entry"
                ))
            })?;

        let mut templates = HashMap::with_capacity(file.templates.len());
        for (key, text) in file.templates {
            let tier: PriorityTier = key.parse().map_err(ConfigError::Validation)?;
            if let Some(unknown) = placeholder_names(&text)
                .into_iter()
                .find(|name| !PLACEHOLDERS.contains(name))
            {
                return Err(ConfigError::Validation(format!(
                    "template '{tier}' references unknown placeholder '{{{unknown}}}'"
                )));
            }
            templates.insert(tier, text);
        }
        let informative_template = templates
            .get(&PriorityTier::Informative)
            .cloned()
            .ok_or_else(|| {
                ConfigError::Validation("the INFORMATIVE template is required".to_string())
            })?;

        Ok(Self {
            lexicon,
            sentiment_modifiers,
            knowledge_base,
            fallback,
            templates,
            informative_template,
        })
    }

    /// Export the tables in the on-disk layout.
    #[must_use]
    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            lexicon: self
                .lexicon
                .iter()
                .map(|(k, w)| (k.clone(), i64::from(*w)))
                .collect(),
            sentiment_modifiers: self
                .sentiment_modifiers
                .iter()
                .map(|(k, m)| (k.clone(), *m))
                .collect(),
            knowledge_base: self
                .knowledge_base
                .iter()
                .map(|(k, e)| (k.clone(), e.clone()))
                .collect(),
            templates: self
                .templates
                .iter()
                .map(|(tier, text)| (tier.to_string(), text.clone()))
                .collect(),
        }
    }

    /// Lexicon weight for a normalized keyword.
    #[must_use]
    pub fn weight(&self, keyword: &str) -> Option<u32> {
        self.lexicon.get(keyword).copied()
    }

    #[must_use]
    pub fn is_keyword(&self, lemma: &str) -> bool {
        self.lexicon.contains_key(lemma)
    }

    /// Lexicon entries, heaviest first, ties broken alphabetically.
    #[must_use]
    pub fn lexicon_entries(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self
            .lexicon
            .iter()
            .map(|(k, w)| (k.as_str(), *w))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Score adjustment for a sentiment label; `0` for labels not in the table.
    #[must_use]
    pub fn sentiment_modifier(&self, label: &str) -> i32 {
        self.sentiment_modifiers.get(label).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn knowledge(&self, key: &str) -> Option<&KnowledgeEntry> {
        self.knowledge_base.get(key)
    }

    #[must_use]
    pub fn fallback_knowledge(&self) -> &KnowledgeEntry {
        &self.fallback
    }

    /// Template for `tier`, or the `INFORMATIVE` template when the tier has none.
    #[must_use]
    pub fn template(&self, tier: PriorityTier) -> &str {
        self.templates
            .get(&tier)
            .map_or(self.informative_template.as_str(), String::as_str)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Load and validate a catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: CatalogFile = serde_yaml::from_str(&content)?;
    Catalog::from_file(file)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
