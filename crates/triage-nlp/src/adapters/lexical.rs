//! Offline rule-based analyzer for Portuguese text.
//!
//! Tokenizes on Unicode word boundaries, flags stop words and punctuation,
//! and folds simple plurals. It recognizes no named entities.

use std::sync::LazyLock;

use regex::Regex;

use crate::analyzer::{Document, LinguisticAnalyzer, Token};
use crate::error::AnalyzerError;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+|[^\w\s]").expect("valid token regex"));

const STOP_WORDS: &[&str] = &[
    "a", "à", "ao", "aos", "aquela", "aquele", "aqui", "as", "às", "até", "com", "como", "da",
    "das", "de", "dela", "dele", "do", "dos", "e", "é", "ela", "ele", "eles", "em", "entre", "era",
    "essa", "esse", "esta", "está", "estamos", "estão", "este", "estou", "eu", "foi", "há", "isso",
    "isto", "já", "lá", "lhe", "mais", "mas", "me", "meu", "minha", "muita", "muito", "na", "nas",
    "não", "nem", "no", "nos", "nós", "num", "numa", "o", "os", "ou", "para", "pela", "pelo",
    "por", "que", "se", "sem", "ser", "seu", "sua", "são", "também", "te", "tem", "ter", "um",
    "uma", "você", "vocês",
];

#[derive(Debug, Clone, Default)]
pub struct LexicalAnalyzer;

impl LexicalAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn tokenize(text: &str) -> Vec<Token> {
        TOKEN_RE
            .find_iter(text)
            .map(|m| {
                let surface = m.as_str().to_lowercase();
                let is_punct = !surface.chars().any(char::is_alphanumeric);
                let is_stop = STOP_WORDS.contains(&surface.as_str());
                Token {
                    lemma: fold_plural(&surface),
                    is_stop,
                    is_punct,
                }
            })
            .collect()
    }
}

impl LinguisticAnalyzer for LexicalAnalyzer {
    async fn analyze(&self, text: &str) -> Result<Document, AnalyzerError> {
        Ok(Document {
            tokens: Self::tokenize(text),
            entities: Vec::new(),
        })
    }
}

/// Drop a trailing `s` from words longer than three characters
/// (`feridos` → `ferido`). `ss` endings are kept.
fn fold_plural(word: &str) -> String {
    if word.chars().count() > 3 && word.ends_with('s') && !word.ends_with("ss") {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}
