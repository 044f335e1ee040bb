use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// YAML catalog overriding the built-in tables.
    pub catalog_path: Option<PathBuf>,
    /// Base URL of the linguistic analyzer sidecar. The offline lexical
    /// analyzer is used when unset.
    pub analyzer_url: Option<String>,
    /// Base URL of the TEI sentiment classifier. Sentiment is reported as
    /// `unavailable` when unset.
    pub sentiment_url: Option<String>,
    pub http_timeout_secs: u64,
}
