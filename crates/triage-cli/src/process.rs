//! `process` command: triage one message with the configured pipeline.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use triage_core::{AppConfig, ProcessingResult};
use triage_nlp::{optional_classifier, AnyAnalyzer, TriagePipeline};

use crate::catalog::load_configured_catalog;

/// Where the message text comes from.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum MessageInput {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl MessageInput {
    pub(crate) fn from_args(text: Option<String>, file: Option<PathBuf>) -> Self {
        match (text, file) {
            (Some(text), _) => Self::Inline(text),
            (None, Some(path)) => Self::File(path),
            (None, None) => Self::Stdin,
        }
    }

    /// Read the text. Trailing line breaks from files and stdin are dropped.
    pub(crate) fn read(self) -> anyhow::Result<String> {
        let raw = match self {
            Self::Inline(text) => return Ok(text),
            Self::File(path) => std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read message file {}", path.display()))?,
            Self::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read message from stdin")?;
                buf
            }
        };
        Ok(raw.trim_end_matches(['\r', '\n']).to_string())
    }
}

pub(crate) fn render_result(result: &ProcessingResult, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    }
}

/// Triage one message and print the `ProcessingResult` JSON to stdout.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the catalog or analyzer
/// cannot be built, the text is empty, or linguistic analysis fails.
pub(crate) async fn run_process(
    config: &AppConfig,
    input: MessageInput,
    message_id: Option<String>,
    pretty: bool,
) -> anyhow::Result<()> {
    let text = input.read()?;

    let catalog = load_configured_catalog(config)?;
    let analyzer = AnyAnalyzer::from_url(config.analyzer_url.as_deref(), config.http_timeout_secs)?;
    let classifier = optional_classifier(config.sentiment_url.as_deref(), config.http_timeout_secs);
    let pipeline = TriagePipeline::new(Arc::new(catalog), analyzer, classifier);

    let result = pipeline.process(&text, message_id).await?;
    println!("{}", render_result(&result, pretty)?);
    Ok(())
}
