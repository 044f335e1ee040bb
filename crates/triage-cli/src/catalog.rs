//! Catalog inspection commands and catalog loading shared by the CLI.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clap::Subcommand;
use triage_core::{AppConfig, Catalog};

/// Sub-commands available under `catalog`.
#[derive(Debug, Subcommand)]
pub enum CatalogCommands {
    /// Load and validate a catalog file (defaults to TRIAGE_CATALOG_PATH)
    Validate {
        /// Path to a YAML catalog file
        path: Option<PathBuf>,
    },
    /// Print the active catalog as YAML
    Export,
}

/// The catalog named by `TRIAGE_CATALOG_PATH`, or the built-in tables.
///
/// # Errors
///
/// Returns an error if the configured file cannot be read or fails validation.
pub(crate) fn load_configured_catalog(config: &AppConfig) -> anyhow::Result<Catalog> {
    match &config.catalog_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading catalog file");
            Ok(triage_core::load_catalog(path)?)
        }
        None => Ok(Catalog::builtin()),
    }
}

pub(crate) fn format_lexicon(catalog: &Catalog) -> String {
    let mut out = String::new();
    for (keyword, weight) in catalog.lexicon_entries() {
        let _ = writeln!(out, "{keyword:<16}{weight:>3}");
    }
    out
}

pub(crate) fn run_lexicon(config: &AppConfig) -> anyhow::Result<()> {
    let catalog = load_configured_catalog(config)?;
    print!("{}", format_lexicon(&catalog));
    Ok(())
}

/// The path given on the command line, else `TRIAGE_CATALOG_PATH`.
///
/// The environment is only consulted when no path is given.
pub(crate) fn resolve_validate_path(path: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(path) = path {
        return Ok(path);
    }
    let config = triage_core::load_app_config()?;
    config
        .catalog_path
        .ok_or_else(|| anyhow::anyhow!("no catalog path given and TRIAGE_CATALOG_PATH not set"))
}

/// # Errors
///
/// Returns an error if the file cannot be read or fails validation.
pub(crate) fn run_validate(path: &Path) -> anyhow::Result<()> {
    let file = triage_core::load_catalog(path)?.to_file();
    println!(
        "catalog OK: {} ({} keywords, {} knowledge entries, {} templates)",
        path.display(),
        file.lexicon.len(),
        file.knowledge_base.len(),
        file.templates.len()
    );
    Ok(())
}

pub(crate) fn run_export(config: &AppConfig) -> anyhow::Result<()> {
    let catalog = load_configured_catalog(config)?;
    print!("{}", serde_yaml::to_string(&catalog.to_file())?);
    Ok(())
}
