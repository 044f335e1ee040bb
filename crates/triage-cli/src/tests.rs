use clap::Parser;

use super::*;

#[test]
fn parses_process_with_inline_text() {
    let cli = Cli::try_parse_from(["triage-cli", "process", "Socorro!", "--id", "MSG1"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Process {
            text: Some(ref t),
            file: None,
            id: Some(ref id),
            pretty: false,
        } if t == "Socorro!" && id == "MSG1"
    ));
}

#[test]
fn parses_process_from_file_pretty() {
    let cli = Cli::try_parse_from(["triage-cli", "process", "--file", "msg.txt", "--pretty"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Process {
            text: None,
            file: Some(ref path),
            pretty: true,
            ..
        } if path == std::path::Path::new("msg.txt")
    ));
}

#[test]
fn process_text_conflicts_with_file() {
    let result = Cli::try_parse_from(["triage-cli", "process", "texto", "--file", "msg.txt"]);
    assert!(result.is_err());
}

#[test]
fn parses_lexicon_command() {
    let cli = Cli::try_parse_from(["triage-cli", "lexicon"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Lexicon));
}

#[test]
fn parses_catalog_validate_with_and_without_path() {
    let cli = Cli::try_parse_from(["triage-cli", "catalog", "validate", "config/catalog.yaml"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Catalog {
            command: CatalogCommands::Validate { path: Some(ref p) }
        } if p == std::path::Path::new("config/catalog.yaml")
    ));

    let cli = Cli::try_parse_from(["triage-cli", "catalog", "validate"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Catalog {
            command: CatalogCommands::Validate { path: None }
        }
    ));
}

#[test]
fn parses_catalog_export() {
    let cli = Cli::try_parse_from(["triage-cli", "catalog", "export"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Catalog {
            command: CatalogCommands::Export
        }
    ));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["triage-cli"]).is_err());
}

#[test]
fn help_renders_without_touching_the_environment() {
    let err = Cli::try_parse_from(["triage-cli", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[tokio::test]
async fn catalog_validate_with_path_ignores_server_config() {
    // Production without an analyzer URL is a config error; validate must not care.
    std::env::set_var("TRIAGE_ENV", "production");
    std::env::set_var("TRIAGE_BIND_ADDR", "bogus");
    std::env::remove_var("TRIAGE_ANALYZER_URL");

    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/catalog.yaml");
    let cli = Cli::try_parse_from([
        std::ffi::OsStr::new("triage-cli"),
        std::ffi::OsStr::new("catalog"),
        std::ffi::OsStr::new("validate"),
        path.as_os_str(),
    ])
    .expect("expected valid cli args");

    let result = run(cli.command).await;

    std::env::remove_var("TRIAGE_ENV");
    std::env::remove_var("TRIAGE_BIND_ADDR");
    result.expect("validate with an explicit path needs no environment config");
}
