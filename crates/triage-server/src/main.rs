mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use triage_core::{AppConfig, Catalog};
use triage_nlp::{optional_classifier, AnyAnalyzer, TriagePipeline};

use crate::api::{build_app, AppState, Pipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = triage_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pipeline = build_pipeline(&config)?;
    tracing::info!(
        env = %config.env,
        analyzer = pipeline.analyzer().kind(),
        sentiment = pipeline.sentiment_available(),
        "triage pipeline ready"
    );

    let app = build_app(AppState {
        pipeline: Arc::new(pipeline),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn build_pipeline(config: &AppConfig) -> anyhow::Result<Pipeline> {
    let catalog = match &config.catalog_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading catalog file");
            triage_core::load_catalog(path)?
        }
        None => Catalog::builtin(),
    };

    let analyzer = AnyAnalyzer::from_url(config.analyzer_url.as_deref(), config.http_timeout_secs)?;
    let classifier = optional_classifier(config.sentiment_url.as_deref(), config.http_timeout_secs);

    Ok(TriagePipeline::new(Arc::new(catalog), analyzer, classifier))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
