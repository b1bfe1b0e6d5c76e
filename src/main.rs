use anyhow::Context;
use clap::Parser;
use folio_search::config::Config;
use folio_search::corpus::CorpusIndex;
use folio_search::search::handlers::build_router;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    // 1. Corpus (fatal on any failure):
    tracing::info!("Loading corpus from {}", config.corpus_path.display());
    let index = CorpusIndex::load(&config.corpus_path)
        .with_context(|| format!("failed to load corpus {}", config.corpus_path.display()))?;

    if index.is_empty() {
        tracing::warn!("Corpus contains no recognised works; every search will be empty");
    }

    // 2. HTTP Router:
    tracing::info!(
        "Highlight mode: {:?}, static assets from {}",
        config.highlight_mode,
        config.static_dir.display()
    );
    let app = build_router(Arc::new(index), config.highlight_mode, &config.static_dir);

    // 3. Start HTTP server:
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
