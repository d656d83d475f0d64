//! Batch layout generator.
//!
//! Reads a JSON file of raw items, runs the full embed → reduce → normalize →
//! relate pipeline, and atomically writes the enriched artifact.
//!
//! Usage:
//!   constellation-gen [input.json] [output.json]
//!
//! Environment:
//!   OPENAI_API_KEY    required, embedding provider credential
//!   EMBEDDING_MODEL   optional, defaults to text-embedding-3-small
//!   EMBEDDING_URL     optional, base URL for an OpenAI-compatible provider

use anyhow::Context;
use constellation_engine::{artifact, EmbeddingClient, Pipeline};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let input = PathBuf::from(
        args.next()
            .unwrap_or_else(|| "data/items-raw.json".to_string()),
    );
    let output = PathBuf::from(
        args.next()
            .unwrap_or_else(|| "data/items-processed.json".to_string()),
    );

    let model = std::env::var("EMBEDDING_MODEL")
        .unwrap_or_else(|_| "text-embedding-3-small".to_string());
    let mut builder = EmbeddingClient::builder().model(model);
    if let Ok(base_url) = std::env::var("EMBEDDING_URL") {
        builder = builder.base_url(base_url);
    }
    let client = builder.build().context("failed to build embedding client")?;

    let items = artifact::load_items(&input)
        .with_context(|| format!("failed to load items from {}", input.display()))?;
    tracing::info!(items = items.len(), input = %input.display(), "loaded raw items");

    let pipeline = Pipeline::new(client);
    let enriched = pipeline
        .run_to_file(&items, &output)
        .await
        .context("layout run failed")?;

    tracing::info!(
        items = enriched.len(),
        output = %output.display(),
        "enriched dataset written"
    );
    Ok(())
}
