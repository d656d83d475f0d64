//! Pipeline Orchestrator: raw items in, enriched artifact out.
//!
//! A run is strictly sequential and all-or-nothing. Embeddings are collected
//! one item at a time in input order with a fixed pause between provider
//! calls, then the whole set flows through reduction, normalization, and
//! neighbor ranking. Both of those are whole-set operations, so a partial
//! item set is meaningless; any embedding failure aborts the run before
//! anything is published and the previous artifact stays valid.

mod retry;
mod throttle;

pub use retry::RetryConfig;

use crate::artifact;
use crate::embeddings::{EmbeddingSource, Vector};
use crate::graph::neighbor_lists;
use crate::model::{EnrichedItem, RawItem};
use crate::normalize::{normalize_positions, Bounds};
use crate::reduce::reduce_to_3d;
use crate::{Error, Result};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;
use throttle::Throttle;
use tracing::{error, info, warn};

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Neighbor list size K.
    pub neighbors: usize,
    /// Target coordinate box for normalized positions.
    pub bounds: Bounds,
    /// Minimum spacing between consecutive embedding calls.
    pub throttle: Duration,
    /// Retry policy for transient embedding failures. With `None`, the first
    /// failure aborts the run.
    pub retry: Option<RetryConfig>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            neighbors: 3,
            bounds: Bounds::default(),
            throttle: Duration::from_millis(100),
            retry: None,
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_neighbors(mut self, k: usize) -> Self {
        self.neighbors = k;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_throttle(mut self, interval: Duration) -> Self {
        self.throttle = interval;
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }
}

/// The batch pipeline over an [`EmbeddingSource`].
pub struct Pipeline<S> {
    source: S,
    config: PipelineConfig,
}

impl<S: EmbeddingSource> Pipeline<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, PipelineConfig::default())
    }

    pub fn with_config(source: S, config: PipelineConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the full pipeline, producing one enriched item per input item in
    /// input order, or fail the entire run.
    pub async fn run(&self, items: &[RawItem]) -> Result<Vec<EnrichedItem>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }
        Self::check_unique_ids(items)?;
        info!(items = items.len(), "starting layout run");

        let embeddings = self.collect_embeddings(items).await?;

        let reduced = reduce_to_3d(&embeddings)?;
        let positions = normalize_positions(&reduced, self.config.bounds);
        let neighbors = neighbor_lists(&embeddings, self.config.neighbors)?;

        let enriched: Vec<EnrichedItem> = items
            .iter()
            .zip(positions)
            .zip(neighbors)
            .map(|((item, position), neighbor_indices)| {
                let related = neighbor_indices
                    .into_iter()
                    .map(|j| items[j].id.clone())
                    .collect();
                EnrichedItem::from_raw(item.clone(), position, related)
            })
            .collect();

        info!(items = enriched.len(), "layout run complete");
        Ok(enriched)
    }

    /// [`run`](Self::run), then atomically publish the artifact at `path`.
    /// An aborted run never touches the previously published artifact.
    pub async fn run_to_file(&self, items: &[RawItem], path: &Path) -> Result<Vec<EnrichedItem>> {
        let enriched = self.run(items).await?;
        artifact::publish(path, &enriched)?;
        info!(path = %path.display(), "artifact published");
        Ok(enriched)
    }

    fn check_unique_ids(items: &[RawItem]) -> Result<()> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in items {
            if !seen.insert(item.id.as_str()) {
                return Err(Error::validation(format!("duplicate item id '{}'", item.id)));
            }
        }
        Ok(())
    }

    async fn collect_embeddings(&self, items: &[RawItem]) -> Result<Vec<Vector>> {
        let throttle = Throttle::new(self.config.throttle);
        let mut embeddings = Vec::with_capacity(items.len());
        for item in items {
            throttle.acquire().await;
            embeddings.push(self.embed_item(item).await?);
        }
        Ok(embeddings)
    }

    async fn embed_item(&self, item: &RawItem) -> Result<Vector> {
        let mut attempt = 0;
        loop {
            match self.source.embed(&item.text).await {
                Ok(vector) => return Ok(vector),
                Err(e) => {
                    let delay = self
                        .config
                        .retry
                        .as_ref()
                        .and_then(|retry| retry.should_retry(attempt, &e));
                    match delay {
                        Some(delay) => {
                            warn!(id = %item.id, attempt, error = %e, "embedding call failed, retrying");
                            tokio::time::sleep(delay).await;
                            attempt += 1;
                        }
                        None => {
                            error!(id = %item.id, error = %e, "embedding source failed, aborting run");
                            return Err(Error::embedding_source(&item.id, e.to_string()));
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedSource;

    #[async_trait]
    impl EmbeddingSource for FixedSource {
        async fn embed(&self, text: &str) -> Result<Vector> {
            Ok(vec![text.len() as f32, 1.0])
        }
    }

    fn fast_config() -> PipelineConfig {
        PipelineConfig::new().with_throttle(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_empty_input_yields_empty_output() {
        let pipeline = Pipeline::with_config(FixedSource, fast_config());
        assert!(pipeline.run(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_ids_rejected() {
        let items = vec![RawItem::new("a", "one"), RawItem::new("a", "two")];
        let pipeline = Pipeline::with_config(FixedSource, fast_config());
        assert!(matches!(
            pipeline.run(&items).await,
            Err(Error::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_output_preserves_input_order() {
        let items = vec![
            RawItem::new("first", "aa"),
            RawItem::new("second", "bbbb"),
            RawItem::new("third", "cccccc"),
        ];
        let pipeline = Pipeline::with_config(FixedSource, fast_config());
        let enriched = pipeline.run(&items).await.unwrap();
        let ids: Vec<&str> = enriched.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.neighbors, 3);
        assert_eq!(config.throttle, Duration::from_millis(100));
        assert_eq!(config.bounds, Bounds::default());
        assert!(config.retry.is_none());
    }
}
