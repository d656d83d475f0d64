//! The embedding provider boundary.

use super::vectors::Vector;
use crate::Result;
use async_trait::async_trait;

/// A source of semantic embeddings.
///
/// The pipeline treats this as a black box with latency and rate limits: one
/// text in, one fixed-length dense vector out. The production implementation
/// is [`super::EmbeddingClient`]; tests substitute in-memory fakes.
#[async_trait]
pub trait EmbeddingSource: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vector>;
}

#[async_trait]
impl<S: EmbeddingSource + ?Sized> EmbeddingSource for std::sync::Arc<S> {
    async fn embed(&self, text: &str) -> Result<Vector> {
        (**self).embed(text).await
    }
}
