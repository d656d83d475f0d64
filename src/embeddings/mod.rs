//! Embedding support: the provider boundary and vector math.
//!
//! This module provides:
//! - [`EmbeddingSource`], the trait the pipeline embeds through
//! - [`EmbeddingClient`], an OpenAI-compatible HTTP implementation
//! - Vector operations (dot product, magnitude, cosine similarity)

mod client;
mod source;
mod vectors;

pub use client::{EmbeddingClient, EmbeddingClientBuilder};
pub use source::EmbeddingSource;
pub use vectors::{cosine_similarity, dot_product, magnitude, Vector};
