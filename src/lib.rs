//! # constellation-engine
//!
//! Offline semantic layout engine for interactive visual explorers: takes a
//! list of short text items, embeds each one through an external provider,
//! and produces a single enriched dataset where every item carries a 3D
//! position derived from its semantic embedding and a precomputed list of its
//! most similar peers.
//!
//! ## Pipeline
//!
//! Data flows strictly forward:
//!
//! ```text
//! raw items -> embeddings -> reduced 3D points -> normalized positions
//!                        \-> top-K neighbor lists
//! ```
//!
//! The orchestrator merges both branches into one [`EnrichedItem`] per input
//! item. A run is all-or-nothing: neighbor ranking and per-axis normalization
//! are whole-set operations, so any embedding failure aborts the run and the
//! previously published artifact stays untouched.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use constellation_engine::{artifact, EmbeddingClient, Pipeline};
//!
//! #[tokio::main]
//! async fn main() -> constellation_engine::Result<()> {
//!     let client = EmbeddingClient::builder()
//!         .model("text-embedding-3-small")
//!         .build()?;
//!
//!     let items = artifact::load_items("data/items-raw.json".as_ref())?;
//!     let pipeline = Pipeline::new(client);
//!     pipeline
//!         .run_to_file(&items, "data/items-processed.json".as_ref())
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`model`] | Raw and enriched item types |
//! | [`embeddings`] | Provider boundary, HTTP client, vector math |
//! | [`reduce`] | PCA projection of embeddings onto 3 axes |
//! | [`normalize`] | Per-axis rescaling into the viewing volume |
//! | [`graph`] | Top-K cosine similarity neighbor lists |
//! | [`pipeline`] | Orchestrator, throttling, retry policy |
//! | [`artifact`] | JSON loading and atomic artifact publication |

pub mod artifact;
pub mod embeddings;
pub mod graph;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod reduce;

pub mod error;
pub use error::Error;

/// Result type alias for the library.
pub type Result<T> = std::result::Result<T, Error>;

// Re-export main types for convenience.
pub use embeddings::{EmbeddingClient, EmbeddingClientBuilder, EmbeddingSource};
pub use model::{EnrichedItem, Position, RawItem};
pub use normalize::Bounds;
pub use pipeline::{Pipeline, PipelineConfig, RetryConfig};
