//! Similarity Grapher: top-K cosine neighbors for every item.
//!
//! Intentionally exact and quadratic (`O(N²·D)`): item sets are small (low
//! hundreds) and the full pairwise ranking keeps the output deterministic.
//! This module is the only place pairwise similarity happens, so an
//! approximate nearest-neighbor structure could replace it later without
//! touching the rest of the pipeline.

use crate::embeddings::{cosine_similarity, Vector};
use crate::{Error, Result};

/// For each embedding, the indices of the `k` most similar other embeddings,
/// ordered by descending cosine similarity.
///
/// Self-pairs are excluded by construction of the candidate loop. Ties keep
/// the candidates' input order (stable sort). A zero-magnitude embedding has
/// undefined cosine similarity; such comparisons rank as least similar rather
/// than propagating a non-finite score. Lists are shorter than `k` only when
/// fewer than `k + 1` items exist.
pub fn neighbor_lists(embeddings: &[Vector], k: usize) -> Result<Vec<Vec<usize>>> {
    if let Some(first) = embeddings.first() {
        let dim = first.len();
        for (index, embedding) in embeddings.iter().enumerate() {
            if embedding.len() != dim {
                return Err(Error::DimensionMismatch {
                    expected: dim,
                    got: embedding.len(),
                    index,
                });
            }
        }
    }

    let mut lists = Vec::with_capacity(embeddings.len());
    for (i, owner) in embeddings.iter().enumerate() {
        let mut candidates: Vec<(usize, f32)> = embeddings
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(j, other)| {
                let score = cosine_similarity(owner, other).unwrap_or(f32::NEG_INFINITY);
                (j, score)
            })
            .collect();
        // Stable: equal scores keep input order.
        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.truncate(k);
        lists.push(candidates.into_iter().map(|(j, _)| j).collect());
    }
    Ok(lists)
}
