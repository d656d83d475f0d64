//! Vector operations on raw embeddings.

pub type Vector = Vec<f32>;

pub fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

pub fn magnitude(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity between two equal-length vectors.
///
/// Returns `None` when either vector has zero magnitude, where the metric is
/// undefined. Callers decide how to rank the undefined case; the similarity
/// grapher treats it as least similar.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f32> {
    let mag_a = magnitude(a);
    let mag_b = magnitude(b);
    if mag_a == 0.0 || mag_b == 0.0 {
        return None;
    }
    Some(dot_product(a, b) / (mag_a * mag_b))
}
