//! Vector Reducer: variance-maximizing projection of embeddings onto 3 axes.
//!
//! Classic PCA by singular value decomposition of the mean-centered data
//! matrix: the principal-component scores for each row are `U * Σ` restricted
//! to the top-3 singular triplets. The run-specific mean is never reused
//! across runs.

use crate::embeddings::Vector;
use crate::{Error, Result};
use nalgebra::DMatrix;

/// Number of spatial axes every reduced point carries.
pub const OUTPUT_DIMS: usize = 3;

/// Project `N` equal-length embeddings onto their 3 directions of maximal
/// variance, ordered by descending variance explained.
///
/// Edge behavior:
/// - embeddings with fewer than 3 dimensions produce zero-variance axes for
///   the missing components (constant `0.0`)
/// - a single embedding centers to the zero matrix, so its reduced point is
///   the origin
/// - inconsistent lengths fail with [`Error::DimensionMismatch`] before any
///   numeric work
pub fn reduce_to_3d(embeddings: &[Vector]) -> Result<Vec<[f32; OUTPUT_DIMS]>> {
    if embeddings.is_empty() {
        return Ok(Vec::new());
    }
    let dim = embeddings[0].len();
    for (index, embedding) in embeddings.iter().enumerate() {
        if embedding.len() != dim {
            return Err(Error::DimensionMismatch {
                expected: dim,
                got: embedding.len(),
                index,
            });
        }
    }

    let n = embeddings.len();
    let mut mean = vec![0.0f64; dim];
    for embedding in embeddings {
        for (j, &value) in embedding.iter().enumerate() {
            mean[j] += value as f64;
        }
    }
    for value in &mut mean {
        *value /= n as f64;
    }

    let centered = DMatrix::<f64>::from_fn(n, dim, |i, j| embeddings[i][j] as f64 - mean[j]);
    let svd = centered
        .try_svd(true, false, f64::EPSILON, 0)
        .ok_or_else(|| Error::numerical("SVD of the centered embedding matrix did not converge"))?;
    let u = svd
        .u
        .ok_or_else(|| Error::numerical("SVD did not produce a left singular basis"))?;
    let singular_values = svd.singular_values;

    // Descending by singular value; stable so equal values keep their
    // decomposition order and a fixed input always yields the same axes.
    let mut order: Vec<usize> = (0..singular_values.len()).collect();
    order.sort_by(|&a, &b| {
        singular_values[b]
            .partial_cmp(&singular_values[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut reduced = vec![[0.0f32; OUTPUT_DIMS]; n];
    for (axis, &component) in order.iter().take(OUTPUT_DIMS).enumerate() {
        let sigma = singular_values[component];
        for (i, point) in reduced.iter_mut().enumerate() {
            point[axis] = (u[(i, component)] * sigma) as f32;
        }
    }
    Ok(reduced)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_empty_input() {
        assert!(reduce_to_3d(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_dimension_mismatch_detected() {
        let embeddings = vec![vec![1.0, 2.0], vec![1.0, 2.0, 3.0]];
        match reduce_to_3d(&embeddings) {
            Err(Error::DimensionMismatch {
                expected,
                got,
                index,
            }) => {
                assert_eq!(expected, 2);
                assert_eq!(got, 3);
                assert_eq!(index, 1);
            }
            other => panic!("expected DimensionMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_single_embedding_collapses_to_origin() {
        let embeddings = vec![vec![0.3, -1.2, 4.5, 0.0]];
        let reduced = reduce_to_3d(&embeddings).unwrap();
        assert_eq!(reduced.len(), 1);
        for axis in 0..OUTPUT_DIMS {
            assert!(approx_eq(reduced[0][axis], 0.0));
        }
    }

    #[test]
    fn test_low_dimensional_input_pads_with_zero_axes() {
        let embeddings = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![-1.0, -1.0]];
        let reduced = reduce_to_3d(&embeddings).unwrap();
        assert_eq!(reduced.len(), 3);
        for point in &reduced {
            assert!(approx_eq(point[2], 0.0));
        }
    }

    #[test]
    fn test_first_axis_captures_dominant_variance() {
        // Spread is overwhelmingly along one direction; the first axis must
        // separate the extremes far more than the second does.
        let embeddings = vec![
            vec![10.0, 1.0, 0.0],
            vec![-10.0, -1.0, 0.0],
            vec![5.0, -0.5, 0.1],
            vec![-5.0, 0.5, -0.1],
        ];
        let reduced = reduce_to_3d(&embeddings).unwrap();
        let spread = |axis: usize| {
            let values: Vec<f32> = reduced.iter().map(|p| p[axis]).collect();
            let max = values.iter().cloned().fold(f32::MIN, f32::max);
            let min = values.iter().cloned().fold(f32::MAX, f32::min);
            max - min
        };
        assert!(spread(0) > spread(1));
        assert!(spread(1) >= spread(2));
    }

    #[test]
    fn test_collinear_points_have_one_significant_axis() {
        let embeddings = vec![
            vec![0.0, 0.0, 0.0, 0.0],
            vec![1.0, 1.0, 1.0, 1.0],
            vec![2.0, 2.0, 2.0, 2.0],
        ];
        let reduced = reduce_to_3d(&embeddings).unwrap();
        for point in &reduced {
            assert!(approx_eq(point[1], 0.0));
            assert!(approx_eq(point[2], 0.0));
        }
        // The collinear spread survives on the first axis.
        assert!((reduced[0][0] - reduced[2][0]).abs() > 1.0);
    }

    #[test]
    fn test_mean_centering() {
        // Scores of centered data always sum to zero per axis.
        let embeddings = vec![
            vec![3.0, 1.0, 7.0],
            vec![-2.0, 4.0, 0.5],
            vec![0.0, -3.0, 2.0],
            vec![1.5, 2.5, -4.0],
        ];
        let reduced = reduce_to_3d(&embeddings).unwrap();
        for axis in 0..OUTPUT_DIMS {
            let sum: f32 = reduced.iter().map(|p| p[axis]).sum();
            assert!(sum.abs() < 1e-3, "axis {} sums to {}", axis, sum);
        }
    }

    #[test]
    fn test_deterministic_for_fixed_input() {
        let embeddings = vec![
            vec![0.1, 0.9, -0.3, 0.5],
            vec![0.4, -0.2, 0.8, -0.6],
            vec![-0.7, 0.3, 0.2, 0.1],
            vec![0.0, 0.0, 1.0, 1.0],
        ];
        let first = reduce_to_3d(&embeddings).unwrap();
        let second = reduce_to_3d(&embeddings).unwrap();
        assert_eq!(first, second);
    }
}
