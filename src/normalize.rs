//! Spatial Normalizer: rescale reduced points into the viewing volume.

use crate::model::Position;
use crate::reduce::OUTPUT_DIMS;

/// Target coordinate range, applied to each axis independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lower: f32,
    pub upper: f32,
}

impl Bounds {
    /// Rejects non-finite or inverted/empty ranges.
    pub fn new(lower: f32, upper: f32) -> Option<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return None;
        }
        Some(Self { lower, upper })
    }

    pub fn midpoint(&self) -> f32 {
        (self.lower + self.upper) / 2.0
    }

    pub fn span(&self) -> f32 {
        self.upper - self.lower
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            lower: -10.0,
            upper: 10.0,
        }
    }
}

/// Linearly rescale each axis so the observed minimum maps to `bounds.lower`
/// and the observed maximum to `bounds.upper`.
///
/// Axes are stretched independently, not with a shared scale factor. An axis
/// where every point coincides (including the single-point case) maps to the
/// midpoint of the target range instead of dividing by zero.
pub fn normalize_positions(points: &[[f32; OUTPUT_DIMS]], bounds: Bounds) -> Vec<Position> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut mins = [f32::INFINITY; OUTPUT_DIMS];
    let mut maxs = [f32::NEG_INFINITY; OUTPUT_DIMS];
    for point in points {
        for axis in 0..OUTPUT_DIMS {
            mins[axis] = mins[axis].min(point[axis]);
            maxs[axis] = maxs[axis].max(point[axis]);
        }
    }

    points
        .iter()
        .map(|point| {
            let mut scaled = [0.0f32; OUTPUT_DIMS];
            for axis in 0..OUTPUT_DIMS {
                let range = maxs[axis] - mins[axis];
                scaled[axis] = if range == 0.0 {
                    bounds.midpoint()
                } else {
                    (point[axis] - mins[axis]) / range * bounds.span() + bounds.lower
                };
            }
            Position::new(scaled[0], scaled[1], scaled[2])
        })
        .collect()
}
