//! Angular reordering of heart samples into the visual tile order.

use crate::curve::{sample_heart, CurveSamples};
use glam::DVec2;
use std::cmp::Ordering;

/// Heart layout in curve space, ready to be scaled into a container.
///
/// Fields:
/// - `points`: sample positions relative to the bounding-box center, in visual order
/// - `span_x`, `span_y`: extents of the original samples
/// - `order`: `order[i]` is the sampling index shown at visual position `i`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurveLayout {
    pub points: Vec<DVec2>,
    pub span_x: f64,
    pub span_y: f64,
    pub order: Vec<usize>,
}

impl CurveLayout {
    /// Recenter samples on their bounding-box center and sort them by
    /// descending polar angle. Equal angles keep sampling order.
    pub fn from_samples(samples: &CurveSamples) -> Self {
        let center = samples.bounds.center();
        let mut ranked = samples
            .points
            .iter()
            .enumerate()
            .map(|(index, p)| {
                let rel = *p - center;
                (rel.y.atan2(rel.x), index, rel)
            })
            .collect::<Vec<_>>();
        // sort_by is stable, so ties (including -0.0 vs 0.0) stay in sampling order
        ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        Self {
            points: ranked.iter().map(|(_, _, p)| *p).collect(),
            span_x: samples.bounds.span_x(),
            span_y: samples.bounds.span_y(),
            order: ranked.iter().map(|(_, i, _)| *i).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Permute per-sample data (labels, fills) into visual order.
    pub fn arrange<T: Clone>(&self, per_sample: &[T]) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|&i| per_sample.get(i).cloned())
            .collect()
    }
}

/// Sample the heart with `count` points and reorder them for display.
pub fn compute_heart_layout(count: usize) -> CurveLayout {
    let layout = CurveLayout::from_samples(&sample_heart(count));
    log::debug!(
        "[layout] heart count={} span=({:.2},{:.2})",
        layout.len(),
        layout.span_x,
        layout.span_y
    );
    layout
}
