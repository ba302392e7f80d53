//! Pure planning for heart assembly: where every tile goes and when.

use crate::constants::{
    SCATTER_BASE_DELAY_MS, SETTLE_BUFFER_MS, STAGGER_BASE_DELAY_MS, STEP_DELAY_MS,
};
use crate::layout::CurveLayout;
use crate::scale::{FitTransform, Size};
use glam::DVec2;
use rand::Rng;

/// Caller-facing options for one assembly pass.
///
/// - `animate_from_scatter`: start each tile at a random spot in the container
/// - `instant`: jump to the target with transitions suppressed
/// - `base_delay_ms` / `step_delay_ms`: override the default stagger
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AssembleOptions {
    pub animate_from_scatter: bool,
    pub instant: bool,
    pub base_delay_ms: Option<u32>,
    pub step_delay_ms: Option<u32>,
}

impl AssembleOptions {
    pub fn scatter(base_delay_ms: u32, step_delay_ms: u32) -> Self {
        Self {
            animate_from_scatter: true,
            base_delay_ms: Some(base_delay_ms),
            step_delay_ms: Some(step_delay_ms),
            ..Self::default()
        }
    }

    pub fn instant() -> Self {
        Self {
            instant: true,
            ..Self::default()
        }
    }

    /// Scatter wins over instant; anything else is a plain staggered move.
    pub fn mode(&self) -> AssembleMode {
        if self.animate_from_scatter {
            AssembleMode::Scatter
        } else if self.instant {
            AssembleMode::Instant
        } else {
            AssembleMode::Staggered
        }
    }

    pub fn base_delay(&self) -> u32 {
        self.base_delay_ms.unwrap_or(if self.animate_from_scatter {
            SCATTER_BASE_DELAY_MS
        } else {
            STAGGER_BASE_DELAY_MS
        })
    }

    pub fn step_delay(&self) -> u32 {
        self.step_delay_ms
            .unwrap_or(if self.instant { 0 } else { STEP_DELAY_MS })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssembleMode {
    Scatter,
    Instant,
    Staggered,
}

/// When the assembled stage may be considered settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Immediate,
    After(u32),
}

/// Planned move for the tile at visual position `index`.
///
/// `delay_ms` is `None` for instant moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileMove {
    pub index: usize,
    pub scatter_from: Option<DVec2>,
    pub target: DVec2,
    pub delay_ms: Option<u32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssemblyPlan {
    pub mode: AssembleMode,
    pub transform: FitTransform,
    pub moves: Vec<TileMove>,
    pub completion: Completion,
}

/// `base + index * step`, saturating instead of wrapping on absurd inputs.
#[inline]
pub fn stagger_delay(base: u32, step: u32, index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base.saturating_add(step.saturating_mul(index))
}

/// Time until the last of `tile_count` staggered tiles has settled.
#[inline]
pub fn settle_delay(base: u32, step: u32, tile_count: usize) -> u32 {
    stagger_delay(base, step, tile_count).saturating_add(SETTLE_BUFFER_MS)
}

/// Plan an assembly pass for `tile_count` tiles. Returns `None` when there is
/// nothing to place.
pub fn plan_assembly<R: Rng>(
    tile_count: usize,
    container: Size,
    layout: &CurveLayout,
    options: &AssembleOptions,
    rng: &mut R,
) -> Option<AssemblyPlan> {
    if tile_count == 0 {
        return None;
    }
    let mode = options.mode();
    let base = options.base_delay();
    let step = options.step_delay();
    let transform = FitTransform::fit(container, layout.span_x, layout.span_y);

    let moves = layout
        .points
        .iter()
        .take(tile_count)
        .enumerate()
        .map(|(index, p)| {
            let target = transform.to_pixel(*p);
            match mode {
                AssembleMode::Scatter => TileMove {
                    index,
                    scatter_from: Some(DVec2::new(
                        rng.gen::<f64>() * container.width,
                        rng.gen::<f64>() * container.height,
                    )),
                    target,
                    delay_ms: Some(stagger_delay(base, step, index)),
                },
                AssembleMode::Instant => TileMove {
                    index,
                    scatter_from: None,
                    target,
                    delay_ms: None,
                },
                AssembleMode::Staggered => TileMove {
                    index,
                    scatter_from: None,
                    target,
                    delay_ms: Some(stagger_delay(base, step, index)),
                },
            }
        })
        .collect::<Vec<_>>();

    let completion = match mode {
        AssembleMode::Instant => Completion::Immediate,
        _ => Completion::After(settle_delay(base, step, tile_count)),
    };

    log::debug!(
        "[stagger] mode={:?} tiles={} scale={:.3} completion={:?}",
        mode,
        moves.len(),
        transform.scale,
        completion
    );

    Some(AssemblyPlan {
        mode,
        transform,
        moves,
        completion,
    })
}
