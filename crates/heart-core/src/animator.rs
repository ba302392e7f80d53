use crate::grid::GridLayout;
use crate::layout::CurveLayout;
use crate::scale::Size;
use crate::stagger::{plan_assembly, AssembleOptions, AssemblyPlan, Completion};
use crate::surface::{Generation, Scheduler, TileSurface};
use rand::prelude::*;

/// Applies assembly plans and grid dispersal to a set of tiles.
///
/// Every pass starts a new [`Generation`]; position writes scheduled by an
/// older pass become no-ops when they fire, so a resize or dispersal during a
/// running cascade cannot be overwritten by stale targets.
pub struct StagedAnimator<S: Scheduler> {
    scheduler: S,
    generation: Generation,
    rng: StdRng,
}

impl<S: Scheduler> StagedAnimator<S> {
    pub fn new(scheduler: S, seed: u64) -> Self {
        Self {
            scheduler,
            generation: Generation::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generation(&self) -> &Generation {
        &self.generation
    }

    /// Invalidate every position write still waiting on the scheduler.
    pub fn cancel_pending(&self) {
        self.generation.advance();
    }

    /// Move `tiles` onto the heart described by `layout` inside `container`.
    ///
    /// `on_complete` runs synchronously for instant passes and after the
    /// settle estimate otherwise. With no tiles nothing is touched and
    /// `on_complete` is dropped without being called.
    pub fn position_as_heart<T>(
        &mut self,
        tiles: &[T],
        container: Size,
        layout: &CurveLayout,
        options: &AssembleOptions,
        on_complete: Option<Box<dyn FnOnce()>>,
    ) -> Option<AssemblyPlan>
    where
        T: TileSurface + Clone + 'static,
    {
        let plan = plan_assembly(tiles.len(), container, layout, options, &mut self.rng)?;
        let token = self.generation.advance();

        for (mv, tile) in plan.moves.iter().zip(tiles) {
            if let Some(from) = mv.scatter_from {
                tile.set_visible(false);
                tile.set_position(from.x, from.y);
                tile.set_size(None);
            }
            match mv.delay_ms {
                None => {
                    tile.set_transitions_suppressed(true);
                    tile.set_position(mv.target.x, mv.target.y);
                    tile.set_visible(true);
                    tile.commit_layout();
                    tile.set_transitions_suppressed(false);
                }
                Some(delay) => {
                    let tile = tile.clone();
                    let generation = self.generation.clone();
                    let target = mv.target;
                    self.scheduler.schedule(
                        delay,
                        Box::new(move || {
                            if !generation.is_current(token) {
                                return;
                            }
                            tile.set_position(target.x, target.y);
                            tile.set_visible(true);
                        }),
                    );
                }
            }
        }

        if let Some(done) = on_complete {
            match plan.completion {
                Completion::Immediate => done(),
                Completion::After(delay) => self.scheduler.schedule(delay, done),
            }
        }
        Some(plan)
    }

    /// Lay `tiles` out on a grid filling `viewport`, all at once.
    pub fn spread_across_screen<T: TileSurface>(
        &mut self,
        tiles: &[T],
        viewport: Size,
    ) -> Option<GridLayout> {
        let grid = GridLayout::compute(tiles.len(), viewport)?;
        self.generation.advance();
        for (i, tile) in tiles.iter().enumerate() {
            let pos = grid.position(i);
            tile.set_position(pos.x, pos.y);
            tile.set_size(Some((grid.tile_size, grid.tile_size)));
            tile.set_visible(true);
        }
        Some(grid)
    }
}
