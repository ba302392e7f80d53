//! Seams between the layout engine and whatever actually draws tiles.
//!
//! These traits intentionally avoid referencing platform-specific APIs. The
//! web frontend implements them over DOM elements and `setTimeout`; tests
//! implement them with recording fakes and a virtual clock.

use std::cell::Cell;
use std::rc::Rc;

/// One positioned tile. Setters take `&self` since DOM handles are shared.
pub trait TileSurface {
    /// Move the tile's anchor to `(left, top)` container pixels.
    fn set_position(&self, left: f64, top: f64);
    /// Explicit square/rect size, or `None` to fall back to the stylesheet size.
    fn set_size(&self, size: Option<(f64, f64)>);
    fn set_visible(&self, visible: bool);
    /// Disable transitions; `false` restores whatever was active before.
    fn set_transitions_suppressed(&self, suppressed: bool);
    /// Flush pending style writes so a suppressed transition is fully applied.
    fn commit_layout(&self);
}

/// One-shot delayed callbacks.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        (**self).schedule(delay_ms, task)
    }
}

/// Monotonic counter used to invalidate callbacks scheduled by an earlier pass.
#[derive(Clone, Debug, Default)]
pub struct Generation(Rc<Cell<u64>>);

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u64 {
        self.0.get()
    }

    /// Start a new generation and return its token.
    pub fn advance(&self) -> u64 {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        next
    }

    #[inline]
    pub fn is_current(&self, token: u64) -> bool {
        self.0.get() == token
    }
}
