// Test doubles for the layout seams: a recording tile and a virtual-clock scheduler.

#![allow(dead_code)]

use heart_core::{Scheduler, TileSurface};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum TileEvent {
    Position(f64, f64),
    Size(Option<(f64, f64)>),
    Visible(bool),
    Suppressed(bool),
    Commit,
}

#[derive(Clone, Default)]
pub struct RecordingTile {
    pub events: Rc<RefCell<Vec<TileEvent>>>,
}

impl RecordingTile {
    pub fn many(n: usize) -> Vec<RecordingTile> {
        (0..n).map(|_| RecordingTile::default()).collect()
    }

    pub fn events(&self) -> Vec<TileEvent> {
        self.events.borrow().clone()
    }

    pub fn last_position(&self) -> Option<(f64, f64)> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            TileEvent::Position(x, y) => Some((*x, *y)),
            _ => None,
        })
    }

    pub fn is_visible(&self) -> bool {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|e| match e {
                TileEvent::Visible(v) => Some(*v),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl TileSurface for RecordingTile {
    fn set_position(&self, left: f64, top: f64) {
        self.events.borrow_mut().push(TileEvent::Position(left, top));
    }
    fn set_size(&self, size: Option<(f64, f64)>) {
        self.events.borrow_mut().push(TileEvent::Size(size));
    }
    fn set_visible(&self, visible: bool) {
        self.events.borrow_mut().push(TileEvent::Visible(visible));
    }
    fn set_transitions_suppressed(&self, suppressed: bool) {
        self.events.borrow_mut().push(TileEvent::Suppressed(suppressed));
    }
    fn commit_layout(&self) {
        self.events.borrow_mut().push(TileEvent::Commit);
    }
}

type Task = (u64, u64, Box<dyn FnOnce()>);

/// Runs scheduled tasks only when the test advances the virtual clock.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    seq: Cell<u64>,
    queue: RefCell<Vec<Task>>,
}

impl ManualScheduler {
    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run every task due at or before `t`, in due-time then scheduling order.
    pub fn advance_to(&self, t: u64) {
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let due = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _, _))| *at <= t)
                    .min_by_key(|(_, (at, seq, _))| (*at, *seq))
                    .map(|(i, _)| i);
                due.map(|i| queue.remove(i))
            };
            match next {
                Some((at, _, task)) => {
                    self.now.set(at.max(self.now.get()));
                    task();
                }
                None => break,
            }
        }
        self.now.set(t.max(self.now.get()));
    }

    pub fn run_all(&self) {
        loop {
            let last = self.queue.borrow().iter().map(|(at, _, _)| *at).max();
            match last {
                Some(at) => self.advance_to(at),
                None => break,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.queue
            .borrow_mut()
            .push((self.now.get() + delay_ms as u64, seq, task));
    }
}
