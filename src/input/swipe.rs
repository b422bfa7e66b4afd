//! Pointer swipe recognition.
//!
//! A [`SwipeTracker`] follows one pointer from press to release. Once the
//! drag passes [`SWIPE_THRESHOLD`] on either axis the direction locks and
//! further movement is ignored. The locked direction is reported when the
//! pointer is released or cancelled.

use crate::core::Direction;

/// Drag distance, in pointer units, that commits a direction.
pub const SWIPE_THRESHOLD: f64 = 24.0;

#[derive(Clone, Copy, Debug, PartialEq)]
struct ActivePointer {
    id: u32,
    start_x: f64,
    start_y: f64,
    locked: Option<Direction>,
}

/// Tracks a single swipe gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    active: Option<ActivePointer>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: SWIPE_THRESHOLD,
            active: None,
        }
    }

    /// Use a different commit distance.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Start tracking. Secondary pointers, and any press while another
    /// pointer is down, are ignored.
    pub fn pointer_down(&mut self, id: u32, is_primary: bool, x: f64, y: f64) {
        if !is_primary || self.active.is_some() {
            return;
        }
        self.active = Some(ActivePointer {
            id,
            start_x: x,
            start_y: y,
            locked: None,
        });
    }

    /// Feed a pointer position. Locks the direction once the drag is long
    /// enough.
    pub fn pointer_move(&mut self, id: u32, x: f64, y: f64) {
        let threshold = self.threshold;
        let Some(active) = self.active.as_mut().filter(|a| a.id == id) else {
            return;
        };
        if active.locked.is_some() {
            return;
        }
        let dx = x - active.start_x;
        let dy = y - active.start_y;
        if dx.abs() < threshold && dy.abs() < threshold {
            return;
        }
        active.locked = Some(resolve_direction(dx, dy));
    }

    /// Finish the gesture and return its direction, if one locked.
    pub fn pointer_up(&mut self, id: u32) -> Option<Direction> {
        match self.active {
            Some(active) if active.id == id => {
                self.active = None;
                active.locked
            }
            _ => None,
        }
    }

    /// Cancellation ends a gesture the same way a release does.
    pub fn pointer_cancel(&mut self, id: u32) -> Option<Direction> {
        self.pointer_up(id)
    }

    /// Whether a pointer is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// Drop any gesture in progress.
    pub fn reset(&mut self) {
        self.active = None;
    }
}

/// Dominant axis wins; ties go horizontal.
fn resolve_direction(dx: f64, dy: f64) -> Direction {
    if dx.abs() >= dy.abs() {
        if dx >= 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy >= 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}
