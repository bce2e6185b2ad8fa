//! Programmatic scroll animation.
//!
//! [`ScrollAnimation`] is sampled once per display frame; [`ScrollActivity`]
//! is the shared "a programmatic scroll is running" signal. The coordinator
//! that tracks the active section reads it to stay quiet while the viewport is
//! being driven, and each new animation supersedes the previous one.

use std::cell::Cell;
use std::rc::Rc;

use crate::easing::ease_in_out_cubic;

/// One animation from `start` to `target` over `duration` milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    /// Vertical offset when the animation began
    pub start: f64,
    /// Vertical offset to settle on
    pub target: f64,
    /// Total length in milliseconds
    pub duration: f64,
    /// Host timestamp at which the animation began
    pub started_at: f64,
}

/// Result of sampling an animation at a timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    /// Offset to apply to the viewport
    pub position: f64,
    /// Whether this is the final frame
    pub done: bool,
}

impl ScrollAnimation {
    /// Create an animation anchored at host time `started_at`.
    pub fn new(start: f64, target: f64, duration: f64, started_at: f64) -> Self {
        Self {
            start,
            target,
            duration,
            started_at,
        }
    }

    /// Elapsed fraction at `now`, clamped to `[0, 1]`.
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0)
    }

    /// Viewport position for the frame at `now`.
    pub fn sample(&self, now: f64) -> ScrollFrame {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return ScrollFrame {
                position: self.target,
                done: true,
            };
        }
        ScrollFrame {
            position: self.start + (self.target - self.start) * ease_in_out_cubic(progress),
            done: false,
        }
    }
}

/// Identifies one programmatic scroll for [`ScrollActivity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTicket(u64);

/// Shared in-progress signal for programmatic scrolling.
///
/// Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct ScrollActivity {
    generation: Rc<Cell<u64>>,
    active: Rc<Cell<bool>>,
}

impl ScrollActivity {
    /// Fresh, idle signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a new animation as running. Any earlier ticket becomes stale.
    pub fn begin(&self) -> ScrollTicket {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        self.active.set(true);
        ScrollTicket(next)
    }

    /// Whether any programmatic scroll is running.
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Whether `ticket` belongs to the most recent animation.
    pub fn is_current(&self, ticket: ScrollTicket) -> bool {
        self.generation.get() == ticket.0
    }

    /// End the animation owning `ticket`. Stale tickets are ignored so a
    /// superseded animation cannot clear its successor's flag.
    pub fn finish(&self, ticket: ScrollTicket) {
        if self.is_current(ticket) {
            self.active.set(false);
        }
    }
}
