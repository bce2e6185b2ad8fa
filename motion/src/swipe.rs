//! Touch swipe classification.
//!
//! Travel is measured from the touch-start position, not from the previous
//! move event, so a slow but long drag eventually counts as fast.

use crate::config::TouchConfig;

/// How a touch movement should be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeKind {
    /// Too short to be a scroll gesture
    Negligible,
    /// Ordinary scroll gesture
    Scroll,
    /// Fast scroll; card transitions should be dropped
    Fast,
}

/// Tracks the vertical start of the current touch.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start_y: f64,
    gesture_threshold: f64,
    fast_threshold: f64,
}

impl SwipeTracker {
    /// Tracker with thresholds from `config`.
    pub fn new(config: &TouchConfig) -> Self {
        Self {
            start_y: 0.0,
            gesture_threshold: config.gesture_threshold,
            fast_threshold: config.fast_threshold,
        }
    }

    /// Record the screen Y of a new touch.
    pub fn start(&mut self, screen_y: f64) {
        self.start_y = screen_y;
    }

    /// Signed travel since touch start; positive when the finger moves up.
    pub fn delta(&self, screen_y: f64) -> f64 {
        self.start_y - screen_y
    }

    /// Classify a move to `screen_y`.
    pub fn movement(&self, screen_y: f64) -> SwipeKind {
        let travel = self.delta(screen_y).abs();
        if travel <= self.gesture_threshold {
            SwipeKind::Negligible
        } else if travel > self.fast_threshold {
            SwipeKind::Fast
        } else {
            SwipeKind::Scroll
        }
    }
}

/// Holds at most one pending timer handle.
///
/// Arming hands back the previous handle so the caller can cancel it.
#[derive(Debug)]
pub struct PendingTimer<H> {
    handle: Option<H>,
}

impl<H> Default for PendingTimer<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> PendingTimer<H> {
    /// Empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handle`, returning the one it replaces.
    #[must_use = "the replaced timer must be cancelled"]
    pub fn arm(&mut self, handle: H) -> Option<H> {
        self.handle.replace(handle)
    }

    /// Remove the pending handle, typically when it fires.
    pub fn take(&mut self) -> Option<H> {
        self.handle.take()
    }

    /// Whether a timer is pending.
    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }
}
