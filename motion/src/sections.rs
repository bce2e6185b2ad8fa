//! Scroll-driven navbar state and active-section tracking.

use std::cell::Cell;
use std::rc::Rc;

/// Vertical extent of an identified page section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    /// Section identifier, matched against `#id` link targets
    pub id: String,
    /// Document-relative top edge
    pub top: f64,
    /// Rendered height
    pub height: f64,
}

impl SectionBounds {
    /// Describe a section.
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Whether the navbar should carry the `scrolled` marker.
pub fn nav_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Pick the section owning `scroll_y`.
///
/// Each section's range starts `offset` pixels above its top edge and spans its
/// height. Sections are visited in document order and the last match wins.
pub fn current_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| {
            let top = s.top - offset;
            scroll_y >= top && scroll_y < top + s.height
        })
        .map(|s| s.id.as_str())
}

/// Whether a navigation link `href` points at section `id`.
pub fn link_targets_section(href: &str, id: &str) -> bool {
    href.strip_prefix('#') == Some(id)
}

/// Coalesces bursts of scroll events into one update per frame.
///
/// Clones share the same gate.
#[derive(Debug, Clone, Default)]
pub struct FrameGate {
    pending: Rc<Cell<bool>>,
}

impl FrameGate {
    /// Open gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next frame. Returns `false` if an update is already queued.
    pub fn try_schedule(&self) -> bool {
        !self.pending.replace(true)
    }

    /// Reopen the gate once the queued update has run.
    pub fn release(&self) {
        self.pending.set(false);
    }
}
