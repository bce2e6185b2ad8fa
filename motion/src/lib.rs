//! # page-motion
//!
//! Host-independent motion logic for static landing pages.
//!
//! The browser bindings in `page-motion-wasm` wire DOM events to the small
//! decisions made here: how far and how fast to scroll, which section owns the
//! navigation highlight, whether a swipe is fast enough to drop card
//! transitions, when each staggered reveal fires, and what the hamburger glyph
//! looks like. Nothing in this crate touches the DOM, so every rule is testable
//! on the host.
//!
//! ## Quick Start
//!
//! ```rust
//! use page_motion::{scroll_duration, ScrollAnimation, MotionConfig};
//!
//! let config = MotionConfig::default();
//! let start = 0.0;
//! let target = 2000.0 - config.scroll.header_offset;
//! let duration = scroll_duration(target - start, &config.scroll);
//!
//! let animation = ScrollAnimation::new(start, target, duration, 0.0);
//! let frame = animation.sample(duration);
//! assert!(frame.done);
//! assert_eq!(frame.position, target);
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - Tunables and selectors, deserializable from JSON
//! - [`easing`] - Cubic ease curve and distance-based duration
//! - [`scroll`] - Programmatic scroll animation and the in-progress signal
//! - [`sections`] - Navbar state and active-section selection
//! - [`swipe`] - Touch swipe classification and the single pending timer
//! - [`reveal`] - Lazy image decisions and staggered entrance schedules
//! - [`menu`] - Mobile navigation state machine and hamburger glyph
//! - [`markers`] - Marker class names shared with the stylesheet

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod easing;
pub mod error;
pub mod markers;
pub mod menu;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod swipe;

pub use config::{
    HeroConfig, LazyConfig, MenuConfig, MotionConfig, NavConfig, RevealConfig, ScrollConfig,
    TouchConfig,
};
pub use easing::{ease_in_out_cubic, scroll_duration};
pub use error::{MotionError, Result};
pub use menu::{BarStyle, MenuEvent, MenuState};
pub use reveal::{LazyImageAction, StaggerGroup, stagger_delays};
pub use scroll::{ScrollActivity, ScrollAnimation, ScrollFrame, ScrollTicket};
pub use sections::{FrameGate, SectionBounds, current_section, link_targets_section, nav_scrolled};
pub use swipe::{PendingTimer, SwipeKind, SwipeTracker};
