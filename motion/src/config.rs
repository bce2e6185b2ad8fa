//! Configuration for page behaviors.
//!
//! Every field has a default matching the stock Pixify page, so a page only
//! needs to ship the values it changes:
//!
//! ```json
//! { "scroll": { "header_offset": 64 }, "log_level": "debug" }
//! ```

use serde::Deserialize;

use crate::error::Result;
use crate::reveal::StaggerGroup;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Console log level: `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Smooth anchor scrolling
    pub scroll: ScrollConfig,
    /// Navbar state and active link tracking
    pub nav: NavConfig,
    /// Fast-swipe transition suppression
    pub touch: TouchConfig,
    /// Deferred image marking
    pub lazy: LazyConfig,
    /// Entrance animations
    pub reveal: RevealConfig,
    /// Mobile navigation drawer
    pub menu: MenuConfig,
    /// Hero block entrance
    pub hero: HeroConfig,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            scroll: ScrollConfig::default(),
            nav: NavConfig::default(),
            touch: TouchConfig::default(),
            lazy: LazyConfig::default(),
            reveal: RevealConfig::default(),
            menu: MenuConfig::default(),
            hero: HeroConfig::default(),
        }
    }
}

/// Smooth scroll tunables
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Height reserved for the fixed navbar, subtracted from the target offset
    pub header_offset: f64,
    /// Upper bound for a single scroll animation
    pub max_duration_ms: f64,
    /// Animation time spent per pixel of travel
    pub ms_per_px: f64,
    /// Anchors that trigger smooth scrolling
    pub anchor_selector: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            max_duration_ms: 1000.0,
            ms_per_px: 0.5,
            anchor_selector: r##"a[href^="#"]"##.into(),
        }
    }
}

/// Navbar and section tracking
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Element that receives the `scrolled` marker
    pub navbar_selector: String,
    /// Links that receive the `active` marker
    pub link_selector: String,
    /// Sections considered for the active link
    pub section_selector: String,
    /// Scroll offset past which the navbar is marked scrolled
    pub scrolled_threshold: f64,
    /// How far above a section its range starts
    pub section_offset: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            navbar_selector: ".navbar".into(),
            link_selector: ".nav-menu a".into(),
            section_selector: "section[id]".into(),
            scrolled_threshold: 50.0,
            section_offset: 100.0,
        }
    }
}

/// Touch swipe handling
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TouchConfig {
    /// Minimum travel for a move to count as a scroll gesture
    pub gesture_threshold: f64,
    /// Travel beyond which the gesture is a fast scroll
    pub fast_threshold: f64,
    /// Delay before card transitions are restored
    pub restore_delay_ms: u32,
    /// Cards whose transitions are suppressed during fast scrolls
    pub card_selector: String,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            gesture_threshold: 10.0,
            fast_threshold: 50.0,
            restore_delay_ms: 150,
            card_selector: ".service-card, .portfolio-card, .testimonial-card".into(),
        }
    }
}

/// Deferred image loading
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LazyConfig {
    /// Images watched for viewport entry
    pub image_selector: String,
}

impl Default for LazyConfig {
    fn default() -> Self {
        Self {
            image_selector: r#"img[loading="lazy"]"#.into(),
        }
    }
}

/// Entrance animation observer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Blocks observed for entrance
    pub target_selector: String,
    /// Fraction of a block that must be visible
    pub threshold: f64,
    /// Pixels trimmed from the bottom of the viewport
    pub bottom_inset: f64,
    /// Descendant groups staggered once their block enters
    pub groups: Vec<StaggerGroup>,
}

const CARD_SELECTOR: &str =
    ".service-card, .portfolio-card, .tech-category, .feature-card, .testimonial-card, .pricing-card";
const STAT_SELECTOR: &str = ".testimonials-stats .stat-item";

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            target_selector: format!("{CARD_SELECTOR}, {STAT_SELECTOR}"),
            threshold: 0.1,
            bottom_inset: 50.0,
            groups: vec![
                StaggerGroup::new(CARD_SELECTOR, 150),
                StaggerGroup::new(STAT_SELECTOR, 200),
                StaggerGroup::new(".pricing-card .pricing-info, .custom-plan-card .custom-icon", 150),
                StaggerGroup::new(".custom-features .feature-item", 100),
            ],
        }
    }
}

impl RevealConfig {
    /// CSS margin string for the observer root, shrinking the bottom edge.
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", -self.bottom_inset)
    }
}

/// Mobile navigation elements
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Hamburger control
    pub toggle_selector: String,
    /// Collapsible menu container
    pub menu_selector: String,
    /// Links that close the menu when selected
    pub link_selector: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".nav-toggle".into(),
            menu_selector: ".nav-menu".into(),
            link_selector: ".nav-menu a".into(),
        }
    }
}

/// Hero entrance
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Hero block marked animated after load
    pub selector: String,
    /// Delay after installation
    pub delay_ms: u32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            selector: ".hero-content".into(),
            delay_ms: 300,
        }
    }
}

impl MotionConfig {
    /// Parse a JSON override document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse overrides if present, falling back to defaults on malformed input.
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        let Some(json) = json.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("[page-motion] ignoring config: {e}");
                Self::default()
            }
        }
    }
}
