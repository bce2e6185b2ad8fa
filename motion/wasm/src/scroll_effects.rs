//! Navbar `scrolled` marker and active navigation link.

use page_motion::markers::{ACTIVE, SCROLLED};
use page_motion::{
    FrameGate, NavConfig, Result, ScrollActivity, SectionBounds, current_section,
    link_targets_section, nav_scrolled,
};
use tracing::{debug, warn};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom;

/// Recomputes scroll-dependent markers at most once per frame.
#[derive(Debug, Clone)]
pub struct ScrollEffects {
    config: NavConfig,
    activity: ScrollActivity,
    gate: FrameGate,
}

impl ScrollEffects {
    /// Coordinator that stays quiet while `activity` reports a programmatic scroll.
    pub fn new(config: &NavConfig, activity: ScrollActivity) -> Self {
        Self {
            config: config.clone(),
            activity,
            gate: FrameGate::new(),
        }
    }

    /// Listen for scrolls on `window` (passive).
    pub fn attach(&self, window: &Window) -> Result<()> {
        let this = self.clone();
        let win = window.clone();
        dom::listen(window, "scroll", true, move |_| {
            if !this.gate.try_schedule() {
                return;
            }
            let frame = this.clone();
            let queued = dom::request_frame(&win, move |_| {
                if let Err(e) = frame.update() {
                    warn!("[page-motion][nav] {e}");
                }
                frame.gate.release();
            });
            if let Err(e) = queued {
                warn!("[page-motion][nav] {e}");
                this.gate.release();
            }
        })
    }

    /// Apply both markers for the current scroll offset.
    pub fn update(&self) -> Result<()> {
        let window = dom::window()?;
        let document = dom::document()?;
        let scroll_y = dom::scroll_y(&window);

        if let Some(navbar) = dom::select_one::<Element>(&document, &self.config.navbar_selector)? {
            dom::set_marker(
                &navbar,
                SCROLLED,
                nav_scrolled(scroll_y, self.config.scrolled_threshold),
            )?;
        }

        if self.activity.is_active() {
            return Ok(());
        }
        self.update_active_link(&document, scroll_y)
    }

    /// Mark the link whose section owns `scroll_y`; clear all the others.
    pub fn update_active_link(&self, document: &Document, scroll_y: f64) -> Result<()> {
        let sections: Vec<SectionBounds> =
            dom::select_all::<HtmlElement>(document, &self.config.section_selector)?
                .iter()
                .map(|s| {
                    SectionBounds::new(
                        s.id(),
                        f64::from(s.offset_top()),
                        f64::from(s.client_height()),
                    )
                })
                .collect();
        let current = current_section(&sections, scroll_y, self.config.section_offset);

        let links: Vec<Element> = dom::select_all(document, &self.config.link_selector)?;
        for link in &links {
            dom::unmark(link, ACTIVE)?;
            let href = link.get_attribute("href").unwrap_or_default();
            if current.is_some_and(|id| link_targets_section(&href, id)) {
                dom::mark(link, ACTIVE)?;
            }
        }
        if let Some(id) = current {
            debug!("[page-motion][nav] current section #{id}");
        }
        Ok(())
    }
}
