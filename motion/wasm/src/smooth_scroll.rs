//! Eased scrolling to in-page anchors.

use page_motion::{
    Result, ScrollActivity, ScrollAnimation, ScrollConfig, ScrollTicket, scroll_duration,
};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom;

/// Intercepts `#fragment` links and animates the viewport to their target.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    config: ScrollConfig,
    activity: ScrollActivity,
}

impl SmoothScroll {
    /// Controller with its own idle [`ScrollActivity`].
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            config: config.clone(),
            activity: ScrollActivity::new(),
        }
    }

    /// Handle on the in-progress signal, shared with observers.
    pub fn activity(&self) -> ScrollActivity {
        self.activity.clone()
    }

    /// Hook every matching anchor. Returns how many were found.
    pub fn attach(&self, document: &Document) -> Result<usize> {
        let anchors: Vec<Element> = dom::select_all(document, &self.config.anchor_selector)?;
        for anchor in &anchors {
            let this = self.clone();
            let link = anchor.clone();
            dom::listen(anchor, "click", false, move |event| {
                event.prevent_default();
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                if let Err(e) = this.scroll_to_fragment(&href) {
                    warn!("[page-motion][scroll] {href}: {e}");
                }
            })?;
        }
        Ok(anchors.len())
    }

    /// Scroll to the element named by `#id`. Returns `false` when nothing matches.
    pub fn scroll_to_fragment(&self, href: &str) -> Result<bool> {
        let id = href.strip_prefix('#').unwrap_or(href);
        if id.is_empty() {
            return Ok(false);
        }
        let Some(target) = dom::document()?.get_element_by_id(id) else {
            debug!("[page-motion][scroll] no element for #{id}");
            return Ok(false);
        };
        self.scroll_to_element(&target)?;
        Ok(true)
    }

    /// Animate to `target`, leaving room for the fixed header.
    pub fn scroll_to_element(&self, target: &Element) -> Result<ScrollTicket> {
        let window = dom::window()?;
        let start = dom::scroll_y(&window);
        let destination = document_top(&window, target) - self.config.header_offset;
        let duration = scroll_duration(destination - start, &self.config);
        let animation = ScrollAnimation::new(start, destination, duration, dom::now(&window));

        let ticket = self.activity.begin();
        debug!("[page-motion][scroll] {start:.0} -> {destination:.0} over {duration:.0}ms");
        if let Err(e) = step(&window, animation, self.activity.clone(), ticket) {
            self.activity.finish(ticket);
            return Err(e);
        }
        Ok(ticket)
    }
}

fn document_top(window: &Window, target: &Element) -> f64 {
    match target.dyn_ref::<HtmlElement>() {
        Some(el) => f64::from(el.offset_top()),
        None => target.get_bounding_client_rect().top() + dom::scroll_y(window),
    }
}

/// Queue the next frame of `animation`. Frames of a superseded animation stop
/// without touching the viewport.
fn step(
    window: &Window,
    animation: ScrollAnimation,
    activity: ScrollActivity,
    ticket: ScrollTicket,
) -> Result<()> {
    let win = window.clone();
    dom::request_frame(window, move |timestamp| {
        if !activity.is_current(ticket) {
            return;
        }
        let frame = animation.sample(timestamp);
        win.scroll_to_with_x_and_y(0.0, frame.position);
        if frame.done {
            activity.finish(ticket);
            return;
        }
        if let Err(e) = step(&win, animation, activity.clone(), ticket) {
            warn!("[page-motion][scroll] animation aborted: {e}");
            activity.finish(ticket);
        }
    })
    .map(|_| ())
}
