//! Drops card transitions during fast swipes on touch devices.

use std::cell::RefCell;
use std::rc::Rc;

use page_motion::{PendingTimer, Result, SwipeKind, SwipeTracker, TouchConfig};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, TouchEvent, Window};

use crate::dom;

/// Swipe watcher owning the single pending restoration timer.
#[derive(Debug, Clone)]
pub struct TouchOptimizer {
    config: TouchConfig,
    tracker: Rc<RefCell<SwipeTracker>>,
    restore: Rc<RefCell<PendingTimer<i32>>>,
}

impl TouchOptimizer {
    /// Optimizer with thresholds from `config`.
    pub fn new(config: &TouchConfig) -> Self {
        Self {
            config: config.clone(),
            tracker: Rc::new(RefCell::new(SwipeTracker::new(config))),
            restore: Rc::new(RefCell::new(PendingTimer::new())),
        }
    }

    /// Hook touch events if the device supports them. Returns whether it did.
    pub fn attach(&self, window: &Window, document: &Document) -> Result<bool> {
        if !dom::supports(window, "ontouchstart") {
            return Ok(false);
        }
        if let Some(body) = document.body() {
            dom::set_style(&body, "touch-action", "pan-y")?;
        }

        let tracker = Rc::clone(&self.tracker);
        dom::listen(document, "touchstart", true, move |event| {
            if let Some(y) = touch_screen_y(&event) {
                tracker.borrow_mut().start(y);
            }
        })?;

        let this = self.clone();
        dom::listen(document, "touchmove", true, move |event| {
            let Some(y) = touch_screen_y(&event) else {
                return;
            };
            let kind = this.tracker.borrow().movement(y);
            if kind == SwipeKind::Fast {
                if let Err(e) = this.suppress_transitions() {
                    warn!("[page-motion][touch] {e}");
                }
            }
        })?;
        Ok(true)
    }

    /// Strip card transitions now and restore them after the configured delay.
    /// A pending restoration is cancelled and replaced.
    pub fn suppress_transitions(&self) -> Result<()> {
        let window = dom::window()?;
        let document = dom::document()?;
        let cards: Vec<HtmlElement> = dom::select_all(&document, &self.config.card_selector)?;
        for card in &cards {
            dom::set_style(card, "transition", "none")?;
        }

        let slot = Rc::clone(&self.restore);
        let handle = dom::set_timeout(&window, self.config.restore_delay_ms, move || {
            slot.borrow_mut().take();
            for card in &cards {
                if let Err(e) = dom::clear_style(card, "transition") {
                    warn!("[page-motion][touch] {e}");
                }
            }
        })?;

        let replaced = self.restore.borrow_mut().arm(handle);
        if let Some(previous) = replaced {
            dom::cancel_timeout(&window, previous);
            debug!("[page-motion][touch] restoration re-armed");
        }
        Ok(())
    }

    /// Whether a restoration is still pending.
    pub fn restore_pending(&self) -> bool {
        self.restore.borrow().is_pending()
    }
}

fn touch_screen_y(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().item(0)?;
    Some(f64::from(touch.screen_y()))
}
