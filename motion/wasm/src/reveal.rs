//! Entrance animations for content blocks and the hero.

use js_sys::Array;
use page_motion::markers::ANIMATED;
use page_motion::{HeroConfig, MotionError, Result, RevealConfig, StaggerGroup};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

use crate::dom;

/// Marks blocks `animated` on first sight and staggers their children.
#[derive(Debug, Clone)]
pub struct RevealObserver {
    config: RevealConfig,
}

impl RevealObserver {
    /// Observer for `config.target_selector`.
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Observe every target block. Returns how many were found.
    ///
    /// Without `IntersectionObserver` the blocks are revealed right away so
    /// nothing stays hidden.
    pub fn attach(&self, window: &Window, document: &Document) -> Result<usize> {
        let targets: Vec<Element> = dom::select_all(document, &self.config.target_selector)?;
        if !dom::supports(window, "IntersectionObserver") {
            debug!("[page-motion][reveal] no IntersectionObserver, revealing all");
            for target in &targets {
                self.reveal(window, target)?;
            }
            return Ok(targets.len());
        }

        let this = self.clone();
        let win = window.clone();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Err(e) = this.reveal(&win, &target) {
                        warn!("[page-motion][reveal] {e}");
                    }
                    observer.unobserve(&target);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(self.config.threshold));
        options.set_root_margin(&self.config.root_margin());
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| MotionError::js("IntersectionObserver", e))?;
        callback.forget();

        for target in &targets {
            observer.observe(target);
        }
        Ok(targets.len())
    }

    /// Mark `block` and schedule its staggered groups.
    pub fn reveal(&self, window: &Window, block: &Element) -> Result<()> {
        dom::mark(block, ANIMATED)?;
        for group in &self.config.groups {
            // one bad group must not hold back the others
            if let Err(e) = stagger(window, block, group) {
                warn!("[page-motion][reveal] {}: {e}", group.selector);
            }
        }
        Ok(())
    }
}

fn stagger(window: &Window, block: &Element, group: &StaggerGroup) -> Result<()> {
    let items: Vec<Element> = dom::select_within(block, &group.selector)?;
    let delays = group.delays(items.len());
    for (item, delay) in items.into_iter().zip(delays) {
        dom::set_timeout(window, delay, move || {
            if let Err(e) = dom::mark(&item, ANIMATED) {
                warn!("[page-motion][reveal] {e}");
            }
        })?;
    }
    Ok(())
}

/// Mark the hero block `animated` after the configured delay.
/// Returns `false` when the page has no hero.
pub fn animate_hero(window: &Window, document: &Document, config: &HeroConfig) -> Result<bool> {
    let Some(hero) = dom::select_one::<Element>(document, &config.selector)? else {
        return Ok(false);
    };
    dom::set_timeout(window, config.delay_ms, move || {
        if let Err(e) = dom::mark(&hero, ANIMATED) {
            warn!("[page-motion][hero] {e}");
        }
    })?;
    Ok(true)
}
