//! Marks deferred images `loaded` once they are visible and decoded.

use js_sys::Array;
use page_motion::markers::LOADED;
use page_motion::{LazyConfig, LazyImageAction, MotionError, Result};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry, Window};

use crate::dom;

/// Fire-once viewport watch over `img[loading="lazy"]`.
#[derive(Debug, Clone)]
pub struct LazyImages {
    config: LazyConfig,
}

impl LazyImages {
    /// Loader for images matching `config.image_selector`.
    pub fn new(config: &LazyConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Watch every flagged image. Returns how many were found.
    pub fn attach(&self, window: &Window, document: &Document) -> Result<usize> {
        self.attach_to(document, dom::supports(window, "IntersectionObserver"))
    }

    /// Like [`attach`](Self::attach) with an explicit observer capability.
    /// Without one, every image is marked immediately.
    pub fn attach_to(&self, document: &Document, observer_available: bool) -> Result<usize> {
        let images: Vec<HtmlImageElement> = dom::select_all(document, &self.config.image_selector)?;
        if !observer_available {
            debug!("[page-motion][lazy] no IntersectionObserver, marking {} images", images.len());
            for img in &images {
                dom::mark(img, LOADED)?;
            }
            return Ok(images.len());
        }

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    if let Ok(img) = target.dyn_into::<HtmlImageElement>() {
                        if let Err(e) = reveal(&img) {
                            warn!("[page-motion][lazy] {e}");
                        }
                    }
                }
            },
        );
        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|e| MotionError::js("IntersectionObserver", e))?;
        callback.forget();

        for img in &images {
            observer.observe(img);
        }
        Ok(images.len())
    }
}

fn reveal(img: &HtmlImageElement) -> Result<()> {
    match LazyImageAction::for_image(img.complete()) {
        LazyImageAction::MarkLoaded => dom::mark(img, LOADED),
        LazyImageAction::AwaitLoad => {
            let loaded = img.clone();
            dom::listen_once(img, "load", move |_| {
                if let Err(e) = dom::mark(&loaded, LOADED) {
                    warn!("[page-motion][lazy] {e}");
                }
            })
        }
    }
}
