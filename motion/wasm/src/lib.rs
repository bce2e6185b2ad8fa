//! Browser bindings for page-motion.
//!
//! Attaches the landing page behaviors to the live document:
//!
//! - [`SmoothScroll`] - eased scrolling for `#fragment` links
//! - [`ScrollEffects`] - navbar `scrolled` marker and active link
//! - [`TouchOptimizer`] - fast-swipe transition suppression
//! - [`LazyImages`] - `loaded` marker for deferred images
//! - [`RevealObserver`] - staggered entrance animations
//! - [`MobileNav`] - hamburger menu
//!
//! Each behavior is installed independently; one that cannot attach is logged
//! and skipped while the others keep working. Listeners live for the page
//! lifetime, so [`Motion`] needs no teardown.
//!
//! From JavaScript:
//!
//! ```js
//! import init, { setPanicHook, install } from "./page_motion_wasm.js";
//! await init();
//! setPanicHook();
//! install(JSON.stringify({ scroll: { header_offset: 64 } }));
//! ```

pub mod branding;
mod dom;
pub mod lazy_images;
pub mod logging;
pub mod mobile_nav;
pub mod reveal;
pub mod scroll_effects;
pub mod smooth_scroll;
pub mod touch;

use page_motion::{MotionConfig, MotionError, Result, ScrollActivity};
use tracing::{info, warn};
use wasm_bindgen::prelude::*;

pub use lazy_images::LazyImages;
pub use mobile_nav::MobileNav;
pub use reveal::RevealObserver;
pub use scroll_effects::ScrollEffects;
pub use smooth_scroll::SmoothScroll;
pub use touch::TouchOptimizer;

/// Element id holding optional JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "page-motion-config";

/// Installed behaviors. Missing page parts leave their slot empty.
#[derive(Debug)]
pub struct Motion {
    /// Anchor scrolling controller
    pub smooth_scroll: SmoothScroll,
    /// Navbar and active link coordinator
    pub scroll_effects: ScrollEffects,
    /// Present on touch-capable devices
    pub touch: Option<TouchOptimizer>,
    /// Deferred image watcher
    pub lazy_images: LazyImages,
    /// Entrance animation observer
    pub reveal: RevealObserver,
    /// Present when the page has a toggle and a menu
    pub mobile_nav: Option<MobileNav>,
}

impl Motion {
    /// Programmatic scroll signal shared by the controller and the coordinator.
    pub fn scroll_activity(&self) -> ScrollActivity {
        self.smooth_scroll.activity()
    }
}

/// Set the panic hook so Rust panics show up in the browser console.
#[wasm_bindgen(js_name = setPanicHook)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Install every behavior. `config_json` overrides the defaults.
#[wasm_bindgen]
pub fn install(config_json: Option<String>) -> std::result::Result<(), JsValue> {
    let config = match config_json.as_deref() {
        Some(json) => MotionConfig::from_json(json).map_err(to_js)?,
        None => MotionConfig::default(),
    };
    install_with(&config).map(|_| ()).map_err(to_js)
}

/// Install every behavior, reading overrides from
/// `<script type="application/json" id="page-motion-config">` if present.
#[wasm_bindgen(js_name = installFromDocument)]
pub fn install_from_document() -> std::result::Result<(), JsValue> {
    let json = dom::document()
        .map_err(to_js)?
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let config = MotionConfig::from_json_or_default(json.as_deref());
    install_with(&config).map(|_| ()).map_err(to_js)
}

/// Install every behavior from a parsed configuration.
///
/// Fails only when there is no window or document; individual behaviors that
/// cannot attach are logged and skipped.
pub fn install_with(config: &MotionConfig) -> Result<Motion> {
    logging::init(&config.log_level);
    let window = dom::window()?;
    let document = dom::document()?;

    let smooth_scroll = SmoothScroll::new(&config.scroll);
    if let Some(anchors) = report("smooth scroll", smooth_scroll.attach(&document)) {
        info!("[page-motion] smooth scroll on {anchors} anchors");
    }

    let scroll_effects = ScrollEffects::new(&config.nav, smooth_scroll.activity());
    report("scroll effects", scroll_effects.attach(&window));

    let touch = TouchOptimizer::new(&config.touch);
    let touch = match report("touch", touch.attach(&window, &document)) {
        Some(true) => Some(touch),
        _ => None,
    };

    let lazy_images = LazyImages::new(&config.lazy);
    report("lazy images", lazy_images.attach(&window, &document));

    let reveal = RevealObserver::new(&config.reveal);
    report("reveal", reveal.attach(&window, &document));

    let mobile_nav = report("mobile nav", MobileNav::find(&document, &config.menu)).flatten();
    let mobile_nav = mobile_nav.filter(|nav| report("mobile nav", nav.attach(&document)).is_some());

    report("hero", crate::reveal::animate_hero(&window, &document, &config.hero));
    branding::print_console_banner();

    Ok(Motion {
        smooth_scroll,
        scroll_effects,
        touch,
        lazy_images,
        reveal,
        mobile_nav,
    })
}

fn report<T>(component: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("[page-motion] {component} disabled: {e}");
            None
        }
    }
}

fn to_js(err: MotionError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
