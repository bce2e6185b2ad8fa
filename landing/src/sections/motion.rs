//! Installs page behaviors once the sections are in the DOM.

use leptos::prelude::*;
use page_motion::MotionConfig;

#[component]
#[allow(clippy::unused_unit)]
pub fn PageMotion() -> impl IntoView {
    Effect::new(move || {
        let config = MotionConfig::default();
        if let Err(e) = page_motion_wasm::install_with(&config) {
            tracing::error!("[pixify] page motion unavailable: {e}");
        }
    });

    view! {}
}
