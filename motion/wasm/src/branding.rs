//! Startup banner for developers who open the console.

use wasm_bindgen::JsValue;

const BANNER: &[(&str, &str)] = &[
    (
        "Pixify - Transforming brands, one pixel at a time",
        "color: #00A8FF; font-size: 16px; font-weight: bold;",
    ),
    (
        "Precision • Performance • Innovation",
        "color: #888888; font-size: 12px;",
    ),
];

/// Print the styled banner to the browser console.
pub fn print_console_banner() {
    for (text, style) in BANNER {
        web_sys::console::log_2(
            &JsValue::from_str(&format!("%c {text}")),
            &JsValue::from_str(style),
        );
    }
}
