//! Thin DOM helpers shared by the behaviors.
//!
//! Every host call that can throw is mapped into a [`MotionError`] so the
//! behaviors can use `?` and leave logging to the installer.

use page_motion::{MotionError, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

pub(crate) fn window() -> Result<Window> {
    web_sys::window().ok_or(MotionError::NoWindow)
}

pub(crate) fn document() -> Result<Document> {
    window()?.document().ok_or(MotionError::NoDocument)
}

fn invalid_selector(selector: &str, err: JsValue) -> MotionError {
    MotionError::InvalidSelector {
        selector: selector.to_string(),
        reason: format!("{err:?}"),
    }
}

fn elements<T: JsCast>(list: NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// All elements of type `T` matching `selector`, in document order.
pub(crate) fn select_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| invalid_selector(selector, e))?;
    Ok(elements(list))
}

/// Descendants of `root` matching `selector`.
pub(crate) fn select_within<T: JsCast>(root: &Element, selector: &str) -> Result<Vec<T>> {
    let list = root
        .query_selector_all(selector)
        .map_err(|e| invalid_selector(selector, e))?;
    Ok(elements(list))
}

/// First element matching `selector`, if any.
pub(crate) fn select_one<T: JsCast>(document: &Document, selector: &str) -> Result<Option<T>> {
    let found = document
        .query_selector(selector)
        .map_err(|e| invalid_selector(selector, e))?;
    Ok(found.and_then(|el| el.dyn_into::<T>().ok()))
}

pub(crate) fn mark(el: &Element, class: &str) -> Result<()> {
    el.class_list()
        .add_1(class)
        .map_err(|e| MotionError::js("classList.add", e))
}

pub(crate) fn unmark(el: &Element, class: &str) -> Result<()> {
    el.class_list()
        .remove_1(class)
        .map_err(|e| MotionError::js("classList.remove", e))
}

pub(crate) fn set_marker(el: &Element, class: &str, on: bool) -> Result<()> {
    if on { mark(el, class) } else { unmark(el, class) }
}

pub(crate) fn has_marker(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub(crate) fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<()> {
    el.style()
        .set_property(property, value)
        .map_err(|e| MotionError::js("style.setProperty", e))
}

/// Drop an inline style so the stylesheet value applies again.
pub(crate) fn clear_style(el: &HtmlElement, property: &str) -> Result<()> {
    el.style()
        .remove_property(property)
        .map(|_| ())
        .map_err(|e| MotionError::js("style.removeProperty", e))
}

/// Attach `handler` for the page lifetime.
pub(crate) fn listen<F>(target: &EventTarget, event: &str, passive: bool, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| MotionError::js("addEventListener", e))?;
    closure.forget(); // lives as long as the page
    Ok(())
}

/// Attach a handler that runs at most once and is released afterwards.
pub(crate) fn listen_once<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnOnce(Event) + 'static,
{
    let callback = Closure::once_into_js(handler);
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.unchecked_ref(),
            &options,
        )
        .map_err(|e| MotionError::js("addEventListener", e))
}

/// Run `f` after `delay_ms`. Returns the handle for [`cancel_timeout`].
pub(crate) fn set_timeout<F>(window: &Window, delay_ms: u32, f: F) -> Result<i32>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            i32::try_from(delay_ms).unwrap_or(i32::MAX),
        )
        .map_err(|e| MotionError::js("setTimeout", e))
}

pub(crate) fn cancel_timeout(window: &Window, handle: i32) {
    window.clear_timeout_with_handle(handle);
}

/// Schedule `f` for the next display frame; it receives the frame timestamp.
pub(crate) fn request_frame<F>(window: &Window, f: F) -> Result<i32>
where
    F: FnOnce(f64) + 'static,
{
    let callback = Closure::once_into_js(f);
    window
        .request_animation_frame(callback.unchecked_ref())
        .map_err(|e| MotionError::js("requestAnimationFrame", e))
}

/// High resolution timestamp on the same clock as frame callbacks.
pub(crate) fn now(window: &Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or_default()
}

/// Whether the window exposes a global named `name`.
pub(crate) fn supports(window: &Window, name: &str) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str(name)).unwrap_or(false)
}

pub(crate) fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or_default()
}
