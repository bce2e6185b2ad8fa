//! Browser tests: `wasm-pack test --headless --chrome motion/wasm`

#![cfg(target_arch = "wasm32")]

use page_motion::markers::{ACTIVE, ANIMATED, LOADED, SCROLLED};
use page_motion::{
    HeroConfig, LazyConfig, MenuConfig, MenuEvent, MenuState, NavConfig, RevealConfig,
    ScrollActivity, ScrollConfig, StaggerGroup, TouchConfig,
};
use page_motion_wasm::reveal::animate_hero;
use page_motion_wasm::{
    LazyImages, MobileNav, RevealObserver, ScrollEffects, SmoothScroll, TouchOptimizer,
    install_from_document,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, HtmlElement, Touch, TouchEvent, TouchEventInit, TouchInit, Window,
};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().expect("window")
}

fn document() -> Document {
    window().document().expect("document")
}

fn fixture(html: &str) -> Element {
    let doc = document();
    let root = doc.create_element("div").expect("div");
    root.set_inner_html(html);
    doc.body().expect("body").append_child(&root).expect("append");
    root
}

fn by_id(id: &str) -> HtmlElement {
    document()
        .get_element_by_id(id)
        .expect("element")
        .dyn_into::<HtmlElement>()
        .expect("html element")
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .expect("setTimeout");
    });
    JsFuture::from(promise).await.expect("sleep");
}

fn has(id: &str, class: &str) -> bool {
    by_id(id).class_list().contains(class)
}

fn touch_event(kind: &str, screen_y: i32) -> TouchEvent {
    let init = TouchInit::new(0, &document());
    init.set_screen_y(screen_y);
    let touches = js_sys::Array::of1(&Touch::new(&init).expect("touch"));
    let event_init = TouchEventInit::new();
    event_init.set_touches(&touches);
    event_init.set_changed_touches(&touches);
    TouchEvent::new_with_event_init_dict(kind, &event_init).expect("touch event")
}

/// Push a fixed element out of the viewport and back.
async fn leave_and_return(id: &str, top: &str) {
    let el = by_id(id);
    el.style().set_property("top", "-2000px").expect("style");
    sleep(200).await;
    el.style().set_property("top", top).expect("style");
    sleep(200).await;
}

const PIXEL: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='10' height='10'/%3E";

#[wasm_bindgen_test]
fn lazy_images_marked_synchronously_without_observer() {
    let root = fixture(r#"<img id="lazy-1" loading="lazy"><img id="eager-1">"#);
    let found = LazyImages::new(&LazyConfig::default())
        .attach_to(&document(), false)
        .expect("attach");
    assert!(found >= 1);
    assert!(by_id("lazy-1").class_list().contains(LOADED));
    assert!(!by_id("eager-1").class_list().contains(LOADED));
    root.remove();
}

#[wasm_bindgen_test]
fn navbar_scrolled_marker_follows_threshold() {
    let root = fixture(r#"<nav class="navbar" id="nav-1"></nav><div style="height:5000px"></div>"#);
    let effects = ScrollEffects::new(&NavConfig::default(), ScrollActivity::new());
    let win = window();

    win.scroll_to_with_x_and_y(0.0, 51.0);
    effects.update().expect("update");
    assert!(by_id("nav-1").class_list().contains(SCROLLED));

    win.scroll_to_with_x_and_y(0.0, 49.0);
    effects.update().expect("update");
    assert!(!by_id("nav-1").class_list().contains(SCROLLED));

    win.scroll_to_with_x_and_y(0.0, 0.0);
    root.remove();
}

#[wasm_bindgen_test]
fn only_current_section_link_is_active() {
    let root = fixture(
        r##"<ul class="nav-menu">
             <li><a id="link-a" href="#sec-a" class="active">A</a></li>
             <li><a id="link-b" href="#sec-b">B</a></li>
             <li><a id="link-c" href="#sec-c">C</a></li>
           </ul>
           <section id="sec-a" style="height:500px;margin:0;padding:0"></section>
           <section id="sec-b" style="height:500px;margin:0;padding:0"></section>
           <section id="sec-c" style="height:500px;margin:0;padding:0"></section>"##,
    );
    let effects = ScrollEffects::new(&NavConfig::default(), ScrollActivity::new());
    let y = f64::from(by_id("sec-b").offset_top()) + 10.0;
    effects.update_active_link(&document(), y).expect("update");

    assert!(!by_id("link-a").class_list().contains(ACTIVE));
    assert!(by_id("link-b").class_list().contains(ACTIVE));
    assert!(!by_id("link-c").class_list().contains(ACTIVE));
    root.remove();
}

#[wasm_bindgen_test]
fn active_link_untouched_while_programmatic_scroll_runs() {
    let root = fixture(
        r##"<ul class="nav-menu"><li><a id="link-x" href="#sec-x" class="active">X</a></li></ul>
           <section id="sec-x" style="height:10px"></section>"##,
    );
    let activity = ScrollActivity::new();
    let _ticket = activity.begin();
    let effects = ScrollEffects::new(&NavConfig::default(), activity);
    effects.update().expect("update");
    assert!(by_id("link-x").class_list().contains(ACTIVE));
    root.remove();
}

#[wasm_bindgen_test]
fn mobile_menu_double_toggle_restores_glyph() {
    let root = fixture(
        r##"<button class="nav-toggle" id="toggle-1"><span id="bar-1"></span><span id="bar-2"></span><span id="bar-3"></span></button>
           <ul class="nav-menu" id="menu-1"><li><a href="#x">X</a></li></ul>"##,
    );
    let nav = MobileNav::find(&document(), &MenuConfig::default())
        .expect("find")
        .expect("nav present");

    assert_eq!(nav.dispatch(MenuEvent::ToggleClick).expect("open"), MenuState::Open);
    assert!(by_id("menu-1").class_list().contains(ACTIVE));
    assert_eq!(
        by_id("bar-1").style().get_property_value("transform").expect("style"),
        "rotate(45deg) translateY(8px)"
    );
    assert_eq!(by_id("bar-2").style().get_property_value("opacity").expect("style"), "0");

    assert_eq!(nav.dispatch(MenuEvent::ToggleClick).expect("close"), MenuState::Closed);
    let closed: Vec<String> = ["bar-1", "bar-2", "bar-3"]
        .iter()
        .map(|id| by_id(id).style().css_text())
        .collect();

    nav.dispatch(MenuEvent::ToggleClick).expect("open");
    nav.dispatch(MenuEvent::ToggleClick).expect("close");
    let again: Vec<String> = ["bar-1", "bar-2", "bar-3"]
        .iter()
        .map(|id| by_id(id).style().css_text())
        .collect();

    assert_eq!(closed, again);
    assert!(!by_id("menu-1").class_list().contains(ACTIVE));
    root.remove();
}

#[wasm_bindgen_test]
fn mobile_menu_closes_on_outside_click() {
    let root = fixture(
        r##"<button class="nav-toggle" id="toggle-2"><span></span><span></span><span></span></button>
           <ul class="nav-menu" id="menu-2"><li><a id="menu-link-2" href="#nowhere">X</a></li></ul>
           <p id="outside-2">elsewhere</p>"##,
    );
    let nav = MobileNav::find(&document(), &MenuConfig::default())
        .expect("find")
        .expect("nav present");
    nav.attach(&document()).expect("attach");

    by_id("toggle-2").click();
    assert_eq!(nav.state(), MenuState::Open);

    by_id("outside-2").click();
    assert_eq!(nav.state(), MenuState::Closed);

    by_id("toggle-2").click();
    by_id("menu-link-2").click();
    assert_eq!(nav.state(), MenuState::Closed);
    root.remove();
}

#[wasm_bindgen_test]
fn mobile_menu_absent_is_noop() {
    let config = MenuConfig {
        toggle_selector: ".no-such-toggle".into(),
        ..MenuConfig::default()
    };
    assert!(MobileNav::find(&document(), &config).expect("find").is_none());
}

#[wasm_bindgen_test]
async fn fast_swipe_suppresses_then_restores_transitions() {
    let root = fixture(r#"<div class="service-card" id="card-1" style="transition: transform 0.3s"></div>"#);
    let optimizer = TouchOptimizer::new(&TouchConfig::default());

    optimizer.suppress_transitions().expect("suppress");
    assert_eq!(by_id("card-1").style().get_property_value("transition").expect("style"), "none");
    assert!(optimizer.restore_pending());

    sleep(100).await;
    optimizer.suppress_transitions().expect("re-arm");
    sleep(100).await;
    // first timer would have fired by now; the re-armed one has not
    assert_eq!(by_id("card-1").style().get_property_value("transition").expect("style"), "none");

    sleep(150).await;
    assert_eq!(by_id("card-1").style().get_property_value("transition").expect("style"), "");
    assert!(!optimizer.restore_pending());
    root.remove();
}

#[wasm_bindgen_test]
async fn reveal_staggers_children() {
    let root = fixture(
        r#"<div id="block-1" class="pricing-card">
             <div class="pricing-info" id="info-1"></div>
             <div class="pricing-info" id="info-2"></div>
           </div>"#,
    );
    let config = RevealConfig {
        groups: vec![StaggerGroup::new(".pricing-info", 300)],
        ..RevealConfig::default()
    };
    let block = document().get_element_by_id("block-1").expect("block");
    RevealObserver::new(&config).reveal(&window(), &block).expect("reveal");
    assert!(block.class_list().contains(ANIMATED));

    sleep(100).await;
    assert!(by_id("info-1").class_list().contains(ANIMATED));
    assert!(!by_id("info-2").class_list().contains(ANIMATED));

    sleep(350).await;
    assert!(by_id("info-2").class_list().contains(ANIMATED));
    root.remove();
}

#[wasm_bindgen_test]
async fn smooth_scroll_resolves_fragments() {
    let root = fixture(r#"<div style="height:3000px"></div><section id="far-target" style="height:800px"></section>"#);
    let controller = SmoothScroll::new(&ScrollConfig::default());
    let activity = controller.activity();

    assert!(!controller.scroll_to_fragment("#does-not-exist").expect("lookup"));
    assert!(!controller.scroll_to_fragment("#").expect("lookup"));
    assert!(!activity.is_active());

    assert!(controller.scroll_to_fragment("#far-target").expect("scroll"));
    assert!(activity.is_active());

    sleep(1300).await;
    assert!(!activity.is_active());

    window().scroll_to_with_x_and_y(0.0, 0.0);
    root.remove();
}

#[wasm_bindgen_test]
async fn lazy_images_marked_once_on_viewport_entry() {
    let root = fixture(&format!(
        r#"<img id="lazy-in" class="lazy-probe" loading="lazy" src="{PIXEL}"
                style="position:fixed;top:0;left:0;width:10px;height:10px">
           <img id="lazy-out" class="lazy-probe" loading="lazy" src="{PIXEL}"
                style="position:fixed;top:-2000px;left:0;width:10px;height:10px">"#
    ));
    let config = LazyConfig {
        image_selector: "img.lazy-probe".into(),
    };
    let found = LazyImages::new(&config)
        .attach_to(&document(), true)
        .expect("attach");
    assert_eq!(found, 2);

    sleep(300).await;
    assert!(has("lazy-in", LOADED));
    assert!(!has("lazy-out", LOADED));

    // observation ends after the first entry
    by_id("lazy-in").class_list().remove_1(LOADED).expect("classList");
    leave_and_return("lazy-in", "0px").await;
    assert!(!has("lazy-in", LOADED));
    root.remove();
}

#[wasm_bindgen_test]
async fn reveal_observer_respects_bottom_inset() {
    let root = fixture(
        r#"<div id="reveal-in" style="position:fixed;top:0;left:0;width:100px;height:100px">
             <span class="reveal-child" id="reveal-child-1"></span>
             <span class="reveal-child" id="reveal-child-2"></span>
           </div>
           <div id="reveal-edge"
                style="position:fixed;top:calc(100vh - 30px);left:0;width:100px;height:100px"></div>"#,
    );
    let config = RevealConfig {
        target_selector: "#reveal-in, #reveal-edge".into(),
        groups: vec![StaggerGroup::new(".reveal-child", 100)],
        ..RevealConfig::default()
    };
    let observed = RevealObserver::new(&config)
        .attach(&window(), &document())
        .expect("attach");
    assert_eq!(observed, 2);

    sleep(400).await;
    assert!(has("reveal-in", ANIMATED));
    assert!(has("reveal-child-1", ANIMATED));
    assert!(has("reveal-child-2", ANIMATED));
    // 30px on screen, all of it inside the 50px bottom inset
    assert!(!has("reveal-edge", ANIMATED));

    by_id("reveal-in").class_list().remove_1(ANIMATED).expect("classList");
    leave_and_return("reveal-in", "0px").await;
    assert!(!has("reveal-in", ANIMATED));
    root.remove();
}

#[wasm_bindgen_test]
async fn touch_moves_past_fast_threshold_suppress_transitions() {
    let root = fixture(r#"<div id="swipe-card" style="transition: transform 0.3s"></div>"#);
    js_sys::Reflect::set(&window(), &JsValue::from_str("ontouchstart"), &JsValue::NULL)
        .expect("ontouchstart");
    let config = TouchConfig {
        card_selector: "#swipe-card".into(),
        ..TouchConfig::default()
    };
    let optimizer = TouchOptimizer::new(&config);
    assert!(optimizer.attach(&window(), &document()).expect("attach"));
    let transition = || by_id("swipe-card").style().get_property_value("transition").expect("style");

    let doc = document();
    doc.dispatch_event(&touch_event("touchstart", 500)).expect("dispatch");
    doc.dispatch_event(&touch_event("touchmove", 495)).expect("dispatch");
    assert_ne!(transition(), "none");
    assert!(!optimizer.restore_pending());

    doc.dispatch_event(&touch_event("touchmove", 440)).expect("dispatch");
    assert_eq!(transition(), "none");
    assert!(optimizer.restore_pending());

    sleep(300).await;
    assert_eq!(transition(), "");
    assert!(!optimizer.restore_pending());
    root.remove();
}

#[wasm_bindgen_test]
async fn anchor_click_lands_below_fixed_header() {
    let root = fixture(
        r##"<a id="jump-link" href="#jump-target">jump</a>
           <div style="height:2000px"></div>
           <section id="jump-target" style="height:400px"></section>
           <div style="height:2000px"></div>"##,
    );
    let config = ScrollConfig::default();
    let controller = SmoothScroll::new(&config);
    controller.attach(&document()).expect("attach");
    window().scroll_to_with_x_and_y(0.0, 0.0);

    by_id("jump-link").click();
    assert!(controller.activity().is_active());
    sleep(1300).await;

    let expected = f64::from(by_id("jump-target").offset_top()) - config.header_offset;
    let landed = window().scroll_y().expect("scroll_y");
    assert!((landed - expected).abs() < 1.0, "landed at {landed}, expected {expected}");
    // default navigation was cancelled
    assert_ne!(window().location().hash().expect("hash"), "#jump-target");
    assert!(!controller.activity().is_active());

    window().scroll_to_with_x_and_y(0.0, 0.0);
    root.remove();
}

#[wasm_bindgen_test]
async fn hero_is_animated_after_delay() {
    let root = fixture(r#"<div id="hero-delayed"></div>"#);
    let config = HeroConfig {
        selector: "#hero-delayed".into(),
        delay_ms: 300,
    };
    assert!(animate_hero(&window(), &document(), &config).expect("hero"));

    sleep(100).await;
    assert!(!has("hero-delayed", ANIMATED));
    sleep(350).await;
    assert!(has("hero-delayed", ANIMATED));

    let missing = HeroConfig {
        selector: "#no-such-hero".into(),
        ..HeroConfig::default()
    };
    assert!(!animate_hero(&window(), &document(), &missing).expect("hero"));
    root.remove();
}

#[wasm_bindgen_test]
async fn install_from_document_applies_config_element() {
    let root = fixture(
        r##"<script type="application/json" id="page-motion-config">
             {"hero": {"selector": "#hero-configured", "delay_ms": 0}}
           </script>
           <div class="hero-content" id="hero-default"></div>
           <div id="hero-configured"></div>"##,
    );
    install_from_document().expect("install");

    sleep(450).await;
    assert!(has("hero-configured", ANIMATED));
    assert!(!has("hero-default", ANIMATED));
    root.remove();
}
