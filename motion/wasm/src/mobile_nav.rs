//! Collapsible mobile menu and hamburger glyph.

use page_motion::markers::ACTIVE;
use page_motion::{MenuConfig, MenuEvent, MenuState, Result};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Node};

use crate::dom;

/// Toggle control, menu container and the three hamburger bars.
#[derive(Debug, Clone)]
pub struct MobileNav {
    toggle: HtmlElement,
    menu: Element,
    bars: Vec<HtmlElement>,
    link_selector: String,
}

impl MobileNav {
    /// Locate the toggle and the menu. `None` when either is missing.
    pub fn find(document: &Document, config: &MenuConfig) -> Result<Option<Self>> {
        let toggle = dom::select_one::<HtmlElement>(document, &config.toggle_selector)?;
        let menu = dom::select_one::<Element>(document, &config.menu_selector)?;
        let (Some(toggle), Some(menu)) = (toggle, menu) else {
            debug!("[page-motion][menu] toggle or menu absent, skipping");
            return Ok(None);
        };
        let bars = dom::select_within(&toggle, "span")?;
        Ok(Some(Self {
            toggle,
            menu,
            bars,
            link_selector: config.link_selector.clone(),
        }))
    }

    /// Current state, read back from the menu's marker.
    pub fn state(&self) -> MenuState {
        MenuState::from_marker(dom::has_marker(&self.menu, ACTIVE))
    }

    /// Move to the state following `event` and redraw the glyph.
    pub fn dispatch(&self, event: MenuEvent) -> Result<MenuState> {
        let next = self.state().apply(event);
        dom::set_marker(&self.menu, ACTIVE, next.is_open())?;
        for (bar, style) in self.bars.iter().zip(next.glyph()) {
            dom::set_style(bar, style.property(), style.value())?;
        }
        Ok(next)
    }

    /// Wire the toggle, the menu links and outside clicks.
    pub fn attach(&self, document: &Document) -> Result<()> {
        let this = self.clone();
        dom::listen(&self.toggle, "click", false, move |_| {
            this.handle(MenuEvent::ToggleClick);
        })?;

        let links: Vec<Element> = dom::select_all(document, &self.link_selector)?;
        for link in &links {
            let this = self.clone();
            dom::listen(link, "click", false, move |_| {
                this.handle(MenuEvent::LinkClick);
            })?;
        }

        let this = self.clone();
        dom::listen(document, "click", false, move |event| {
            if this.state().is_open() && this.is_outside(&event) {
                this.handle(MenuEvent::OutsideClick);
            }
        })
    }

    fn handle(&self, event: MenuEvent) {
        if let Err(e) = self.dispatch(event) {
            warn!("[page-motion][menu] {event:?}: {e}");
        }
    }

    fn is_outside(&self, event: &Event) -> bool {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
            return false;
        };
        !self.toggle.contains(Some(&target)) && !self.menu.contains(Some(&target))
    }
}
