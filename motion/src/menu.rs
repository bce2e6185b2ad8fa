//! Mobile navigation drawer state and hamburger glyph.

/// Drawer state. Starts closed and lives for the page lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// Menu hidden, hamburger shown
    #[default]
    Closed,
    /// Menu shown, hamburger drawn as an X
    Open,
}

/// Inputs that move the drawer between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The hamburger control was clicked
    ToggleClick,
    /// A link inside the menu was selected
    LinkClick,
    /// A click landed outside both the control and the menu
    OutsideClick,
}

/// Inline style for one hamburger bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarStyle {
    /// Set `transform`
    Transform(&'static str),
    /// Set `opacity`
    Opacity(&'static str),
}

impl BarStyle {
    /// CSS property name.
    pub fn property(&self) -> &'static str {
        match self {
            BarStyle::Transform(_) => "transform",
            BarStyle::Opacity(_) => "opacity",
        }
    }

    /// CSS property value.
    pub fn value(&self) -> &'static str {
        match self {
            BarStyle::Transform(v) | BarStyle::Opacity(v) => v,
        }
    }
}

const OPEN_GLYPH: [BarStyle; 3] = [
    BarStyle::Transform("rotate(45deg) translateY(8px)"),
    BarStyle::Opacity("0"),
    BarStyle::Transform("rotate(-45deg) translateY(-8px)"),
];

const CLOSED_GLYPH: [BarStyle; 3] = [
    BarStyle::Transform("none"),
    BarStyle::Opacity("1"),
    BarStyle::Transform("none"),
];

impl MenuState {
    /// Read the state back from the menu's `active` marker.
    pub fn from_marker(active: bool) -> Self {
        if active {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    /// Whether the menu carries the `active` marker in this state.
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// State after `event`.
    pub fn apply(self, event: MenuEvent) -> Self {
        match (self, event) {
            (MenuState::Closed, MenuEvent::ToggleClick) => MenuState::Open,
            (MenuState::Open, _) => MenuState::Closed,
            (MenuState::Closed, _) => MenuState::Closed,
        }
    }

    /// Styles for the three hamburger bars, top to bottom.
    pub fn glyph(self) -> [BarStyle; 3] {
        match self {
            MenuState::Open => OPEN_GLYPH,
            MenuState::Closed => CLOSED_GLYPH,
        }
    }
}
