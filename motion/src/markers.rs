//! Marker classes shared with the page stylesheet.

/// Current navigation link, or the open mobile menu
pub const ACTIVE: &str = "active";
/// Navbar once the page has scrolled past the threshold
pub const SCROLLED: &str = "scrolled";
/// Deferred image that has entered the viewport and finished loading
pub const LOADED: &str = "loaded";
/// Block or item whose entrance animation has fired
pub const ANIMATED: &str = "animated";
