//! Error types shared by the core and the browser bindings.

use thiserror::Error;

/// Result alias used across page-motion crates.
pub type Result<T, E = MotionError> = std::result::Result<T, E>;

/// Failures that can occur while installing page behaviors.
///
/// Missing page elements are not errors; components simply stay inactive.
#[derive(Debug, Error)]
pub enum MotionError {
    /// No global `window` (not running in a browser main thread).
    #[error("no window available")]
    NoWindow,

    /// The window has no document attached.
    #[error("window has no document")]
    NoDocument,

    /// Configuration JSON could not be parsed.
    #[error("invalid motion config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// A configured selector was rejected by the document.
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector {
        /// Selector as configured
        selector: String,
        /// Message reported by the host
        reason: String,
    },

    /// A host API call threw.
    #[error("{context} failed: {message}")]
    Js {
        /// Operation that was attempted
        context: &'static str,
        /// Stringified JavaScript exception
        message: String,
    },
}

impl MotionError {
    /// Build a [`MotionError::Js`] from a context label and any debuggable host value.
    pub fn js(context: &'static str, value: impl std::fmt::Debug) -> Self {
        MotionError::Js {
            context,
            message: format!("{value:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_wraps_serde() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = MotionError::from(err);
        assert!(err.to_string().starts_with("invalid motion config:"));
    }

    #[test]
    fn test_js_error_message() {
        let err = MotionError::js("addEventListener", "TypeError");
        assert_eq!(err.to_string(), "addEventListener failed: \"TypeError\"");
    }
}
