#![forbid(unsafe_code)]

//! Errors from journal and navigation operations.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Empty back stack | `go_back` with `can_go_back == false` | `InvalidOperationState`, synchronous |
//! | Empty forward stack | `go_forward` with `can_go_forward == false` | `InvalidOperationState`, synchronous |
//! | No navigation context | `add_back_entry` before any content | `InvalidOperationState` |
//! | Loader failure | `ContentLoader` rejects a uri | `ContentLoad`, journal untouched |
//!
//! Cancellation by an observer is not an error; `remove_back_entry` on an
//! empty stack returns `None` and never reaches this type.

use std::fmt;

use crate::uri::NavUri;

/// Errors raised by navigable hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The operation is not valid in the host's current journal state.
    InvalidOperationState(String),
    /// Content for a uri could not be produced.
    ContentLoad {
        /// The uri that failed.
        uri: NavUri,
        /// Loader-supplied reason.
        reason: String,
    },
}

impl NavigationError {
    /// Shorthand for [`NavigationError::InvalidOperationState`].
    #[must_use]
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidOperationState(reason.into())
    }

    /// True for [`NavigationError::InvalidOperationState`].
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidOperationState(_))
    }
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOperationState(reason) => write!(f, "invalid operation: {reason}"),
            Self::ContentLoad { uri, reason } => {
                write!(f, "failed to load content for '{uri}': {reason}")
            }
        }
    }
}

impl std::error::Error for NavigationError {}

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, NavigationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_state() {
        let err = NavigationError::invalid_state("no entries to go back to");
        assert_eq!(err.to_string(), "invalid operation: no entries to go back to");
        assert!(err.is_invalid_state());
    }

    #[test]
    fn display_content_load() {
        let err = NavigationError::ContentLoad {
            uri: NavUri::new("Missing.xaml"),
            reason: "not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to load content for 'Missing.xaml': not found"
        );
        assert!(!err.is_invalid_state());
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&NavigationError::invalid_state("x"));
    }
}
