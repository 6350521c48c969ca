#![forbid(unsafe_code)]

//! Navigation notifications.
//!
//! A host raises, per navigation attempt:
//!
//! ```text
//! navigating ──cancel──▶ (nothing else; host back to Idle)
//!     │
//!     ▼
//! fragment_navigation   (only when landing on a fragment)
//!     │
//!     ▼
//! navigated
//!     │
//!     ▼
//! load_completed
//! ```
//!
//! Observers are called synchronously in registration order. They must not
//! re-enter the host; deferred work goes through the host's
//! [`Dispatcher`](crate::Dispatcher).

use std::fmt;

use navjournal_core::{NavUri, NavigationMode, Page};

/// Arguments for the cancelable `navigating` notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatingEventArgs {
    mode: NavigationMode,
    uri: Option<NavUri>,
    content: Option<Page>,
    cancel: bool,
}

impl NavigatingEventArgs {
    /// Proposed navigation, not yet cancelled.
    #[must_use]
    pub fn new(mode: NavigationMode, uri: Option<NavUri>, content: Option<Page>) -> Self {
        Self {
            mode,
            uri,
            content,
            cancel: false,
        }
    }

    /// Mode of the proposed navigation.
    #[must_use]
    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    /// Proposed uri, if the target has one.
    #[must_use]
    pub fn uri(&self) -> Option<&NavUri> {
        self.uri.as_ref()
    }

    /// Proposed content, when already known (object navigations and
    /// snapshot entries).
    #[must_use]
    pub fn content(&self) -> Option<&Page> {
        self.content.as_ref()
    }

    /// Stop the navigation before anything is committed.
    pub fn cancel(&mut self) {
        self.cancel = true;
    }

    /// True once an observer cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel
    }
}

/// Arguments for `navigated` and `load_completed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEventArgs {
    pub mode: NavigationMode,
    pub uri: Option<NavUri>,
    pub content: Option<Page>,
}

/// Arguments for `fragment_navigation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentNavigationEventArgs {
    pub fragment: String,
    pub mode: NavigationMode,
}

/// Receiver of a host's navigation notifications.
///
/// Every method has an empty default so observers implement only what they
/// watch.
pub trait NavigationObserver {
    /// A navigation is about to start; call [`NavigatingEventArgs::cancel`]
    /// to stop it.
    fn navigating(&mut self, _args: &mut NavigatingEventArgs) {}

    /// The landing content is in place and the journal has been updated.
    fn navigated(&mut self, _args: &NavigationEventArgs) {}

    /// The navigation landed on a fragment.
    fn fragment_navigation(&mut self, _args: &FragmentNavigationEventArgs) {}

    /// The navigation finished.
    fn load_completed(&mut self, _args: &NavigationEventArgs) {}
}

/// Handle returned by `add_observer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

impl ObserverId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observer#{}", self.0)
    }
}

// ============================================================================
// Closure adapters
// ============================================================================

/// Observer forwarding `navigating` to a closure.
pub struct OnNavigating<F>(F);

impl<F: FnMut(&mut NavigatingEventArgs)> NavigationObserver for OnNavigating<F> {
    fn navigating(&mut self, args: &mut NavigatingEventArgs) {
        (self.0)(args);
    }
}

/// Observer forwarding `navigated` to a closure.
pub struct OnNavigated<F>(F);

impl<F: FnMut(&NavigationEventArgs)> NavigationObserver for OnNavigated<F> {
    fn navigated(&mut self, args: &NavigationEventArgs) {
        (self.0)(args);
    }
}

/// Observer forwarding `load_completed` to a closure.
pub struct OnLoadCompleted<F>(F);

impl<F: FnMut(&NavigationEventArgs)> NavigationObserver for OnLoadCompleted<F> {
    fn load_completed(&mut self, args: &NavigationEventArgs) {
        (self.0)(args);
    }
}

/// Wrap a closure as a `navigating` observer.
pub fn on_navigating<F>(f: F) -> OnNavigating<F>
where
    F: FnMut(&mut NavigatingEventArgs),
{
    OnNavigating(f)
}

/// Wrap a closure as a `navigated` observer.
pub fn on_navigated<F>(f: F) -> OnNavigated<F>
where
    F: FnMut(&NavigationEventArgs),
{
    OnNavigated(f)
}

/// Wrap a closure as a `load_completed` observer.
pub fn on_load_completed<F>(f: F) -> OnLoadCompleted<F>
where
    F: FnMut(&NavigationEventArgs),
{
    OnLoadCompleted(f)
}
