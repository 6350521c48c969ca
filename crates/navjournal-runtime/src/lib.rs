#![forbid(unsafe_code)]

//! Runtime: journals, the navigation state machine, and hosts.
//!
//! # Role in navjournal
//! `navjournal-runtime` is where navigation actually happens. A
//! [`NavigationService`] owns one host's content and [`JournalStacks`]
//! (shared with embedded frames through a [`SharedJournal`]),
//! raises notifications to [`NavigationObserver`]s, and runs deferred work
//! posted to its [`Dispatcher`]. [`NavigationWindow`] and [`Frame`] wrap a
//! service behind the shared [`NavigableHost`] interface.
//!
//! # How it fits in the system
//! Value types come from `navjournal-core`; localized labels come from
//! `navjournal-i18n`. The harness crate builds recorders and fixtures on
//! top of the observer and provider traits defined here.

pub mod config;
pub mod dispatcher;
pub mod events;
pub mod host;
pub mod journal;
pub mod loader;
pub mod service;

pub use config::{ConfigError, JournalConfig, JournalConfigParse};
pub use dispatcher::Dispatcher;
pub use events::{
    FragmentNavigationEventArgs, NavigatingEventArgs, NavigationEventArgs, NavigationObserver,
    ObserverId, on_load_completed, on_navigated, on_navigating,
};
pub use host::{Frame, JournalOwnership, NavigableHost, NavigationWindow};
pub use journal::{
    JournalMenu, JournalMenuItem, JournalStacks, MenuDirection, SharedJournal, StackSide,
};
pub use loader::{ContentLoader, ContentStateProvider, UriPageLoader};
pub use service::{NavigationOutcome, NavigationService, NavigationState};
