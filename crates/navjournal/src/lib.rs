#![forbid(unsafe_code)]

//! navjournal public facade crate.
//!
//! Re-exports the journal vocabulary, the navigation service and its
//! hosts, and the localized string catalog behind one dependency, plus a
//! prelude for day-to-day usage.
//!
//! ```
//! use navjournal::prelude::*;
//!
//! let mut window = NavigationWindow::new("Main");
//! window.navigate(NavigationTarget::from("Page1.xaml"))?;
//! window.navigate(NavigationTarget::from("Page2.xaml"))?;
//! window.go_back()?;
//!
//! assert_eq!(window.content().map(Page::name), Some("Page1.xaml"));
//! assert!(window.can_go_forward());
//! # Ok::<(), NavigationError>(())
//! ```

// --- Core re-exports -------------------------------------------------------

pub use navjournal_core::{
    CustomContentState, Destination, EntryId, EntryOrigin, JournalEntry, NavUri, NavigationError,
    NavigationMode, NavigationTarget, Page, ReplayContext, Result,
};

// --- Runtime re-exports ----------------------------------------------------

pub use navjournal_runtime::{
    ConfigError, ContentLoader, ContentStateProvider, Dispatcher, FragmentNavigationEventArgs,
    Frame, JournalConfig, JournalConfigParse, JournalMenu, JournalMenuItem, JournalOwnership,
    JournalStacks, MenuDirection, NavigableHost, NavigatingEventArgs, NavigationEventArgs,
    NavigationObserver, NavigationOutcome, NavigationService, NavigationState, NavigationWindow,
    ObserverId, SharedJournal, StackSide, UriPageLoader, on_load_completed, on_navigated,
    on_navigating,
};

// --- I18n re-exports -------------------------------------------------------

pub use navjournal_i18n::{StringCatalog, builtin_catalog};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CustomContentState, Frame, JournalConfig, JournalEntry, JournalOwnership, NavUri,
        NavigableHost,
        NavigationError, NavigationMode, NavigationObserver, NavigationOutcome,
        NavigationService, NavigationTarget, NavigationWindow, Page, ReplayContext, Result,
    };

    pub use crate::{core, i18n, runtime};
}

pub use navjournal_core as core;
pub use navjournal_i18n as i18n;
pub use navjournal_runtime as runtime;
