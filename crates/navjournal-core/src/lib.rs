#![forbid(unsafe_code)]

//! Core: value types shared by every navigable host.
//!
//! # Role in navjournal
//! `navjournal-core` owns the vocabulary of the journal: where a navigation
//! goes ([`NavigationTarget`], [`NavUri`], [`Page`]), how it was requested
//! ([`NavigationMode`]), what the journal remembers about a page that was
//! left ([`JournalEntry`]), and how application state re-enters a page when
//! the journal lands on it ([`CustomContentState`], [`ReplayContext`]).
//!
//! # How it fits in the system
//! The runtime (`navjournal-runtime`) owns the stacks and the navigation
//! state machine and consumes these types. Nothing here performs I/O or
//! logging, so the types stay cheap to construct in tests.

pub mod content;
pub mod entry;
pub mod error;
pub mod mode;
pub mod replay;
pub mod uri;

pub use content::{NavigationTarget, Page};
pub use entry::{CustomContentState, Destination, EntryId, EntryOrigin, JournalEntry};
pub use error::{NavigationError, Result};
pub use mode::NavigationMode;
pub use replay::ReplayContext;
pub use uri::NavUri;
