#![forbid(unsafe_code)]

//! Journal entries and custom content state.
//!
//! An entry is captured when a navigation *away* from a page commits: it
//! records the page being left, not the page being entered. Each entry
//! names exactly one [`Destination`] that can bring the page back.
//!
//! # Display names
//!
//! [`JournalEntry::display_name`] resolves, in order:
//!
//! 1. the explicit entry name,
//! 2. the custom state's `journal_entry_name`,
//! 3. the snapshot page's title, then its name,
//! 4. the source uri,
//! 5. the caller-supplied localized placeholder (`"Untitled"`).
//!
//! Empty strings are skipped at every step, so the result is never empty
//! as long as the placeholder is not.

use std::fmt;
use std::rc::Rc;

use crate::content::Page;
use crate::mode::NavigationMode;
use crate::replay::ReplayContext;
use crate::uri::NavUri;

/// Application-defined state attached to a journal entry.
///
/// Implementations regenerate a page's sub-state (a list selection, a
/// scroll position) when the journal lands on their entry. `replay` may
/// also redirect to a different destination through
/// [`ReplayContext::navigate`]; the redirect runs as an ordinary new
/// navigation after the landing move commits.
pub trait CustomContentState: fmt::Debug {
    /// Label for journal menus. `None` or empty falls back to the
    /// entry's other name sources.
    fn journal_entry_name(&self) -> Option<String> {
        None
    }

    /// Re-apply this state to the host that just landed on the entry.
    fn replay(&self, ctx: &mut ReplayContext<'_>, mode: NavigationMode);
}

/// Identifier assigned by the owning host, unique per host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    /// Wrap a raw id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What brings an entry's page back.
#[derive(Debug, Clone)]
pub enum Destination {
    /// Reload from a uri.
    Source(NavUri),
    /// Replay application state.
    CustomState(Rc<dyn CustomContentState>),
    /// Restore the content object that was displayed (possibly `null`).
    Snapshot(Option<Page>),
}

/// Page a custom-state entry was recorded on.
///
/// Custom state only knows how to re-apply itself; the origin is what the
/// host lands on before replay runs, and what `navigating` observers are
/// told the journal move proposes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryOrigin {
    pub content: Option<Page>,
    pub source: Option<NavUri>,
}

impl EntryOrigin {
    #[must_use]
    pub fn new(content: Option<Page>, source: Option<NavUri>) -> Self {
        Self { content, source }
    }
}

/// A recorded prior navigation state.
#[derive(Debug, Clone)]
pub struct JournalEntry {
    id: EntryId,
    name: Option<String>,
    destination: Destination,
    mode: NavigationMode,
    origin: Option<EntryOrigin>,
}

impl JournalEntry {
    /// Create an unnamed entry.
    #[must_use]
    pub fn new(id: EntryId, destination: Destination, mode: NavigationMode) -> Self {
        Self {
            id,
            name: None,
            destination,
            mode,
            origin: None,
        }
    }

    /// Record the page this entry was taken on.
    #[must_use]
    pub fn with_origin(mut self, origin: EntryOrigin) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Set an explicit display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Entry id.
    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Explicit name, if one was set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The destination that identifies this entry.
    #[must_use]
    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Page the entry was recorded on, when the host knew it.
    #[must_use]
    pub fn origin(&self) -> Option<&EntryOrigin> {
        self.origin.as_ref()
    }

    /// Mode of the navigation that captured this entry.
    #[must_use]
    pub fn navigation_mode(&self) -> NavigationMode {
        self.mode
    }

    /// Source uri, for uri entries.
    #[must_use]
    pub fn source(&self) -> Option<&NavUri> {
        match &self.destination {
            Destination::Source(uri) => Some(uri),
            _ => None,
        }
    }

    /// Custom state, for replayable entries.
    #[must_use]
    pub fn custom_state(&self) -> Option<&Rc<dyn CustomContentState>> {
        match &self.destination {
            Destination::CustomState(state) => Some(state),
            _ => None,
        }
    }

    /// Snapshot page, for snapshot entries that captured non-null content.
    #[must_use]
    pub fn snapshot(&self) -> Option<&Page> {
        match &self.destination {
            Destination::Snapshot(page) => page.as_ref(),
            _ => None,
        }
    }

    /// Resolve the label shown in journal menus.
    ///
    /// `untitled` is the localized placeholder used when nothing else names
    /// the entry.
    #[must_use]
    pub fn display_name(&self, untitled: &str) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        match &self.destination {
            Destination::CustomState(state) => state
                .journal_entry_name()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| untitled.to_string()),
            Destination::Snapshot(Some(page)) => page
                .title()
                .filter(|t| !t.is_empty())
                .or(Some(page.name()).filter(|n| !n.is_empty()))
                .unwrap_or(untitled)
                .to_string(),
            Destination::Snapshot(None) => untitled.to_string(),
            Destination::Source(uri) if !uri.as_str().is_empty() => uri.to_string(),
            Destination::Source(_) => untitled.to_string(),
        }
    }
}
