#![forbid(unsafe_code)]

//! Navigable hosts.
//!
//! [`NavigableHost`] is the one interface callers program against; both
//! [`NavigationWindow`] (top level) and [`Frame`] (embedded) implement it
//! by exposing their [`NavigationService`].
//!
//! A window always owns its journal. A frame owns one unless it is hosted
//! in another host and its [`JournalOwnership`] lets it share:
//!
//! | Ownership | Hosted | Not hosted |
//! |-----------|--------|------------|
//! | `Automatic` | parent's journal | own journal |
//! | `OwnsJournal` | own journal | own journal |
//! | `UsesParentJournal` | parent's journal | own journal |
//!
//! A frame using its parent's journal records every page it leaves there,
//! reports `can_go_back`/`can_go_forward` as false, and fails journal moves
//! with `InvalidOperationState`. Moves on the parent hand the frame's pages
//! back through the frame's dispatcher.

use std::rc::Rc;

use navjournal_core::{CustomContentState, EntryId, JournalEntry, NavigationTarget, Page, Result};

use crate::config::JournalConfig;
use crate::journal::{JournalMenu, SharedJournal};
use crate::service::{NavigationOutcome, NavigationService};

/// A surface that navigates between pages.
///
/// Implementors supply the two service accessors; every other method
/// forwards to the [`NavigationService`].
pub trait NavigableHost {
    /// The host's navigation service.
    fn navigation_service(&self) -> &NavigationService;

    /// The host's navigation service, mutably.
    fn navigation_service_mut(&mut self) -> &mut NavigationService;

    /// Navigate to a uri, a page, or `null`, journaling the page left.
    fn navigate(&mut self, target: NavigationTarget) -> Result<NavigationOutcome> {
        self.navigation_service_mut().navigate(target)
    }

    /// Go back one entry. Fails on an empty back stack.
    fn go_back(&mut self) -> Result<NavigationOutcome> {
        self.navigation_service_mut().go_back()
    }

    /// Go forward one entry. Fails on an empty forward stack.
    fn go_forward(&mut self) -> Result<NavigationOutcome> {
        self.navigation_service_mut().go_forward()
    }

    /// Reload the current content without touching the journal.
    fn refresh(&mut self) -> Result<NavigationOutcome> {
        self.navigation_service_mut().refresh()
    }

    /// Journal custom state for the current page without navigating.
    fn add_back_entry(&mut self, state: Rc<dyn CustomContentState>) -> Result<EntryId> {
        self.navigation_service_mut().add_back_entry(state)
    }

    /// Drop the most recent back entry; `None` when there is none.
    fn remove_back_entry(&mut self) -> Option<JournalEntry> {
        self.navigation_service_mut().remove_back_entry()
    }

    /// True when the host's own back stack is non-empty.
    fn can_go_back(&self) -> bool {
        self.navigation_service().can_go_back()
    }

    /// True when the host's own forward stack is non-empty.
    fn can_go_forward(&self) -> bool {
        self.navigation_service().can_go_forward()
    }

    /// Currently displayed content.
    fn content(&self) -> Option<&Page> {
        self.navigation_service().content()
    }

    /// Own back stack, most recent first.
    fn back_stack(&self) -> Vec<JournalEntry> {
        self.navigation_service().back_stack()
    }

    /// Own forward stack, most recent first.
    fn forward_stack(&self) -> Vec<JournalEntry> {
        self.navigation_service().forward_stack()
    }

    /// Run jobs queued on the host's dispatcher.
    fn run_pending(&mut self) -> usize {
        self.navigation_service_mut().run_pending()
    }
}

/// Top-level navigating window with a journal drop-down.
#[derive(Debug, Default)]
pub struct NavigationWindow {
    title: String,
    service: NavigationService,
}

impl NavigationWindow {
    /// Create a window with the default journal configuration.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_service(title, NavigationService::new())
    }

    /// Create a window with an explicit configuration.
    #[must_use]
    pub fn with_config(title: impl Into<String>, config: JournalConfig) -> Self {
        Self::with_service(title, NavigationService::with_config(config))
    }

    /// Wrap a preconfigured service.
    #[must_use]
    pub fn with_service(title: impl Into<String>, service: NavigationService) -> Self {
        Self {
            title: title.into(),
            service,
        }
    }

    /// Window title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Drop-down menu for the window's back/forward buttons.
    #[must_use]
    pub fn journal_menu(&self) -> JournalMenu {
        self.service.journal_menu()
    }
}

impl NavigableHost for NavigationWindow {
    fn navigation_service(&self) -> &NavigationService {
        &self.service
    }

    fn navigation_service_mut(&mut self) -> &mut NavigationService {
        &mut self.service
    }
}

/// How a [`Frame`] picks the journal it records into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JournalOwnership {
    /// Share the parent's journal when hosted, otherwise own one.
    #[default]
    Automatic,
    /// Always keep a separate journal.
    OwnsJournal,
    /// Record into the parent's journal whenever there is a parent.
    UsesParentJournal,
}

/// Embedded navigating region.
#[derive(Debug, Default)]
pub struct Frame {
    name: String,
    ownership: JournalOwnership,
    parent: Option<SharedJournal>,
    service: NavigationService,
}

impl Frame {
    /// Create a stand-alone frame with its own journal.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_service(name, NavigationService::new())
    }

    /// Wrap a preconfigured service.
    #[must_use]
    pub fn with_service(name: impl Into<String>, service: NavigationService) -> Self {
        Self {
            name: name.into(),
            ownership: JournalOwnership::default(),
            parent: None,
            service,
        }
    }

    /// Create a frame inside `host`.
    #[must_use]
    pub fn hosted_in(name: impl Into<String>, host: &dyn NavigableHost) -> Self {
        let mut frame = Self::new(name);
        frame.attach_to(host);
        frame
    }

    /// Builder form of [`set_journal_ownership`](Self::set_journal_ownership).
    #[must_use]
    pub fn with_journal_ownership(mut self, ownership: JournalOwnership) -> Self {
        self.set_journal_ownership(ownership);
        self
    }

    /// Frame name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Place the frame inside `host`. Whether it shares the host's journal
    /// depends on its [`JournalOwnership`].
    pub fn attach_to(&mut self, host: &dyn NavigableHost) {
        self.parent = Some(host.navigation_service().shared_journal());
        self.apply_ownership();
    }

    /// Take the frame out of its host. It keeps its own journal from now on.
    pub fn detach(&mut self) {
        self.parent = None;
        self.apply_ownership();
    }

    /// Configured ownership.
    #[must_use]
    pub fn journal_ownership(&self) -> JournalOwnership {
        self.ownership
    }

    /// Change ownership. Entries already recorded stay where they are.
    pub fn set_journal_ownership(&mut self, ownership: JournalOwnership) {
        self.ownership = ownership;
        self.apply_ownership();
    }

    /// True when the frame records into its own journal.
    #[must_use]
    pub fn owns_journal(&self) -> bool {
        self.service.owns_journal()
    }

    fn apply_ownership(&mut self) {
        let parent = match self.ownership {
            JournalOwnership::OwnsJournal => None,
            JournalOwnership::Automatic | JournalOwnership::UsesParentJournal => self.parent.clone(),
        };
        self.service.set_parent_journal(parent);
    }
}

impl NavigableHost for Frame {
    fn navigation_service(&self) -> &NavigationService {
        &self.service
    }

    fn navigation_service_mut(&mut self) -> &mut NavigationService {
        &mut self.service
    }
}
