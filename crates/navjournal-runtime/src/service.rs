#![forbid(unsafe_code)]

//! Per-host navigation state machine.
//!
//! [`NavigationService`] owns a host's current content, its
//! [`SharedJournal`], its observers and its [`Dispatcher`]. Every
//! navigation runs through the same phases:
//!
//! ```text
//!            navigate / go_back / go_forward / refresh
//!   Idle ─────────────────────────────────────────────▶ Navigating
//!    ▲                                                     │
//!    │ cancelled by an observer, or the loader failed      │ commit
//!    └─────────────────────────────────────────────────────┤
//!                                                          ▼
//!                                                        Loaded
//! ```
//!
//! # Invariants
//!
//! 1. Journal mutation happens only at commit, never before `navigating`
//!    observers have run and never on cancel or load failure.
//! 2. A `New` navigation leaves `forward` empty.
//! 3. `go_back`/`go_forward` fail synchronously with
//!    [`NavigationError::InvalidOperationState`] on an empty stack, before
//!    any notification is raised.
//! 4. `remove_back_entry` never fails; an empty stack yields `None`.
//! 5. Custom state replay runs after the landing move has committed;
//!    redirects it queues run afterwards as ordinary `New` navigations.
//! 6. A custom-state entry lands on the page it was recorded on; with no
//!    recorded page the current content stays.
//! 7. A service attached to a parent journal records into that journal
//!    and keeps its own stacks empty; journal moves on it fail.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Empty stack | journal move with nothing to move to | `InvalidOperationState`, no events |
//! | Step count | `*_by(0)` or more steps than entries | `InvalidOperationState`, no events |
//! | No context | `add_back_entry` without content | `InvalidOperationState` |
//! | Loader error | `ContentLoader::load` fails | error returned, state `Idle`, journal untouched |
//! | Redirect failed | a replay redirect is cancelled or fails to load | `warn!`, move stays committed, state `Loaded` |
//! | Not owner | journal move on a service using its parent's journal | `InvalidOperationState`, no events |
//! | Budget | `run_pending` hits `max_dispatch_turns` | remaining jobs stay queued, `warn!` |

use std::fmt;
use std::rc::Rc;

use navjournal_core::{
    CustomContentState, Destination, EntryId, EntryOrigin, JournalEntry, NavUri,
    NavigationError, NavigationMode, NavigationTarget, Page, ReplayContext, Result,
};
use navjournal_i18n::{StringCatalog, builtin_catalog, keys};
use tracing::{debug, debug_span, warn};

use crate::config::JournalConfig;
use crate::dispatcher::Dispatcher;
use crate::events::{
    FragmentNavigationEventArgs, NavigatingEventArgs, NavigationEventArgs, NavigationObserver,
    ObserverId,
};
use crate::journal::{
    FrameLink, JournalMenu, JournalMenuItem, ProviderSlot, SharedJournal, StackSide,
};
use crate::loader::{ContentLoader, ContentStateProvider, UriPageLoader};

/// Lifecycle state of a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationState {
    /// Nothing in flight. Initial state, and the state after a cancel.
    #[default]
    Idle,
    /// Observers are being asked whether the navigation may proceed.
    Navigating,
    /// The last navigation committed.
    Loaded,
}

/// Result of a navigation request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Committed and notified.
    Completed { mode: NavigationMode },
    /// Stopped by a `navigating` observer. Nothing changed.
    Cancelled { mode: NavigationMode },
}

impl NavigationOutcome {
    /// Mode of the request.
    #[must_use]
    pub fn mode(self) -> NavigationMode {
        match self {
            Self::Completed { mode } | Self::Cancelled { mode } => mode,
        }
    }

    /// True if the navigation committed.
    #[must_use]
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// True if an observer cancelled.
    #[must_use]
    pub fn is_cancelled(self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Content resolved for a landing page.
struct Landing {
    content: Option<Page>,
    source: Option<NavUri>,
    fragment: Option<String>,
}

/// The journal a frame records into instead of its own.
#[derive(Debug)]
struct ParentJournal {
    journal: SharedJournal,
    link: FrameLink,
}

/// Navigation state machine for one host.
pub struct NavigationService {
    state: NavigationState,
    content: Option<Page>,
    source: Option<NavUri>,
    has_navigated: bool,
    journal: SharedJournal,
    parent: Option<ParentJournal>,
    observers: Vec<(ObserverId, Box<dyn NavigationObserver>)>,
    next_observer_id: u64,
    loader: Box<dyn ContentLoader>,
    state_provider: ProviderSlot,
    dispatcher: Dispatcher,
    catalog: StringCatalog,
    config: JournalConfig,
}

impl fmt::Debug for NavigationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationService")
            .field("state", &self.state)
            .field("content", &self.content)
            .field("source", &self.source)
            .field("journal", &self.journal)
            .field("uses_parent_journal", &self.parent.is_some())
            .field("observers", &self.observers.len())
            .field("has_state_provider", &self.state_provider.borrow().is_some())
            .field("dispatcher", &self.dispatcher)
            .field("config", &self.config)
            .finish()
    }
}

impl Default for NavigationService {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationService {
    /// Create a service with default configuration and the uri page loader.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(JournalConfig::default())
    }

    /// Create a service with the given configuration.
    #[must_use]
    pub fn with_config(config: JournalConfig) -> Self {
        Self {
            state: NavigationState::Idle,
            content: None,
            source: None,
            has_navigated: false,
            journal: SharedJournal::new(),
            parent: None,
            observers: Vec::new(),
            next_observer_id: 0,
            loader: Box::new(UriPageLoader),
            state_provider: ProviderSlot::default(),
            dispatcher: Dispatcher::new(),
            catalog: builtin_catalog(),
            config,
        }
    }

    /// Replace the content loader.
    #[must_use]
    pub fn with_loader(mut self, loader: impl ContentLoader + 'static) -> Self {
        self.set_loader(loader);
        self
    }

    /// Replace the string catalog used for placeholder labels.
    #[must_use]
    pub fn with_catalog(mut self, catalog: StringCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the content loader in place.
    pub fn set_loader(&mut self, loader: impl ContentLoader + 'static) {
        self.loader = Box::new(loader);
    }

    /// Register the provider consulted when a page is left.
    pub fn set_state_provider(&mut self, provider: impl ContentStateProvider + 'static) {
        *self.state_provider.borrow_mut() = Some(Box::new(provider));
    }

    /// Remove the content state provider.
    pub fn clear_state_provider(&mut self) {
        *self.state_provider.borrow_mut() = None;
    }

    // ========================================================================
    // Observers
    // ========================================================================

    /// Attach an observer. Observers are notified in registration order.
    pub fn add_observer(&mut self, observer: impl NavigationObserver + 'static) -> ObserverId {
        self.next_observer_id += 1;
        let id = ObserverId::new(self.next_observer_id);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Detach an observer. Returns `false` for unknown ids.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        before != self.observers.len()
    }

    /// Number of attached observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Navigate to a uri, a page, or `null`.
    ///
    /// Fragment-only uris (`#top`) resolve against the current document.
    /// On commit the page being left is journaled on the back stack and the
    /// forward stack is cleared; the very first navigation of a host has no
    /// page to journal.
    pub fn navigate(&mut self, target: impl Into<NavigationTarget>) -> Result<NavigationOutcome> {
        let target = target.into();
        let _span = debug_span!("navigate", target = %target).entered();
        self.navigate_new(target)
    }

    /// Go back one entry.
    pub fn go_back(&mut self) -> Result<NavigationOutcome> {
        self.journal_move(StackSide::Back, 1)
    }

    /// Go forward one entry.
    pub fn go_forward(&mut self) -> Result<NavigationOutcome> {
        self.journal_move(StackSide::Forward, 1)
    }

    /// Go back `steps` entries in a single navigation.
    ///
    /// Skipped entries move to the forward stack, nearest to the landing
    /// page on top.
    pub fn go_back_by(&mut self, steps: usize) -> Result<NavigationOutcome> {
        self.journal_move(StackSide::Back, steps)
    }

    /// Go forward `steps` entries in a single navigation.
    pub fn go_forward_by(&mut self, steps: usize) -> Result<NavigationOutcome> {
        self.journal_move(StackSide::Forward, steps)
    }

    /// Reload the current content. The journal is not touched.
    ///
    /// Content with a source uri is reloaded through the loader; uri-less
    /// content is kept as is.
    pub fn refresh(&mut self) -> Result<NavigationOutcome> {
        let mode = NavigationMode::Refresh;
        if !self.has_navigated {
            return Err(NavigationError::invalid_state("nothing to refresh"));
        }
        let _span = debug_span!("refresh", source = ?self.source).entered();

        self.state = NavigationState::Navigating;
        if self.raise_navigating(mode, self.source.clone(), self.content.clone()) {
            return Ok(self.cancelled(mode));
        }

        let landing = match self.source.clone() {
            Some(uri) => {
                let content = self.load(&uri)?;
                let fragment = uri.fragment().map(str::to_string);
                Landing {
                    content,
                    source: Some(uri),
                    fragment,
                }
            }
            None => Landing {
                content: self.content.clone(),
                source: None,
                fragment: None,
            },
        };
        self.content = landing.content;
        self.source = landing.source;
        self.complete(mode, landing.fragment);
        Ok(NavigationOutcome::Completed { mode })
    }

    // ========================================================================
    // Journal editing
    // ========================================================================

    /// Journal `state` for the current page without navigating.
    ///
    /// Starts a new branch: the forward stack is cleared. Fails when the
    /// host has no content to attach the entry to.
    pub fn add_back_entry(&mut self, state: Rc<dyn CustomContentState>) -> Result<EntryId> {
        if !self.has_navigated || self.content.is_none() {
            return Err(NavigationError::invalid_state(
                "cannot add a back entry without navigable content",
            ));
        }
        let id = self.allocate_entry_id();
        let origin = EntryOrigin::new(self.content.clone(), self.source.clone());
        let entry = JournalEntry::new(id, Destination::CustomState(state), NavigationMode::New)
            .with_origin(origin);
        let cleared = self.record_new_entry(entry);
        debug!(
            entry = %id,
            cleared_forward = cleared,
            "custom back entry added"
        );
        Ok(id)
    }

    /// Remove and return the most recent back entry, or `None` if there is
    /// none. Never navigates and never touches the forward stack.
    pub fn remove_back_entry(&mut self) -> Option<JournalEntry> {
        let mut journal = self.journal.borrow_mut();
        let removed = journal.remove_back_entry();
        if let Some(entry) = &removed {
            debug!(
                entry = %entry.id(),
                back_depth = journal.back_depth(),
                "back entry removed"
            );
        }
        removed
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// True when the back stack is non-empty.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.journal.borrow().can_go_back()
    }

    /// True when the forward stack is non-empty.
    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.journal.borrow().can_go_forward()
    }

    /// Back stack snapshot, most recent first.
    #[must_use]
    pub fn back_stack(&self) -> Vec<JournalEntry> {
        self.journal.borrow().back_entries()
    }

    /// Forward stack snapshot, most recent first.
    #[must_use]
    pub fn forward_stack(&self) -> Vec<JournalEntry> {
        self.journal.borrow().forward_entries()
    }

    /// Handle to this service's own journal, for frames that record into it.
    #[must_use]
    pub fn shared_journal(&self) -> SharedJournal {
        self.journal.clone()
    }

    /// False while the service records into a parent's journal.
    #[must_use]
    pub fn owns_journal(&self) -> bool {
        self.parent.is_none()
    }

    /// Record into `parent` instead of this service's own journal, or go
    /// back to the own journal with `None`.
    ///
    /// Entries already recorded stay where they are. Passing the service's
    /// own journal is the same as `None`.
    pub fn set_parent_journal(&mut self, parent: Option<SharedJournal>) {
        let parent = parent.filter(|journal| !journal.ptr_eq(&self.journal));
        debug!(uses_parent = parent.is_some(), "journal ownership changed");
        if let Some(old) = &self.parent {
            old.journal.release_frame(&old.link);
        }
        self.parent = parent.map(|journal| {
            let link = FrameLink::new(self.dispatcher.clone(), Rc::clone(&self.state_provider));
            ParentJournal { journal, link }
        });
        self.publish_current();
    }

    /// Currently displayed content.
    #[must_use]
    pub fn content(&self) -> Option<&Page> {
        self.content.as_ref()
    }

    /// Uri of the current content, if it came from one.
    #[must_use]
    pub fn source(&self) -> Option<&NavUri> {
        self.source.as_ref()
    }

    /// Lifecycle state.
    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &JournalConfig {
        &self.config
    }

    /// Localized placeholder for unnamed entries.
    #[must_use]
    pub fn untitled_label(&self) -> &str {
        self.catalog
            .get(&self.config.locale, keys::ENTRY_UNTITLED)
            .unwrap_or("Untitled")
    }

    /// Menu label for an entry.
    #[must_use]
    pub fn entry_display_name(&self, entry: &JournalEntry) -> String {
        entry.display_name(self.untitled_label())
    }

    /// Drop-down menu over both stacks, capped by `menu_display_limit`.
    #[must_use]
    pub fn journal_menu(&self) -> JournalMenu {
        let journal = self.journal.borrow();
        JournalMenu::build(
            &journal,
            self.config.menu_display_limit,
            self.untitled_label(),
            |count| self.overflow_label(count),
        )
    }

    /// Perform the journal move a menu item stands for.
    ///
    /// Fails if the journal changed since the menu was built.
    pub fn navigate_to_menu_item(&mut self, item: &JournalMenuItem) -> Result<NavigationOutcome> {
        let side = item.direction.side();
        let current = item
            .steps
            .checked_sub(1)
            .and_then(|depth| self.journal.borrow().peek_at(side, depth).map(JournalEntry::id));
        if current != Some(item.entry_id) {
            return Err(NavigationError::invalid_state(format!(
                "journal menu item {} is stale",
                item.entry_id
            )));
        }
        self.journal_move(side, item.steps)
    }

    // ========================================================================
    // Deferred work
    // ========================================================================

    /// Handle for posting deferred jobs to this host.
    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.clone()
    }

    /// Run queued jobs in FIFO order, including jobs they post, up to
    /// `max_dispatch_turns`. Returns how many ran.
    pub fn run_pending(&mut self) -> usize {
        let budget = self.config.max_dispatch_turns;
        let mut ran = 0;
        while ran < budget {
            let Some(job) = self.dispatcher.pop() else {
                break;
            };
            job(self);
            ran += 1;
        }
        if ran == budget && !self.dispatcher.is_idle() {
            warn!(
                budget,
                pending = self.dispatcher.pending(),
                "dispatcher turn budget exhausted"
            );
        }
        ran
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn navigate_new(&mut self, target: NavigationTarget) -> Result<NavigationOutcome> {
        let mode = NavigationMode::New;
        let (uri, page) = match target {
            NavigationTarget::Uri(uri) => (Some(uri.resolve_against(self.source.as_ref())), None),
            NavigationTarget::Page(page) => (None, Some(page)),
            NavigationTarget::Null => (None, None),
        };

        self.state = NavigationState::Navigating;
        if self.raise_navigating(mode, uri.clone(), page.clone()) {
            return Ok(self.cancelled(mode));
        }

        let landing = match uri {
            Some(uri) => self.resolve_uri(uri, mode)?,
            None => Landing {
                content: page,
                source: None,
                fragment: None,
            },
        };

        if self.has_navigated {
            let leaving = self.capture_leaving_entry(mode);
            let cleared = self.record_new_entry(leaving);
            debug!(cleared_forward = cleared, "journaled page being left");
        }
        self.has_navigated = true;
        self.content = landing.content;
        self.source = landing.source;
        self.complete(mode, landing.fragment);
        Ok(NavigationOutcome::Completed { mode })
    }

    fn journal_move(&mut self, from: StackSide, steps: usize) -> Result<NavigationOutcome> {
        let (mode, direction) = match from {
            StackSide::Back => (NavigationMode::Back, "back"),
            StackSide::Forward => (NavigationMode::Forward, "forward"),
        };
        if self.parent.is_some() {
            return Err(NavigationError::invalid_state(format!(
                "cannot go {direction}: host does not own its journal"
            )));
        }
        let target = {
            let journal = self.journal.borrow();
            let depth = journal.depth(from);
            if depth == 0 {
                return Err(NavigationError::invalid_state(format!(
                    "no entries to go {direction} to"
                )));
            }
            if steps == 0 || steps > depth {
                return Err(NavigationError::invalid_state(format!(
                    "cannot go {direction} {steps} entries; {depth} available"
                )));
            }
            journal.peek_at(from, steps - 1).cloned()
        };
        let Some(target) = target else {
            return Err(NavigationError::invalid_state(format!(
                "no entries to go {direction} to"
            )));
        };
        let target_id = target.id();
        let _span = debug_span!("journal_move", mode = %mode, steps, entry = %target_id).entered();

        self.land_on(target, mode, |service: &mut Self| {
            let leaving = service.capture_move_leaving_entry(mode);
            let mut journal = service.journal.borrow_mut();
            journal.push(from.opposite(), leaving);
            journal.transfer(from, steps - 1);
            let landed = journal.pop(from);
            debug_assert_eq!(landed.as_ref().map(JournalEntry::id), Some(target_id));
            debug!(
                back_depth = journal.back_depth(),
                forward_depth = journal.forward_depth(),
                "journal move committed"
            );
        })
    }

    /// Show an entry handed back by the parent journal. Own stacks are not
    /// touched.
    pub(crate) fn restore_entry(
        &mut self,
        entry: JournalEntry,
        mode: NavigationMode,
    ) -> Result<NavigationOutcome> {
        let _span = debug_span!("restore_entry", mode = %mode, entry = %entry.id()).entered();
        self.land_on(entry, mode, |_: &mut Self| {})
    }

    /// Land on `target`: raise `navigating`, resolve content, run `commit`,
    /// replay custom state, notify, then follow replay redirects.
    fn land_on(
        &mut self,
        target: JournalEntry,
        mode: NavigationMode,
        commit: impl FnOnce(&mut Self),
    ) -> Result<NavigationOutcome> {
        let (proposed_uri, proposed_content) = match target.destination() {
            Destination::Source(uri) => (Some(uri.clone()), None),
            Destination::Snapshot(page) => (None, page.clone()),
            Destination::CustomState(_) => target
                .origin()
                .map_or((None, None), |origin| (origin.source.clone(), origin.content.clone())),
        };
        self.state = NavigationState::Navigating;
        if self.raise_navigating(mode, proposed_uri, proposed_content) {
            return Ok(self.cancelled(mode));
        }

        let landing = match target.destination() {
            Destination::Source(uri) => self.resolve_uri(uri.clone(), mode)?,
            Destination::Snapshot(page) => Landing {
                content: page.clone(),
                source: None,
                fragment: None,
            },
            Destination::CustomState(_) => match target.origin() {
                Some(origin) => Landing {
                    content: origin.content.clone(),
                    source: origin.source.clone(),
                    fragment: None,
                },
                None => Landing {
                    content: self.content.clone(),
                    source: self.source.clone(),
                    fragment: None,
                },
            },
        };

        commit(self);
        self.has_navigated = true;
        self.content = landing.content;
        self.source = landing.source;

        let redirects = match target.custom_state() {
            Some(state) => {
                let mut ctx = ReplayContext::new(mode, &mut self.content, &mut self.source);
                state.replay(&mut ctx, mode);
                ctx.into_redirects()
            }
            None => Vec::new(),
        };

        self.complete(mode, landing.fragment);
        self.follow_redirects(redirects);
        Ok(NavigationOutcome::Completed { mode })
    }

    /// Run replay redirects as new navigations. The journal move that
    /// queued them has already committed, so a redirect that is cancelled
    /// or fails to load leaves the host on the replayed page.
    fn follow_redirects(&mut self, redirects: Vec<NavigationTarget>) {
        for redirect in redirects {
            debug!(redirect = %redirect, "replay redirect");
            match self.navigate_new(redirect) {
                Ok(NavigationOutcome::Completed { .. }) => {}
                Ok(NavigationOutcome::Cancelled { .. }) => {
                    self.state = NavigationState::Loaded;
                    break;
                }
                Err(err) => {
                    warn!(error = %err, "replay redirect failed");
                    self.state = NavigationState::Loaded;
                    break;
                }
            }
        }
    }

    /// Resolve a landing uri. A fragment in the current document, or a
    /// journal move within it, keeps the current content.
    fn resolve_uri(&mut self, uri: NavUri, mode: NavigationMode) -> Result<Landing> {
        let fragment = uri.fragment().map(str::to_string);
        let same_document = self
            .source
            .as_ref()
            .is_some_and(|current| current.same_document(&uri));
        let content = if same_document && (fragment.is_some() || mode.is_journal_move()) {
            self.content.clone()
        } else {
            self.load(&uri)?
        };
        Ok(Landing {
            content,
            source: Some(uri),
            fragment,
        })
    }

    fn load(&mut self, uri: &NavUri) -> Result<Option<Page>> {
        match self.loader.load(uri) {
            Ok(content) => Ok(content),
            Err(err) => {
                self.state = NavigationState::Idle;
                warn!(uri = %uri, error = %err, "content load failed");
                Err(err)
            }
        }
    }

    /// Entry recording the page currently shown.
    fn capture_leaving_entry(&mut self, mode: NavigationMode) -> JournalEntry {
        let id = self.allocate_entry_id();
        let mut provider = self.state_provider.borrow_mut();
        capture_entry(id, mode, self.content.as_ref(), self.source.as_ref(), &mut provider)
    }

    /// Entry for the page left by a journal move. A frame that navigated
    /// into this journal last stands in for this host's own page.
    fn capture_move_leaving_entry(&mut self, mode: NavigationMode) -> JournalEntry {
        if let Some(link) = self.journal.take_active_frame() {
            if let Some(current) = link.capture(self.journal.allocate_id(), mode) {
                return self.journal.frame_step(link, current, mode);
            }
        }
        self.capture_leaving_entry(mode)
    }

    /// Record a `New` entry into whichever journal this service writes to.
    /// Returns the number of forward entries discarded.
    fn record_new_entry(&mut self, entry: JournalEntry) -> usize {
        match &self.parent {
            Some(parent) => {
                let step = parent.journal.frame_step(parent.link.clone(), entry, NavigationMode::New);
                let cleared = parent.journal.borrow_mut().record_new(step);
                parent.journal.set_active_frame(Some(parent.link.clone()));
                cleared
            }
            None => {
                self.journal.take_active_frame();
                self.journal.borrow_mut().record_new(entry)
            }
        }
    }

    /// Tell the parent journal which page this frame shows.
    fn publish_current(&self) {
        if let Some(parent) = self.parent.as_ref().filter(|_| self.has_navigated) {
            parent
                .link
                .publish(EntryOrigin::new(self.content.clone(), self.source.clone()));
        }
    }

    fn allocate_entry_id(&mut self) -> EntryId {
        match &self.parent {
            Some(parent) => parent.journal.allocate_id(),
            None => self.journal.allocate_id(),
        }
    }

    /// Raise `navigating`; true if any observer cancelled.
    fn raise_navigating(
        &mut self,
        mode: NavigationMode,
        uri: Option<NavUri>,
        content: Option<Page>,
    ) -> bool {
        let mut args = NavigatingEventArgs::new(mode, uri, content);
        for (_, observer) in &mut self.observers {
            observer.navigating(&mut args);
        }
        args.is_cancelled()
    }

    fn cancelled(&mut self, mode: NavigationMode) -> NavigationOutcome {
        self.state = NavigationState::Idle;
        debug!(mode = %mode, "navigation cancelled");
        NavigationOutcome::Cancelled { mode }
    }

    fn complete(&mut self, mode: NavigationMode, fragment: Option<String>) {
        self.state = NavigationState::Loaded;
        self.publish_current();
        debug!(
            mode = %mode,
            source = ?self.source,
            content = ?self.content.as_ref().map(Page::name),
            "navigation completed"
        );
        if let Some(fragment) = fragment {
            let args = FragmentNavigationEventArgs { fragment, mode };
            for (_, observer) in &mut self.observers {
                observer.fragment_navigation(&args);
            }
        }
        let args = NavigationEventArgs {
            mode,
            uri: self.source.clone(),
            content: self.content.clone(),
        };
        for (_, observer) in &mut self.observers {
            observer.navigated(&args);
        }
        for (_, observer) in &mut self.observers {
            observer.load_completed(&args);
        }
    }

    fn overflow_label(&self, count: usize) -> String {
        let count = count.to_string();
        self.catalog
            .format(&self.config.locale, keys::MENU_OVERFLOW, &[("count", count.as_str())])
            .unwrap_or_else(|| format!("{count} more"))
    }
}

/// Entry that brings back `content`/`source`.
///
/// Provider state wins and remembers the page it was taken on; otherwise
/// the uri, then a snapshot of the content. A page title names uri and
/// snapshot entries.
pub(crate) fn capture_entry(
    id: EntryId,
    mode: NavigationMode,
    content: Option<&Page>,
    source: Option<&NavUri>,
    provider: &mut Option<Box<dyn ContentStateProvider>>,
) -> JournalEntry {
    let provided = provider
        .as_mut()
        .and_then(|provider| provider.content_state(content, source));
    if let Some(state) = provided {
        let origin = EntryOrigin::new(content.cloned(), source.cloned());
        return JournalEntry::new(id, Destination::CustomState(state), mode).with_origin(origin);
    }
    let entry = match source {
        Some(uri) => JournalEntry::new(id, Destination::Source(uri.clone()), mode),
        None => JournalEntry::new(id, Destination::Snapshot(content.cloned()), mode),
    };
    match content.and_then(Page::title).filter(|title| !title.is_empty()) {
        Some(title) => entry.with_name(title),
        None => entry,
    }
}

// ============================================================================
// Tests
// ============================================================================
