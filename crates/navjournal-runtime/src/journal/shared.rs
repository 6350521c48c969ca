#![forbid(unsafe_code)]

//! Journals shared between a host and the frames it contains.
//!
//! Every [`NavigationService`](crate::NavigationService) holds a
//! [`SharedJournal`]. A frame that does not own its journal records into
//! its parent's instead: each page the frame leaves is wrapped in a frame
//! step, a custom state that hands the frame's own entry back to the frame
//! when the parent's journal lands on it.
//!
//! ```text
//! frame.navigate(B)          parent back: [.., step(frame@A)]
//! parent.go_back()           parent forward: [step(frame@B)]
//!                            frame dispatcher: restore A
//! frame.run_pending()        frame shows A
//! ```
//!
//! # Invariants
//!
//! 1. Entry ids are allocated per journal, so ids recorded by a frame into
//!    its parent never collide with the parent's own.
//! 2. The parent remembers which frame navigated last. A journal move on
//!    the parent journals that frame's current page instead of the
//!    parent's; a new navigation of the parent forgets it.
//! 3. Frame steps hold the journal weakly; dropping the parent's service
//!    frees its stacks.

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

use navjournal_core::{
    CustomContentState, Destination, EntryId, EntryOrigin, JournalEntry, NavigationMode,
    ReplayContext,
};
use tracing::warn;

use super::JournalStacks;
use crate::dispatcher::Dispatcher;
use crate::loader::ContentStateProvider;
use crate::service::capture_entry;

/// A service's content state provider, shared with the link its frame
/// hands to a parent journal.
pub(crate) type ProviderSlot = Rc<RefCell<Option<Box<dyn ContentStateProvider>>>>;

#[derive(Default)]
struct JournalCell {
    stacks: RefCell<JournalStacks>,
    next_entry_id: Cell<u64>,
    active_frame: RefCell<Option<FrameLink>>,
}

/// Reference-counted handle to one journal.
#[derive(Clone, Default)]
pub struct SharedJournal {
    inner: Rc<JournalCell>,
}

impl fmt::Debug for SharedJournal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedJournal")
            .field("stacks", &*self.inner.stacks.borrow())
            .field("has_active_frame", &self.inner.active_frame.borrow().is_some())
            .finish()
    }
}

impl SharedJournal {
    /// Create an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the stacks.
    ///
    /// # Panics
    ///
    /// Panics if the stacks are being mutated, which only happens inside a
    /// journal operation.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, JournalStacks> {
        self.inner.stacks.borrow()
    }

    pub(crate) fn borrow_mut(&self) -> RefMut<'_, JournalStacks> {
        self.inner.stacks.borrow_mut()
    }

    /// True if both handles refer to the same journal.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn allocate_id(&self) -> EntryId {
        let next = self.inner.next_entry_id.get() + 1;
        self.inner.next_entry_id.set(next);
        EntryId::new(next)
    }

    pub(crate) fn set_active_frame(&self, link: Option<FrameLink>) {
        *self.inner.active_frame.borrow_mut() = link;
    }

    pub(crate) fn take_active_frame(&self) -> Option<FrameLink> {
        self.inner.active_frame.borrow_mut().take()
    }

    /// Forget `link` if it is the active frame.
    pub(crate) fn release_frame(&self, link: &FrameLink) {
        let mut active = self.inner.active_frame.borrow_mut();
        if active.as_ref().is_some_and(|current| current.same_frame(link)) {
            *active = None;
        }
    }

    /// Wrap a frame's entry so this journal can hand it back to the frame.
    pub(crate) fn frame_step(
        &self,
        link: FrameLink,
        entry: JournalEntry,
        mode: NavigationMode,
    ) -> JournalEntry {
        let step = FrameStep {
            entry,
            link,
            journal: Rc::downgrade(&self.inner),
        };
        JournalEntry::new(self.allocate_id(), Destination::CustomState(Rc::new(step)), mode)
    }
}

// ============================================================================
// Frame links
// ============================================================================

/// A frame's end of a shared journal: where to post restores, the page
/// the frame shows, and the frame's content state provider.
///
/// The page is published at every commit. Provider state is captured only
/// when the parent journals the frame, so it reflects sub-state changed
/// since the last commit.
#[derive(Clone)]
pub(crate) struct FrameLink {
    dispatcher: Dispatcher,
    page: Rc<RefCell<Option<EntryOrigin>>>,
    provider: ProviderSlot,
}

impl fmt::Debug for FrameLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameLink")
            .field("dispatcher", &self.dispatcher)
            .field("page", &*self.page.borrow())
            .finish_non_exhaustive()
    }
}

impl FrameLink {
    pub(crate) fn new(dispatcher: Dispatcher, provider: ProviderSlot) -> Self {
        Self {
            dispatcher,
            page: Rc::default(),
            provider,
        }
    }

    pub(crate) fn publish(&self, page: EntryOrigin) {
        *self.page.borrow_mut() = Some(page);
    }

    /// Entry for the frame's current page, or `None` before the frame's
    /// first navigation.
    pub(crate) fn capture(&self, id: EntryId, mode: NavigationMode) -> Option<JournalEntry> {
        let page = self.page.borrow().clone()?;
        let mut provider = self.provider.borrow_mut();
        Some(capture_entry(
            id,
            mode,
            page.content.as_ref(),
            page.source.as_ref(),
            &mut provider,
        ))
    }

    fn same_frame(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.page, &other.page)
    }
}

#[derive(Debug)]
struct FrameStep {
    entry: JournalEntry,
    link: FrameLink,
    journal: Weak<JournalCell>,
}

impl CustomContentState for FrameStep {
    fn journal_entry_name(&self) -> Option<String> {
        let name = self.entry.display_name("");
        (!name.is_empty()).then_some(name)
    }

    fn replay(&self, _ctx: &mut ReplayContext<'_>, mode: NavigationMode) {
        if let Some(journal) = self.journal.upgrade() {
            *journal.active_frame.borrow_mut() = Some(self.link.clone());
        }
        let entry = self.entry.clone();
        self.link.dispatcher.post(move |frame| {
            if let Err(err) = frame.restore_entry(entry, mode) {
                warn!(error = %err, "frame restore failed");
            }
        });
    }
}
