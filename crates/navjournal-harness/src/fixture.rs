#![forbid(unsafe_code)]

//! Reference fixtures for journal tests.
//!
//! - [`ListSelection`] models a page-local list box whose selection is
//!   journaled through [`SelectionState`] entries rather than navigations.
//! - [`RedirectState`] replays by navigating somewhere else.
//! - [`navigate_pages`] and [`page_names`] build and read journals.

use std::cell::RefCell;
use std::rc::Rc;

use navjournal_core::{
    CustomContentState, JournalEntry, NavUri, NavigationMode, NavigationTarget, Page,
    ReplayContext, Result,
};
use navjournal_runtime::{ContentStateProvider, NavigableHost};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the test log filter.
pub const LOG_ENV: &str = "NAVJOURNAL_LOG";

/// Install a test-writer `tracing` subscriber once per process.
///
/// The filter comes from `NAVJOURNAL_LOG` and defaults to `warn`.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Navigate `host` through `Page0 .. Page{count-1}` as page objects.
pub fn navigate_pages(host: &mut dyn NavigableHost, count: usize) -> Result<()> {
    for i in 0..count {
        host.navigate(NavigationTarget::Page(Page::new(format!("Page{i}"))))?;
    }
    Ok(())
}

/// Display names of `entries`, with `Untitled` for unnamed ones.
#[must_use]
pub fn page_names(entries: &[JournalEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| entry.display_name("Untitled"))
        .collect()
}

// ============================================================================
// List selection
// ============================================================================

/// Shared selection of a page-local list box.
#[derive(Debug, Clone, Default)]
pub struct ListSelection {
    selected: Rc<RefCell<Option<String>>>,
}

impl ListSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, item: impl Into<String>) {
        *self.selected.borrow_mut() = Some(item.into());
    }

    pub fn clear(&self) {
        *self.selected.borrow_mut() = None;
    }

    #[must_use]
    pub fn selected(&self) -> Option<String> {
        self.selected.borrow().clone()
    }

    /// Journalable state for the current selection.
    #[must_use]
    pub fn snapshot(&self) -> SelectionState {
        SelectionState {
            list: self.clone(),
            item: self.selected(),
        }
    }
}

/// Journaled list selection; replay re-selects the item on whatever page
/// the host landed on.
#[derive(Debug)]
pub struct SelectionState {
    list: ListSelection,
    item: Option<String>,
}

impl SelectionState {
    #[must_use]
    pub fn item(&self) -> Option<&str> {
        self.item.as_deref()
    }
}

impl CustomContentState for SelectionState {
    fn journal_entry_name(&self) -> Option<String> {
        self.item.clone()
    }

    fn replay(&self, _ctx: &mut ReplayContext<'_>, _mode: NavigationMode) {
        *self.list.selected.borrow_mut() = self.item.clone();
    }
}

/// Provider journaling the list's selection whenever the host leaves
/// `document`. Other pages fall back to ordinary entries.
pub fn selection_provider(list: ListSelection, document: NavUri) -> impl ContentStateProvider {
    move |_: Option<&Page>, source: Option<&NavUri>| -> Option<Rc<dyn CustomContentState>> {
        if !source.is_some_and(|uri| uri.same_document(&document)) {
            return None;
        }
        let state: Rc<dyn CustomContentState> = Rc::new(list.snapshot());
        Some(state)
    }
}

// ============================================================================
// Redirect
// ============================================================================

/// Custom state whose replay navigates to `target`.
#[derive(Debug, Clone)]
pub struct RedirectState {
    name: String,
    target: NavigationTarget,
}

impl RedirectState {
    #[must_use]
    pub fn new(name: impl Into<String>, target: impl Into<NavigationTarget>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
        }
    }
}

impl CustomContentState for RedirectState {
    fn journal_entry_name(&self) -> Option<String> {
        Some(self.name.clone())
    }

    fn replay(&self, ctx: &mut ReplayContext<'_>, _mode: NavigationMode) {
        ctx.navigate(self.target.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navjournal_runtime::NavigationWindow;

    #[test]
    fn navigate_pages_builds_history() {
        let mut window = NavigationWindow::new("w");
        navigate_pages(&mut window, 4).expect("navigate");
        assert_eq!(page_names(&window.back_stack()), vec!["Page2", "Page1", "Page0"]);
    }

    #[test]
    fn selection_snapshot_replays() {
        let list = ListSelection::new();
        list.select("Dopey");
        let state = list.snapshot();
        list.select("Sneezy");

        let mut content = None;
        let mut source = None;
        let mut ctx = ReplayContext::new(NavigationMode::Back, &mut content, &mut source);
        state.replay(&mut ctx, NavigationMode::Back);

        assert_eq!(list.selected().as_deref(), Some("Dopey"));
        assert_eq!(state.journal_entry_name().as_deref(), Some("Dopey"));
        assert_eq!(state.item(), Some("Dopey"));
    }

    #[test]
    fn selection_replay_leaves_content_alone() {
        let list = ListSelection::new();
        list.select("Bashful");
        let state = list.snapshot();

        let mut content = Some(Page::new("Page1.xaml"));
        let mut source = Some(NavUri::new("Page1.xaml"));
        let mut ctx = ReplayContext::new(NavigationMode::Back, &mut content, &mut source);
        state.replay(&mut ctx, NavigationMode::Back);

        assert_eq!(content, Some(Page::new("Page1.xaml")));
        assert_eq!(source, Some(NavUri::new("Page1.xaml")));
        assert_eq!(list.selected().as_deref(), Some("Bashful"));
    }

    #[test]
    fn provider_only_covers_its_document() {
        let list = ListSelection::new();
        list.select("Doc");
        let mut provider = selection_provider(list, NavUri::new("Page1.xaml"));
        let page1 = NavUri::new("Page1.xaml#top");
        let page2 = NavUri::new("Page2.xaml");

        let state = provider.content_state(None, Some(&page1)).expect("state");
        assert_eq!(state.journal_entry_name().as_deref(), Some("Doc"));
        assert!(provider.content_state(None, Some(&page2)).is_none());
        assert!(provider.content_state(None, None).is_none());
    }

    #[test]
    fn empty_selection_is_unnamed() {
        let list = ListSelection::new();
        assert!(list.snapshot().journal_entry_name().is_none());
        list.select("x");
        list.clear();
        assert!(list.selected().is_none());
    }

    #[test]
    fn logging_init_is_idempotent() {
        init_test_logging();
        init_test_logging();
    }
}
