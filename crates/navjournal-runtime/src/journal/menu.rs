#![forbid(unsafe_code)]

//! Drop-down menu model over the journal stacks.
//!
//! Each direction lists its nearest entries first, capped at the configured
//! display limit. Entries past the cap stay in storage and are reported as
//! a hidden count with a localized overflow label.

use navjournal_core::EntryId;

use super::stack::{JournalStacks, StackSide};

/// Direction of a menu item relative to the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuDirection {
    Back,
    Forward,
}

impl MenuDirection {
    pub(crate) fn side(self) -> StackSide {
        match self {
            Self::Back => StackSide::Back,
            Self::Forward => StackSide::Forward,
        }
    }
}

/// One selectable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalMenuItem {
    /// Journal moves needed to reach the entry (1 = adjacent).
    pub steps: usize,
    pub direction: MenuDirection,
    pub entry_id: EntryId,
    pub label: String,
}

/// Menu rows for both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalMenu {
    back: Vec<JournalMenuItem>,
    forward: Vec<JournalMenuItem>,
    hidden_back: usize,
    hidden_forward: usize,
    overflow_back: Option<String>,
    overflow_forward: Option<String>,
}

impl JournalMenu {
    /// Build a menu from `stacks`.
    ///
    /// `untitled` labels entries nothing else names; `overflow` renders the
    /// label for a non-zero hidden count.
    pub fn build<F>(stacks: &JournalStacks, limit: usize, untitled: &str, overflow: F) -> Self
    where
        F: Fn(usize) -> String,
    {
        let (back, hidden_back) = items(stacks, MenuDirection::Back, limit, untitled);
        let (forward, hidden_forward) = items(stacks, MenuDirection::Forward, limit, untitled);
        Self {
            back,
            forward,
            hidden_back,
            hidden_forward,
            overflow_back: (hidden_back > 0).then(|| overflow(hidden_back)),
            overflow_forward: (hidden_forward > 0).then(|| overflow(hidden_forward)),
        }
    }

    /// Back rows, nearest first.
    #[must_use]
    pub fn back_items(&self) -> &[JournalMenuItem] {
        &self.back
    }

    /// Forward rows, nearest first.
    #[must_use]
    pub fn forward_items(&self) -> &[JournalMenuItem] {
        &self.forward
    }

    /// Rows for one direction.
    #[must_use]
    pub fn items(&self, direction: MenuDirection) -> &[JournalMenuItem] {
        match direction {
            MenuDirection::Back => &self.back,
            MenuDirection::Forward => &self.forward,
        }
    }

    /// Entries stored but not shown.
    #[must_use]
    pub fn hidden(&self, direction: MenuDirection) -> usize {
        match direction {
            MenuDirection::Back => self.hidden_back,
            MenuDirection::Forward => self.hidden_forward,
        }
    }

    /// Overflow label, present only when entries are hidden.
    #[must_use]
    pub fn overflow_label(&self, direction: MenuDirection) -> Option<&str> {
        match direction {
            MenuDirection::Back => self.overflow_back.as_deref(),
            MenuDirection::Forward => self.overflow_forward.as_deref(),
        }
    }

    /// True when neither direction has rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.back.is_empty() && self.forward.is_empty()
    }
}

fn items(
    stacks: &JournalStacks,
    direction: MenuDirection,
    limit: usize,
    untitled: &str,
) -> (Vec<JournalMenuItem>, usize) {
    let side = direction.side();
    let shown = stacks
        .iter(side)
        .take(limit)
        .enumerate()
        .map(|(idx, entry)| JournalMenuItem {
            steps: idx + 1,
            direction,
            entry_id: entry.id(),
            label: entry.display_name(untitled),
        })
        .collect::<Vec<_>>();
    let hidden = stacks.depth(side).saturating_sub(shown.len());
    (shown, hidden)
}

#[cfg(test)]
mod tests {
    use super::*;
    use navjournal_core::{Destination, JournalEntry, NavigationMode, Page};

    fn stacks_with(back: usize, forward: usize) -> JournalStacks {
        let mut stacks = JournalStacks::new();
        let mut id = 0;
        for i in 0..back {
            id += 1;
            stacks.push(
                StackSide::Back,
                JournalEntry::new(
                    EntryId::new(id),
                    Destination::Snapshot(Some(Page::new(format!("B{i}")))),
                    NavigationMode::New,
                ),
            );
        }
        for _ in 0..forward {
            id += 1;
            stacks.push(
                StackSide::Forward,
                JournalEntry::new(
                    EntryId::new(id),
                    Destination::Snapshot(None),
                    NavigationMode::Back,
                ),
            );
        }
        stacks
    }

    fn overflow(count: usize) -> String {
        format!("{count} more")
    }

    #[test]
    fn caps_each_direction() {
        let stacks = stacks_with(12, 2);
        let menu = JournalMenu::build(&stacks, 9, "Untitled", overflow);

        assert_eq!(menu.back_items().len(), 9);
        assert_eq!(menu.hidden(MenuDirection::Back), 3);
        assert_eq!(menu.overflow_label(MenuDirection::Back), Some("3 more"));
        assert_eq!(menu.forward_items().len(), 2);
        assert_eq!(menu.hidden(MenuDirection::Forward), 0);
        assert_eq!(menu.overflow_label(MenuDirection::Forward), None);
        // Storage is untouched by presentation.
        assert_eq!(stacks.back_depth(), 12);
    }

    #[test]
    fn nearest_first_with_steps() {
        let stacks = stacks_with(3, 0);
        let menu = JournalMenu::build(&stacks, 9, "Untitled", overflow);
        let labels: Vec<_> = menu.back_items().iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["B2", "B1", "B0"]);
        let steps: Vec<_> = menu.back_items().iter().map(|i| i.steps).collect();
        assert_eq!(steps, vec![1, 2, 3]);
    }

    #[test]
    fn unnamed_entries_use_placeholder() {
        let stacks = stacks_with(0, 1);
        let menu = JournalMenu::build(&stacks, 9, "Sans titre", overflow);
        assert_eq!(menu.items(MenuDirection::Forward)[0].label, "Sans titre");
        assert_eq!(menu.items(MenuDirection::Forward)[0].direction, MenuDirection::Forward);
    }

    #[test]
    fn empty_menu() {
        let menu = JournalMenu::build(&JournalStacks::new(), 9, "Untitled", overflow);
        assert!(menu.is_empty());
    }

    #[test]
    fn zero_limit_hides_everything() {
        let stacks = stacks_with(2, 0);
        let menu = JournalMenu::build(&stacks, 0, "Untitled", overflow);
        assert!(menu.back_items().is_empty());
        assert_eq!(menu.hidden(MenuDirection::Back), 2);
    }
}
