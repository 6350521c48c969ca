#![forbid(unsafe_code)]

//! Back/forward stacks for a navigable host.
//!
//! [`JournalStacks`] holds the two ordered entry sequences of one host:
//!
//! - **Back stack**: pages that were left, most recent on top.
//! - **Forward stack**: pages undone by going back, most recent on top.
//!
//! # Invariants
//!
//! 1. A `New` record pushes onto the back stack and clears the forward
//!    stack entirely.
//! 2. `can_go_back()` iff the back stack is non-empty; likewise forward.
//! 3. Storage is unbounded; presentation limits (menus) never truncate.
//! 4. Snapshots are ordered most-recent-first.
//!
//! # Memory Model
//!
//! Entries are stored in `VecDeque`s with the newest entry at the back, so
//! pushes and pops are O(1) and snapshots iterate in reverse.
//!
//! ```text
//! navigate(E)
//! ┌───────────────────────────────────────────────┐
//! │ Back:    [A, B, C, D]                          │
//! │ Forward: []                                    │
//! └───────────────────────────────────────────────┘
//!
//! go_back() x2   (current E, then D)
//! ┌───────────────────────────────────────────────┐
//! │ Back:    [A, B]            current C           │
//! │ Forward: [E, D]                                │
//! └───────────────────────────────────────────────┘
//!
//! navigate(F)  <-- new branch, clears forward
//! ┌───────────────────────────────────────────────┐
//! │ Back:    [A, B, C]         current F           │
//! │ Forward: []                                    │
//! └───────────────────────────────────────────────┘
//! ```

use std::collections::VecDeque;
use std::fmt;

use navjournal_core::JournalEntry;

/// Which stack an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackSide {
    /// The back stack.
    Back,
    /// The forward stack.
    Forward,
}

impl StackSide {
    /// The other stack.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Back => Self::Forward,
            Self::Forward => Self::Back,
        }
    }
}

/// Back and forward entry stacks.
#[derive(Clone, Default)]
pub struct JournalStacks {
    /// Entries available for going back (newest at back).
    back: VecDeque<JournalEntry>,
    /// Entries available for going forward (newest at back).
    forward: VecDeque<JournalEntry>,
}

impl fmt::Debug for JournalStacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JournalStacks")
            .field("back_depth", &self.back.len())
            .field("forward_depth", &self.forward.len())
            .finish()
    }
}

impl JournalStacks {
    /// Create empty stacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Core Operations
    // ========================================================================

    /// Record the page left by a `New` navigation.
    ///
    /// Pushes onto the back stack and clears the forward stack (new branch).
    /// Returns the number of forward entries discarded.
    pub fn record_new(&mut self, entry: JournalEntry) -> usize {
        let cleared = self.clear_forward();
        self.back.push_back(entry);
        cleared
    }

    /// Push onto one stack without touching the other.
    pub fn push(&mut self, side: StackSide, entry: JournalEntry) {
        self.stack_mut(side).push_back(entry);
    }

    /// Pop the top entry of one stack.
    pub fn pop(&mut self, side: StackSide) -> Option<JournalEntry> {
        self.stack_mut(side).pop_back()
    }

    /// Top entry of one stack.
    #[must_use]
    pub fn peek(&self, side: StackSide) -> Option<&JournalEntry> {
        self.stack(side).back()
    }

    /// Entry `depth` positions below the top (0 = top).
    #[must_use]
    pub fn peek_at(&self, side: StackSide, depth: usize) -> Option<&JournalEntry> {
        let stack = self.stack(side);
        let idx = stack.len().checked_sub(depth + 1)?;
        stack.get(idx)
    }

    /// Move `count` entries from the top of `from` onto the opposite stack,
    /// one at a time, so their relative order flips the way individual
    /// journal moves would flip it.
    ///
    /// Returns how many entries moved (fewer than `count` if `from` runs out).
    pub fn transfer(&mut self, from: StackSide, count: usize) -> usize {
        let mut moved = 0;
        while moved < count {
            let Some(entry) = self.pop(from) else {
                break;
            };
            self.push(from.opposite(), entry);
            moved += 1;
        }
        moved
    }

    /// Remove and return the top of the back stack.
    ///
    /// Returns `None` on an empty stack; never fails.
    pub fn remove_back_entry(&mut self) -> Option<JournalEntry> {
        self.back.pop_back()
    }

    /// Check if going back is available.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    /// Check if going forward is available.
    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    // ========================================================================
    // Info
    // ========================================================================

    /// Number of entries on one stack.
    #[must_use]
    pub fn depth(&self, side: StackSide) -> usize {
        self.stack(side).len()
    }

    /// Back stack depth.
    #[must_use]
    pub fn back_depth(&self) -> usize {
        self.back.len()
    }

    /// Forward stack depth.
    #[must_use]
    pub fn forward_depth(&self) -> usize {
        self.forward.len()
    }

    /// Iterate one stack most-recent-first.
    pub fn iter(&self, side: StackSide) -> impl Iterator<Item = &JournalEntry> + '_ {
        self.stack(side).iter().rev()
    }

    /// Back stack snapshot, most recent first.
    #[must_use]
    pub fn back_entries(&self) -> Vec<JournalEntry> {
        self.iter(StackSide::Back).cloned().collect()
    }

    /// Forward stack snapshot, most recent first.
    #[must_use]
    pub fn forward_entries(&self) -> Vec<JournalEntry> {
        self.iter(StackSide::Forward).cloned().collect()
    }

    // ========================================================================
    // Maintenance
    // ========================================================================

    /// Clear both stacks.
    pub fn clear(&mut self) {
        self.back.clear();
        self.forward.clear();
    }

    /// Clear only the forward stack, returning how many entries were dropped.
    pub fn clear_forward(&mut self) -> usize {
        let cleared = self.forward.len();
        self.forward.clear();
        cleared
    }

    fn stack(&self, side: StackSide) -> &VecDeque<JournalEntry> {
        match side {
            StackSide::Back => &self.back,
            StackSide::Forward => &self.forward,
        }
    }

    fn stack_mut(&mut self, side: StackSide) -> &mut VecDeque<JournalEntry> {
        match side {
            StackSide::Back => &mut self.back,
            StackSide::Forward => &mut self.forward,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
