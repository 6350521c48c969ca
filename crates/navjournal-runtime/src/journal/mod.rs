#![forbid(unsafe_code)]

//! Journal storage and presentation.
//!
//! - [`JournalStacks`]: the back/forward entry pair, unbounded.
//! - [`JournalMenu`]: capped, nearest-first view for drop-down menus.
//! - [`SharedJournal`]: handle through which frames record into a
//!   parent's stacks.

mod menu;
mod shared;
mod stack;

pub use menu::{JournalMenu, JournalMenuItem, MenuDirection};
pub(crate) use shared::{FrameLink, ProviderSlot};
pub use shared::SharedJournal;
pub use stack::{JournalStacks, StackSide};
