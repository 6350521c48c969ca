#![forbid(unsafe_code)]

//! Navigation mode tags.

use std::fmt;

/// How a navigation was requested.
///
/// The mode travels with every notification so observers can tell a fresh
/// navigation from a journal move or a reload of the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavigationMode {
    /// A fresh navigation to a new destination. Clears forward history.
    #[default]
    New,
    /// A move to an entry on the back stack.
    Back,
    /// A move to an entry on the forward stack.
    Forward,
    /// A reload of the current content. Never touches the journal.
    Refresh,
}

impl NavigationMode {
    /// Stable lowercase name, used in logs and recorded event streams.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Back => "back",
            Self::Forward => "forward",
            Self::Refresh => "refresh",
        }
    }

    /// True for modes that move through existing history.
    #[must_use]
    pub const fn is_journal_move(self) -> bool {
        matches!(self, Self::Back | Self::Forward)
    }
}

impl fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
