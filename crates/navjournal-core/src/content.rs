#![forbid(unsafe_code)]

//! Displayed content and navigation targets.

use std::fmt;

use crate::uri::NavUri;

/// A page instance shown by a navigable host.
///
/// Pages are compared by value; the `name` identifies the page and the
/// optional `title` is what a journal menu shows for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Page {
    name: String,
    title: Option<String>,
}

impl Page {
    /// Create an untitled page.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
        }
    }

    /// Set the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Identifying name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display title, if one was set.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Where a `Navigate` call is headed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavigationTarget {
    /// Load content from a uri.
    Uri(NavUri),
    /// Show an already-constructed page.
    Page(Page),
    /// Show nothing. A valid navigation, not an error.
    #[default]
    Null,
}

impl NavigationTarget {
    /// The uri, for uri targets.
    #[must_use]
    pub fn uri(&self) -> Option<&NavUri> {
        match self {
            Self::Uri(uri) => Some(uri),
            _ => None,
        }
    }

    /// The page, for object targets.
    #[must_use]
    pub fn page(&self) -> Option<&Page> {
        match self {
            Self::Page(page) => Some(page),
            _ => None,
        }
    }

    /// True for the `null` target.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uri(uri) => write!(f, "uri:{uri}"),
            Self::Page(page) => write!(f, "page:{}", page.name()),
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<NavUri> for NavigationTarget {
    fn from(uri: NavUri) -> Self {
        Self::Uri(uri)
    }
}

impl From<&str> for NavigationTarget {
    fn from(raw: &str) -> Self {
        Self::Uri(NavUri::new(raw))
    }
}

impl From<Page> for NavigationTarget {
    fn from(page: Page) -> Self {
        Self::Page(page)
    }
}

impl From<Option<Page>> for NavigationTarget {
    fn from(page: Option<Page>) -> Self {
        page.map_or(Self::Null, Self::Page)
    }
}
