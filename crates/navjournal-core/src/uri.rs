#![forbid(unsafe_code)]

//! Navigation uris with fragment handling.
//!
//! A [`NavUri`] is an opaque string split into a *document* part and an
//! optional *fragment* after the first `#`. Two uris address the same
//! document when their document parts are equal; a navigation between
//! them is a fragment navigation and does not reload content.

use std::fmt;

/// A navigation target address such as `Page1.xaml` or `Page1.xaml#top`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavUri(String);

impl NavUri {
    /// Wrap a raw uri string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The full uri text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything before the first `#`.
    #[must_use]
    pub fn document(&self) -> &str {
        match self.0.find('#') {
            Some(idx) => &self.0[..idx],
            None => &self.0,
        }
    }

    /// The fragment after the first `#`, if present and non-empty.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        let idx = self.0.find('#')?;
        let fragment = &self.0[idx + 1..];
        (!fragment.is_empty()).then_some(fragment)
    }

    /// True when the uri is only a fragment (`#name`) with no document.
    #[must_use]
    pub fn is_fragment_only(&self) -> bool {
        self.0.starts_with('#')
    }

    /// Same document, different fragment.
    #[must_use]
    pub fn with_fragment(&self, fragment: &str) -> Self {
        Self(format!("{}#{fragment}", self.document()))
    }

    /// Resolve a fragment-only uri against `base`.
    ///
    /// Non-fragment uris, or any uri without a base, are returned unchanged.
    #[must_use]
    pub fn resolve_against(self, base: Option<&NavUri>) -> Self {
        match base {
            Some(base) if self.is_fragment_only() => Self(format!("{}{}", base.document(), self.0)),
            _ => self,
        }
    }

    /// True when both uris name the same document.
    #[must_use]
    pub fn same_document(&self, other: &NavUri) -> bool {
        self.document() == other.document()
    }
}

impl fmt::Display for NavUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NavUri {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for NavUri {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_and_fragment() {
        let uri = NavUri::new("Page1.xaml#bottom");
        assert_eq!(uri.document(), "Page1.xaml");
        assert_eq!(uri.fragment(), Some("bottom"));
    }

    #[test]
    fn no_fragment() {
        let uri = NavUri::new("Page1.xaml");
        assert_eq!(uri.document(), "Page1.xaml");
        assert_eq!(uri.fragment(), None);
    }

    #[test]
    fn empty_fragment_is_none() {
        let uri = NavUri::new("Page1.xaml#");
        assert_eq!(uri.fragment(), None);
        assert_eq!(uri.document(), "Page1.xaml");
    }

    #[test]
    fn fragment_only_resolves_against_base() {
        let base = NavUri::new("Page3.xaml#fragment6");
        let resolved = NavUri::new("#fragment4").resolve_against(Some(&base));
        assert_eq!(resolved.as_str(), "Page3.xaml#fragment4");
    }

    #[test]
    fn fragment_only_without_base_is_unchanged() {
        let resolved = NavUri::new("#top").resolve_against(None);
        assert_eq!(resolved.as_str(), "#top");
    }

    #[test]
    fn full_uri_ignores_base() {
        let base = NavUri::new("Page1.xaml");
        let resolved = NavUri::new("Page2.xaml#x").resolve_against(Some(&base));
        assert_eq!(resolved.as_str(), "Page2.xaml#x");
    }

    #[test]
    fn with_fragment_replaces_existing() {
        let uri = NavUri::new("Page2.xaml#fragment2");
        assert_eq!(uri.with_fragment("fragment3").as_str(), "Page2.xaml#fragment3");
    }

    #[test]
    fn same_document_ignores_fragment() {
        let a = NavUri::new("Page2.xaml#a");
        let b = NavUri::new("Page2.xaml#b");
        let c = NavUri::new("Page4.xaml#a");
        assert!(a.same_document(&b));
        assert!(!a.same_document(&c));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn with_fragment_keeps_document(doc in "[A-Za-z0-9_./]{1,24}", frag in "[a-z0-9]{1,12}") {
                let uri = NavUri::new(doc.clone()).with_fragment(&frag);
                prop_assert_eq!(uri.document(), doc.as_str());
                prop_assert_eq!(uri.fragment(), Some(frag.as_str()));
            }

            #[test]
            fn resolving_full_uri_is_identity(doc in "[A-Za-z0-9_./]{1,24}", base in "[A-Za-z0-9_./]{1,24}") {
                let base = NavUri::new(base);
                let uri = NavUri::new(doc.clone()).resolve_against(Some(&base));
                prop_assert_eq!(uri.as_str(), doc.as_str());
            }
        }
    }
}
