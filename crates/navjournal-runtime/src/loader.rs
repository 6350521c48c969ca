#![forbid(unsafe_code)]

//! Collaborators a host calls while navigating.
//!
//! - [`ContentLoader`] turns a uri into content. The default,
//!   [`UriPageLoader`], names a page after the uri's document part.
//! - [`ContentStateProvider`] lets the page being left contribute a
//!   replayable [`CustomContentState`] for its journal entry.
//!
//! Both are implemented for matching closures.

use std::rc::Rc;

use navjournal_core::{CustomContentState, NavUri, Page, Result};

/// Resolves uris to content.
pub trait ContentLoader {
    /// Load the content a uri names. `Ok(None)` is a valid null page.
    fn load(&mut self, uri: &NavUri) -> Result<Option<Page>>;
}

impl<F> ContentLoader for F
where
    F: FnMut(&NavUri) -> Result<Option<Page>>,
{
    fn load(&mut self, uri: &NavUri) -> Result<Option<Page>> {
        self(uri)
    }
}

/// Default loader: every uri names a page after its document.
#[derive(Debug, Clone, Copy, Default)]
pub struct UriPageLoader;

impl ContentLoader for UriPageLoader {
    fn load(&mut self, uri: &NavUri) -> Result<Option<Page>> {
        Ok(Some(Page::new(uri.document())))
    }
}

/// Supplies custom state for the page being left.
pub trait ContentStateProvider {
    /// State to journal for `content`, or `None` to journal the uri or
    /// content snapshot instead.
    fn content_state(
        &mut self,
        content: Option<&Page>,
        source: Option<&NavUri>,
    ) -> Option<Rc<dyn CustomContentState>>;
}

impl<F> ContentStateProvider for F
where
    F: FnMut(Option<&Page>, Option<&NavUri>) -> Option<Rc<dyn CustomContentState>>,
{
    fn content_state(
        &mut self,
        content: Option<&Page>,
        source: Option<&NavUri>,
    ) -> Option<Rc<dyn CustomContentState>> {
        self(content, source)
    }
}
