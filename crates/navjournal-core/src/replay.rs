#![forbid(unsafe_code)]

//! Context handed to [`CustomContentState::replay`](crate::CustomContentState::replay).
//!
//! The context exposes the content the host just landed on and lets the
//! replay either restore different content in place (no journal record) or
//! queue redirect navigations. Redirects are drained by the host after the
//! landing move has committed and run as ordinary `New` navigations.

use crate::content::{NavigationTarget, Page};
use crate::mode::NavigationMode;
use crate::uri::NavUri;

/// Mutable view of a host during custom state replay.
#[derive(Debug)]
pub struct ReplayContext<'a> {
    mode: NavigationMode,
    content: &'a mut Option<Page>,
    source: &'a mut Option<NavUri>,
    redirects: Vec<NavigationTarget>,
}

impl<'a> ReplayContext<'a> {
    /// Borrow a host's content slots for one replay.
    pub fn new(
        mode: NavigationMode,
        content: &'a mut Option<Page>,
        source: &'a mut Option<NavUri>,
    ) -> Self {
        Self {
            mode,
            content,
            source,
            redirects: Vec::new(),
        }
    }

    /// Mode of the journal move that triggered the replay.
    #[must_use]
    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    /// Content currently shown by the host.
    #[must_use]
    pub fn content(&self) -> Option<&Page> {
        self.content.as_ref()
    }

    /// Source uri of the current content.
    #[must_use]
    pub fn source(&self) -> Option<&NavUri> {
        self.source.as_ref()
    }

    /// Swap the displayed content without recording a journal entry.
    pub fn restore(&mut self, content: Option<Page>, source: Option<NavUri>) {
        *self.content = content;
        *self.source = source;
    }

    /// Queue a redirect navigation.
    pub fn navigate(&mut self, target: impl Into<NavigationTarget>) {
        self.redirects.push(target.into());
    }

    /// Redirects queued so far, in request order.
    #[must_use]
    pub fn redirects(&self) -> &[NavigationTarget] {
        &self.redirects
    }

    /// Consume the context, yielding queued redirects.
    #[must_use]
    pub fn into_redirects(self) -> Vec<NavigationTarget> {
        self.redirects
    }
}
