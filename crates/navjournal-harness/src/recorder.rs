#![forbid(unsafe_code)]

//! Notification recorder.
//!
//! [`EventLog`] is a shared, append-only list of every notification a host
//! raised. Attach [`EventLog::recorder`] as an observer, drive the host,
//! then assert on [`EventLog::kinds`] or export the stream as JSONL for CI
//! artifacts.
//!
//! JSONL schema, one object per line:
//!
//! ```text
//! {"seq":0,"event":"navigating","mode":"new","uri":"Page1.xaml","content":null,"cancelled":false,"fragment":null}
//! ```

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use navjournal_core::{NavUri, NavigationMode, Page};
use navjournal_runtime::{
    FragmentNavigationEventArgs, NavigatingEventArgs, NavigationEventArgs, NavigationObserver,
};
use serde_json::json;
use tracing::debug;

/// Notification kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Navigating,
    Navigated,
    FragmentNavigation,
    LoadCompleted,
}

impl EventKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Navigating => "navigating",
            Self::Navigated => "navigated",
            Self::FragmentNavigation => "fragment_navigation",
            Self::LoadCompleted => "load_completed",
        }
    }
}

/// One recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    pub seq: u64,
    pub kind: EventKind,
    pub mode: NavigationMode,
    pub uri: Option<String>,
    pub content: Option<String>,
    /// Cancel flag as seen when the recorder ran.
    pub cancelled: bool,
    pub fragment: Option<String>,
}

impl RecordedEvent {
    fn to_json(&self) -> serde_json::Value {
        json!({
            "seq": self.seq,
            "event": self.kind.as_str(),
            "mode": self.mode.as_str(),
            "uri": self.uri,
            "content": self.content,
            "cancelled": self.cancelled,
            "fragment": self.fragment,
        })
    }
}

/// Shared event list.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<RecordedEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Observer appending to this log.
    #[must_use]
    pub fn recorder(&self) -> EventRecorder {
        EventRecorder { log: self.clone() }
    }

    /// Snapshot of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    /// Recorded kinds, in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.borrow().iter().map(|e| e.kind).collect()
    }

    /// Events of one kind.
    #[must_use]
    pub fn of_kind(&self, kind: EventKind) -> Vec<RecordedEvent> {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.kind == kind)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// The whole log as JSONL.
    #[must_use]
    pub fn to_jsonl(&self) -> String {
        let mut out = String::new();
        for event in self.events.borrow().iter() {
            out.push_str(&event.to_json().to_string());
            out.push('\n');
        }
        out
    }

    /// Write the log as JSONL.
    pub fn write_jsonl<W: Write>(&self, mut writer: W) -> io::Result<()> {
        let events = self.events.borrow();
        for event in events.iter() {
            serde_json::to_writer(&mut writer, &event.to_json())?;
            writer.write_all(b"\n")?;
        }
        debug!(events = events.len(), "event log written");
        writer.flush()
    }

    fn push(
        &self,
        kind: EventKind,
        mode: NavigationMode,
        uri: Option<&NavUri>,
        content: Option<&Page>,
        cancelled: bool,
        fragment: Option<&str>,
    ) {
        let mut events = self.events.borrow_mut();
        let seq = events.len() as u64;
        events.push(RecordedEvent {
            seq,
            kind,
            mode,
            uri: uri.map(|u| u.as_str().to_string()),
            content: content.map(|p| p.name().to_string()),
            cancelled,
            fragment: fragment.map(str::to_string),
        });
    }
}

/// Observer half of an [`EventLog`].
#[derive(Debug, Clone)]
pub struct EventRecorder {
    log: EventLog,
}

impl NavigationObserver for EventRecorder {
    fn navigating(&mut self, args: &mut NavigatingEventArgs) {
        self.log.push(
            EventKind::Navigating,
            args.mode(),
            args.uri(),
            args.content(),
            args.is_cancelled(),
            None,
        );
    }

    fn navigated(&mut self, args: &NavigationEventArgs) {
        self.log.push(
            EventKind::Navigated,
            args.mode,
            args.uri.as_ref(),
            args.content.as_ref(),
            false,
            None,
        );
    }

    fn fragment_navigation(&mut self, args: &FragmentNavigationEventArgs) {
        self.log.push(
            EventKind::FragmentNavigation,
            args.mode,
            None,
            None,
            false,
            Some(args.fragment.as_str()),
        );
    }

    fn load_completed(&mut self, args: &NavigationEventArgs) {
        self.log.push(
            EventKind::LoadCompleted,
            args.mode,
            args.uri.as_ref(),
            args.content.as_ref(),
            false,
            None,
        );
    }
}
