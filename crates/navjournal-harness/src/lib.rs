#![forbid(unsafe_code)]

//! Test harness for navjournal hosts.
//!
//! Records notification streams ([`EventLog`]), exports them as JSONL, and
//! provides reference custom-state fixtures used by the integration tests
//! in `tests/`.

pub mod fixture;
pub mod recorder;

pub use fixture::{
    LOG_ENV, ListSelection, RedirectState, SelectionState, init_test_logging, navigate_pages,
    page_names, selection_provider,
};
pub use recorder::{EventKind, EventLog, EventRecorder, RecordedEvent};
