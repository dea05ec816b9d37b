//! Command handlers for `init`, `start` and `learn`
//!
//! Handlers mutate state through a [`StateStore`] and an [`EventSink`] and
//! report what happened as an outcome value. Printing is left to the caller
//! (see [`crate::display`]).
//!
//! Only creating the dojo skeleton is fatal. A document that cannot be
//! saved is reported on the diagnostic stream and the command carries on.

pub mod init;
pub mod start;
pub mod learn;

pub use init::InitOutcome;
pub use learn::LearnOutcome;
pub use start::StartOutcome;

use std::path::PathBuf;

use crate::cli::config::SessionConfig;
use crate::clock::{Clock, SystemClock};
use crate::errors::Result;
use crate::events::{EventSink, FileEventLog};
use crate::session::{DojoLayout, FileStore, StateStore};

/// A dojo bound to its state store, event sink and clock
pub struct Dojo<S, E, C = SystemClock> {
    store: S,
    events: E,
    clock: C,
    settings: SessionConfig,
}

impl<S: StateStore, E: EventSink, C: Clock> Dojo<S, E, C> {
    pub fn new(store: S, events: E, clock: C, settings: SessionConfig) -> Self {
        Self {
            store,
            events,
            clock,
            settings,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn events(&self) -> &E {
        &self.events
    }
}

/// Log a failed save and keep going
fn report_save(result: Result<()>, document: &str) {
    if let Err(e) = result {
        tracing::warn!(document, error = %e, "could not save document");
    }
}

impl Dojo<FileStore, FileEventLog, SystemClock> {
    /// Dojo on disk under `root`, using the system clock
    pub fn open(root: impl Into<PathBuf>, settings: SessionConfig) -> Self {
        let layout = DojoLayout::new(root);
        let events = FileEventLog::new(layout.events_dir());
        Self::new(FileStore::new(layout), events, SystemClock, settings)
    }
}
