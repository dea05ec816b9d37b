use crate::clock::{rfc3339, Clock};
use crate::commands::{report_save, Dojo};
use crate::events::{self, Event, EventSink};
use crate::session::{ClaudeIntegration, StateStore};

/// Result of `dojo start`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    NotInitialized,
    Started {
        user: String,
        level: String,
        session_number: u32,
    },
}

impl<S: StateStore, E: EventSink, C: Clock> Dojo<S, E, C> {
    /// Open a fresh training session
    ///
    /// The session is counted and logged even if a document cannot be saved.
    pub fn start(&mut self) -> StartOutcome {
        let mut progress = match self.store.load_progress() {
            Ok(progress) => progress,
            Err(e) => {
                tracing::debug!(error = %e, "progress unavailable");
                return StartOutcome::NotInitialized;
            }
        };

        let integration =
            ClaudeIntegration::begin_session(rfc3339(&self.clock.now()), &self.settings);
        report_save(self.store.save_integration(&integration), "claude-integration");

        let session_number = progress.record_session();
        report_save(self.store.save_progress(&progress), "progress");

        let event = Event::session_start(
            self.clock.now(),
            &progress.user.name,
            &progress.user.current_level,
        );
        events::record(&mut self.events, &event);
        tracing::info!(session = session_number, "training session started");

        StartOutcome::Started {
            user: progress.user.name,
            level: progress.user.current_level,
            session_number,
        }
    }
}
