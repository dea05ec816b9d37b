use std::io::{BufRead, Write};

use crate::clock::Clock;
use crate::commands::{report_save, Dojo};
use crate::errors::Result;
use crate::events::EventSink;
use crate::session::{ClaudeIntegration, Progress, StateStore};

pub const NAME_PROMPT: &str = "Enter your name (or nickname): ";

/// Result of `dojo init`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// A progress document already existed and was left untouched
    AlreadyInitialized,
    Initialized { name: String },
}

impl<S: StateStore, E: EventSink, C: Clock> Dojo<S, E, C> {
    /// Create the dojo skeleton and, on first run, the initial documents
    ///
    /// The skeleton is (re)created every time and failing to create it is
    /// an error. Once a progress document exists no file is written.
    pub fn init<R: BufRead, W: Write>(&mut self, input: &mut R, prompt: &mut W) -> Result<InitOutcome> {
        self.store.prepare()?;

        if self.store.is_initialized() {
            tracing::info!("progress already present, skipping init");
            return Ok(InitOutcome::AlreadyInitialized);
        }

        write!(prompt, "{}", NAME_PROMPT)?;
        prompt.flush()?;
        let name = read_name(input)?;

        let progress = Progress::new(name.clone(), self.clock.now().date_naive());
        report_save(self.store.save_progress(&progress), "progress");
        report_save(
            self.store.save_integration(&ClaudeIntegration::default()),
            "claude-integration",
        );
        tracing::info!(user = %name, "dojo initialized");

        Ok(InitOutcome::Initialized { name })
    }
}

/// First whitespace-separated word of the next input line; empty at EOF
fn read_name<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.split_whitespace().next().unwrap_or_default().to_string())
}
