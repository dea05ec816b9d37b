// Filesystem layout of a dojo, relative to its root
use std::path::PathBuf;

pub const DOJO_DIR: &str = ".dojo";
pub const EVENTS_DIR: &str = ".dojo/events";
pub const PROGRESS_FILE: &str = ".dojo/progress.json";
pub const INTEGRATION_FILE: &str = ".dojo/claude-integration.json";

/// Placeholder directories the learner works in
pub const WORKSPACE_DIRS: [&str; 3] = ["foundations", "practice", "summaries"];

/// Resolved paths for one dojo root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DojoLayout {
    root: PathBuf,
}

impl DojoLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn dojo_dir(&self) -> PathBuf {
        self.root.join(DOJO_DIR)
    }

    pub fn events_dir(&self) -> PathBuf {
        self.root.join(EVENTS_DIR)
    }

    pub fn progress_path(&self) -> PathBuf {
        self.root.join(PROGRESS_FILE)
    }

    pub fn integration_path(&self) -> PathBuf {
        self.root.join(INTEGRATION_FILE)
    }

    /// Every directory `init` creates, parents first
    pub fn skeleton(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.dojo_dir(), self.events_dir()];
        dirs.extend(WORKSPACE_DIRS.iter().map(|d| self.root.join(d)));
        dirs
    }
}
