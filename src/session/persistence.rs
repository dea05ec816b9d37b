// Load/save of the progress and assistant-integration documents
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{DojoError, Result};
use crate::session::integration::ClaudeIntegration;
use crate::session::layout::DojoLayout;
use crate::session::progress::Progress;

/// Storage for the two dojo state documents
///
/// Handlers only ever talk to this trait, so they run unchanged against
/// the filesystem ([`FileStore`]) or memory ([`MemoryStore`]).
pub trait StateStore {
    /// Create whatever structure documents need before they can be saved
    fn prepare(&mut self) -> Result<()>;

    /// Whether a progress document has been written
    fn is_initialized(&self) -> bool;

    fn load_progress(&self) -> Result<Progress>;

    fn save_progress(&mut self, progress: &Progress) -> Result<()>;

    fn load_integration(&self) -> Result<ClaudeIntegration>;

    fn save_integration(&mut self, integration: &ClaudeIntegration) -> Result<()>;
}

/// Two-space indented JSON, the format every dojo file uses
pub fn encode_document<T: Serialize>(document: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Store backed by files under a [`DojoLayout`]
#[derive(Debug, Clone)]
pub struct FileStore {
    layout: DojoLayout,
}

impl FileStore {
    pub fn new(layout: DojoLayout) -> Self {
        Self { layout }
    }

    /// Store rooted at a directory
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self::new(DojoLayout::new(root))
    }

    pub fn layout(&self) -> &DojoLayout {
        &self.layout
    }

    fn read<T: DeserializeOwned>(path: &Path) -> Result<T> {
        let json = fs::read_to_string(path).map_err(|source| DojoError::ReadDocument {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&json).map_err(|source| DojoError::DecodeDocument {
            path: path.to_path_buf(),
            source,
        })
    }

    // Overwrites in place, no temp file or backup
    fn write<T: Serialize>(path: &Path, document: &T) -> Result<()> {
        let json = encode_document(document)?;
        fs::write(path, json).map_err(|source| DojoError::WriteDocument {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "saved document");
        Ok(())
    }
}

impl StateStore for FileStore {
    fn prepare(&mut self) -> Result<()> {
        for dir in self.layout.skeleton() {
            fs::create_dir_all(&dir).map_err(|source| DojoError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.layout.progress_path().exists()
    }

    fn load_progress(&self) -> Result<Progress> {
        Self::read(&self.layout.progress_path())
    }

    fn save_progress(&mut self, progress: &Progress) -> Result<()> {
        Self::write(&self.layout.progress_path(), progress)
    }

    fn load_integration(&self) -> Result<ClaudeIntegration> {
        Self::read(&self.layout.integration_path())
    }

    fn save_integration(&mut self, integration: &ClaudeIntegration) -> Result<()> {
        Self::write(&self.layout.integration_path(), integration)
    }
}

/// In-memory store holding the encoded documents
///
/// Documents are kept as JSON text so byte-level comparisons behave the
/// same way they would against files.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    progress: Option<String>,
    integration: Option<String>,
    prepared: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress_json(&self) -> Option<&str> {
        self.progress.as_deref()
    }

    pub fn integration_json(&self) -> Option<&str> {
        self.integration.as_deref()
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// Number of document saves performed
    pub fn write_count(&self) -> usize {
        self.writes
    }

    fn decode<T: DeserializeOwned>(json: Option<&str>, name: &str) -> Result<T> {
        let json = json.ok_or_else(|| DojoError::NotFound(name.to_string()))?;
        Ok(serde_json::from_str(json)?)
    }
}

impl StateStore for MemoryStore {
    fn prepare(&mut self) -> Result<()> {
        self.prepared = true;
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.progress.is_some()
    }

    fn load_progress(&self) -> Result<Progress> {
        Self::decode(self.progress_json(), "progress")
    }

    fn save_progress(&mut self, progress: &Progress) -> Result<()> {
        self.progress = Some(encode_document(progress)?);
        self.writes += 1;
        Ok(())
    }

    fn load_integration(&self) -> Result<ClaudeIntegration> {
        Self::decode(self.integration_json(), "claude-integration")
    }

    fn save_integration(&mut self, integration: &ClaudeIntegration) -> Result<()> {
        self.integration = Some(encode_document(integration)?);
        self.writes += 1;
        Ok(())
    }
}
