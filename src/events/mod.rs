//! Event files for the external assistant
//!
//! Each significant action becomes one standalone JSON file under
//! `.dojo/events/`. Files are never read back or modified by the dojo.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::clock::rfc3339;
use crate::errors::{DojoError, Result};

/// Event type tag, written as the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    SessionStart,
    LessonStart,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::SessionStart => write!(f, "session_start"),
            EventKind::LessonStart => write!(f, "lesson_start"),
        }
    }
}

/// One learner action
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub recorded_at: DateTime<Local>,
    pub kind: EventKind,
    fields: Map<String, Value>,
}

impl Event {
    pub fn new(recorded_at: DateTime<Local>, kind: EventKind) -> Self {
        Self {
            recorded_at,
            kind,
            fields: Map::new(),
        }
    }

    /// Add a type-specific field
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn session_start(recorded_at: DateTime<Local>, user: &str, level: &str) -> Self {
        Self::new(recorded_at, EventKind::SessionStart)
            .with_field("user", user)
            .with_field("level", level)
            .with_field("message", "User started training session")
    }

    pub fn lesson_start(recorded_at: DateTime<Local>, topic: &str, user: &str) -> Self {
        Self::new(recorded_at, EventKind::LessonStart)
            .with_field("topic", topic)
            .with_field("user", user)
            .with_field("message", format!("Started lesson: {}", topic))
    }

    /// The JSON object written to disk, keys in sorted order
    pub fn to_document(&self) -> Map<String, Value> {
        let mut doc = self.fields.clone();
        doc.insert("timestamp".to_string(), Value::String(rfc3339(&self.recorded_at)));
        doc.insert("type".to_string(), Value::String(self.kind.to_string()));
        doc
    }

    /// `event-YYYYMMDD-HHMMSS.json`; two events in the same second share a name
    pub fn file_name(&self) -> String {
        format!("event-{}.json", self.recorded_at.format("%Y%m%d-%H%M%S"))
    }
}

/// Destination for events
pub trait EventSink {
    fn append(&mut self, event: &Event) -> Result<()>;
}

/// Write an event, logging instead of failing
///
/// Returns whether the event was stored.
pub fn record<E: EventSink + ?Sized>(sink: &mut E, event: &Event) -> bool {
    match sink.append(event) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(kind = %event.kind, error = %e, "failed to log event");
            false
        }
    }
}

/// Events as files in a directory
#[derive(Debug, Clone)]
pub struct FileEventLog {
    dir: PathBuf,
}

impl FileEventLog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Event files currently in the directory, sorted by name
    pub fn list(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.starts_with("event-") && name.ends_with(".json") {
                    files.push(path);
                }
            }
        }
        files.sort();
        Ok(files)
    }
}

impl EventSink for FileEventLog {
    fn append(&mut self, event: &Event) -> Result<()> {
        let path = self.dir.join(event.file_name());
        let json = serde_json::to_string_pretty(&event.to_document())?;

        fs::write(&path, json).map_err(|source| DojoError::WriteDocument {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), kind = %event.kind, "event logged");
        Ok(())
    }
}

/// Events kept in a vector
#[derive(Debug, Clone, Default)]
pub struct MemoryEventLog {
    events: Vec<Event>,
}

impl MemoryEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for MemoryEventLog {
    fn append(&mut self, event: &Event) -> Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 19, h, m, s).unwrap()
    }

    struct BrokenSink;

    impl EventSink for BrokenSink {
        fn append(&mut self, _event: &Event) -> Result<()> {
            Err(DojoError::WriteDocument {
                path: PathBuf::from("/nowhere"),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            })
        }
    }

    #[test]
    fn test_file_name_has_second_granularity() {
        let event = Event::session_start(at(9, 5, 7), "Ada", "dirt_claude");
        assert_eq!(event.file_name(), "event-20261019-090507.json");
    }

    #[test]
    fn test_session_start_document() {
        let doc = Event::session_start(at(9, 0, 0), "Ada", "dirt_claude").to_document();
        assert_eq!(doc["type"], "session_start");
        assert_eq!(doc["user"], "Ada");
        assert_eq!(doc["level"], "dirt_claude");
        assert_eq!(doc["message"], "User started training session");
        assert!(doc["timestamp"].as_str().unwrap().starts_with("2026-10-19T09:00:00"));
    }

    #[test]
    fn test_lesson_start_document() {
        let doc = Event::lesson_start(at(9, 0, 0), "cli-basics", "Ada").to_document();
        assert_eq!(doc["type"], "lesson_start");
        assert_eq!(doc["topic"], "cli-basics");
        assert_eq!(doc["message"], "Started lesson: cli-basics");
    }

    #[test]
    fn test_file_log_writes_one_file_per_second() {
        let temp = TempDir::new().unwrap();
        let mut log = FileEventLog::new(temp.path());

        log.append(&Event::session_start(at(9, 0, 0), "Ada", "dirt_claude")).unwrap();
        log.append(&Event::lesson_start(at(9, 0, 1), "cli-basics", "Ada")).unwrap();

        assert_eq!(log.list().unwrap().len(), 2);
    }

    #[test]
    fn test_same_second_overwrites() {
        let temp = TempDir::new().unwrap();
        let mut log = FileEventLog::new(temp.path());

        log.append(&Event::session_start(at(9, 0, 0), "Ada", "dirt_claude")).unwrap();
        log.append(&Event::lesson_start(at(9, 0, 0), "cli-basics", "Ada")).unwrap();

        let files = log.list().unwrap();
        assert_eq!(files.len(), 1);
        let text = fs::read_to_string(&files[0]).unwrap();
        let doc: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["type"], "lesson_start");
    }

    #[test]
    fn test_list_missing_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        let log = FileEventLog::new(temp.path().join("absent"));
        assert!(log.list().unwrap().is_empty());
    }

    #[test]
    fn test_record_swallows_failures() {
        let event = Event::session_start(at(9, 0, 0), "Ada", "dirt_claude");
        assert!(!record(&mut BrokenSink, &event));

        let mut memory = MemoryEventLog::new();
        assert!(record(&mut memory, &event));
        assert_eq!(memory.len(), 1);
    }
}
