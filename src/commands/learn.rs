use crate::clock::Clock;
use crate::commands::{report_save, Dojo};
use crate::curriculum::{self, display_slug, storage_key};
use crate::events::{self, Event, EventSink};
use crate::session::{ClaudeIntegration, StateStore};

/// Result of `dojo learn <topic>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LearnOutcome {
    NotInitialized,
    UnknownTopic {
        topic: String,
        /// Topics that are not locked, in display form
        available: Vec<String>,
    },
    Locked {
        topic: String,
    },
    Started {
        topic: String,
        objective: Option<String>,
        lessons_completed: u32,
        total_lessons: u32,
    },
}

impl<S: StateStore, E: EventSink, C: Clock> Dojo<S, E, C> {
    /// Point the assistant at a lesson
    ///
    /// Unknown and locked topics leave every document untouched.
    pub fn learn(&mut self, topic: &str) -> LearnOutcome {
        let progress = match self.store.load_progress() {
            Ok(progress) => progress,
            Err(e) => {
                tracing::debug!(error = %e, "progress unavailable");
                return LearnOutcome::NotInitialized;
            }
        };

        let key = storage_key(topic);
        let Some(foundation) = progress.foundation(&key) else {
            return LearnOutcome::UnknownTopic {
                topic: topic.to_string(),
                available: progress.available_keys().map(display_slug).collect(),
            };
        };

        if foundation.status.is_locked() {
            return LearnOutcome::Locked {
                topic: topic.to_string(),
            };
        }

        let mut integration = self.store.load_integration().unwrap_or_else(|e| {
            tracing::debug!(error = %e, "starting from an empty integration document");
            ClaudeIntegration::default()
        });

        let slug = display_slug(&key);
        integration.focus_lesson(&slug, curriculum::lesson_plan(&key));
        report_save(self.store.save_integration(&integration), "claude-integration");

        let event = Event::lesson_start(self.clock.now(), &slug, &progress.user.name);
        events::record(&mut self.events, &event);
        tracing::info!(topic = %slug, "lesson started");

        LearnOutcome::Started {
            topic: slug,
            objective: integration.lesson_context.objective,
            lessons_completed: foundation.lessons_completed,
            total_lessons: foundation.total_lessons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::config::SessionConfig;
    use crate::clock::SteppingClock;
    use crate::curriculum::CLI_BASICS_PLAN;
    use crate::events::{EventKind, MemoryEventLog};
    use crate::session::MemoryStore;
    use chrono::{Local, TimeZone};
    use std::io::Cursor;

    fn initialized() -> Dojo<MemoryStore, MemoryEventLog, SteppingClock> {
        let now = Local.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
        let mut dojo = Dojo::new(
            MemoryStore::new(),
            MemoryEventLog::new(),
            SteppingClock::new(now, chrono::Duration::seconds(1)),
            SessionConfig::default(),
        );
        dojo.init(&mut Cursor::new("Ada\n"), &mut Vec::new()).unwrap();
        dojo
    }

    fn snapshot(dojo: &Dojo<MemoryStore, MemoryEventLog, SteppingClock>) -> (String, String, usize) {
        (
            dojo.store().progress_json().unwrap().to_string(),
            dojo.store().integration_json().unwrap().to_string(),
            dojo.events().len(),
        )
    }

    #[test]
    fn test_learn_without_init() {
        let now = Local.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
        let mut dojo = Dojo::new(
            MemoryStore::new(),
            MemoryEventLog::new(),
            SteppingClock::frozen(now),
            SessionConfig::default(),
        );
        assert_eq!(dojo.learn("cli-basics"), LearnOutcome::NotInitialized);
        assert_eq!(dojo.store().write_count(), 0);
        assert!(dojo.events().is_empty());
    }

    #[test]
    fn test_learn_cli_basics() {
        let mut dojo = initialized();

        let outcome = dojo.learn("cli-basics");
        assert_eq!(
            outcome,
            LearnOutcome::Started {
                topic: "cli-basics".to_string(),
                objective: Some(CLI_BASICS_PLAN.objective.to_string()),
                lessons_completed: 0,
                total_lessons: 12,
            }
        );

        let doc = dojo.store().load_integration().unwrap();
        assert_eq!(doc.lesson_context.topic.as_deref(), Some("cli-basics"));
        assert_eq!(doc.session.current_topic.as_deref(), Some("cli-basics"));
        assert_eq!(doc.lesson_context.total_steps, 12);
        assert_eq!(
            doc.lesson_context.key_concepts,
            vec!["pwd", "ls", "cd", "mkdir", "touch", "cp", "mv", "rm"]
        );

        assert_eq!(dojo.events().len(), 1);
        let event = &dojo.events().events()[0];
        assert_eq!(event.kind, EventKind::LessonStart);
        assert_eq!(event.to_document()["topic"], "cli-basics");
    }

    #[test]
    fn test_learn_accepts_storage_form() {
        let mut dojo = initialized();
        match dojo.learn("cli_basics") {
            LearnOutcome::Started { topic, .. } => assert_eq!(topic, "cli-basics"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_learn_keeps_session_flags() {
        let mut dojo = initialized();
        dojo.start();
        dojo.learn("cli-basics");

        let doc = dojo.store().load_integration().unwrap();
        assert!(doc.session.active);
        assert!(doc.session.start_time.is_some());
    }

    #[test]
    fn test_learn_locked_topic_changes_nothing() {
        let mut dojo = initialized();
        let before = snapshot(&dojo);

        assert_eq!(
            dojo.learn("version-control"),
            LearnOutcome::Locked {
                topic: "version-control".to_string()
            }
        );
        assert_eq!(snapshot(&dojo), before);
    }

    #[test]
    fn test_learn_unknown_topic_lists_available() {
        let mut dojo = initialized();
        let before = snapshot(&dojo);

        assert_eq!(
            dojo.learn("unknown-topic"),
            LearnOutcome::UnknownTopic {
                topic: "unknown-topic".to_string(),
                available: vec!["cli-basics".to_string()],
            }
        );
        assert_eq!(snapshot(&dojo), before);
    }
}
