// Assistant-integration document: live session state read by an external assistant
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::cli::config::SessionConfig;
use crate::curriculum::LessonPlan;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub active: bool,
    pub start_time: Option<String>,
    pub current_lesson: Option<String>,
    pub current_topic: Option<String>,
    pub learning_mode: String,
}

/// Struggle tracking, owned by the assistant side
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserState {
    pub struggling_with: Option<String>,
    pub last_error: Option<String>,
    pub consecutive_failures: u32,
    pub needs_encouragement: bool,
    pub ask_for_help_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssistantBehavior {
    pub teaching_style: String,
    pub intervention_threshold: u32,
    pub last_hint_time: Option<String>,
    pub hint_level: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LessonContext {
    pub topic: Option<String>,
    pub objective: Option<String>,
    pub current_step: u32,
    pub total_steps: u32,
    #[serde(
        default,
        serialize_with = "super::empty_as_null",
        deserialize_with = "super::null_as_empty"
    )]
    pub key_concepts: Vec<String>,
}

/// Contents of `.dojo/claude-integration.json`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClaudeIntegration {
    pub session: SessionState,
    pub user_state: UserState,
    pub claude_behavior: AssistantBehavior,
    pub lesson_context: LessonContext,
    /// Kept for the assistant's schema; events are written as separate files
    #[serde(
        default,
        serialize_with = "super::empty_as_null",
        deserialize_with = "super::null_as_empty"
    )]
    pub event_log: Vec<Map<String, Value>>,
}

impl ClaudeIntegration {
    /// Brand-new active session. Nothing from a previous session survives.
    pub fn begin_session(start_time: String, settings: &SessionConfig) -> Self {
        let mut doc = Self::default();
        doc.session.active = true;
        doc.session.start_time = Some(start_time);
        doc.session.learning_mode = settings.learning_mode.clone();
        doc.claude_behavior.teaching_style = settings.teaching_style.clone();
        doc.claude_behavior.intervention_threshold = settings.intervention_threshold;
        doc.claude_behavior.hint_level = settings.hint_level;
        doc
    }

    /// Point the assistant at a lesson. Session flags are left as loaded.
    pub fn focus_lesson(&mut self, topic: &str, plan: Option<&LessonPlan>) {
        self.session.current_topic = Some(topic.to_string());
        self.lesson_context.topic = Some(topic.to_string());

        if let Some(plan) = plan {
            self.lesson_context.objective = Some(plan.objective.to_string());
            self.lesson_context.total_steps = plan.total_steps;
            self.lesson_context.key_concepts =
                plan.key_concepts.iter().map(|c| c.to_string()).collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::CLI_BASICS_PLAN;

    #[test]
    fn test_begin_session_discards_previous_state() {
        let settings = SessionConfig::default();
        let mut old = ClaudeIntegration::begin_session("2026-10-18T09:00:00Z".into(), &settings);
        old.focus_lesson("cli-basics", Some(&CLI_BASICS_PLAN));
        old.user_state.consecutive_failures = 4;

        let fresh = ClaudeIntegration::begin_session("2026-10-19T09:00:00Z".into(), &settings);
        assert!(fresh.session.active);
        assert_eq!(fresh.session.start_time.as_deref(), Some("2026-10-19T09:00:00Z"));
        assert_eq!(fresh.session.learning_mode, "practice");
        assert_eq!(fresh.claude_behavior.teaching_style, "socratic");
        assert_eq!(fresh.claude_behavior.intervention_threshold, 3);
        assert_eq!(fresh.claude_behavior.hint_level, 1);
        assert!(fresh.lesson_context.topic.is_none());
        assert_eq!(fresh.user_state.consecutive_failures, 0);
    }

    #[test]
    fn test_focus_lesson_overlays_only_lesson_fields() {
        let settings = SessionConfig::default();
        let mut doc = ClaudeIntegration::begin_session("2026-10-19T09:00:00Z".into(), &settings);
        doc.focus_lesson("cli-basics", Some(&CLI_BASICS_PLAN));

        assert!(doc.session.active);
        assert_eq!(doc.session.current_topic.as_deref(), Some("cli-basics"));
        assert_eq!(doc.lesson_context.topic.as_deref(), Some("cli-basics"));
        assert_eq!(doc.lesson_context.total_steps, 12);
        assert_eq!(
            doc.lesson_context.key_concepts,
            vec!["pwd", "ls", "cd", "mkdir", "touch", "cp", "mv", "rm"]
        );
        assert!(doc.session.current_lesson.is_none());
    }

    #[test]
    fn test_focus_without_plan_keeps_objective() {
        let mut doc = ClaudeIntegration::default();
        doc.lesson_context.objective = Some("earlier".to_string());
        doc.focus_lesson("scripting", None);

        assert_eq!(doc.lesson_context.topic.as_deref(), Some("scripting"));
        assert_eq!(doc.lesson_context.objective.as_deref(), Some("earlier"));
        assert_eq!(doc.lesson_context.total_steps, 0);
    }

    #[test]
    fn test_zero_value_serializes_nulls() {
        let value = serde_json::to_value(ClaudeIntegration::default()).unwrap();
        assert_eq!(value["session"]["active"], false);
        assert!(value["session"]["start_time"].is_null());
        assert!(value["user_state"]["struggling_with"].is_null());
        assert!(value["claude_behavior"]["last_hint_time"].is_null());
        assert!(value["lesson_context"]["objective"].is_null());
        assert!(value["lesson_context"]["key_concepts"].is_null());
        assert!(value["event_log"].is_null());
    }

    #[test]
    fn test_begin_session_writes_null_lists() {
        let doc = ClaudeIntegration::begin_session("2026-10-19T09:00:00Z".into(), &SessionConfig::default());
        let value = serde_json::to_value(&doc).unwrap();

        assert!(value["lesson_context"]["key_concepts"].is_null());
        assert!(value["event_log"].is_null());

        let decoded: ClaudeIntegration = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, doc);
    }
}
