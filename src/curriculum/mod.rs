//! Static curriculum table
//!
//! Topics are compiled in. New lesson content is added by extending
//! [`FOUNDATIONS`], there is no data-driven loader.

use crate::session::progress::FoundationStatus;

/// Lesson plan attached to a foundation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonPlan {
    pub objective: &'static str,
    pub total_steps: u32,
    pub key_concepts: &'static [&'static str],
}

/// Curriculum entry for one foundation topic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoundationSpec {
    /// Storage key, e.g. `cli_basics`
    pub key: &'static str,
    pub summary: &'static str,
    pub total_lessons: u32,
    pub initial_status: FoundationStatus,
    pub lesson: Option<LessonPlan>,
}

pub const CLI_BASICS_PLAN: LessonPlan = LessonPlan {
    objective: "Master terminal navigation, file operations, and basic commands",
    total_steps: 12,
    key_concepts: &["pwd", "ls", "cd", "mkdir", "touch", "cp", "mv", "rm"],
};

pub const FOUNDATIONS: &[FoundationSpec] = &[
    FoundationSpec {
        key: "cli_basics",
        summary: "Terminal navigation and file operations",
        total_lessons: 12,
        initial_status: FoundationStatus::Available,
        lesson: Some(CLI_BASICS_PLAN),
    },
    FoundationSpec {
        key: "version_control",
        summary: "Git fundamentals and workflows",
        total_lessons: 8,
        initial_status: FoundationStatus::Locked,
        lesson: None,
    },
    FoundationSpec {
        key: "scripting",
        summary: "Bash automation and best practices",
        total_lessons: 15,
        initial_status: FoundationStatus::Locked,
        lesson: None,
    },
];

/// Convert a command-line slug (`cli-basics`) into a storage key (`cli_basics`)
pub fn storage_key(topic: &str) -> String {
    topic.replace('-', "_")
}

/// Convert a storage key (`cli_basics`) into its display slug (`cli-basics`)
pub fn display_slug(key: &str) -> String {
    key.replace('_', "-")
}

/// Look up a foundation by storage key
pub fn find(key: &str) -> Option<&'static FoundationSpec> {
    FOUNDATIONS.iter().find(|f| f.key == key)
}

/// Lesson plan for a storage key, if the topic has content
pub fn lesson_plan(key: &str) -> Option<&'static LessonPlan> {
    find(key).and_then(|f| f.lesson.as_ref())
}
