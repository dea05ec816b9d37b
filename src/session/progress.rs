// Progress document: who the learner is and where they are in the curriculum
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::curriculum::FOUNDATIONS;

/// Level every new learner starts at
pub const DEFAULT_LEVEL: &str = "dirt_claude";

/// Format of `user.start_date`
pub const START_DATE_FORMAT: &str = "%Y-%m-%d";

/// Lock status of a foundation topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoundationStatus {
    Available,
    Locked,
    Completed,
}

impl FoundationStatus {
    pub fn is_locked(&self) -> bool {
        matches!(self, FoundationStatus::Locked)
    }
}

/// Learner profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    /// Local calendar date, `YYYY-MM-DD` when written by `init`
    pub start_date: String,
    /// Free-form on read; other tools may write their own levels
    pub current_level: String,
    pub total_sessions: u32,
    pub streak_days: i32,
}

/// Progress through one foundation topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foundation {
    pub status: FoundationStatus,
    pub lessons_completed: u32,
    pub total_lessons: u32,
    pub mastery_score: i32,
}

/// Learning style profile
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LearningStyle {
    pub preferred_pace: String,
    #[serde(
        default,
        serialize_with = "super::empty_as_null",
        deserialize_with = "super::null_as_empty"
    )]
    pub struggle_areas: Vec<String>,
    #[serde(
        default,
        serialize_with = "super::empty_as_null",
        deserialize_with = "super::null_as_empty"
    )]
    pub strength_areas: Vec<String>,
}

/// Contents of `.dojo/progress.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub user: UserProfile,
    /// Keyed by storage slug (`cli_basics`)
    pub foundations: BTreeMap<String, Foundation>,
    #[serde(
        default,
        serialize_with = "super::empty_as_null",
        deserialize_with = "super::null_as_empty"
    )]
    pub achievements: Vec<String>,
    pub last_session: Option<String>,
    pub learning_style: LearningStyle,
}

impl Progress {
    /// Fresh progress for a new learner, foundations seeded from the curriculum
    pub fn new(name: String, start_date: NaiveDate) -> Self {
        let foundations = FOUNDATIONS
            .iter()
            .map(|spec| {
                (
                    spec.key.to_string(),
                    Foundation {
                        status: spec.initial_status,
                        lessons_completed: 0,
                        total_lessons: spec.total_lessons,
                        mastery_score: 0,
                    },
                )
            })
            .collect();

        Self {
            user: UserProfile {
                name,
                start_date: start_date.format(START_DATE_FORMAT).to_string(),
                current_level: DEFAULT_LEVEL.to_string(),
                total_sessions: 0,
                streak_days: 0,
            },
            foundations,
            achievements: Vec::new(),
            last_session: None,
            learning_style: LearningStyle::default(),
        }
    }

    /// Count one more training session, returning the new total
    pub fn record_session(&mut self) -> u32 {
        self.user.total_sessions = self.user.total_sessions.saturating_add(1);
        self.user.total_sessions
    }

    pub fn foundation(&self, key: &str) -> Option<&Foundation> {
        self.foundations.get(key)
    }

    /// Storage keys of every topic that is not locked, in stable order
    pub fn available_keys(&self) -> impl Iterator<Item = &str> {
        self.foundations
            .iter()
            .filter(|(_, foundation)| !foundation.status.is_locked())
            .map(|(key, _)| key.as_str())
    }
}
