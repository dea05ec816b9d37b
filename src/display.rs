//! Console output for command outcomes
//!
//! Renders handler outcomes as the human-readable lines the learner sees.
//! Rendering returns strings so output can be checked without a terminal.

use colored::*;

use crate::commands::{InitOutcome, LearnOutcome, StartOutcome};
use crate::curriculum::{self, storage_key};

const NOT_INITIALIZED: &str = "❌ Dojo not initialized. Run 'dojo init' first.";

/// Enable or disable ANSI colors for the whole process
pub fn set_color(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}

/// Line printed before `init` does anything
pub fn init_banner() -> String {
    format!("{}", "🥷 Initializing Dirt Claude Dojo...".bold().cyan())
}

pub fn render_init(outcome: &InitOutcome) -> Vec<String> {
    match outcome {
        InitOutcome::AlreadyInitialized => vec![format!(
            "🎯 Dojo already initialized! Use '{}' to begin training.",
            "dojo start".green()
        )],
        InitOutcome::Initialized { name } => vec![
            format!("🎉 Welcome to the dojo, {}!", name.bold()),
            "📚 Your CLI mastery journey begins now.".to_string(),
            "💪 Remember: No copy-paste, only deliberate practice.".to_string(),
            String::new(),
            format!("🚀 Ready to start? Run: {}", "dojo learn cli-basics".green()),
        ],
    }
}

pub fn render_start(outcome: &StartOutcome) -> Vec<String> {
    match outcome {
        StartOutcome::NotInitialized => vec![NOT_INITIALIZED.red().to_string()],
        StartOutcome::Started {
            user,
            level,
            session_number,
        } => vec![
            format!("🥷 Training session started for {}", user.bold()),
            format!("📊 Current level: {}", level),
            format!("🔄 Session #{}", session_number),
            "👁️  Claude Code monitoring enabled".to_string(),
            String::new(),
            "💡 Claude will provide guidance when you struggle, but won't give direct answers."
                .dimmed()
                .to_string(),
            format!("🎯 Use '{}' to begin a lesson.", "dojo learn <topic>".green()),
        ],
    }
}

pub fn render_learn(outcome: &LearnOutcome) -> Vec<String> {
    match outcome {
        LearnOutcome::NotInitialized => vec![NOT_INITIALIZED.red().to_string()],
        LearnOutcome::UnknownTopic { topic, available } => {
            let mut lines = vec![
                format!("❌ Topic '{}' not found.", topic).red().to_string(),
                "Available topics:".to_string(),
            ];
            for slug in available {
                match curriculum::find(&storage_key(slug)) {
                    Some(foundation) => {
                        lines.push(format!("  • {} - {}", slug.green(), foundation.summary))
                    }
                    None => lines.push(format!("  • {}", slug.green())),
                }
            }
            lines
        }
        LearnOutcome::Locked { topic } => vec![format!(
            "🔒 Topic '{}' is locked. Complete prerequisites first.",
            topic
        )
        .yellow()
        .to_string()],
        LearnOutcome::Started {
            topic,
            objective,
            lessons_completed,
            total_lessons,
        } => {
            let mut lines = vec![format!("📚 Starting lesson: {}", topic.bold())];
            if let Some(objective) = objective {
                lines.push(format!("🎯 Objective: {}", objective));
            }
            lines.push(format!(
                "📊 Progress: {}/{} lessons completed",
                lessons_completed, total_lessons
            ));
            lines.push(String::new());
            lines.push("🥷 Begin your practice. Claude is watching and ready to guide you.".to_string());
            lines.push("💡 Remember: Type everything manually. No copy-paste!".dimmed().to_string());
            lines
        }
    }
}

/// Print rendered lines to stdout
pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
