//! Command-line argument parsing for the dojo
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// Dirt Claude Dojo - from dirt claude poor to 10x developer
#[derive(Parser, Debug)]
#[command(name = "dojo")]
#[command(version)]
#[command(about = "Master CLI fundamentals through deliberate practice with LLM partnership")]
#[command(long_about = "Master CLI fundamentals through deliberate practice with LLM partnership.
Learn to think with Claude, not copy from Claude.

Core principles:
- NO_COPY_PASTE: Build muscle memory through typing
- LEARNING_BY_BUILDING: Curriculum evolves as you progress
- SOCRATIC_METHOD: Claude guides, never provides direct answers
- PROGRESSIVE_DISCLOSURE: Earn your way to advanced features")]
pub struct Args {
    /// Dojo root directory (current directory by default)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only errors on the diagnostic stream)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Initialize your dojo training environment
    #[command(long_about = "Sets up your personal development dojo with:
- Progress tracking system
- Claude Code integration
- Learning environment structure
- Your first foundational lesson")]
    Init,

    /// Begin daily training session with Claude monitoring
    #[command(long_about = "Starts a monitored learning session where Claude Code will:
- Track your progress and struggles
- Provide socratic guidance when you're stuck
- Prevent destructive commands in learning mode
- Celebrate your wins and encourage persistence")]
    Start,

    /// Start learning a specific topic with context
    #[command(long_about = "Begin a structured lesson on a CLI topic.
Claude will monitor your progress and provide guidance.

Available topics will unlock as you progress:
- cli-basics: Terminal navigation and file operations
- version-control: Git fundamentals and workflows
- scripting: Bash automation and best practices")]
    Learn {
        /// Topic slug, e.g. cli-basics
        topic: String,
    },
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Verbosity from flags, falling back to the configured default
    pub fn verbosity(&self, default: Verbosity) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => default,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Dojo root (current dir if not specified)
    pub fn root_dir(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        })
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Default tracing filter directive for this level
    pub fn log_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "dojo=error",
            Verbosity::Normal => "dojo=warn",
            Verbosity::Verbose => "dojo=info",
            Verbosity::VeryVerbose => "dojo=debug",
        }
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quiet" => Ok(Verbosity::Quiet),
            "normal" => Ok(Verbosity::Normal),
            "verbose" => Ok(Verbosity::Verbose),
            "very_verbose" => Ok(Verbosity::VeryVerbose),
            other => Err(format!("Invalid verbosity level: {}", other)),
        }
    }
}
