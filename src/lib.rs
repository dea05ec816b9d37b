//! Dirt Claude Dojo - CLI learning dojo
//!
//! Bootstraps a local practice directory, tracks a learner's progress
//! through a fixed curriculum, and writes session state and event files for
//! an AI coding assistant that watches the dojo from outside.
//!
//! # Architecture
//!
//! - **cli**: argument parsing and TOML configuration
//! - **commands**: `init` / `start` / `learn` handlers
//! - **session**: progress and assistant-integration documents and their store
//! - **events**: one JSON file per learner action
//! - **curriculum**: the compiled-in topic table

pub mod errors;
pub mod clock;
pub mod curriculum;
pub mod session;
pub mod events;
pub mod commands;

// Re-export commonly used types
pub use errors::{DojoError, Result};
pub use commands::Dojo;

// Interface layer
pub mod cli;
pub mod display;
pub mod telemetry;
