//! Interactive session for a Poetry project.
//!
//! This module drives the menus of ppcheck: the main menu, the script menu
//! and the maintenance command checklist.
//!
//! # Key Features
//!
//! - **Script Menu**: Run a `tool.poetry.scripts` entry with custom arguments
//! - **Maintenance Checklist**: Run several Poetry lifecycle commands in order
//! - **Clipboard**: Copy the executed script command on request
//!
//! Prompts and the clipboard sit behind the [`Prompter`] and [`ClipboardSink`]
//! traits, so the state machine can run without a terminal.

pub mod clipboard;
pub mod controller;
pub mod prompt;
pub mod types;

// Re-exports for convenience
pub use clipboard::{ClipboardSink, SystemClipboard};
pub use controller::Session;
pub use prompt::{Prompter, TerminalPrompter};
pub use types::{Ending, MainChoice, ScriptChoice, State};

/// Label of the entry leaving the script menu
pub const BACK_LABEL: &str = "< back";
