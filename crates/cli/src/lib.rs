//! ppcheck CLI Library
//!
//! This crate provides the command-line interface for ppcheck, an interactive
//! helper for Poetry projects. It handles argument parsing, the menus of a
//! session, command execution and clipboard copying.
//!
//! # Key Features
//!
//! - **Project Overview**: Metadata and dependencies of `pyproject.toml` as a table
//! - **Script Menu**: Pick a project script, add arguments and run it
//! - **Maintenance Checklist**: Run `poetry update`, `lock`, `install`, ... in one go
//! - **Clipboard**: Copy the executed script command for later use
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and validation
//! - [`launch`]: Manifest loading and the report of a failed session
//! - [`session`]: The interactive menus and their prompt/clipboard seams
//!
//! # Examples
//!
//! The CLI binary (`ppcheck`) is used like this:
//!
//! ```bash
//! # Inspect a project and pick something to run
//! ppcheck ~/projects/my-poetry-project
//!
//! # Also copy the executed script command to the clipboard
//! ppcheck --copy-clipboard ~/projects/my-poetry-project
//! ```

pub mod cli_args;
pub mod launch;
pub mod session;
