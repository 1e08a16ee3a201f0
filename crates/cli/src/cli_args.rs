//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate.

use std::path::PathBuf;

use clap::Parser;
use ppcheck_core::config::resolve_project_path;

/// Command-line arguments for the ppcheck CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use ppcheck_cli::cli_args::Args;
///
/// let args = Args::parse_from(["ppcheck", "/", "--copy-clipboard"]);
/// assert!(args.copy_clipboard);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path of the Poetry project, i.e. the directory holding `pyproject.toml`.
    ///
    /// `~` is expanded; the path must exist.
    #[arg(value_parser = existing_path)]
    pub project_path: PathBuf,

    /// Copy the chosen script command to the clipboard.
    #[arg(long, short = 'c', action)]
    pub copy_clipboard: bool,
}

fn existing_path(value: &str) -> Result<PathBuf, String> {
    let path = resolve_project_path(value);

    if path.exists() {
        Ok(path)
    } else {
        Err(format!("Path `{}` does not exist.", path.display()))
    }
}
