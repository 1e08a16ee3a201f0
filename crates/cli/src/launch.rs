//! Startup and shutdown of a session: loading the manifest and reporting the
//! error that ended a session.

use std::io::Write;
use std::path::Path;

use itertools::Itertools;
use log::warn;
use ppcheck_core::error::{Error, Result};
use ppcheck_core::manifest::Manifest;

/// Prefix of the line printed when a session ends on an error
pub const FAULT_PREFIX: &str = "WARNING: Something goes wrong or aborted.";

/// Loads the manifest of `project_path`.
///
/// A missing manifest is reported on `out` and yields an empty manifest, so
/// the session can still offer the maintenance commands.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or parsed, or the report
/// cannot be written.
pub fn load_manifest<W: Write>(project_path: &Path, out: &mut W) -> Result<Manifest> {
    match Manifest::load(project_path) {
        Ok(manifest) => Ok(manifest),
        Err(e @ Error::ManifestNotFound { .. }) => {
            writeln!(out, "ERROR: {e}").map_err(Error::Stdio)?;
            Ok(Manifest::empty(project_path))
        }
        Err(e) => Err(e),
    }
}

/// The single line shown to the user for the error that ended a session.
///
/// Multi-line messages, like TOML parse errors with their source excerpt,
/// are folded onto that line.
pub fn report_fault(error: &Error) -> String {
    warn!("Session aborted: {error:?}");
    let message = error.to_string().split_whitespace().join(" ");
    format!("{FAULT_PREFIX} {message}")
}
