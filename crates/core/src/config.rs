//! Settings and path utilities for ppcheck.
//!
//! This module holds the tunable values of a session (line width, banner
//! border, script runner prefix, ...) and resolves the project path given on
//! the command line.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::execution::ExitPolicy;

/// File name of the manifest looked up inside the project directory
pub const MANIFEST_FILE_NAME: &str = "pyproject.toml";

/// Manifest sections holding production dependencies
pub const PROD_DEPENDENCY_SECTIONS: [&str; 1] = ["dependencies"];

/// Manifest sections holding development dependencies, across manifest format versions
pub const DEV_DEPENDENCY_SECTIONS: [&str; 4] = [
    "dev-dependencies",
    "dev.dependencies",
    "group.dev.dependencies",
    "group.test.dependencies",
];

/// Default minimum width of banners
pub const DEFAULT_LINE_WIDTH: usize = 72;

/// Default character used for banner borders
pub const DEFAULT_BORDER: char = '~';

/// Prefix put in front of a script name to run it
pub const DEFAULT_SCRIPT_RUNNER_PREFIX: &str = "poetry run";

/// Argument suffix offered when running a script
pub const DEFAULT_SCRIPT_ARGS: &str = "--help";

/// Conventional test directory; the test runner is only offered when it exists
pub const DEFAULT_TEST_DIRECTORY: &str = "tests";

/// How long a copied command is served after the session ends, waiting for a
/// clipboard manager to take it over
pub const DEFAULT_CLIPBOARD_HOLD: Duration = Duration::from_secs(10);

/// Tunable values for an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Minimum banner width
    pub line_width: usize,
    /// Banner border character
    pub border: char,
    /// Prefix put in front of script names, e.g. `poetry run`
    pub script_runner_prefix: String,
    /// Default argument suffix for scripts
    pub default_script_args: String,
    /// Name of the test directory checked before offering the test runner
    pub test_directory: String,
    /// Maximum length of the description shown in the project info table
    pub description_length: usize,
    /// Copy executed script commands to the clipboard
    pub copy_to_clipboard: bool,
    /// Upper bound for serving the clipboard once the session is over
    pub clipboard_hold: Duration,
    /// How a non-zero exit of a command is treated
    pub exit_policy: ExitPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            border: DEFAULT_BORDER,
            script_runner_prefix: DEFAULT_SCRIPT_RUNNER_PREFIX.to_string(),
            default_script_args: DEFAULT_SCRIPT_ARGS.to_string(),
            test_directory: DEFAULT_TEST_DIRECTORY.to_string(),
            description_length: DEFAULT_LINE_WIDTH,
            copy_to_clipboard: false,
            clipboard_hold: DEFAULT_CLIPBOARD_HOLD,
            exit_policy: ExitPolicy::default(),
        }
    }
}

impl Settings {
    #[must_use]
    pub fn with_copy_to_clipboard(mut self, copy_to_clipboard: bool) -> Self {
        self.copy_to_clipboard = copy_to_clipboard;
        self
    }
}

/// Resolves the project path given on the command line.
///
/// Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use ppcheck_core::config::resolve_project_path;
///
/// let path = resolve_project_path("/srv/project");
/// assert_eq!(path.to_str(), Some("/srv/project"));
/// ```
pub fn resolve_project_path(project_path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(project_path).to_string())
}

/// Path of the manifest inside the given project directory.
pub fn manifest_path(project_dir: &Path) -> PathBuf {
    project_dir.join(MANIFEST_FILE_NAME)
}
