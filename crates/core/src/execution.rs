use std::env;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use log::{debug, error, info};

use crate::error::{Error, Result};

/// Shell every command line is handed to
#[cfg(not(windows))]
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// How a non-zero exit status of a command is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExitPolicy {
    /// The exit status is reported, never raised
    #[default]
    Permissive,
    /// A non-zero exit status becomes [`Error::SubProcessExit`]
    Strict,
}

/// Whether the command output goes straight to the terminal or is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Stream,
    Capture,
}

/// A command line to run in a directory, created per user selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub command: String,
    pub working_directory: PathBuf,
    pub args: Option<String>,
}

impl CommandInvocation {
    pub fn new(command: impl Into<String>, working_directory: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            working_directory: working_directory.into(),
            args: None,
        }
    }

    /// Invocation of `<prefix> <script_name> <args>`.
    pub fn for_script(
        prefix: &str,
        script_name: &str,
        args: &str,
        working_directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            command: format!("{prefix} {script_name}"),
            working_directory: working_directory.into(),
            args: Some(args.to_string()),
        }
    }

    /// The full command line handed to the shell.
    pub fn command_line(&self) -> String {
        match &self.args {
            Some(args) => format!("{} {}", self.command, args),
            None => self.command.clone(),
        }
    }
}

impl Display for CommandInvocation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.command_line())
    }
}

/// Outcome of a finished command.
#[derive(Debug)]
pub struct ExecutionReport {
    pub status: ExitStatus,
    /// Captured stdout, only set for [`OutputMode::Capture`]
    pub output: Option<String>,
    pub elapsed: Duration,
}

impl ExecutionReport {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Changes the process working directory and changes back when dropped.
pub struct WorkingDirectoryGuard {
    previous: PathBuf,
}

impl WorkingDirectoryGuard {
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be read or the target
    /// directory cannot be entered. The working directory is unchanged then.
    pub fn enter(directory: &Path) -> Result<Self> {
        let previous = env::current_dir().map_err(Error::Stdio)?;

        env::set_current_dir(directory).map_err(|original| Error::WorkingDirectory {
            path: directory.display().to_string(),
            original,
        })?;
        debug!("Entered `{}`", directory.display());

        Ok(Self { previous })
    }
}

impl Drop for WorkingDirectoryGuard {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.previous) {
            error!(
                "Unable to restore working directory `{}`: {}",
                self.previous.display(),
                e
            );
        } else {
            debug!("Restored `{}`", self.previous.display());
        }
    }
}

#[cfg(windows)]
fn shell_command(command_line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", command_line]);
    command
}

#[cfg(not(windows))]
fn shell_command(command_line: &str) -> Command {
    let mut command = Command::new(DEFAULT_SHELL);
    command.args(["-c", command_line]);
    command
}

/// Runs a command line through the platform shell inside its working directory.
///
/// The previous working directory is restored on every path out of this
/// function, including errors.
///
/// # Errors
///
/// Returns an error if the working directory cannot be entered, the shell
/// cannot be spawned, or the command exits non-zero under [`ExitPolicy::Strict`].
pub fn run_command(
    invocation: &CommandInvocation,
    mode: OutputMode,
    policy: ExitPolicy,
) -> Result<ExecutionReport> {
    let command_line = invocation.command_line();
    info!(
        "Executing `{}` in `{}`",
        command_line,
        invocation.working_directory.display()
    );

    let started = Instant::now();
    let (status, output) = {
        let _guard = WorkingDirectoryGuard::enter(&invocation.working_directory)?;
        let mut command = shell_command(&command_line);

        match mode {
            OutputMode::Stream => {
                let status = command
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .spawn()?
                    .wait()?;
                (status, None)
            }
            OutputMode::Capture => {
                let output = command
                    .stdin(Stdio::null())
                    .stderr(Stdio::inherit())
                    .output()?;
                (
                    output.status,
                    Some(String::from_utf8_lossy(&output.stdout).into_owned()),
                )
            }
        }
    };
    let elapsed = started.elapsed();

    debug!("`{}` finished with {} after {:?}", command_line, status, elapsed);

    if policy == ExitPolicy::Strict && !status.success() {
        return Err(Error::SubProcessExit(status.code()));
    }

    Ok(ExecutionReport {
        status,
        output,
        elapsed,
    })
}
