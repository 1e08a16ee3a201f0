use itertools::Itertools;
use log::{debug, info, warn};
use ppcheck_core::command_definitions::{available_maintenance_commands, MaintenanceCommand};
use ppcheck_core::config::{Settings, MANIFEST_FILE_NAME};
use ppcheck_core::display::print_banner;
use ppcheck_core::error::Result;
use ppcheck_core::execution::{run_command, CommandInvocation, OutputMode};
use ppcheck_core::manifest::Manifest;
use ppcheck_core::project_info::{render_project_info, render_scripts};

use super::clipboard::ClipboardSink;
use super::prompt::Prompter;
use super::types::{labels, pick, script_choices, Ending, MainChoice, ScriptChoice, State};

/// The interactive session: main menu, script menu and maintenance checklist.
pub struct Session<'a, P, C> {
    manifest: &'a Manifest,
    settings: &'a Settings,
    prompter: P,
    clipboard: C,
}

/// The checked commands in checklist order, whatever order they were checked in.
///
/// # Errors
///
/// Returns an error if an index is out of range.
pub fn checked_commands<'c>(
    commands: &[&'c MaintenanceCommand],
    checked: &[usize],
) -> Result<Vec<&'c MaintenanceCommand>> {
    checked
        .iter()
        .copied()
        .sorted()
        .dedup()
        .map(|index| pick(commands, index).copied())
        .collect()
}

impl<'a, P: Prompter, C: ClipboardSink> Session<'a, P, C> {
    pub fn new(manifest: &'a Manifest, settings: &'a Settings, prompter: P, clipboard: C) -> Self {
        Self {
            manifest,
            settings,
            prompter,
            clipboard,
        }
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Prints the project overview and loops through the menus until the
    /// user exits.
    ///
    /// # Errors
    ///
    /// Returns the first error of any menu; the session ends there.
    pub fn run(&mut self) -> Result<()> {
        println!("{}", render_project_info(self.manifest, self.settings));

        let mut state = State::MainMenu;
        while state != State::Exit {
            state = self.step(state)?;
        }

        if let Err(e) = self.clipboard.hold() {
            warn!("Unable to keep the command in the clipboard: {e}");
        }
        info!("Session ended");
        Ok(())
    }

    /// Handles one menu and returns the next state.
    ///
    /// # Errors
    ///
    /// Returns an error if prompting fails, a selection is invalid or a
    /// command cannot be run.
    pub fn step(&mut self, state: State) -> Result<State> {
        debug!("Session state: {state:?}");

        match state {
            State::MainMenu => self.main_menu(),
            State::ScriptMenu => self.script_menu(),
            State::CommandMenu => self.command_menu(),
            State::Exit => Ok(State::Exit),
        }
    }

    fn main_menu(&mut self) -> Result<State> {
        let index = self
            .prompter
            .select("What do you want to do?", &labels(&MainChoice::ALL))?;

        Ok(pick(&MainChoice::ALL, index)?.next_state())
    }

    fn script_menu(&mut self) -> Result<State> {
        let scripts = self.manifest.scripts();
        if scripts.is_empty() {
            println!("No script command(s) available in {MANIFEST_FILE_NAME}.");
            return Ok(State::MainMenu);
        }

        println!("{}", render_scripts(self.manifest));

        let prefix = self.settings.script_runner_prefix.as_str();
        let choices = script_choices(scripts.keys());
        let choice_labels: Vec<String> = choices.iter().map(|c| c.label(prefix)).collect();
        let index = self
            .prompter
            .select("Choose script to execute", &choice_labels)?;

        let ScriptChoice::Script(name) = pick(&choices, index)? else {
            return Ok(State::MainMenu);
        };

        let args = self
            .prompter
            .input("Run w/ argument(s)", &self.settings.default_script_args)?;
        let invocation =
            CommandInvocation::for_script(prefix, name, &args, self.manifest.directory());
        let command_line = invocation.command_line();

        let title = if self.settings.copy_to_clipboard {
            self.copy_to_clipboard(&command_line);
            format!("exec: {command_line} <- copy to clipboard")
        } else {
            format!("exec: {command_line}")
        };
        self.execute(&invocation, &title)?;

        let index = self
            .prompter
            .select("What's next?", &labels(&Ending::ALL))?;

        Ok(match pick(&Ending::ALL, index)? {
            Ending::ExitWithCopy => {
                if !self.settings.copy_to_clipboard {
                    self.copy_to_clipboard(&command_line);
                }
                State::Exit
            }
            Ending::ExitWithoutCopy => State::Exit,
            Ending::BackToMain => State::MainMenu,
        })
    }

    fn command_menu(&mut self) -> Result<State> {
        let commands =
            available_maintenance_commands(self.manifest.directory(), &self.settings.test_directory);

        let checked = self.prompter.checklist(
            "Choose maintenance command(s) - key 'space' for selection",
            &labels(&commands),
        )?;

        for command in checked_commands(&commands, &checked)? {
            let invocation = CommandInvocation::new(command.command, self.manifest.directory());
            self.execute(&invocation, &format!("Execute '{}'", command.command))?;
        }

        Ok(State::MainMenu)
    }

    fn execute(&mut self, invocation: &CommandInvocation, title: &str) -> Result<()> {
        let width = self.settings.line_width;
        let border = self.settings.border;

        print_banner(title, width, border);
        let report = run_command(invocation, OutputMode::Stream, self.settings.exit_policy)?;
        println!();

        if !report.success() {
            warn!("`{}` finished with {}", invocation, report.status);
            println!("`{}` finished with {}", invocation, report.status);
        }

        print_banner(
            &format!(
                ".. execution took {:.3} seconds",
                report.elapsed.as_secs_f64()
            ),
            width,
            border,
        );

        Ok(())
    }

    fn copy_to_clipboard(&mut self, command_line: &str) {
        if let Err(e) = self.clipboard.copy(command_line) {
            warn!("Unable to copy `{command_line}` to clipboard: {e}");
        }
    }
}
