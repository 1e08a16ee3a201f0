//! Type definitions for the session menus.
//!
//! This module defines the states of the session and the choices offered in
//! each menu.

use std::fmt::{Display, Formatter};

use ppcheck_core::error::{Error, Result};

use super::BACK_LABEL;

/// Where the session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    MainMenu,
    ScriptMenu,
    CommandMenu,
    Exit,
}

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    RunScripts,
    RunMaintenance,
    Exit,
}

impl MainChoice {
    pub const ALL: [MainChoice; 3] = [
        MainChoice::RunScripts,
        MainChoice::RunMaintenance,
        MainChoice::Exit,
    ];

    /// The state this choice leads to.
    pub fn next_state(self) -> State {
        match self {
            MainChoice::RunScripts => State::ScriptMenu,
            MainChoice::RunMaintenance => State::CommandMenu,
            MainChoice::Exit => State::Exit,
        }
    }
}

impl Display for MainChoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MainChoice::RunScripts => "> run script commands",
            MainChoice::RunMaintenance => "> run maintenance commands",
            MainChoice::Exit => "< exit",
        })
    }
}

/// Entries of the script menu: every script, then a way back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptChoice {
    Script(String),
    Back,
}

impl ScriptChoice {
    /// Menu label, e.g. `poetry run build`.
    pub fn label(&self, prefix: &str) -> String {
        match self {
            ScriptChoice::Script(name) => format!("{prefix} {name}"),
            ScriptChoice::Back => BACK_LABEL.to_string(),
        }
    }
}

/// The script menu entries for the given script names.
pub fn script_choices<'a>(names: impl IntoIterator<Item = &'a String>) -> Vec<ScriptChoice> {
    names
        .into_iter()
        .map(|name| ScriptChoice::Script(name.clone()))
        .chain([ScriptChoice::Back])
        .collect()
}

/// What to do after a script has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    ExitWithCopy,
    ExitWithoutCopy,
    BackToMain,
}

impl Ending {
    pub const ALL: [Ending; 3] = [
        Ending::ExitWithCopy,
        Ending::ExitWithoutCopy,
        Ending::BackToMain,
    ];
}

impl Display for Ending {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Ending::ExitWithCopy => "Exit with copied command in clipboard",
            Ending::ExitWithoutCopy => "Exit without copied command",
            Ending::BackToMain => "Back to main choice",
        })
    }
}

/// Looks up the entry the user picked.
///
/// # Errors
///
/// Returns [`Error::InvalidSelection`] if `index` is out of range.
pub fn pick<T>(choices: &[T], index: usize) -> Result<&T> {
    choices.get(index).ok_or(Error::InvalidSelection {
        index,
        len: choices.len(),
    })
}

/// Menu labels of any displayable choices.
pub fn labels<T: Display>(choices: &[T]) -> Vec<String> {
    choices.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_choice_labels() {
        assert_eq!(
            labels(&MainChoice::ALL),
            vec![
                "> run script commands",
                "> run maintenance commands",
                "< exit"
            ]
        );
    }

    #[test]
    fn test_main_choice_next_state() {
        assert_eq!(MainChoice::RunScripts.next_state(), State::ScriptMenu);
        assert_eq!(MainChoice::RunMaintenance.next_state(), State::CommandMenu);
        assert_eq!(MainChoice::Exit.next_state(), State::Exit);
    }

    #[test]
    fn test_script_choices_end_with_back() {
        let names = vec!["build".to_string(), "serve".to_string()];
        let choices = script_choices(&names);

        assert_eq!(choices.len(), 3);
        assert_eq!(choices[0].label("poetry run"), "poetry run build");
        assert_eq!(choices[2], ScriptChoice::Back);
        assert_eq!(choices[2].label("poetry run"), "< back");
    }

    #[test]
    fn test_script_choices_without_scripts() {
        let names: Vec<String> = Vec::new();
        assert_eq!(script_choices(&names), vec![ScriptChoice::Back]);
    }

    #[test]
    fn test_pick_in_range() {
        assert_eq!(pick(&Ending::ALL, 1).unwrap(), &Ending::ExitWithoutCopy);
    }

    #[test]
    fn test_pick_out_of_range() {
        let result = pick(&MainChoice::ALL, 3);
        assert!(matches!(
            result,
            Err(Error::InvalidSelection { index: 3, len: 3 })
        ));
    }
}
