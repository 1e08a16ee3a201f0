use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};
use ppcheck_core::error::{Error, Result};

/// Asks the user questions. Every call blocks until answered.
pub trait Prompter {
    /// Single choice, returns the index of the chosen item.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize>;

    /// Free text, `default` is used for an empty answer.
    fn input(&mut self, prompt: &str, default: &str) -> Result<String>;

    /// Any number of choices, returns the indexes of the checked items.
    fn checklist(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>>;
}

/// Prompts on the terminal.
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

fn prompt_error(error: dialoguer::Error) -> Error {
    let dialoguer::Error::IO(error) = error;
    Error::Stdio(error)
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(prompt_error)
    }

    fn input(&mut self, prompt: &str, default: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
            .map_err(prompt_error)
    }

    fn checklist(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>> {
        MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .interact()
            .map_err(prompt_error)
    }
}
