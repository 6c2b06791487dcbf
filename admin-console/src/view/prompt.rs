//! Interactive prompts.

use dialoguer::{Confirm, MultiSelect};

use admin_console_repository::SelectOptions;

use crate::errors::ConsoleError;

/// Asks the operator questions the command line did not answer.
pub trait Prompter {
    /// Ask a yes/no question. Declining is the default.
    fn confirm(&self, prompt: &str) -> Result<bool, ConsoleError>;

    /// Let the operator pick any number of `options`; returns the picked labels.
    fn select(&self, prompt: &str, options: &SelectOptions) -> Result<Vec<String>, ConsoleError>;
}

/// Prompts on the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, prompt: &str) -> Result<bool, ConsoleError> {
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }

    fn select(&self, prompt: &str, options: &SelectOptions) -> Result<Vec<String>, ConsoleError> {
        let labels = options.labels();
        let picked = MultiSelect::new()
            .with_prompt(prompt)
            .items(&labels)
            .interact()?;

        Ok(picked
            .into_iter()
            .filter_map(|index| labels.get(index).map(|label| label.to_string()))
            .collect())
    }
}
