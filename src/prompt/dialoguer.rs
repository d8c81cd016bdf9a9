//! Dialoguer-based implementations of prompt interfaces

use super::interface::{
    ConfirmationConfig, ConfirmationPrompter, MultipleChoiceConfig,
    MultipleChoicePrompter, SingleChoiceConfig, SingleChoicePrompter, TextPromptConfig,
    TextPrompter,
};
use crate::error::{Error, Result};
use dialoguer::{Confirm, Input, MultiSelect, Password, Select};

/// Terminal prompter. Escape or Ctrl-C abort the prompt with `Error::PromptAborted`.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        if config.secret {
            return Ok(Password::new()
                .with_prompt(&config.prompt)
                .allow_empty_password(true)
                .interact()?);
        }

        let mut input = Input::<String>::new().with_prompt(&config.prompt).allow_empty(true);
        if let Some(default) = &config.default {
            input = input.default(default.clone());
        }
        Ok(input.interact_text()?)
    }
}

impl SingleChoicePrompter for DialoguerPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        let mut select = Select::new().with_prompt(&config.prompt).items(&config.choices);
        if let Some(default_index) = config.default_index {
            select = select.default(default_index);
        }
        select.interact_opt()?.ok_or(Error::PromptAborted)
    }
}

impl MultipleChoicePrompter for DialoguerPrompter {
    fn prompt_multiple_choice(
        &self,
        config: &MultipleChoiceConfig,
    ) -> Result<Vec<usize>> {
        MultiSelect::new()
            .with_prompt(&config.prompt)
            .items(&config.choices)
            .defaults(&config.defaults)
            .interact_opt()?
            .ok_or(Error::PromptAborted)
    }
}

impl ConfirmationPrompter for DialoguerPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        Confirm::new()
            .with_prompt(&config.prompt)
            .default(config.default)
            .interact_opt()?
            .ok_or(Error::PromptAborted)
    }
}
