//! Scripted prompt provider
//!
//! Answers prompts from predefined responses keyed by the prompt text, which
//! makes it usable for automation and for exercising the prompt flow in tests.

use super::interface::*;
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};

/// A prompt that was shown, with the default it was offered with
#[derive(Debug, Clone, PartialEq)]
pub struct AskedPrompt {
    pub prompt: String,
    pub default: Option<String>,
}

/// Automatic prompt provider that gives predefined responses.
///
/// Several responses for the same prompt are consumed in order. Prompts without
/// a scripted response fall back to the default offered by the caller.
#[derive(Debug)]
pub struct AutomaticPrompter {
    text_responses: RefCell<HashMap<String, VecDeque<String>>>,
    choice_responses: RefCell<HashMap<String, VecDeque<usize>>>,
    multiple_choice_responses: RefCell<HashMap<String, VecDeque<Vec<usize>>>>,
    confirmation_responses: RefCell<HashMap<String, VecDeque<bool>>>,
    aborts: HashSet<String>,
    default_text: String,
    asked: RefCell<Vec<AskedPrompt>>,
}

impl AutomaticPrompter {
    pub fn new() -> Self {
        Self {
            text_responses: RefCell::default(),
            choice_responses: RefCell::default(),
            multiple_choice_responses: RefCell::default(),
            confirmation_responses: RefCell::default(),
            aborts: HashSet::new(),
            default_text: String::new(),
            asked: RefCell::default(),
        }
    }

    pub fn with_text_response(self, prompt: &str, response: &str) -> Self {
        push(&self.text_responses, prompt, response.to_string());
        self
    }

    pub fn with_choice_response(self, prompt: &str, choice_index: usize) -> Self {
        push(&self.choice_responses, prompt, choice_index);
        self
    }

    pub fn with_multiple_choice_response(
        self,
        prompt: &str,
        choice_indices: Vec<usize>,
    ) -> Self {
        push(&self.multiple_choice_responses, prompt, choice_indices);
        self
    }

    pub fn with_confirmation_response(self, prompt: &str, response: bool) -> Self {
        push(&self.confirmation_responses, prompt, response);
        self
    }

    /// Makes `prompt` behave as if the user pressed Ctrl-C.
    pub fn with_abort(mut self, prompt: &str) -> Self {
        self.aborts.insert(prompt.to_string());
        self
    }

    /// Text returned for unscripted text prompts that have no default
    pub fn with_default_text(mut self, default_text: &str) -> Self {
        self.default_text = default_text.to_string();
        self
    }

    /// Every prompt shown so far, in order.
    pub fn asked(&self) -> Vec<AskedPrompt> {
        self.asked.borrow().clone()
    }

    fn record(&self, prompt: &str, default: Option<String>) -> Result<()> {
        self.asked.borrow_mut().push(AskedPrompt { prompt: prompt.to_string(), default });
        if self.aborts.contains(prompt) {
            return Err(Error::PromptAborted);
        }
        Ok(())
    }
}

impl Default for AutomaticPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn push<T>(responses: &RefCell<HashMap<String, VecDeque<T>>>, prompt: &str, value: T) {
    responses.borrow_mut().entry(prompt.to_string()).or_default().push_back(value);
}

fn pop<T>(responses: &RefCell<HashMap<String, VecDeque<T>>>, prompt: &str) -> Option<T> {
    responses.borrow_mut().get_mut(prompt).and_then(VecDeque::pop_front)
}

impl TextPrompter for AutomaticPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        self.record(&config.prompt, config.default.clone())?;
        let response = pop(&self.text_responses, &config.prompt)
            .or_else(|| config.default.clone())
            .unwrap_or_else(|| self.default_text.clone());
        log::debug!("Auto-answering text prompt '{}' with '{}'", config.prompt, response);
        Ok(response)
    }
}

impl SingleChoicePrompter for AutomaticPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        let default = config.default_index.and_then(|i| config.choices.get(i)).cloned();
        self.record(&config.prompt, default)?;
        let response = pop(&self.choice_responses, &config.prompt)
            .or(config.default_index)
            .unwrap_or(0);
        log::debug!("Auto-answering choice prompt '{}' with {}", config.prompt, response);
        Ok(response)
    }
}

impl MultipleChoicePrompter for AutomaticPrompter {
    fn prompt_multiple_choice(
        &self,
        config: &MultipleChoiceConfig,
    ) -> Result<Vec<usize>> {
        self.record(&config.prompt, None)?;
        let response =
            pop(&self.multiple_choice_responses, &config.prompt).unwrap_or_else(|| {
                config
                    .defaults
                    .iter()
                    .enumerate()
                    .filter_map(|(i, &selected)| selected.then_some(i))
                    .collect()
            });
        log::debug!(
            "Auto-answering multiple choice prompt '{}' with {:?}",
            config.prompt,
            response
        );
        Ok(response)
    }
}

impl ConfirmationPrompter for AutomaticPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        self.record(&config.prompt, Some(config.default.to_string()))?;
        let response =
            pop(&self.confirmation_responses, &config.prompt).unwrap_or(config.default);
        log::debug!("Auto-answering confirmation '{}' with {}", config.prompt, response);
        Ok(response)
    }
}
