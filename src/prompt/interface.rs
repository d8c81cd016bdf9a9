//! Pure interfaces for prompting without external dependencies
//!
//! These traits are what the rest of the crate asks questions through; the
//! terminal implementation lives in `dialoguer`, a scripted one in `automatic`.

use crate::error::Result;

/// Configuration for text input prompts
#[derive(Debug, Clone)]
pub struct TextPromptConfig {
    pub prompt: String,
    pub default: Option<String>,
    /// Hide the typed characters
    pub secret: bool,
}

/// Configuration for single choice selection
#[derive(Debug, Clone)]
pub struct SingleChoiceConfig {
    pub prompt: String,
    pub choices: Vec<String>,
    pub default_index: Option<usize>,
}

/// Configuration for multiple choice selection
#[derive(Debug, Clone)]
pub struct MultipleChoiceConfig {
    pub prompt: String,
    pub choices: Vec<String>,
    pub defaults: Vec<bool>,
}

/// Configuration for boolean confirmation
#[derive(Debug, Clone)]
pub struct ConfirmationConfig {
    pub prompt: String,
    pub default: bool,
}

pub trait TextPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String>;
}

pub trait SingleChoicePrompter {
    /// Returns the index of the selected choice.
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize>;
}

pub trait MultipleChoicePrompter {
    /// Returns the indices of the selected choices.
    fn prompt_multiple_choice(&self, config: &MultipleChoiceConfig)
        -> Result<Vec<usize>>;
}

pub trait ConfirmationPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool>;
}

impl<T: TextPrompter + ?Sized> TextPrompter for &T {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        (**self).prompt_text(config)
    }
}

impl<T: SingleChoicePrompter + ?Sized> SingleChoicePrompter for &T {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        (**self).prompt_single_choice(config)
    }
}

impl<T: MultipleChoicePrompter + ?Sized> MultipleChoicePrompter for &T {
    fn prompt_multiple_choice(&self, config: &MultipleChoiceConfig) -> Result<Vec<usize>> {
        (**self).prompt_multiple_choice(config)
    }
}

impl<T: ConfirmationPrompter + ?Sized> ConfirmationPrompter for &T {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        (**self).prompt_confirmation(config)
    }
}

/// Combined interface that provides all prompt types
pub trait PromptProvider:
    TextPrompter + SingleChoicePrompter + MultipleChoicePrompter + ConfirmationPrompter
{
}

impl<T> PromptProvider for T where
    T: TextPrompter + SingleChoicePrompter + MultipleChoicePrompter + ConfirmationPrompter
{
}
