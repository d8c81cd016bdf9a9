//! Maps prompt specifications onto provider calls and typed answers

use super::interface::{
    ConfirmationConfig, ConfirmationPrompter, MultipleChoiceConfig, MultipleChoicePrompter,
    PromptProvider, SingleChoiceConfig, SingleChoicePrompter, TextPromptConfig, TextPrompter,
};
use crate::{
    config::{Choice, PromptSpec, PromptType},
    error::{Error, Result},
};
use serde_json::Value;

/// Asks a single question through a `PromptProvider` and types the answer
pub struct PromptHandler<'a> {
    provider: &'a dyn PromptProvider,
}

impl<'a> PromptHandler<'a> {
    pub fn new(provider: &'a dyn PromptProvider) -> Self {
        Self { provider }
    }

    /// Asks `spec` with an already rendered `message` and `default`.
    pub fn ask(&self, spec: &PromptSpec, message: &str, default: &Value) -> Result<Value> {
        match spec.r#type {
            PromptType::Input => self.prompt_text(message, default, false),
            PromptType::Password => self.prompt_text(message, &Value::Null, true),
            PromptType::Number => self.prompt_number(message, default),
            PromptType::Confirm => self.prompt_confirmation(message, default),
            PromptType::List => self.prompt_single_choice(message, &spec.choices, default),
            PromptType::Checkbox => {
                self.prompt_multiple_choice(message, &spec.choices, default)
            }
        }
    }

    fn prompt_text(&self, message: &str, default: &Value, secret: bool) -> Result<Value> {
        let config = TextPromptConfig {
            prompt: message.to_string(),
            default: value_to_default_string(default),
            secret,
        };
        Ok(Value::String(self.provider.prompt_text(&config)?))
    }

    fn prompt_number(&self, message: &str, default: &Value) -> Result<Value> {
        let config = TextPromptConfig {
            prompt: message.to_string(),
            default: value_to_default_string(default),
            secret: false,
        };
        loop {
            let raw = self.provider.prompt_text(&config)?;
            match parse_number(&raw) {
                Some(number) => return Ok(number),
                None => eprintln!("'{raw}' is not a number, please try again."),
            }
        }
    }

    fn prompt_confirmation(&self, message: &str, default: &Value) -> Result<Value> {
        let config = ConfirmationConfig {
            prompt: message.to_string(),
            default: default.as_bool().unwrap_or(false),
        };
        Ok(Value::Bool(self.provider.prompt_confirmation(&config)?))
    }

    fn prompt_single_choice(
        &self,
        message: &str,
        choices: &[Choice],
        default: &Value,
    ) -> Result<Value> {
        let config = SingleChoiceConfig {
            prompt: message.to_string(),
            choices: choices.iter().map(|c| c.label().to_string()).collect(),
            default_index: choices.iter().position(|c| matches_choice(c, default)),
        };
        let index = self.provider.prompt_single_choice(&config)?;
        choice_value(choices, index)
    }

    fn prompt_multiple_choice(
        &self,
        message: &str,
        choices: &[Choice],
        default: &Value,
    ) -> Result<Value> {
        let selected_by_default = default.as_array().map(Vec::as_slice).unwrap_or_default();
        let config = MultipleChoiceConfig {
            prompt: message.to_string(),
            choices: choices.iter().map(|c| c.label().to_string()).collect(),
            defaults: choices
                .iter()
                .map(|c| selected_by_default.iter().any(|d| matches_choice(c, d)))
                .collect(),
        };
        let indices = self.provider.prompt_multiple_choice(&config)?;
        indices
            .into_iter()
            .map(|index| choice_value(choices, index))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }
}

fn matches_choice(choice: &Choice, value: &Value) -> bool {
    !value.is_null()
        && (choice.value() == *value || value.as_str() == Some(choice.label()))
}

fn choice_value(choices: &[Choice], index: usize) -> Result<Value> {
    choices.get(index).map(Choice::value).ok_or_else(|| {
        Error::Other(anyhow::anyhow!("Selected choice {index} is out of range"))
    })
}

fn value_to_default_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        _ => Some(value.to_string()),
    }
}

pub(crate) fn parse_number(raw: &str) -> Option<Value> {
    let raw = raw.trim();
    if let Ok(int) = raw.parse::<i64>() {
        return Some(Value::from(int));
    }
    raw.parse::<f64>().ok().and_then(serde_json::Number::from_f64).map(Value::Number)
}
