//! Prompt specification types

use serde::Deserialize;

/// Kind of question presented to the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptType {
    /// Free text input
    #[default]
    Input,
    /// Yes/no question
    Confirm,
    /// Pick one of `choices`
    List,
    /// Pick any number of `choices`
    Checkbox,
    /// Hidden text input
    Password,
    /// Numeric input
    Number,
}

impl PromptType {
    pub fn needs_choices(self) -> bool {
        matches!(self, PromptType::List | PromptType::Checkbox)
    }
}

/// One selectable option of a `list` or `checkbox` prompt.
///
/// Either a bare string, used both as label and value, or a labeled value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Choice {
    Plain(String),
    Labeled { name: String, value: serde_json::Value },
}

impl Choice {
    pub fn label(&self) -> &str {
        match self {
            Choice::Plain(s) => s,
            Choice::Labeled { name, .. } => name,
        }
    }

    pub fn value(&self) -> serde_json::Value {
        match self {
            Choice::Plain(s) => serde_json::Value::String(s.clone()),
            Choice::Labeled { value, .. } => value.clone(),
        }
    }
}

/// A single question declared by a template package
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptSpec {
    /// Metadata key the answer is stored under
    pub name: String,
    #[serde(rename = "type", default)]
    pub r#type: PromptType,
    /// Text shown to the user; may contain placeholders
    #[serde(default)]
    pub message: String,
    /// Default answer; string defaults may reference earlier answers
    #[serde(default)]
    pub default: serde_json::Value,
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Expression deciding whether the question is asked at all
    #[serde(default)]
    pub when: String,
}

impl PromptSpec {
    /// The message to display, falling back to the variable name.
    pub fn message(&self) -> &str {
        if self.message.is_empty() {
            &self.name
        } else {
            &self.message
        }
    }
}
