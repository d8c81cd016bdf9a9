use super::{
    handler::{parse_number, PromptHandler},
    interface::PromptProvider,
};
use crate::{
    config::{PromptSpec, PromptType},
    error::Result,
    renderer::TemplateRenderer,
};
use serde_json::{Map, Value};

/// Asks the package's questions in order and merges answers into the metadata.
pub struct PromptCollector<'a> {
    engine: &'a dyn TemplateRenderer,
    provider: &'a dyn PromptProvider,
    non_interactive: bool,
}

impl<'a> PromptCollector<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        provider: &'a dyn PromptProvider,
        non_interactive: bool,
    ) -> Self {
        Self { engine, provider, non_interactive }
    }

    /// Runs every prompt sequentially.
    ///
    /// Each answer is inserted into `metadata` before the next prompt is
    /// rendered, so messages, defaults and `when` conditions can refer to
    /// earlier answers. Keys already present in `metadata` are not asked again.
    pub fn collect(&self, prompts: &[PromptSpec], metadata: &mut Map<String, Value>) -> Result<()> {
        let handler = PromptHandler::new(self.provider);

        for spec in prompts {
            if metadata.contains_key(&spec.name) {
                log::debug!("Answer for '{}' already provided, not asking", spec.name);
                continue;
            }

            let context = Value::Object(metadata.clone());
            let default = self.render_default(spec, &context)?;
            let ask = !self.non_interactive
                && self.engine.execute_expression(&spec.when, &context)?;

            let answer = if ask {
                let message = self.engine.render(spec.message(), &context, Some(&spec.name))?;
                handler.ask(spec, &message, &default)?
            } else {
                match unasked_answer(spec, default) {
                    Some(answer) => answer,
                    None => {
                        log::debug!("Skipping '{}' without a default", spec.name);
                        continue;
                    }
                }
            };

            log::debug!("Answer for '{}': {}", spec.name, answer);
            metadata.insert(spec.name.clone(), answer);
        }
        Ok(())
    }

    fn render_default(&self, spec: &PromptSpec, context: &Value) -> Result<Value> {
        match &spec.default {
            Value::String(default) => Ok(Value::String(self.engine.render(
                default,
                context,
                Some(&spec.name),
            )?)),
            other => Ok(other.clone()),
        }
    }
}

/// Value stored for a prompt that is not shown to the user.
fn unasked_answer(spec: &PromptSpec, default: Value) -> Option<Value> {
    match (spec.r#type, default) {
        (PromptType::Confirm, default) => Some(Value::Bool(default.as_bool().unwrap_or(false))),
        (_, Value::Null) => None,
        (PromptType::Number, Value::String(raw)) => match parse_number(&raw) {
            Some(number) => Some(number),
            None => {
                log::warn!("Default '{raw}' of '{}' is not a number", spec.name);
                Some(Value::String(raw))
            }
        },
        (_, default) => Some(default),
    }
}
