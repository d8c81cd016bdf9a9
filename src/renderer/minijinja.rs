use crate::{
    error::{Error, Result},
    renderer::interface::TemplateRenderer,
};
use cruet::case::{
    camel::to_camel_case, kebab::to_kebab_case, pascal::to_pascal_case,
    screaming_snake::to_screaming_snake_case, snake::to_snake_case, train::to_train_case,
};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use regex::Regex;

/// Any run of non-brace characters wrapped in doubled braces.
const PLACEHOLDER_PATTERN: &str = r"\{\{([^{}]+)\}\}";

/// MiniJinja-based template rendering engine.
///
/// Undefined variables render as an empty string, output is never
/// auto-escaped and a trailing newline in the source is preserved.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
    placeholder: Regex,
}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Lenient);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);

        env.add_filter("camel_case", to_camel_case);
        env.add_filter("kebab_case", to_kebab_case);
        env.add_filter("pascal_case", to_pascal_case);
        env.add_filter("screaming_snake_case", to_screaming_snake_case);
        env.add_filter("snake_case", to_snake_case);
        env.add_filter("train_case", to_train_case);

        Self {
            env,
            placeholder: Regex::new(PLACEHOLDER_PATTERN).expect("valid placeholder pattern"),
        }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String> {
        if !self.has_placeholders(template) {
            return Ok(template.to_string());
        }

        let name = template_name.unwrap_or("temp");
        self.env
            .render_named_str(name, template, context)
            .map_err(|source| Error::Render { template: name.to_string(), source })
    }

    fn has_placeholders(&self, text: &str) -> bool {
        self.placeholder.is_match(text)
    }

    fn execute_expression(
        &self,
        expr_str: &str,
        context: &serde_json::Value,
    ) -> Result<bool> {
        if expr_str.trim().is_empty() {
            return Ok(true);
        }
        let render_err =
            |source| Error::Render { template: expr_str.to_string(), source };
        let expr = self.env.compile_expression(expr_str).map_err(render_err)?;
        Ok(expr.eval(context).map_err(render_err)?.is_true())
    }
}
