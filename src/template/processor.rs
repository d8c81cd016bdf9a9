use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;

use super::operation::TemplateOperation;

/// Decides, for each entry of the template tree, what to produce in the
/// output tree.
pub struct TemplateProcessor<'a> {
    engine: &'a dyn TemplateRenderer,
    template_root: &'a Path,
    output_root: &'a Path,
    answers: &'a serde_json::Value,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        template_root: &'a Path,
        output_root: &'a Path,
        answers: &'a serde_json::Value,
    ) -> Self {
        Self { engine, template_root, output_root, answers }
    }

    /// The output tree mirrors the template tree; paths are never rendered.
    fn get_target_path(&self, template_entry: &Path) -> Result<PathBuf> {
        let relative = template_entry.strip_prefix(self.template_root).map_err(|e| {
            Error::Other(anyhow::anyhow!("'{}': {e}", template_entry.display()))
        })?;
        Ok(self.output_root.join(relative))
    }

    /// Processes a template entry and determines the appropriate operation.
    ///
    /// UTF-8 files containing a placeholder are rendered; every other file is
    /// copied unchanged.
    pub fn process(&self, template_entry: &Path) -> Result<TemplateOperation> {
        let target = self.get_target_path(template_entry)?;

        if template_entry.is_dir() {
            return Ok(TemplateOperation::CreateDirectory { target });
        }

        let source = template_entry.to_path_buf();
        let text = match String::from_utf8(fs::read(template_entry)?) {
            Ok(text) if self.engine.has_placeholders(&text) => text,
            _ => return Ok(TemplateOperation::Copy { source, target }),
        };

        let name = template_entry
            .strip_prefix(self.template_root)
            .unwrap_or(template_entry)
            .display()
            .to_string();
        let content = self.engine.render(&text, self.answers, Some(&name))?;
        Ok(TemplateOperation::Write { source, target, content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::MiniJinjaRenderer;
    use serde_json::json;
    use tempfile::TempDir;

    struct Fixture {
        template: TempDir,
        output: TempDir,
        engine: MiniJinjaRenderer,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                template: TempDir::new().unwrap(),
                output: TempDir::new().unwrap(),
                engine: MiniJinjaRenderer::new(),
            }
        }

        fn process(&self, entry: &str, answers: &serde_json::Value) -> Result<TemplateOperation> {
            TemplateProcessor::new(&self.engine, self.template.path(), self.output.path(), answers)
                .process(&self.template.path().join(entry))
        }
    }

    #[test]
    fn text_with_placeholders_is_rendered() {
        let fixture = Fixture::new();
        fs::write(fixture.template.path().join("README.md"), "# {{name}}\n").unwrap();

        match fixture.process("README.md", &json!({"name": "demo"})).unwrap() {
            TemplateOperation::Write { target, content, .. } => {
                assert_eq!(target, fixture.output.path().join("README.md"));
                assert_eq!(content, "# demo\n");
            }
            other => panic!("Expected Write operation, got {other:?}"),
        }
    }

    #[test]
    fn text_without_placeholders_is_copied() {
        let fixture = Fixture::new();
        fs::write(fixture.template.path().join("LICENSE"), "MIT").unwrap();

        match fixture.process("LICENSE", &json!({})).unwrap() {
            TemplateOperation::Copy { source, target } => {
                assert_eq!(source, fixture.template.path().join("LICENSE"));
                assert_eq!(target, fixture.output.path().join("LICENSE"));
            }
            other => panic!("Expected Copy operation, got {other:?}"),
        }
    }

    #[test]
    fn binary_content_is_copied() {
        let fixture = Fixture::new();
        fs::write(fixture.template.path().join("favicon.ico"), [0u8, 159, 146, 150, b'{', b'{'])
            .unwrap();

        assert!(matches!(
            fixture.process("favicon.ico", &json!({})).unwrap(),
            TemplateOperation::Copy { .. }
        ));
    }

    #[test]
    fn placeholder_in_path_is_not_rendered() {
        let fixture = Fixture::new();
        fs::create_dir(fixture.template.path().join("{{name}}")).unwrap();

        match fixture.process("{{name}}", &json!({"name": "demo"})).unwrap() {
            TemplateOperation::CreateDirectory { target } => {
                assert_eq!(target, fixture.output.path().join("{{name}}"));
            }
            other => panic!("Expected CreateDirectory operation, got {other:?}"),
        }
    }

    #[test]
    fn malformed_placeholder_is_a_render_error() {
        let fixture = Fixture::new();
        fs::write(fixture.template.path().join("broken.txt"), "{{ name | }}").unwrap();

        match fixture.process("broken.txt", &json!({"name": "demo"})) {
            Err(Error::Render { template, .. }) => assert_eq!(template, "broken.txt"),
            other => panic!("Expected Render error, got {other:?}"),
        }
    }
}
