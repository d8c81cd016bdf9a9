//! Configuration loading and validation

use crate::config::types::PromptSpec;
use crate::constants::{CONFIG_FILENAMES, DEFAULT_TEMPLATE_DIR};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Configuration declared by a template package
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageConfig {
    /// Questions asked in order before rendering
    #[serde(default)]
    pub prompts: Vec<PromptSpec>,
    /// Glob patterns, relative to the template directory, excluded from output
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "get_default_template_dir")]
    pub template_dir: String,
    /// Printed after a successful run; may contain placeholders
    #[serde(default)]
    pub completion_message: Option<String>,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            prompts: Vec::new(),
            ignores: Vec::new(),
            template_dir: get_default_template_dir(),
            completion_message: None,
        }
    }
}

impl PackageConfig {
    /// Loads the first configuration file found in `package_root`.
    ///
    /// A package without a configuration file gets the default configuration.
    pub fn load<P: AsRef<Path>>(package_root: P) -> Result<Self> {
        let package_root = package_root.as_ref();

        for config_file_name in CONFIG_FILENAMES {
            let config_file_path = package_root.join(config_file_name);
            if !config_file_path.exists() {
                continue;
            }

            log::debug!("Loading configuration from '{}'", config_file_path.display());
            let content = std::fs::read_to_string(&config_file_path)?;
            let parsed = if config_file_name.ends_with(".json") {
                serde_json::from_str::<PackageConfig>(&content).map_err(|e| e.to_string())
            } else {
                serde_yaml::from_str::<PackageConfig>(&content).map_err(|e| e.to_string())
            };
            let config = parsed
                .map_err(|e| Error::Config(format!("{config_file_name}: {e}")))?;
            config.validate()?;
            return Ok(config);
        }

        log::debug!(
            "No configuration file in '{}', using defaults",
            package_root.display()
        );
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        let template_dir = Path::new(&self.template_dir);
        if self.template_dir.is_empty()
            || template_dir
                .components()
                .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(Error::Config(format!(
                "template_dir '{}' must be a relative path inside the package",
                self.template_dir
            )));
        }

        let mut seen = HashSet::new();
        for prompt in &self.prompts {
            if prompt.name.trim().is_empty() {
                return Err(Error::Config("prompt name must not be empty".into()));
            }
            if !seen.insert(prompt.name.as_str()) {
                return Err(Error::Config(format!(
                    "prompt '{}' is declared more than once",
                    prompt.name
                )));
            }
            if prompt.r#type.needs_choices() && prompt.choices.is_empty() {
                return Err(Error::Config(format!(
                    "prompt '{}' of type {:?} requires choices",
                    prompt.name, prompt.r#type
                )));
            }
        }
        Ok(())
    }

    /// Directory holding the files to render.
    pub fn template_root(&self, package_root: &Path) -> Result<PathBuf> {
        let template_root = package_root.join(&self.template_dir);
        if !template_root.is_dir() {
            return Err(Error::Config(format!(
                "template directory '{}' not found in package",
                self.template_dir
            )));
        }
        Ok(template_root)
    }
}

fn get_default_template_dir() -> String {
    DEFAULT_TEMPLATE_DIR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PromptType;
    use tempfile::TempDir;

    #[test]
    fn missing_config_uses_defaults() {
        let package = TempDir::new().unwrap();
        let config = PackageConfig::load(package.path()).unwrap();
        assert!(config.prompts.is_empty());
        assert!(config.ignores.is_empty());
        assert_eq!(config.template_dir, "template");
        assert!(config.completion_message.is_none());
    }

    #[test]
    fn loads_json_config() {
        let package = TempDir::new().unwrap();
        std::fs::write(
            package.path().join("sprout.json"),
            r#"{
                "prompts": [
                    {"name": "description", "message": "Description"},
                    {"name": "typescript", "type": "confirm", "default": true}
                ],
                "ignores": ["**/*.log"]
            }"#,
        )
        .unwrap();

        let config = PackageConfig::load(package.path()).unwrap();
        assert_eq!(config.prompts.len(), 2);
        assert_eq!(config.prompts[1].r#type, PromptType::Confirm);
        assert_eq!(config.ignores, vec!["**/*.log".to_string()]);
    }

    #[test]
    fn loads_yaml_config() {
        let package = TempDir::new().unwrap();
        std::fs::write(
            package.path().join("sprout.yaml"),
            "template_dir: skeleton\ncompletion_message: \"cd {{ directory }}\"\nprompts:\n  - name: license\n    type: list\n    choices: [MIT, Apache-2.0]\n",
        )
        .unwrap();

        let config = PackageConfig::load(package.path()).unwrap();
        assert_eq!(config.template_dir, "skeleton");
        assert_eq!(config.prompts[0].choices.len(), 2);
        assert_eq!(config.completion_message.as_deref(), Some("cd {{ directory }}"));
    }

    #[test]
    fn json_takes_precedence_over_yaml() {
        let package = TempDir::new().unwrap();
        std::fs::write(package.path().join("sprout.json"), r#"{"template_dir": "a"}"#)
            .unwrap();
        std::fs::write(package.path().join("sprout.yml"), "template_dir: b\n").unwrap();

        let config = PackageConfig::load(package.path()).unwrap();
        assert_eq!(config.template_dir, "a");
    }

    #[test]
    fn unknown_fields_fail_fast() {
        let package = TempDir::new().unwrap();
        std::fs::write(package.path().join("sprout.json"), r#"{"helpers": {}}"#).unwrap();

        match PackageConfig::load(package.path()) {
            Err(Error::Config(msg)) => assert!(msg.starts_with("sprout.json")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_prompt_names() {
        let package = TempDir::new().unwrap();
        std::fs::write(
            package.path().join("sprout.json"),
            r#"{"prompts": [{"name": "a"}, {"name": "a"}]}"#,
        )
        .unwrap();
        assert!(matches!(PackageConfig::load(package.path()), Err(Error::Config(_))));
    }

    #[test]
    fn rejects_choice_prompt_without_choices() {
        let package = TempDir::new().unwrap();
        std::fs::write(
            package.path().join("sprout.json"),
            r#"{"prompts": [{"name": "style", "type": "checkbox"}]}"#,
        )
        .unwrap();
        assert!(matches!(PackageConfig::load(package.path()), Err(Error::Config(_))));
    }

    #[test]
    fn rejects_template_dir_escaping_package() {
        let config =
            PackageConfig { template_dir: "../outside".into(), ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn template_root_must_exist() {
        let package = TempDir::new().unwrap();
        let config = PackageConfig::default();
        assert!(config.template_root(package.path()).is_err());

        std::fs::create_dir(package.path().join("template")).unwrap();
        assert_eq!(
            config.template_root(package.path()).unwrap(),
            package.path().join("template")
        );
    }
}
