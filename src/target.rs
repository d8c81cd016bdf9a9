//! Destination directory resolution
//!
//! Validates the project name and settles what to do with an existing
//! destination before anything is fetched or written.

use crate::constants::CURRENT_DIR_SENTINEL;
use crate::error::{Error, Result};
use crate::prompt::{
    ConfirmationConfig, ConfirmationPrompter, PromptProvider, SingleChoiceConfig,
    SingleChoicePrompter,
};
use crate::validation::validate_project_name;
use clap::ValueEnum;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

/// Answer to "the destination already exists", chosen up front with
/// `--on-conflict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ConflictAction {
    /// Remove the contents of the directory and keep the directory.
    Empty,
    /// Remove the directory and recreate it.
    Overwrite,
    /// Stop without touching anything.
    Cancel,
}

impl Display for ConflictAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ConflictAction::Empty => "Empty",
            ConflictAction::Overwrite => "Overwrite",
            ConflictAction::Cancel => "Cancel",
        };
        write!(f, "{s}")
    }
}

/// What `apply` does to the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetAction {
    Create,
    Empty,
    Overwrite,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub target_path: PathBuf,
    pub project_name: String,
    pub action: TargetAction,
}

pub struct TargetResolver<'a> {
    provider: &'a dyn PromptProvider,
    on_conflict: Option<ConflictAction>,
    non_interactive: bool,
    current_dir: Option<PathBuf>,
}

impl<'a> TargetResolver<'a> {
    pub fn new(
        provider: &'a dyn PromptProvider,
        on_conflict: Option<ConflictAction>,
        non_interactive: bool,
    ) -> Self {
        Self { provider, on_conflict, non_interactive, current_dir: None }
    }

    /// Resolves relative destinations against `dir` instead of the process
    /// working directory.
    pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Validates the project name and picks the action for the destination.
    ///
    /// Nothing on disk is changed; see [`apply`].
    pub fn resolve(&self, requested: &str) -> Result<Resolution> {
        let current_dir = match &self.current_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        let in_current = requested == CURRENT_DIR_SENTINEL;

        let (target_path, project_name) = if in_current {
            let name = current_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            (current_dir, name)
        } else {
            (current_dir.join(requested), requested.to_string())
        };

        validate_project_name(&project_name)?;
        log::debug!("Project '{project_name}' resolves to '{}'", target_path.display());

        if !target_path.exists() {
            return Ok(Resolution { target_path, project_name, action: TargetAction::Create });
        }

        let action = if in_current {
            self.resolve_current_dir(&target_path)?
        } else {
            self.resolve_existing(&target_path)?
        };
        Ok(Resolution { target_path, project_name, action })
    }

    fn resolve_current_dir(&self, target_path: &Path) -> Result<TargetAction> {
        let choice = match self.preset(target_path)? {
            Some(ConflictAction::Overwrite) => {
                log::warn!("The current directory is never removed; emptying it instead");
                ConflictAction::Empty
            }
            Some(choice) => choice,
            None => {
                let confirmed = self.provider.prompt_confirmation(&ConfirmationConfig {
                    prompt: "Generate project in current directory?".to_string(),
                    default: false,
                })?;
                if !confirmed {
                    return Err(Error::ConflictCancelled);
                }
                self.choose(
                    format!(
                        "The current directory {} must be empty. Pick an action:",
                        target_path.display()
                    ),
                    &[ConflictAction::Empty, ConflictAction::Cancel],
                )?
            }
        };
        to_target_action(choice)
    }

    fn resolve_existing(&self, target_path: &Path) -> Result<TargetAction> {
        let choice = match self.preset(target_path)? {
            Some(choice) => choice,
            None => self.choose(
                format!(
                    "Target directory {} already exists. Pick an action:",
                    target_path.display()
                ),
                &[ConflictAction::Overwrite, ConflictAction::Empty, ConflictAction::Cancel],
            )?,
        };
        to_target_action(choice)
    }

    /// The `--on-conflict` choice, required when the user cannot be asked.
    fn preset(&self, target_path: &Path) -> Result<Option<ConflictAction>> {
        match (self.on_conflict, self.non_interactive) {
            (Some(choice), _) => Ok(Some(choice)),
            (None, false) => Ok(None),
            (None, true) => Err(Error::OutputDirectoryExists {
                output_dir: target_path.display().to_string(),
            }),
        }
    }

    fn choose(&self, prompt: String, options: &[ConflictAction]) -> Result<ConflictAction> {
        let index = self.provider.prompt_single_choice(&SingleChoiceConfig {
            prompt,
            choices: options.iter().map(ToString::to_string).collect(),
            default_index: None,
        })?;
        options.get(index).copied().ok_or_else(|| {
            Error::Other(anyhow::anyhow!("Selected action {index} is out of range"))
        })
    }
}

fn to_target_action(choice: ConflictAction) -> Result<TargetAction> {
    match choice {
        ConflictAction::Empty => Ok(TargetAction::Empty),
        ConflictAction::Overwrite => Ok(TargetAction::Overwrite),
        ConflictAction::Cancel => Err(Error::ConflictCancelled),
    }
}

/// Performs the resolved action; afterwards the destination is an empty
/// directory.
pub fn apply(resolution: &Resolution) -> Result<()> {
    let target = &resolution.target_path;
    match resolution.action {
        TargetAction::Create => {
            log::debug!("Creating '{}'", target.display());
        }
        TargetAction::Empty if target.is_dir() => {
            log::info!("Emptying '{}'", target.display());
            for entry in fs::read_dir(target)? {
                let path = entry?.path();
                if path.is_dir() && !path.is_symlink() {
                    fs::remove_dir_all(&path)?;
                } else {
                    fs::remove_file(&path)?;
                }
            }
        }
        TargetAction::Empty | TargetAction::Overwrite => {
            log::info!("Removing '{}'", target.display());
            if target.is_dir() && !target.is_symlink() {
                fs::remove_dir_all(target)?;
            } else {
                fs::remove_file(target)?;
            }
        }
    }
    fs::create_dir_all(target)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::AutomaticPrompter;
    use tempfile::TempDir;

    fn existing_prompt(dir: &Path) -> String {
        format!("Target directory {} already exists. Pick an action:", dir.display())
    }

    fn current_prompt(dir: &Path) -> String {
        format!("The current directory {} must be empty. Pick an action:", dir.display())
    }

    fn populate(dir: &Path) {
        fs::create_dir_all(dir.join("src")).unwrap();
        fs::write(dir.join("src/index.js"), "old").unwrap();
        fs::write(dir.join("README.md"), "old").unwrap();
    }

    #[test]
    fn missing_target_is_created() {
        let cwd = TempDir::new().unwrap();
        let prompter = AutomaticPrompter::new();
        let resolution = TargetResolver::new(&prompter, None, false)
            .with_current_dir(cwd.path())
            .resolve("demo")
            .unwrap();

        assert_eq!(resolution.action, TargetAction::Create);
        assert_eq!(resolution.project_name, "demo");
        assert_eq!(resolution.target_path, cwd.path().join("demo"));
        assert!(prompter.asked().is_empty());

        apply(&resolution).unwrap();
        assert!(cwd.path().join("demo").is_dir());
    }

    #[test]
    fn invalid_name_fails_before_any_mutation() {
        let cwd = TempDir::new().unwrap();
        let prompter = AutomaticPrompter::new();
        let result = TargetResolver::new(&prompter, None, false)
            .with_current_dir(cwd.path())
            .resolve("My App");

        match result {
            Err(Error::InvalidName { name, problems }) => {
                assert_eq!(name, "My App");
                assert_eq!(problems.len(), 2);
            }
            other => panic!("expected InvalidName, got {other:?}"),
        }
        assert_eq!(fs::read_dir(cwd.path()).unwrap().count(), 0);
    }

    #[test]
    fn empty_leaves_directory_without_entries() {
        let cwd = TempDir::new().unwrap();
        let target = cwd.path().join("demo");
        populate(&target);

        let prompter =
            AutomaticPrompter::new().with_choice_response(&existing_prompt(&target), 1);
        let resolution = TargetResolver::new(&prompter, None, false)
            .with_current_dir(cwd.path())
            .resolve("demo")
            .unwrap();
        assert_eq!(resolution.action, TargetAction::Empty);

        apply(&resolution).unwrap();
        assert!(target.is_dir());
        assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
    }

    #[test]
    fn overwrite_recreates_directory() {
        let cwd = TempDir::new().unwrap();
        let target = cwd.path().join("demo");
        populate(&target);

        let prompter =
            AutomaticPrompter::new().with_choice_response(&existing_prompt(&target), 0);
        let resolution = TargetResolver::new(&prompter, None, false)
            .with_current_dir(cwd.path())
            .resolve("demo")
            .unwrap();
        assert_eq!(resolution.action, TargetAction::Overwrite);

        apply(&resolution).unwrap();
        assert!(target.is_dir());
        assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
    }

    #[test]
    fn cancel_leaves_everything_untouched() {
        let cwd = TempDir::new().unwrap();
        let target = cwd.path().join("demo");
        populate(&target);

        let prompter =
            AutomaticPrompter::new().with_choice_response(&existing_prompt(&target), 2);
        let result = TargetResolver::new(&prompter, None, false)
            .with_current_dir(cwd.path())
            .resolve("demo");

        assert!(matches!(result, Err(Error::ConflictCancelled)));
        assert_eq!(fs::read_to_string(target.join("README.md")).unwrap(), "old");
        assert_eq!(fs::read_to_string(target.join("src/index.js")).unwrap(), "old");
    }

    #[test]
    fn current_directory_needs_confirmation() {
        let parent = TempDir::new().unwrap();
        let cwd = parent.path().join("my-app");
        populate(&cwd);

        let prompter = AutomaticPrompter::new()
            .with_confirmation_response("Generate project in current directory?", false);
        let result =
            TargetResolver::new(&prompter, None, false).with_current_dir(&cwd).resolve(".");

        assert!(matches!(result, Err(Error::ConflictCancelled)));
        assert_eq!(prompter.asked().len(), 1);
        assert!(cwd.join("README.md").exists());
    }

    #[test]
    fn current_directory_offers_only_empty_and_cancel() {
        let parent = TempDir::new().unwrap();
        let cwd = parent.path().join("my-app");
        populate(&cwd);

        let prompter = AutomaticPrompter::new()
            .with_confirmation_response("Generate project in current directory?", true)
            .with_choice_response(&current_prompt(&cwd), 0);
        let resolution =
            TargetResolver::new(&prompter, None, false).with_current_dir(&cwd).resolve(".").unwrap();

        assert_eq!(resolution.project_name, "my-app");
        assert_eq!(resolution.target_path, cwd);
        assert_eq!(resolution.action, TargetAction::Empty);

        apply(&resolution).unwrap();
        assert!(cwd.is_dir());
        assert_eq!(fs::read_dir(&cwd).unwrap().count(), 0);
    }

    #[test]
    fn current_directory_cancel_is_second_choice() {
        let parent = TempDir::new().unwrap();
        let cwd = parent.path().join("my-app");
        populate(&cwd);

        let prompter = AutomaticPrompter::new()
            .with_confirmation_response("Generate project in current directory?", true)
            .with_choice_response(&current_prompt(&cwd), 1);
        let result =
            TargetResolver::new(&prompter, None, false).with_current_dir(&cwd).resolve(".");
        assert!(matches!(result, Err(Error::ConflictCancelled)));
    }

    #[test]
    fn current_directory_name_is_validated() {
        let parent = TempDir::new().unwrap();
        let cwd = parent.path().join("MyApp");
        fs::create_dir(&cwd).unwrap();

        let prompter = AutomaticPrompter::new();
        let result = TargetResolver::new(&prompter, None, false).with_current_dir(&cwd).resolve(".");
        assert!(matches!(result, Err(Error::InvalidName { .. })));
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn non_interactive_requires_on_conflict() {
        let cwd = TempDir::new().unwrap();
        populate(&cwd.path().join("demo"));

        let prompter = AutomaticPrompter::new();
        let result = TargetResolver::new(&prompter, None, true)
            .with_current_dir(cwd.path())
            .resolve("demo");
        assert!(matches!(result, Err(Error::OutputDirectoryExists { .. })));

        let resolution = TargetResolver::new(&prompter, Some(ConflictAction::Overwrite), true)
            .with_current_dir(cwd.path())
            .resolve("demo")
            .unwrap();
        assert_eq!(resolution.action, TargetAction::Overwrite);
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn on_conflict_overwrite_empties_current_directory() {
        let parent = TempDir::new().unwrap();
        let cwd = parent.path().join("my-app");
        populate(&cwd);

        let prompter = AutomaticPrompter::new();
        let resolution = TargetResolver::new(&prompter, Some(ConflictAction::Overwrite), true)
            .with_current_dir(&cwd)
            .resolve(".")
            .unwrap();
        assert_eq!(resolution.action, TargetAction::Empty);
    }

    #[test]
    fn conflict_actions_display_as_menu_labels() {
        assert_eq!(ConflictAction::Empty.to_string(), "Empty");
        assert_eq!(ConflictAction::Overwrite.to_string(), "Overwrite");
        assert_eq!(ConflictAction::Cancel.to_string(), "Cancel");
    }
}
