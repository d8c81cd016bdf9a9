use crate::{
    cli::{
        answers::{read_answers, seed_metadata},
        Args,
    },
    config::PackageConfig,
    constants::CONFIG_FILENAMES,
    error::Result,
    ignore::IgnoreSet,
    interrupt,
    loader::get_template,
    progress::{ConsoleProgress, Progress},
    prompt::{get_prompt_provider, PromptCollector, PromptProvider},
    renderer::{MiniJinjaRenderer, TemplateRenderer},
    target::{apply, Resolution, TargetResolver},
    template::{Generator, Report},
};
use chrono::Datelike;
use serde_json::Value;
use std::path::{Component, Path, PathBuf};

const DEFAULT_COMPLETION_MESSAGE: &str = "cd {{ directory }} && npm install";

/// Result of a successful scaffold.
#[derive(Debug)]
pub struct Summary {
    pub target_path: PathBuf,
    pub project_name: String,
    pub report: Report,
    /// Rendered `completion_message` of the package
    pub completion_message: String,
}

/// Main CLI runner that orchestrates one scaffold operation
pub struct Runner<'a> {
    args: Args,
    provider: Box<dyn PromptProvider + 'a>,
    progress: Box<dyn Progress + 'a>,
    current_dir: Option<PathBuf>,
}

impl<'a> Runner<'a> {
    pub fn new(args: Args) -> Self {
        Self {
            args,
            provider: get_prompt_provider(),
            progress: Box::new(ConsoleProgress::new()),
            current_dir: None,
        }
    }

    pub fn with_prompt_provider(mut self, provider: impl PromptProvider + 'a) -> Self {
        self.provider = Box::new(provider);
        self
    }

    pub fn with_progress(mut self, progress: impl Progress + 'a) -> Self {
        self.progress = Box::new(progress);
        self
    }

    /// Resolves the project directory against `dir` instead of the process
    /// working directory.
    pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Executes the complete scaffold workflow.
    ///
    /// The fetched template is dropped, and its transient directory removed,
    /// before this returns on every path.
    pub fn run(self) -> Result<Summary> {
        let engine = MiniJinjaRenderer::new();

        let resolution = self.resolve_target()?;
        let answers = read_answers(self.args.answers.as_deref(), std::io::stdin())?;

        self.progress.start("Downloading template");
        let template = self
            .step("Downloaded template", || {
                get_template(&self.args.template, self.args.branch.as_deref())
            })?;

        let config = PackageConfig::load(template.root())?;
        let template_root = config.template_root(template.root())?;
        let ignores = self.ignore_set(&config)?;

        let mut metadata = seed_metadata(
            &resolution.project_name,
            &self.args.project_directory,
            chrono::Local::now().year(),
            answers,
        );
        PromptCollector::new(&engine, self.provider.as_ref(), self.args.non_interactive)
            .collect(&config.prompts, &mut metadata)?;

        // Nothing in the target has been touched until every answer is known.
        apply(&resolution)?;

        self.progress.start("Generating project");
        let report = self.step("Generation completed!", || {
            Generator::new(&engine).generate(
                &template_root,
                &resolution.target_path,
                &ignores,
                &metadata,
            )
        })?;
        drop(template);
        log::debug!(
            "Generated {} file(s) in {} directorie(s)",
            report.files(),
            report.directories
        );

        let completion_message = engine.render(
            config.completion_message.as_deref().unwrap_or(DEFAULT_COMPLETION_MESSAGE),
            &Value::Object(metadata),
            Some("completion_message"),
        )?;

        Ok(Summary {
            target_path: resolution.target_path,
            project_name: resolution.project_name,
            report,
            completion_message,
        })
    }

    fn resolve_target(&self) -> Result<Resolution> {
        let mut resolver = TargetResolver::new(
            self.provider.as_ref(),
            self.args.on_conflict,
            self.args.non_interactive,
        );
        if let Some(dir) = &self.current_dir {
            resolver = resolver.with_current_dir(dir);
        }
        resolver.resolve(&self.args.project_directory)
    }

    /// Reports the outcome of a step started with `Progress::start`.
    fn step<T>(&self, done: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let result = f();
        match &result {
            Ok(_) => self.progress.succeed(done),
            Err(e) => self.progress.fail(&e.to_string()),
        }
        result
    }

    /// When the package root itself is the template directory its
    /// configuration file is not part of the output.
    fn ignore_set(&self, config: &PackageConfig) -> Result<IgnoreSet> {
        let mut patterns = config.ignores.clone();
        if Path::new(&config.template_dir).components().all(|c| c == Component::CurDir) {
            patterns.extend(CONFIG_FILENAMES.iter().map(|name| name.to_string()));
        }
        IgnoreSet::new(&patterns)
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    if let Err(e) = interrupt::install_handler() {
        log::warn!("{e}");
    }
    let summary = Runner::new(args).run()?;
    println!("\n  {}\n", summary.completion_message);
    Ok(())
}
