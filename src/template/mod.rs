//! Template walking and rendering
//!
//! - `operation`: what is produced for one entry of the template tree
//! - `processor`: decides the operation for an entry
//! - `Generator`: walks the tree and renders every entry with the answers

pub mod operation;
pub mod processor;

use crate::error::{Error, FileFailure, Result};
use crate::ignore::IgnoreSet;
use crate::renderer::TemplateRenderer;
use operation::TemplateOperation;
use processor::TemplateProcessor;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Counts of what a generation produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub directories: usize,
    pub rendered: usize,
    pub copied: usize,
}

impl Report {
    fn record(&mut self, operation: &TemplateOperation) {
        match operation {
            TemplateOperation::CreateDirectory { .. } => self.directories += 1,
            TemplateOperation::Write { .. } => self.rendered += 1,
            TemplateOperation::Copy { .. } => self.copied += 1,
        }
    }

    pub fn files(&self) -> usize {
        self.rendered + self.copied
    }
}

/// Produces a destination tree from a template tree.
///
/// Answers must be complete before `generate` is called: nothing is asked
/// during the walk.
pub struct Generator<'a> {
    engine: &'a dyn TemplateRenderer,
}

impl<'a> Generator<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer) -> Self {
        Self { engine }
    }

    /// Renders every entry of `source_dir` that `ignores` does not exclude
    /// into `dest_dir`.
    ///
    /// A failing entry does not stop the others; all failures are returned
    /// together as `Error::Generation` once the walk is done.
    pub fn generate(
        &self,
        source_dir: &Path,
        dest_dir: &Path,
        ignores: &IgnoreSet,
        metadata: &Map<String, Value>,
    ) -> Result<Report> {
        let mut failures = Vec::new();
        let entries = enumerate(source_dir, ignores, &mut failures)?;
        log::debug!("Found {} entries in '{}'", entries.len(), source_dir.display());

        let answers = Value::Object(metadata.clone());
        let processor = TemplateProcessor::new(self.engine, source_dir, dest_dir, &answers);
        let mut report = Report::default();

        for entry in entries {
            let outcome = processor.process(&entry).and_then(|operation| {
                log::info!("{}", operation.get_message());
                operation.execute()?;
                Ok(operation)
            });
            match outcome {
                Ok(operation) => report.record(&operation),
                Err(error) => {
                    let path = relative_to(&entry, source_dir);
                    log::error!("Failed to generate '{}': {error}", path.display());
                    failures.push(FileFailure { path, error });
                }
            }
        }

        if failures.is_empty() {
            Ok(report)
        } else {
            Err(Error::Generation { failures })
        }
    }
}

/// Lists the entries under `source_dir` in walk order, without the root
/// itself. Ignored directories are not descended into.
fn enumerate(
    source_dir: &Path,
    ignores: &IgnoreSet,
    failures: &mut Vec<FileFailure>,
) -> Result<Vec<PathBuf>> {
    if !source_dir.is_dir() {
        return Err(Error::TemplateDoesNotExistsError {
            template_dir: source_dir.display().to_string(),
        });
    }

    let mut entries = Vec::new();
    let walker = WalkDir::new(source_dir)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let ignored = ignores.is_ignored(relative_to(entry.path(), source_dir));
            if ignored {
                log::debug!("Ignoring '{}'", entry.path().display());
            }
            !ignored
        });

    for entry in walker {
        match entry {
            Ok(entry) => entries.push(entry.into_path()),
            Err(error) => {
                let path = error
                    .path()
                    .map(|p| relative_to(p, source_dir))
                    .unwrap_or_else(|| PathBuf::from("."));
                failures.push(FileFailure { path, error: Error::IoError(error.into()) });
            }
        }
    }
    Ok(entries)
}

fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
