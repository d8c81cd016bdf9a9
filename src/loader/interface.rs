use crate::error::Result;
use crate::interrupt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A template package ready to be read.
///
/// When the package was fetched into a transient working directory, that
/// directory is removed when the `Template` is dropped, or by the interrupt
/// handler if the process is stopped first.
#[derive(Debug)]
pub struct Template {
    root: PathBuf,
    workdir: Option<TempDir>,
}

impl Template {
    /// A package living in a directory the loader does not own.
    pub fn local(root: PathBuf) -> Self {
        Self { root, workdir: None }
    }

    /// A package fetched into `workdir`, removed together with it.
    pub fn transient(workdir: TempDir) -> Self {
        interrupt::registry().register(workdir.path());
        Self { root: workdir.path().to_path_buf(), workdir: Some(workdir) }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_transient(&self) -> bool {
        self.workdir.is_some()
    }
}

impl Drop for Template {
    fn drop(&mut self) {
        if let Some(workdir) = &self.workdir {
            interrupt::registry().unregister(workdir.path());
        }
    }
}

/// Trait for loading templates from different sources.
pub trait TemplateLoader {
    fn load(&self) -> Result<Template>;
}
