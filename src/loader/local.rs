use crate::error::{Error, Result};
use crate::loader::interface::{Template, TemplateLoader};
use std::path::Path;

/// Loader for templates from the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    /// Uses the directory in place; it is never removed.
    fn load(&self) -> Result<Template> {
        let path = self.path.as_ref();
        if !path.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: path.display().to_string(),
            });
        }
        log::debug!("Using local template '{}'", path.display());
        Ok(Template::local(path.to_path_buf()))
    }
}
