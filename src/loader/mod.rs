use crate::error::Result;
use crate::loader::{git::GitLoader, local::LocalLoader};
use std::path::PathBuf;

pub mod git;
pub mod interface;
pub mod local;

pub use interface::{Template, TemplateLoader};

#[derive(Debug)]
pub enum TemplateSource {
    /// Local filesystem template path
    FileSystem(PathBuf),
    /// Git repository URL (HTTPS or SSH)
    Git(String),
}

impl TemplateSource {
    pub fn parse(s: &str) -> Self {
        if GitLoader::<&str>::is_git_url(s) {
            TemplateSource::Git(s.to_string())
        } else {
            TemplateSource::FileSystem(PathBuf::from(s))
        }
    }
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Git(repo) => write!(f, "git repository: '{repo}'"),
        }
    }
}

/// Resolves `s` to a template source and loads it.
///
/// `branch` only applies to git sources.
pub fn get_template(s: &str, branch: Option<&str>) -> Result<Template> {
    match TemplateSource::parse(s) {
        TemplateSource::Git(repo) => {
            GitLoader::new(repo, branch.map(str::to_string)).load()
        }
        TemplateSource::FileSystem(path) => {
            if branch.is_some() {
                log::warn!("--branch is ignored for local template '{}'", path.display());
            }
            LocalLoader::new(path).load()
        }
    }
}
