//! Exclusion rules applied while walking a template directory

use crate::error::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Patterns every template walk excludes.
const DEFAULT_IGNORE_PATTERNS: &[&str] = &[".git", ".hg", ".svn", "**/.DS_Store"];

/// Glob patterns matched against paths relative to the template root.
///
/// A pattern naming a directory excludes the directory and everything
/// below it.
#[derive(Debug)]
pub struct IgnoreSet {
    globs: GlobSet,
}

impl IgnoreSet {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        let patterns = DEFAULT_IGNORE_PATTERNS
            .iter()
            .copied()
            .chain(patterns.iter().map(AsRef::as_ref))
            .map(|pattern| pattern.trim().trim_start_matches("./").trim_end_matches('/'))
            .filter(|pattern| !pattern.is_empty());

        for pattern in patterns {
            log::debug!("Adding ignore pattern: {pattern}");
            builder.add(Glob::new(pattern)?);
            builder.add(Glob::new(&format!("{pattern}/**"))?);
        }
        Ok(Self { globs: builder.build()? })
    }

    /// `relative` is the path of an entry relative to the template root.
    pub fn is_ignored<P: AsRef<Path>>(&self, relative: P) -> bool {
        self.globs.is_match(relative.as_ref())
    }
}
