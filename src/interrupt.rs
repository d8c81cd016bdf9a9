//! Removal of transient directories when the process is interrupted
//!
//! Directories owned by a `TempDir` are removed on drop, which never runs
//! when SIGINT or SIGTERM terminates the process. Loaders register such
//! directories here for the time they are alive; the installed handler
//! removes whatever is still registered before exiting.

use crate::constants::exit_codes;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Directories to delete if the process is interrupted.
#[derive(Debug, Default)]
pub struct CleanupRegistry {
    paths: Mutex<Vec<PathBuf>>,
}

impl CleanupRegistry {
    pub const fn new() -> Self {
        Self { paths: Mutex::new(Vec::new()) }
    }

    pub fn register(&self, path: &Path) {
        log::debug!("Registering '{}' for cleanup on interrupt", path.display());
        self.lock().push(path.to_path_buf());
    }

    pub fn unregister(&self, path: &Path) {
        self.lock().retain(|registered| registered != path);
    }

    pub fn is_registered(&self, path: &Path) -> bool {
        self.lock().iter().any(|registered| registered == path)
    }

    /// Removes every registered directory that still exists and empties the
    /// registry. Returns the number of directories removed.
    pub fn remove_all(&self) -> usize {
        let paths: Vec<PathBuf> = self.lock().drain(..).collect();
        let mut removed = 0;
        for path in paths {
            if !path.exists() {
                continue;
            }
            match std::fs::remove_dir_all(&path) {
                Ok(()) => removed += 1,
                Err(e) => log::warn!("Failed to remove '{}': {e}", path.display()),
            }
        }
        removed
    }

    // A poisoned list is still a valid list.
    fn lock(&self) -> MutexGuard<'_, Vec<PathBuf>> {
        self.paths.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

static REGISTRY: CleanupRegistry = CleanupRegistry::new();

/// The process-wide registry consulted by the interrupt handler.
pub fn registry() -> &'static CleanupRegistry {
    &REGISTRY
}

/// Installs the SIGINT/SIGTERM handler: registered directories are removed
/// and the process exits with a failure status.
pub fn install_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        let removed = REGISTRY.remove_all();
        log::debug!("Interrupted, removed {removed} transient director(y/ies)");
        eprintln!();
        std::process::exit(exit_codes::FAILURE);
    })
    .map_err(|e| Error::Other(anyhow::anyhow!("Failed to install interrupt handler: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn removes_registered_directories() {
        let root = TempDir::new().unwrap();
        let clone = root.path().join("sprout-clone");
        std::fs::create_dir_all(clone.join("template")).unwrap();
        std::fs::write(clone.join("template/README.md"), "# demo").unwrap();
        let kept = root.path().join("kept");
        std::fs::create_dir(&kept).unwrap();

        let registry = CleanupRegistry::new();
        registry.register(&clone);

        assert_eq!(registry.remove_all(), 1);
        assert!(!clone.exists());
        assert!(kept.exists());
        assert!(!registry.is_registered(&clone));
    }

    #[test]
    fn unregistered_directories_survive() {
        let root = TempDir::new().unwrap();
        let registry = CleanupRegistry::new();
        registry.register(root.path());
        registry.unregister(root.path());

        assert_eq!(registry.remove_all(), 0);
        assert!(root.path().exists());
    }

    #[test]
    fn already_removed_directories_are_skipped() {
        let root = TempDir::new().unwrap();
        let gone = root.path().join("gone");
        let registry = CleanupRegistry::new();
        registry.register(&gone);

        assert_eq!(registry.remove_all(), 0);
        assert!(!registry.is_registered(&gone));
    }
}
