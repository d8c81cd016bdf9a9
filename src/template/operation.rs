use crate::error::Result;
use std::fs;
use std::path::PathBuf;

/// What happens to one entry of the template tree.
#[derive(Debug)]
pub enum TemplateOperation {
    CreateDirectory { target: PathBuf },
    /// Rendered text content; `source` provides the file permissions
    Write { source: PathBuf, target: PathBuf, content: String },
    /// Byte-for-byte copy
    Copy { source: PathBuf, target: PathBuf },
}

impl TemplateOperation {
    pub fn target(&self) -> &PathBuf {
        match self {
            TemplateOperation::CreateDirectory { target }
            | TemplateOperation::Write { target, .. }
            | TemplateOperation::Copy { target, .. } => target,
        }
    }

    /// Gets a message describing the operation.
    pub fn get_message(&self) -> String {
        match self {
            TemplateOperation::CreateDirectory { target } => {
                format!("Creating directory '{}'", target.display())
            }
            TemplateOperation::Write { target, .. } => {
                format!("Writing to '{}'", target.display())
            }
            TemplateOperation::Copy { source, target } => {
                format!("Copying '{}' to '{}'", source.display(), target.display())
            }
        }
    }

    /// Performs the operation, creating missing parent directories.
    pub fn execute(&self) -> Result<()> {
        match self {
            TemplateOperation::CreateDirectory { target } => fs::create_dir_all(target)?,
            TemplateOperation::Write { source, target, content } => {
                create_parent(target)?;
                fs::write(target, content)?;
                fs::set_permissions(target, fs::metadata(source)?.permissions())?;
            }
            TemplateOperation::Copy { source, target } => {
                create_parent(target)?;
                fs::copy(source, target)?;
            }
        }
        Ok(())
    }
}

fn create_parent(target: &std::path::Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
