//! Template package configuration
//!
//! - `types`: prompt specifications and their answer types
//! - `loader`: locating, parsing and validating the package configuration file

pub mod loader;
pub mod types;

pub use loader::PackageConfig;
pub use types::{Choice, PromptSpec, PromptType};
