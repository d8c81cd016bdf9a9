//! Placeholder substitution for template file contents
//!
//! - `interface`: the `TemplateRenderer` trait the rest of the crate depends on
//! - `minijinja`: the MiniJinja-backed implementation

pub mod interface;
pub mod minijinja;

pub use interface::TemplateRenderer;
pub use minijinja::MiniJinjaRenderer;
