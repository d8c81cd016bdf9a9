//! Interactive prompting
//!
//! - `interface`: abstract prompt traits independent of any UI library
//! - `dialoguer`: terminal implementation using the dialoguer library
//! - `automatic`: scripted implementation for automation and tests
//! - `handler`: turns a prompt specification into a typed answer
//! - `collector`: asks a package's prompts in order into the metadata

pub mod automatic;
pub mod collector;
pub mod dialoguer;
pub mod handler;
pub mod interface;

pub use automatic::AutomaticPrompter;
pub use collector::PromptCollector;
pub use self::dialoguer::DialoguerPrompter;
pub use interface::*;

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> Box<dyn PromptProvider> {
    Box::new(DialoguerPrompter::new())
}
