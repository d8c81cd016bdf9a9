/// Handles argument parsing and orchestrates a scaffold run.
pub mod cli;

/// Template package configuration.
pub mod config;

/// Values shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Exclusion rules for the template walk.
pub mod ignore;

/// Cleanup of transient directories on SIGINT/SIGTERM.
pub mod interrupt;

/// Fetching template packages from git or the local filesystem.
pub mod loader;

/// Step notifications for long-running work.
pub mod progress;

/// User input and interaction handling.
pub mod prompt;

/// Placeholder rendering.
pub mod renderer;

/// Destination directory resolution.
pub mod target;

/// Template walking and rendering.
pub mod template;

/// Project name validation.
pub mod validation;
