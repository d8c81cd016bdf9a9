//! Constants used throughout the sprout application

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["sprout.json", "sprout.yaml", "sprout.yml"];

/// Subdirectory of a template package holding the files to render
pub const DEFAULT_TEMPLATE_DIR: &str = "template";

/// Template repository used when `--template` is not given
pub const DEFAULT_TEMPLATE_REPO: &str = "git@github.com:codeleafs/template-react.git";

/// Project directory argument meaning "the current directory"
pub const CURRENT_DIR_SENTINEL: &str = ".";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Metadata keys seeded before any prompt is asked
pub mod metadata {
    pub const PROJECT_NAME: &str = "name";
    pub const YEAR: &str = "year";
    pub const DIRECTORY: &str = "directory";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
