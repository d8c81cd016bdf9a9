use crate::constants::{exit_codes, verbosity, DEFAULT_TEMPLATE_REPO};
use crate::target::ConflictAction;
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

const AFTER_HELP: &str = "    <PROJECT_DIRECTORY> is required; use '.' to generate into the current directory.";

/// CLI arguments for sprout.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Args {
    /// Directory to create the project in, or `.` for the current directory.
    #[arg(value_name = "PROJECT_DIRECTORY")]
    pub project_directory: String,

    /// Template package: a git URL or a local path.
    #[arg(short, long, default_value = DEFAULT_TEMPLATE_REPO)]
    pub template: String,

    /// Branch to clone when the template is a git repository.
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Predefined answers as JSON string or `-` to read from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Never prompt; unanswered questions take their defaults.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// What to do when the project directory already exists.
    #[arg(long = "on-conflict", value_enum, value_name = "ACTION")]
    pub on_conflict: Option<ConflictAction>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments; a missing project directory prints the
/// help text and exits with a failure status.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            eprintln!("Please specify the project directory.\n");
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
