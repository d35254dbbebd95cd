//! CLI argument parsing with clap

use clap::Parser;

/// Create a new Express.js backend with one command
#[derive(Parser, Debug)]
#[command(name = "create-devx")]
#[command(version, long_version = crate::version::long_version(), about, long_about = None)]
pub struct Cli {
    /// Directory to create the project in; its name becomes the package name
    #[arg(value_name = "PROJECT_DIRECTORY")]
    pub project_directory: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}
