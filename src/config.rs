/*!
 * Configuration handling for clipmd
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

/// Command-line arguments for clipmd
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "clipmd",
    version = env!("CARGO_PKG_VERSION"),
    about = "Copy a directory's file contents to the clipboard as Markdown",
    long_about = "Walks a directory recursively and copies every readable text file to the system clipboard, each one wrapped in a fenced code block labeled with its path."
)]
pub struct Args {
    /// Target directory to collect
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Sort entries by file name for deterministic output
    #[clap(long)]
    pub sort: bool,

    /// Print a report of the collected files after copying
    #[clap(long)]
    pub report: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory to collect
    pub target_dir: PathBuf,

    /// Sort directory entries by file name
    pub sort: bool,

    /// Print a report after delivery
    pub report: bool,
}

impl Config {
    /// Configuration for a plain run over `target_dir`
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            sort: false,
            report: false,
        }
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            target_dir: PathBuf::from(args.directory_path),
            sort: args.sort,
            report: args.report,
        }
    }
}
