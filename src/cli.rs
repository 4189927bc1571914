//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

use crate::core::config::FILE_ENV;

const AFTER_HELP: &str = "\
EXAMPLES:
  llm-model-manager                          Launch interactive TUI on ./models.json
  llm-model-manager -f /srv/fastgpt/config.json
                                             Edit another document
  llm-model-manager list                     List models in document order
  llm-model-manager show gpt-4               Show all fields of one model
  llm-model-manager delete gpt-4             Delete a model (no error if absent)
  llm-model-manager move-up 1                Swap model 1 with model 0
  llm-model-manager config                   Show document, lock and log paths
  llm-model-manager completions bash         Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Form-based editor for the llmModels list of a config.json",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON document holding {"llmModels": [...]}; created on first run
    #[arg(short = 'f', long = "file", env = FILE_ENV, global = true)]
    pub file: Option<PathBuf>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List models in document order
    List,
    /// Show every field of one model
    Show {
        /// Model alias (the `name` field)
        name: String,
    },
    /// Delete a model by name (no error if absent)
    Delete {
        /// Model alias (the `name` field)
        name: String,
    },
    /// Swap the model at INDEX with the one above it
    MoveUp {
        /// Zero-based position in the list
        index: usize,
    },
    /// Swap the model at INDEX with the one below it
    MoveDown {
        /// Zero-based position in the list
        index: usize,
    },
    /// Show document, lock and log file paths
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// True when no subcommand was given and the TUI will take over the terminal.
    pub fn is_tui(&self) -> bool {
        self.command.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_from_flags() {
        let args = Args::parse_from(["llm-model-manager", "-vv", "list"]);
        assert_eq!(args.log_level(), "debug");
        let args = Args::parse_from(["llm-model-manager", "-q"]);
        assert_eq!(args.log_level(), "error");
        assert!(args.is_tui());
    }

    #[test]
    fn parses_move_up_index() {
        let args = Args::parse_from(["llm-model-manager", "move-up", "3"]);
        assert!(matches!(args.command, Some(Commands::MoveUp { index: 3 })));
    }

    #[test]
    fn file_flag_is_global() {
        let args = Args::parse_from(["llm-model-manager", "list", "--file", "x.json"]);
        assert_eq!(args.file, Some(PathBuf::from("x.json")));
    }
}
