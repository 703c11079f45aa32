//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::core::config::Config;
use crate::core::transform::{Operation, Options};

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  textmod underline \"Title\"                 Underline with -
  textmod underline --char = -              Underline stdin with =
  pbpaste | textmod one-liner               Flatten clipboard text to one line
  textmod --json remove-newlines \"a\\nb\"     Print a launcher item instead of text
  textmod all \"some text\"                   Launcher items for every transformation
  textmod completions zsh                   Generate zsh completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Small text transformations for launchers and shell pipes",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Print launcher items as JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

// Text to transform, shared by all transformation subcommands.
#[derive(clap::Args, Debug)]
pub struct Input {
    /// Input text (omit or use '-' to read from stdin)
    pub text: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Underline every line, keeping its indentation
    Underline {
        /// Underline character (default: TEXTMOD_UNDERLINE_CHAR or '-')
        #[arg(short, long = "char")]
        ch: Option<char>,
        #[command(flatten)]
        input: Input,
    },
    /// Replace all newlines with a space
    RemoveNewlines {
        #[command(flatten)]
        input: Input,
    },
    /// Collapse recurring spaces, keeping indentation unless told otherwise
    RemoveRedundantSpace {
        /// Also strip leading spaces and tabs from every line
        #[arg(long)]
        no_keep_indent: bool,
        #[command(flatten)]
        input: Input,
    },
    /// One sentence per line: newline after '. ', ': ' and '; ', no others
    Sentences {
        /// Keep redundant spaces instead of collapsing them afterwards
        #[arg(long)]
        keep_redundant_space: bool,
        #[command(flatten)]
        input: Input,
    },
    /// Remove all newlines and redundant spaces
    OneLiner {
        #[command(flatten)]
        input: Input,
    },
    /// Print launcher items for every transformation (always JSON)
    All {
        #[command(flatten)]
        input: Input,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Commands {
    /// The single transformation this command runs, with its input.
    pub fn operation(&self) -> Option<(Operation, &Input)> {
        match self {
            Commands::Underline { input, .. } => Some((Operation::Underline, input)),
            Commands::RemoveNewlines { input } => Some((Operation::RemoveNewlines, input)),
            Commands::RemoveRedundantSpace { input, .. } => {
                Some((Operation::RemoveRedundantSpace, input))
            }
            Commands::Sentences { input, .. } => Some((Operation::LimitNewlinesToSentences, input)),
            Commands::OneLiner { input } => Some((Operation::OneLiner, input)),
            Commands::All { .. } | Commands::Completions { .. } => None,
        }
    }

    /// Transformer options from flags, falling back to `config`.
    pub fn options(&self, config: &Config) -> Options {
        let mut options = Options {
            underline_char: config.underline_char,
            ..Options::default()
        };
        match self {
            Commands::Underline { ch: Some(c), .. } => options.underline_char = *c,
            Commands::RemoveRedundantSpace { no_keep_indent, .. } => {
                options.keep_indent = !no_keep_indent
            }
            Commands::Sentences {
                keep_redundant_space,
                ..
            } => options.remove_redundant_space = !keep_redundant_space,
            _ => {}
        }
        options
    }
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
}
