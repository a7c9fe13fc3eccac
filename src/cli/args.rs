//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::config::OutputStyle;
use crate::domain::AttributePath;

/// Tree, branch and leaf object graph with substitutable test doubles
#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the real chain or a double
    Show {
        /// Double file, or name under doubles_dir
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        double: Option<String>,
        /// Override the configured output style
        #[arg(short, long, value_enum)]
        style: Option<OutputStyle>,
    },

    /// Print the text at an attribute path, e.g. `branch.tree.bark`
    Read {
        /// Dot-separated attribute path
        path: AttributePath,
        /// Read through a double instead of the real chain
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        double: Option<String>,
    },

    /// Check that a double substitutes for the real chain along a path
    Check {
        /// Dot-separated attribute path
        path: AttributePath,
        /// Double file, or name under doubles_dir
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        double: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Print a commented config template
    Template,
}
