//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::samples::Sample;
use crate::traversal::TraversalOrder;

/// Explore a small binary tree: renderings, traversals, depth/height statistics
#[derive(Parser, Debug)]
#[command(name = "bintree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (repeat for more: -d -d -d)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Local config file, layered over the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath, env = "BINTREE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Demo tree to operate on (default: from config)
    #[arg(short, long, global = true, value_enum)]
    pub sample: Option<Sample>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the tree indented by depth
    Show,

    /// Print the tree with box-drawing characters
    Tree,

    /// Print nodes one per line in traversal order
    Walk {
        /// Traversal order (default: from config)
        #[arg(value_enum)]
        order: Option<TraversalOrder>,
    },

    /// Print size, height and per-node depth/height/ancestors
    Stats,

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

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,

    /// Print a commented configuration template
    Template,

    /// Show global config file location
    Path,
}
