//! CLI argument parsing for gsa
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod format;
pub mod parse;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use gsa_core::format::OutputFormat;
use gsa_core::shape::Shape;
use gsa_core::traversal::Order;
use parse::{parse_format, parse_order, parse_shape};

/// gsa - iterative binary tree traversals
#[derive(Parser, Debug)]
#[command(name = "gsa")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human or json [default: from config, else human]
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. trace, gsa_core=debug)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file path [default: $GSA_CONFIG_DIR/config.toml or ~/.config/gsa/config.toml]
    #[arg(long, global = true, env = "GSA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Sample tree selection shared by subcommands
#[derive(Args, Debug, Clone, Default)]
pub struct TreeArgs {
    /// Tree shape: balanced, left-chain, right-chain or zigzag
    #[arg(long, short, value_parser = parse_shape)]
    pub shape: Option<Shape>,

    /// Number of levels (0 for an empty tree)
    #[arg(long, short)]
    pub depth: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Traverse a sample tree and print the visited values
    Traverse {
        /// Traversal order: in-order, breadth-first or in-order-alt
        #[arg(long, short, value_parser = parse_order)]
        order: Option<Order>,

        #[command(flatten)]
        tree: TreeArgs,
    },

    /// Compare canonical in-order output with the node-based variant
    Compare {
        #[command(flatten)]
        tree: TreeArgs,
    },
}
