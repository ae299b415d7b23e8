//! Command dispatch logic for gsa

use std::time::Instant;

use gsa_core::config::GsaConfig;
use gsa_core::error::Result;
use gsa_core::format::OutputFormat;
use gsa_core::shape::Shape;
use tracing::debug;

use crate::cli::{Cli, Commands, TreeArgs};
use crate::commands::{compare, traverse};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a GsaConfig,
    /// `--format`, falling back to the configured default
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a GsaConfig, start: Instant) -> Self {
        let format = cli.format.unwrap_or(config.defaults.format);
        Self {
            cli,
            config,
            format,
            start,
        }
    }

    /// Resolve shape and depth from flags, then config defaults
    pub fn tree_selection(&self, args: &TreeArgs) -> (Shape, u32) {
        let defaults = &self.config.defaults;
        (
            args.shape.unwrap_or(defaults.shape),
            args.depth.unwrap_or(defaults.depth),
        )
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("gsa {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Iterative binary tree traversals with explicit stacks and queues.");
        println!();
        println!("Run `gsa --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Traverse { order, tree } => {
                let order = order.unwrap_or(ctx.config.defaults.order);
                let (shape, depth) = ctx.tree_selection(tree);
                traverse::execute(ctx, order, shape, depth)
            }
            Commands::Compare { tree } => {
                let (shape, depth) = ctx.tree_selection(tree);
                compare::execute(ctx, shape, depth)
            }
        }
    }
}

pub fn run(ctx: &CommandContext) -> Result<()> {
    debug!(elapsed = ?ctx.start.elapsed(), format = %ctx.format, "dispatch");

    match &ctx.cli.command {
        None => NoCommand.execute(ctx),
        Some(cmd) => cmd.execute(ctx),
    }
}
