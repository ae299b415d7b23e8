//! `gsa compare`: canonical in-order against the node-based variant

use gsa_core::error::Result;
use gsa_core::format::join_values;
use gsa_core::report::{compare_in_order, Comparison};
use gsa_core::shape::Shape;
use serde::Serialize;

use crate::commands::dispatch::CommandContext;
use crate::output_by_format;

#[derive(Serialize)]
struct CompareOutput<'a> {
    shape: Shape,
    depth: u32,
    #[serde(flatten)]
    comparison: &'a Comparison,
}

pub fn execute(ctx: &CommandContext, shape: Shape, depth: u32) -> Result<()> {
    let tree = shape.build(depth)?;
    let comparison = compare_in_order(tree.as_ref());
    if !comparison.matches {
        tracing::info!(%shape, depth, "in-order variants disagree");
    }

    output_by_format!(ctx.format,
        json => {
            let output = CompareOutput {
                shape,
                depth,
                comparison: &comparison,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        human => {
            let verdict = if comparison.matches { "yes" } else { "no" };
            if !ctx.cli.quiet {
                println!("canonical: {}", join_values(&comparison.canonical));
                println!("alternate: {}", join_values(&comparison.alternate));
            }
            println!("matches: {}", verdict);
            if !ctx.cli.quiet && !comparison.matches {
                println!("duplicated: {}", join_values(&comparison.duplicated));
                println!("missing: {}", join_values(&comparison.missing));
            }
        }
    );

    Ok(())
}
