//! `gsa traverse`: run one traversal over a sample tree

use std::time::Instant;

use gsa_core::error::Result;
use gsa_core::format::join_values;
use gsa_core::report::TraversalReport;
use gsa_core::shape::Shape;
use gsa_core::traversal::Order;
use serde::Serialize;

use crate::commands::dispatch::CommandContext;
use crate::output_by_format;

#[derive(Serialize)]
struct TraverseOutput<'a> {
    shape: Shape,
    depth: u32,
    #[serde(flatten)]
    report: &'a TraversalReport,
}

pub fn execute(ctx: &CommandContext, order: Order, shape: Shape, depth: u32) -> Result<()> {
    let start = Instant::now();
    let tree = shape.build(depth)?;
    gsa_core::trace_time!(start, "build_tree", depth = depth);

    let report = TraversalReport::run(order, tree.as_ref());
    tracing::debug!(%order, %shape, depth, emitted = report.values.len(), "traverse");

    output_by_format!(ctx.format,
        json => {
            let output = TraverseOutput {
                shape,
                depth,
                report: &report,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        human => {
            if ctx.cli.quiet {
                println!("{}", join_values(&report.values));
            } else {
                println!("{}: {}", order, join_values(&report.values));
            }
        }
    );

    Ok(())
}
