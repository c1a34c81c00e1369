//! CLI command printing canonical artifact names
//!
//! Implements the `buildorder canonical` command.

use anyhow::Result;

use super::{ensure_converged, prepare, CommonArgs};
use crate::cli::output::write_report;
use crate::core::report;

/// Execute the canonical command
pub async fn execute(args: &CommonArgs, quiet: bool) -> Result<()> {
    let pipeline = prepare(args, quiet).await?;
    write_report(
        &report::format_canonical(&pipeline.set),
        args.output.as_deref(),
    )?;
    ensure_converged(&pipeline)
}
