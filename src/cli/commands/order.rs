//! CLI command printing the ordered package list
//!
//! Implements the `buildorder order` command. Output is suitable for
//! ingestion by other tools during a build process.

use anyhow::Result;

use super::{ensure_converged, prepare, CommonArgs};
use crate::cli::output::write_report;
use crate::core::report;

/// Execute the order command
pub async fn execute(args: &CommonArgs, quiet: bool) -> Result<()> {
    let pipeline = prepare(args, quiet).await?;
    write_report(&report::format_names(&pipeline.set), args.output.as_deref())?;
    ensure_converged(&pipeline)
}
