//! CLI command printing the culled package list
//!
//! Implements the `buildorder culled` command: the ordered list reduced
//! to active packages whose artifacts are not already archived in the
//! manifest's channel.

use anyhow::Result;

use super::{ensure_converged, flag_from_channel, prepare, CommonArgs};
use crate::cli::output::write_report;
use crate::core::report;

/// Execute the culled command
pub async fn execute(args: &CommonArgs, quiet: bool) -> Result<()> {
    let mut pipeline = prepare(args, quiet).await?;
    flag_from_channel(&mut pipeline).await?;
    write_report(&report::format_culled(&pipeline.set), args.output.as_deref())?;
    ensure_converged(&pipeline)
}
