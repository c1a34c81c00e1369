//! CLI command printing per-artifact channel status
//!
//! Implements the `buildorder status` command: canonical names plus
//! whether each has already been built and archived in the channel.

use anyhow::Result;

use super::{ensure_converged, flag_from_channel, prepare, CommonArgs};
use crate::cli::output::write_report;
use crate::core::report;

/// Execute the status command
pub async fn execute(args: &CommonArgs, quiet: bool) -> Result<()> {
    let mut pipeline = prepare(args, quiet).await?;
    flag_from_channel(&mut pipeline).await?;
    write_report(
        &report::format_channel_status(&pipeline.set),
        args.output.as_deref(),
    )?;
    ensure_converged(&pipeline)
}
