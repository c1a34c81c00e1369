//! CLI command printing the build-order detail table
//!
//! Implements the `buildorder details` command. When a manifest
//! provides a channel, the archive status of each artifact is appended.

use anyhow::Result;

use super::{ensure_converged, flag_from_channel, prepare, CommonArgs};
use crate::cli::output::write_report;
use crate::core::report;

/// Execute the details command
pub async fn execute(args: &CommonArgs, quiet: bool) -> Result<()> {
    let mut pipeline = prepare(args, quiet).await?;

    let mut output = report::format_details(&pipeline.set, &pipeline.config)?;
    if pipeline.manifest.is_some() {
        flag_from_channel(&mut pipeline).await?;
        output.push_str(&report::format_channel_status(&pipeline.set));
    }

    write_report(&output, args.output.as_deref())?;
    ensure_converged(&pipeline)
}
