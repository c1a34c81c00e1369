//! CLI command implementations
//!
//! Each report mode is implemented in its own submodule. The shared
//! pipeline (manifest, rendering, working set, convergence) lives here.

pub mod canonical;
pub mod culled;
pub mod details;
pub mod order;
pub mod status;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::cli::output::create_spinner;
use crate::config::defaults::DEFAULT_PLATFORM;
use crate::core::archive::flag_archived;
use crate::core::manifest::{filter_by_manifest, Manifest};
use crate::core::ordering::{ConvergenceOutcome, WorkingSet};
use crate::core::render::{RenderConfig, TomlRenderer};
use crate::infra::channel::ChannelClient;
use crate::infra::recipes::load_records;

/// Arguments shared by every report mode
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Directory containing recipe subdirectories
    pub recipes_dir: PathBuf,

    /// Manifest file filtering the recipes to process
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target platform for rendering and channel lookup
    #[arg(short, long, default_value = DEFAULT_PLATFORM)]
    pub platform: String,

    /// Python version passed to the recipe renderer
    #[arg(long)]
    pub python: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the ordered list of package names
    Order {
        #[command(flatten)]
        args: CommonArgs,
    },

    /// Display details used in determining build order and culling
    Details {
        #[command(flatten)]
        args: CommonArgs,
    },

    /// Print the ordered list reduced to packages not already archived
    Culled {
        #[command(flatten)]
        args: CommonArgs,
    },

    /// Print canonical artifact names
    Canonical {
        #[command(flatten)]
        args: CommonArgs,
    },

    /// Print canonical artifact names with channel archive status
    Status {
        #[command(flatten)]
        args: CommonArgs,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self, quiet: bool) -> Result<()> {
        match self {
            Self::Order { args } => order::execute(&args, quiet).await,
            Self::Details { args } => details::execute(&args, quiet).await,
            Self::Culled { args } => culled::execute(&args, quiet).await,
            Self::Canonical { args } => canonical::execute(&args, quiet).await,
            Self::Status { args } => status::execute(&args, quiet).await,
        }
    }
}

/// Converged working set plus the inputs that shaped it
pub(crate) struct Pipeline {
    pub set: WorkingSet,
    pub manifest: Option<Manifest>,
    pub config: RenderConfig,
    pub outcome: ConvergenceOutcome,
}

/// Load records, build the working set, and run convergence.
///
/// The manifest, when given, restricts the candidate recipe directories
/// before rendering and deactivates any remaining out-of-manifest
/// records afterwards.
pub(crate) async fn prepare(args: &CommonArgs, quiet: bool) -> Result<Pipeline> {
    let manifest = match &args.manifest {
        Some(path) => Some(Manifest::load(path)?),
        None => None,
    };

    let config = RenderConfig {
        platform: args.platform.clone(),
        python: args.python.clone(),
        pins: manifest.as_ref().map(|m| m.pins.clone()).unwrap_or_default(),
    };

    let spinner = (!quiet).then(|| create_spinner("Rendering recipes..."));
    let selection = manifest.as_ref().map(Manifest::package_set);
    let records = load_records(
        &args.recipes_dir,
        &TomlRenderer::new(),
        &config,
        selection.as_ref(),
    )?;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    tracing::info!("loaded {} recipe records", records.len());

    let mut set = WorkingSet::new(records)?;
    let outcome = set.converge_default()?;
    if let Some(manifest) = &manifest {
        filter_by_manifest(&mut set, manifest);
    }

    Ok(Pipeline {
        set,
        manifest,
        config,
        outcome,
    })
}

/// Fetch the channel archive index and flag archived records.
///
/// Requires a manifest: that is where the channel URL comes from.
pub(crate) async fn flag_from_channel(pipeline: &mut Pipeline) -> Result<()> {
    let Some(manifest) = &pipeline.manifest else {
        bail!("a manifest (-m) naming a channel URL is required for this report");
    };
    let url = manifest.channel_platform_url(&pipeline.config.platform);
    let index = ChannelClient::new().fetch_archive_index(&url).await?;
    tracing::info!("channel archive holds {} artifacts", index.len());
    flag_archived(&mut pipeline.set, &index);
    Ok(())
}

/// Fail the run when convergence exhausted its pass budget.
///
/// Called after the report has been written, so the best-effort order
/// is still produced; only the exit status reflects the cycle.
pub(crate) fn ensure_converged(pipeline: &Pipeline) -> Result<()> {
    let outcome = pipeline.outcome;
    if !outcome.converged {
        bail!(
            "{} of {} recipes remain out of order after {} passes; \
             check for circular dependencies",
            outcome.violations,
            pipeline.set.len(),
            outcome.passes
        );
    }
    Ok(())
}
