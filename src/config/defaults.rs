//! Default configuration values

/// Maximum number of optimize passes before a dependency cycle is assumed
pub const MAX_OPTIMIZE_PASSES: u32 = 8;

/// Platform used when none is given on the command line
pub const DEFAULT_PLATFORM: &str = "linux-64";

/// Recipe definition file expected in each recipe directory
pub const RECIPE_FILE: &str = "recipe.toml";

/// Archive index file served per platform by a channel
pub const REPODATA_FILE: &str = "repodata.json";

/// Directory names never treated as recipe candidates
pub const IGNORE_DIRS: &[&str] = &[".git", "template"];
