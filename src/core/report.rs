//! Output formatting for working-set reports
//!
//! Renders the final sequence as plain names, a detail table, a culled
//! subset, or canonical artifact names. Formatters only read the set;
//! they never reorder it.

use std::collections::HashSet;
use std::fmt::Write;

use crate::core::ordering::WorkingSet;
use crate::core::render::RenderConfig;
use crate::error::OrderError;

/// Package names, one per line, in build order
pub fn format_names(set: &WorkingSet) -> String {
    let mut out = String::new();
    for record in set.records() {
        let _ = writeln!(out, "{}", record.name);
    }
    out
}

/// Culled package names: active records not yet archived, order preserved
pub fn format_culled(set: &WorkingSet) -> String {
    let mut out = String::new();
    for record in set.culled() {
        let _ = writeln!(out, "{}", record.name);
    }
    out
}

/// Canonical artifact filenames, one per line, in build order
pub fn format_canonical(set: &WorkingSet) -> String {
    let mut out = String::new();
    for record in set.records() {
        let _ = writeln!(out, "{:>50}", record.canonical_name);
    }
    out
}

/// Canonical names annotated with archive presence
pub fn format_channel_status(set: &WorkingSet) -> String {
    let mut out = String::new();
    for record in set.records() {
        let status = if record.archived {
            ""
        } else {
            "Not in channel archive"
        };
        let _ = writeln!(out, "{:>50}   {status}", record.canonical_name);
    }
    out
}

/// Detail table: dependency counts, peer indices, and position status
/// per record, plus an out-of-order summary.
///
/// Position status is counted the way a corrective pass visits the
/// records, so every member of a cycle shows up as out of order.
pub fn format_details(set: &WorkingSet, config: &RenderConfig) -> Result<String, OrderError> {
    let failing: HashSet<String> = set.out_of_order()?.into_iter().collect();
    let mut out = String::new();
    let _ = writeln!(out, "Platform specified        :  {}", config.platform);
    if let Some(python) = &config.python {
        let _ = writeln!(out, "Python version specified  :  {python}");
    }
    for (name, version) in &config.pins {
        let _ = writeln!(out, "Pinned {name:<19}:  {version}");
    }
    let _ = writeln!(out, "                              num  num      peer");
    let _ = writeln!(out, "         name               bdeps  peer     bdep     pos.");
    let _ = writeln!(out, "                                   bdeps    indices  OK?");
    let _ = writeln!(out, "----------------------------------------------------------");

    for (idx, record) in set.records().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>28}  {:2}  {:2}  idx={:2} {:?} {}",
            record.name,
            record.num_build_deps(),
            set.peer_deps(&record.name).len(),
            idx,
            set.peer_indices(&record.name)?,
            !failing.contains(&record.name)
        );
    }
    let _ = writeln!(out, "Num not in order = {}/{}", failing.len(), set.len());
    Ok(out)
}
