//! Working set and build-order convergence engine
//!
//! The engine keeps a single ordered sequence of recipe records and
//! repositions out-of-place entries until every record follows all of
//! its peer build dependencies, or a pass budget is exhausted.
//!
//! This is a relocation strategy rather than a classical topological
//! sort: the initial approximation (peer-dependency count ascending)
//! already places most records correctly, so each pass only fixes local
//! violations. Acyclic inputs converge in a few passes; cyclic inputs
//! fail predictably once the pass budget runs out.

use std::collections::HashSet;

use crate::config::defaults::MAX_OPTIMIZE_PASSES;
use crate::core::index::DependencyIndex;
use crate::core::recipe::RecipeRecord;
use crate::error::OrderError;

/// Result of a convergence run
#[derive(Debug, Clone, Copy)]
pub struct ConvergenceOutcome {
    /// True when the final sequence satisfies the precedence invariant
    pub converged: bool,

    /// Number of optimize passes performed
    pub passes: u32,

    /// Records still out of order after the final pass
    pub violations: usize,
}

/// An ordered sequence of recipe records plus their peer-dependency index
#[derive(Debug)]
pub struct WorkingSet {
    records: Vec<RecipeRecord>,
    index: DependencyIndex,
}

impl WorkingSet {
    /// Build a working set from freshly loaded records.
    ///
    /// Rejects duplicate package names before any ordering happens, then
    /// establishes the initial approximation: incomplete records first,
    /// alphabetical; complete records after them, sorted by peer
    /// build-dependency count with an alphabetical tie-break so the
    /// result is independent of filesystem enumeration order.
    pub fn new(records: Vec<RecipeRecord>) -> Result<Self, OrderError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.name.as_str()) {
                return Err(OrderError::DuplicateName {
                    name: record.name.clone(),
                });
            }
        }

        let index = DependencyIndex::build(&records);

        let (mut complete, mut incomplete): (Vec<_>, Vec<_>) =
            records.into_iter().partition(|r| r.complete);
        incomplete.sort_by(|a, b| a.name.cmp(&b.name));
        complete.sort_by(|a, b| a.name.cmp(&b.name));
        complete.sort_by_key(|r| index.peer_count(&r.name));

        let mut ordered = incomplete;
        ordered.append(&mut complete);

        Ok(Self {
            records: ordered,
            index,
        })
    }

    /// Records in their current order
    pub fn records(&self) -> &[RecipeRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [RecipeRecord] {
        &mut self.records
    }

    /// Number of records in the set
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Package names in their current order
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    /// Peer build dependencies of `name`
    pub fn peer_deps(&self, name: &str) -> &[String] {
        self.index.peer_deps(name)
    }

    /// Records eligible for culled output: active and not yet archived
    pub fn culled(&self) -> Vec<&RecipeRecord> {
        self.records
            .iter()
            .filter(|r| r.active && !r.archived)
            .collect()
    }

    /// Current index of the record named `name`.
    ///
    /// An unknown name is an internal invariant violation: peer
    /// dependencies are computed only from in-set names.
    pub fn index_of(&self, name: &str) -> Result<usize, OrderError> {
        self.records
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| OrderError::UnknownName {
                name: name.to_string(),
            })
    }

    /// Current indices of the peer dependencies of `name`
    pub fn peer_indices(&self, name: &str) -> Result<Vec<usize>, OrderError> {
        self.index
            .peer_deps(name)
            .iter()
            .map(|dep| self.index_of(dep))
            .collect()
    }

    /// True when every peer dependency of `name` occurs before it
    pub fn position_ok(&self, name: &str) -> Result<bool, OrderError> {
        let own = self.index_of(name)?;
        Ok(self.peer_indices(name)?.into_iter().all(|i| i < own))
    }

    /// Move `name` immediately after its highest-indexed peer dependency.
    ///
    /// A single corrective move, not a full sort: the record is removed
    /// and reinserted at the peer's index adjusted for the removal
    /// shift. The record object itself moves, so accumulated flags
    /// survive the relocation.
    fn relocate(&mut self, name: &str) -> Result<(), OrderError> {
        let own = self.index_of(name)?;
        let Some(max_peer) = self.peer_indices(name)?.into_iter().max() else {
            return Ok(());
        };
        if max_peer < own {
            return Ok(());
        }

        let record = self.records.remove(own);
        // After the removal everything past `own` shifted down by one,
        // so inserting at `max_peer` lands just after that dependency.
        self.records.insert(max_peer, record);
        Ok(())
    }

    /// Visit every record in the order the pass started with and
    /// relocate the out-of-place ones, returning their names.
    fn relocate_pass(&mut self) -> Result<Vec<String>, OrderError> {
        let names: Vec<String> = self.records.iter().map(|r| r.name.clone()).collect();
        let mut relocated = Vec::new();
        for name in names {
            if !self.position_ok(&name)? {
                self.relocate(&name)?;
                relocated.push(name);
            }
        }
        Ok(relocated)
    }

    /// One pass over the sequence, relocating every out-of-place record.
    ///
    /// Records are visited in the order they held when the pass started;
    /// later records observe the positions already corrected earlier in
    /// the same pass. Returns the number of relocations performed.
    pub fn optimize_pass(&mut self) -> Result<usize, OrderError> {
        Ok(self.relocate_pass()?.len())
    }

    /// Names of the records violating the precedence invariant, counted
    /// the way a corrective pass visits them.
    ///
    /// A scratch copy runs one pass: every record out of place at visit
    /// time is reported, so both members of a two-cycle count even
    /// though relocating the first momentarily legalizes the second. A
    /// static recount of the final layout would only ever see one cycle
    /// member. The set itself is not touched.
    pub fn out_of_order(&self) -> Result<Vec<String>, OrderError> {
        let mut scratch = Self {
            records: self.records.clone(),
            index: self.index.clone(),
        };
        scratch.relocate_pass()
    }

    /// Count of records currently violating the precedence invariant
    pub fn violations(&self) -> Result<usize, OrderError> {
        Ok(self.out_of_order()?.len())
    }

    /// Run optimize passes until a pass performs zero relocations or
    /// the pass budget is exhausted.
    ///
    /// The reported violation count is the relocation count of the most
    /// recent pass: every record that was out of place when the pass
    /// visited it. Exhausting the budget with violations remaining
    /// suggests a circular dependency. That is reported, not raised:
    /// the best-effort order stays available to the caller.
    pub fn converge(&mut self, max_passes: u32) -> Result<ConvergenceOutcome, OrderError> {
        let mut passes = 0;
        let mut violations = self.violations()?;
        while violations > 0 && passes < max_passes {
            passes += 1;
            violations = self.optimize_pass()?;
            tracing::debug!("pass {passes}: {violations} records relocated");
        }

        if violations > 0 {
            tracing::warn!(
                "{violations} of {} recipes still out of order after {passes} passes; \
                 check for circular dependencies",
                self.records.len()
            );
        }
        Ok(ConvergenceOutcome {
            converged: violations == 0,
            passes,
            violations,
        })
    }

    /// [`Self::converge`] with the default pass budget
    pub fn converge_default(&mut self) -> Result<ConvergenceOutcome, OrderError> {
        self.converge(MAX_OPTIMIZE_PASSES)
    }
}
