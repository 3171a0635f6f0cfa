//! Memoized summaries keyed by population content
//!
//! Summaries are pure functions of the records, so a result can be reused for as long as
//! the population content is unchanged. Entries are keyed by the population's SHA-256
//! fingerprint; a population with different content never sees a stale entry.

use crate::domain::aggregation::DashboardSummary;
use crate::domain::network::{InterestGraph, NetworkOptions, NodeScope};
use crate::domain::population::{Population, PopulationFingerprint};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Graph memoization key: the options that change the output
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GraphKey {
    ratio_bits: u64,
    center: Option<String>,
    scope: NodeScope,
}

impl GraphKey {
    fn new(options: &NetworkOptions) -> Self {
        Self {
            ratio_bits: options.overlap_ratio.into_inner().to_bits(),
            center: options.center.as_ref().map(|label| label.to_string()),
            scope: options.scope,
        }
    }
}

/// Views derived from one population
#[derive(Debug)]
struct Memo {
    fingerprint: PopulationFingerprint,
    summary: Option<Arc<DashboardSummary>>,
    graphs: HashMap<GraphKey, Arc<InterestGraph>>,
}

impl Memo {
    fn new(fingerprint: PopulationFingerprint) -> Self {
        Self {
            fingerprint,
            summary: None,
            graphs: HashMap::new(),
        }
    }
}

/// Shared cache of derived views
///
/// Only the views of the most recent population are kept: a population with a different
/// fingerprint replaces every entry.
#[derive(Debug, Default)]
pub struct SummaryCache {
    memo: Mutex<Option<Memo>>,
}

impl SummaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self, population: &Population) -> Arc<DashboardSummary> {
        let mut memo = self.memo.lock();
        let memo = current(&mut memo, population);
        memo.summary
            .get_or_insert_with(|| {
                debug!(
                    fingerprint = %population.fingerprint(),
                    "Computing dashboard summary"
                );
                Arc::new(DashboardSummary::from_records(population.records()))
            })
            .clone()
    }

    pub fn interest_graph(
        &self,
        population: &Population,
        options: &NetworkOptions,
    ) -> Arc<InterestGraph> {
        let mut memo = self.memo.lock();
        current(&mut memo, population)
            .graphs
            .entry(GraphKey::new(options))
            .or_insert_with(|| {
                debug!(
                    fingerprint = %population.fingerprint(),
                    "Computing interest graph"
                );
                Arc::new(InterestGraph::build(population.records(), options))
            })
            .clone()
    }

    /// Number of memoized views of either kind
    pub fn len(&self) -> usize {
        self.memo.lock().as_ref().map_or(0, |memo| {
            usize::from(memo.summary.is_some()) + memo.graphs.len()
        })
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        *self.memo.lock() = None;
    }
}

/// The memo for `population`, discarding one built from other content
fn current<'a>(slot: &'a mut Option<Memo>, population: &Population) -> &'a mut Memo {
    let fingerprint = population.fingerprint();
    if slot
        .as_ref()
        .is_some_and(|memo| &memo.fingerprint != fingerprint)
    {
        debug!(fingerprint = %fingerprint, "Population changed, dropping memoized views");
        *slot = None;
    }
    slot.get_or_insert_with(|| Memo::new(fingerprint.clone()))
}
