//! Grouped summaries derived from the record collection
//!
//! Every summary here is a pure function of the records it is given: nothing is stored
//! between calls, and calling twice on the same records yields identical output. Callers
//! that want reuse go through [`cache::SummaryCache`].

pub mod age;
pub mod cache;
pub mod gender_split;
pub mod goals;
pub mod interest_counts;
pub mod usage;

pub use age::{age_distribution, AgeBand, AgeBucket};
pub use cache::SummaryCache;
pub use gender_split::GenderSplit;
pub use goals::{relationship_goals, GoalCount};
pub use interest_counts::{interest_distribution, InterestCount};
pub use usage::{usage_patterns, UsagePattern};

use crate::domain::user::UserRecord;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// All four dashboard summaries over one population
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_records: usize,
    pub age_distribution: Vec<AgeBucket>,
    pub relationship_goals: Vec<GoalCount>,
    pub interest_distribution: Vec<InterestCount>,
    pub usage_patterns: Vec<UsagePattern>,
}

impl DashboardSummary {
    pub fn from_records(records: &[UserRecord]) -> Self {
        Self {
            total_records: records.len(),
            age_distribution: age_distribution(records),
            relationship_goals: relationship_goals(records),
            interest_distribution: interest_distribution(records),
            usage_patterns: usage_patterns(records),
        }
    }
}

/// Groups records by a derived key, keeping groups in first-seen order
pub(crate) fn group_in_first_seen_order<'a, K, F>(
    records: &'a [UserRecord],
    key: F,
) -> Vec<(K, Vec<&'a UserRecord>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&UserRecord) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&UserRecord>)> = Vec::new();
    for record in records {
        let k = key(record);
        match positions.get(&k) {
            Some(&position) => groups[position].1.push(record),
            None => {
                positions.insert(k.clone(), groups.len());
                groups.push((k, vec![record]));
            }
        }
    }
    groups
}
