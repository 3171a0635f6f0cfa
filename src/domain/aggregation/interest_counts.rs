//! Interest popularity over the fixed vocabulary

use crate::domain::aggregation::GenderSplit;
use crate::domain::interests::Interest;
use crate::domain::user::UserRecord;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterestCount {
    pub interest: Interest,
    #[serde(flatten)]
    pub counts: GenderSplit,
}

/// Holders of each vocabulary tag, most popular first
///
/// Equal totals keep vocabulary order, so the output does not depend on record order.
pub fn interest_distribution(records: &[UserRecord]) -> Vec<InterestCount> {
    let mut counts = [GenderSplit::default(); Interest::COUNT];
    for record in records {
        for interest in record.interests.iter() {
            counts[interest.index()].record(record.gender);
        }
    }
    let mut rows: Vec<InterestCount> = Interest::ALL
        .into_iter()
        .zip(counts)
        .map(|(interest, counts)| InterestCount { interest, counts })
        .collect();
    rows.sort_by(|a, b| b.counts.total().cmp(&a.counts.total()));
    rows
}
