//! Relationship goal counts

use crate::domain::aggregation::{group_in_first_seen_order, GenderSplit};
use crate::domain::types::RelationshipGoal;
use crate::domain::user::UserRecord;
use serde::Serialize;

/// Record counts for one relationship goal observed in the data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalCount {
    pub goal: RelationshipGoal,
    #[serde(flatten)]
    pub counts: GenderSplit,
}

/// Counts per distinct goal, in the order goals first appear in the records
pub fn relationship_goals(records: &[UserRecord]) -> Vec<GoalCount> {
    group_in_first_seen_order(records, |record| record.goal.clone())
        .into_iter()
        .map(|(goal, members)| GoalCount {
            goal,
            counts: members.iter().map(|record| record.gender).collect(),
        })
        .collect()
}
