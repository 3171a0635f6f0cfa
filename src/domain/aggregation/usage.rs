//! Usage-frequency groups and their swiping averages

use crate::domain::aggregation::{group_in_first_seen_order, GenderSplit};
use crate::domain::types::UsageFrequency;
use crate::domain::user::UserRecord;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsagePattern {
    pub frequency: UsageFrequency,
    #[serde(flatten)]
    pub counts: GenderSplit,
    /// Mean `swiping_history` across the group, 0.0 for an empty group
    pub average_swipes: f64,
}

impl UsagePattern {
    /// Average rounded to one decimal place for display
    pub fn average_swipes_rounded(&self) -> f64 {
        (self.average_swipes * 10.0).round() / 10.0
    }
}

/// One row per distinct usage frequency, in first-seen order
pub fn usage_patterns(records: &[UserRecord]) -> Vec<UsagePattern> {
    group_in_first_seen_order(records, |record| record.usage_frequency.clone())
        .into_iter()
        .map(|(frequency, members)| {
            let total_swipes: f64 = members
                .iter()
                .map(|record| record.swiping_history.into_inner())
                .sum();
            UsagePattern {
                frequency,
                counts: members.iter().map(|record| record.gender).collect(),
                average_swipes: mean(total_swipes, members.len()),
            }
        })
        .collect()
}

fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_data::{usage, RecordBuilder};
    use crate::domain::user::Gender;

    #[test]
    fn test_average_swipes_per_group() {
        let records = vec![
            RecordBuilder::new(1)
                .usage(usage::DAILY)
                .swipes(60.0)
                .build(),
            RecordBuilder::new(2)
                .usage(usage::MONTHLY)
                .swipes(40.0)
                .gender(Gender::Female)
                .build(),
            RecordBuilder::new(3)
                .usage(usage::DAILY)
                .swipes(51.0)
                .build(),
        ];

        let rows = usage_patterns(&records);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].frequency.as_ref(), usage::DAILY);
        assert_eq!(rows[0].counts.total(), 2);
        assert!((rows[0].average_swipes - 55.5).abs() < 1e-9);
        assert_eq!(rows[1].counts.female(), 1);
        assert!((rows[1].average_swipes - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        let pattern = UsagePattern {
            frequency: UsageFrequency::try_new(usage::WEEKLY.to_string()).unwrap(),
            counts: GenderSplit::new(3, 0),
            average_swipes: 50.666_666,
        };
        assert!((pattern.average_swipes_rounded() - 50.7).abs() < 1e-9);
    }

    #[test]
    fn test_mean_of_empty_group_is_zero() {
        assert_eq!(mean(0.0, 0), 0.0);
    }
}
