//! Property-based testing for population analytics invariants
//!
//! This module provides generators for user records and query profiles, and the
//! invariants every derived view must uphold for any population they produce.

pub mod analytics_invariants;

pub mod generators {
    use proptest::collection::vec;
    use proptest::prelude::*;
    use swipe_stats::domain::config_types::{AgeTolerance, OverlapRatio, RequiredAgreements};
    use swipe_stats::domain::interests::Interest;
    use swipe_stats::domain::matching::QueryProfile;
    use swipe_stats::domain::test_data::{usage, RecordBuilder};
    use swipe_stats::domain::types::{goals, Age, RelationshipGoal};
    use swipe_stats::domain::user::{Gender, UserRecord};

    /// Interests encoded as the low seven bits of a byte
    pub fn interests_from_bits(bits: u8) -> Vec<Interest> {
        Interest::ALL
            .into_iter()
            .filter(|interest| bits & (1 << interest.index()) != 0)
            .collect()
    }

    pub fn gender() -> impl Strategy<Value = Gender> {
        prop_oneof![Just(Gender::Male), Just(Gender::Female)]
    }

    pub fn goal() -> impl Strategy<Value = &'static str> {
        prop::sample::select(goals::ALL.to_vec())
    }

    /// Generate valid user records
    pub fn record() -> impl Strategy<Value = UserRecord> {
        (
            any::<u32>(),
            18u8..=120,
            gender(),
            goal(),
            prop::sample::select(vec![usage::DAILY, usage::WEEKLY, usage::MONTHLY]),
            0u32..500,
            0u8..128,
        )
            .prop_map(|(id, age, gender, goal, frequency, swipes, bits)| {
                RecordBuilder::new(id)
                    .age(age)
                    .gender(gender)
                    .goal(goal)
                    .usage(frequency)
                    .swipes(f64::from(swipes))
                    .interests(&interests_from_bits(bits))
                    .build()
            })
    }

    /// Generate populations, possibly empty
    pub fn population() -> impl Strategy<Value = Vec<UserRecord>> {
        vec(record(), 0..120)
    }

    /// Generate query profiles, including ones with no interests selected
    pub fn query_profile() -> impl Strategy<Value = QueryProfile> {
        (18u8..=120, gender(), 0u8..128, goal()).prop_map(|(age, gender, bits, goal)| {
            QueryProfile {
                age: Age::try_new(age).unwrap(),
                gender,
                interests: interests_from_bits(bits).into_iter().collect(),
                goal: RelationshipGoal::try_new(goal.to_string()).unwrap(),
            }
        })
    }

    pub fn age_tolerance() -> impl Strategy<Value = AgeTolerance> {
        (0u8..=50).prop_map(|years| AgeTolerance::try_new(years).unwrap())
    }

    pub fn required_agreements() -> impl Strategy<Value = RequiredAgreements> {
        (1u8..=4).prop_map(|count| RequiredAgreements::try_new(count).unwrap())
    }

    pub fn overlap_ratio() -> impl Strategy<Value = OverlapRatio> {
        (0u32..=100).prop_map(|hundredths| {
            OverlapRatio::try_new(f64::from(hundredths) / 100.0).unwrap()
        })
    }
}
