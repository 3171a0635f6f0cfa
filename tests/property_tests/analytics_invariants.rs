//! Property-based tests for analytics invariants
//!
//! These tests check that the summaries partition the population, that the interest
//! graph is a simple undirected graph consistent with its threshold, and that matching
//! responds monotonically to its criteria.

use super::generators::*;
use proptest::prelude::*;
use std::collections::HashSet;
use swipe_stats::domain::aggregation::{
    age_distribution, interest_distribution, relationship_goals, usage_patterns, AgeBand,
    DashboardSummary, SummaryCache,
};
use swipe_stats::domain::config_types::{AgeTolerance, RequiredAgreements};
use swipe_stats::domain::interests::Interest;
use swipe_stats::domain::matching::{MatchCriteria, ProfileMatcher};
use swipe_stats::domain::network::{InterestGraph, NetworkOptions, PairCounts};
use swipe_stats::domain::population::Population;
use swipe_stats::domain::user::Gender;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every grouped summary accounts for each record exactly once
    #[test]
    fn prop_summaries_partition_the_population(records in population()) {
        let total = records.len();
        let male = records.iter().filter(|r| r.gender == Gender::Male).count();

        let ages = age_distribution(&records);
        prop_assert_eq!(ages.len(), AgeBand::ALL.len());
        prop_assert_eq!(ages.iter().map(|b| b.counts.total()).sum::<usize>(), total);
        prop_assert_eq!(ages.iter().map(|b| b.counts.male()).sum::<usize>(), male);

        let goals = relationship_goals(&records);
        prop_assert_eq!(goals.iter().map(|g| g.counts.total()).sum::<usize>(), total);
        let distinct: HashSet<_> = goals.iter().map(|g| g.goal.clone()).collect();
        prop_assert_eq!(distinct.len(), goals.len());

        let usage = usage_patterns(&records);
        prop_assert_eq!(usage.iter().map(|u| u.counts.total()).sum::<usize>(), total);
        for pattern in &usage {
            prop_assert!(pattern.average_swipes >= 0.0);
        }

        for count in interest_distribution(&records) {
            let holders = records.iter().filter(|r| r.has_interest(count.interest)).count();
            prop_assert_eq!(count.counts.total(), holders);
        }
    }

    /// Every record falls in exactly one age band
    #[test]
    fn prop_age_bands_are_exhaustive(records in population()) {
        for record in &records {
            let containing = AgeBand::ALL.iter().filter(|band| band.contains(record.age)).count();
            prop_assert_eq!(containing, 1);
            prop_assert!(AgeBand::for_age(record.age).contains(record.age));
        }
    }

    /// Edges are unordered, unique, never loops, and each clears the overlap threshold
    #[test]
    fn prop_interest_graph_is_simple(records in population(), ratio in overlap_ratio()) {
        let options = NetworkOptions { overlap_ratio: ratio, ..NetworkOptions::default() };
        let graph = InterestGraph::build(&records, &options);
        let counts = PairCounts::from_records(&records);

        let mut seen = HashSet::new();
        for edge in &graph.edges {
            prop_assert_ne!(edge.source, edge.target);
            prop_assert!(seen.insert((edge.source.min(edge.target), edge.source.max(edge.target))));
            prop_assert!(counts.links(edge.source, edge.target, ratio));
            prop_assert_eq!(
                counts.shared(edge.source, edge.target),
                counts.shared(edge.target, edge.source)
            );
            prop_assert_eq!(edge.shared, counts.shared(edge.source, edge.target));
        }

        for a in Interest::ALL {
            for b in Interest::ALL {
                if a < b && counts.links(a, b, ratio) {
                    prop_assert!(graph.edge_between(a, b).is_some());
                }
            }
        }
    }

    /// Widening the age window never loses a match
    #[test]
    fn prop_wider_tolerance_never_loses_matches(
        records in population(),
        query in query_profile(),
        narrow in 0u8..=25,
        extra in 0u8..=25,
    ) {
        let matcher = |years: u8| ProfileMatcher::new(MatchCriteria {
            age_tolerance: AgeTolerance::try_new(years).unwrap(),
            ..MatchCriteria::default()
        });
        let tight = matcher(narrow).fuzzy_matches(&records, &query).len();
        let loose = matcher(narrow + extra).fuzzy_matches(&records, &query).len();
        prop_assert!(tight <= loose);
    }

    /// Demanding more agreements never gains a match
    #[test]
    fn prop_stricter_agreement_never_gains_matches(
        records in population(),
        query in query_profile(),
        tolerance in age_tolerance(),
    ) {
        let mut previous = usize::MAX;
        for required in 1u8..=4 {
            let matcher = ProfileMatcher::new(MatchCriteria {
                age_tolerance: tolerance,
                required_agreements: RequiredAgreements::try_new(required).unwrap(),
                ..MatchCriteria::default()
            });
            let matched = matcher.fuzzy_matches(&records, &query).len();
            prop_assert!(matched <= previous);
            previous = matched;
        }
    }

    /// Reports stay within bounds and suggest only unselected interests
    #[test]
    fn prop_match_report_is_well_formed(
        records in population(),
        query in query_profile(),
        required in required_agreements(),
    ) {
        let matcher = ProfileMatcher::new(MatchCriteria {
            required_agreements: required,
            ..MatchCriteria::default()
        });
        match matcher.evaluate(&records, &query) {
            Ok(report) => {
                prop_assert!(report.fuzzy_matches <= report.population);
                prop_assert!(report.match_percent.into_inner() <= 100);
                prop_assert_eq!(report.attributes.len(), 3 + query.interests.len());
                let limit = matcher.criteria().suggestion_limit.into_inner();
                prop_assert!(report.suggested_interests.len() <= limit);
                for interest in &report.suggested_interests {
                    prop_assert!(!query.interests.contains(*interest));
                }
            }
            Err(_) => prop_assert!(records.is_empty()),
        }
    }

    /// Derived views are pure: recomputing or reading through the cache changes nothing
    #[test]
    fn prop_summaries_are_idempotent(records in population()) {
        let direct = DashboardSummary::from_records(&records);
        prop_assert_eq!(&direct, &DashboardSummary::from_records(&records));

        let population = Population::new(records);
        let cache = SummaryCache::new();
        let first = cache.summary(&population);
        let second = cache.summary(&population);
        prop_assert_eq!(first.as_ref(), &direct);
        prop_assert_eq!(first.as_ref(), second.as_ref());
    }
}
