//! Scoring the population against a user-authored profile
//!
//! A record is a *fuzzy match* when it agrees with the query on enough of four
//! independent predicates: gender, relationship goal, age within a tolerance, and at
//! least one shared interest. The shared-interest predicate is false for every record
//! when the query selects no interests, so such a query can only reach three agreements.

use crate::domain::config_types::{AgeTolerance, RequiredAgreements, SuggestionLimit};
use crate::domain::interests::{Interest, InterestSet};
use crate::domain::types::{Age, Percentage, RelationshipGoal};
use crate::domain::user::{Gender, UserRecord};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A synthetic profile submitted through the profile form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryProfile {
    pub age: Age,
    pub gender: Gender,
    pub interests: InterestSet,
    pub goal: RelationshipGoal,
}

impl QueryProfile {
    pub fn age_matches(&self, record: &UserRecord, tolerance: AgeTolerance) -> bool {
        self.age.years_apart(record.age) <= tolerance.into_inner()
    }

    pub fn gender_matches(&self, record: &UserRecord) -> bool {
        self.gender == record.gender
    }

    pub fn goal_matches(&self, record: &UserRecord) -> bool {
        self.goal == record.goal
    }

    /// At least one interest in common; always false for an empty selection
    pub fn shares_interest(&self, record: &UserRecord) -> bool {
        self.interests.intersects(record.interests)
    }

    /// How many of the four predicates the record satisfies
    pub fn agreements(&self, record: &UserRecord, tolerance: AgeTolerance) -> u8 {
        [
            self.gender_matches(record),
            self.goal_matches(record),
            self.age_matches(record, tolerance),
            self.shares_interest(record),
        ]
        .into_iter()
        .filter(|agrees| *agrees)
        .count() as u8
    }
}

/// Tunable strictness of the matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchCriteria {
    pub age_tolerance: AgeTolerance,
    pub required_agreements: RequiredAgreements,
    pub suggestion_limit: SuggestionLimit,
}

/// The single predicate an attribute row measures
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchAttribute {
    AgeWindow { center: Age, tolerance: AgeTolerance },
    Gender { gender: Gender },
    Goal { goal: RelationshipGoal },
    Interest { interest: Interest },
}

impl MatchAttribute {
    pub fn label(&self) -> String {
        match self {
            MatchAttribute::AgeWindow { center, tolerance } => format!("Age {center}±{tolerance}"),
            MatchAttribute::Gender { gender } => gender.label().to_string(),
            MatchAttribute::Goal { goal } => goal.to_string(),
            MatchAttribute::Interest { interest } => interest.to_string(),
        }
    }
}

/// Share of the whole population satisfying one predicate on its own
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeMatch {
    pub attribute: MatchAttribute,
    pub label: String,
    pub percent: Percentage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub population: usize,
    pub fuzzy_matches: usize,
    pub match_percent: Percentage,
    pub attributes: Vec<AttributeMatch>,
    /// Unselected interests most common among fuzzy matches
    pub suggested_interests: Vec<Interest>,
}

impl MatchReport {
    /// Nobody in the population resembles the profile
    pub fn is_unique(&self) -> bool {
        self.match_percent == Percentage::zero()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileMatcher {
    criteria: MatchCriteria,
}

impl ProfileMatcher {
    pub fn new(criteria: MatchCriteria) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &MatchCriteria {
        &self.criteria
    }

    pub fn is_fuzzy_match(&self, query: &QueryProfile, record: &UserRecord) -> bool {
        query.agreements(record, self.criteria.age_tolerance)
            >= self.criteria.required_agreements.into_inner()
    }

    pub fn fuzzy_matches<'a>(
        &self,
        records: &'a [UserRecord],
        query: &QueryProfile,
    ) -> Vec<&'a UserRecord> {
        records
            .iter()
            .filter(|record| self.is_fuzzy_match(query, record))
            .collect()
    }

    pub fn evaluate(
        &self,
        records: &[UserRecord],
        query: &QueryProfile,
    ) -> Result<MatchReport> {
        // Percentages are undefined over zero records
        if records.is_empty() {
            return Err(Error::EmptyPopulation);
        }

        let matches = self.fuzzy_matches(records, query);
        Ok(MatchReport {
            population: records.len(),
            fuzzy_matches: matches.len(),
            match_percent: percent_of(matches.len(), records.len()),
            attributes: self.attribute_matches(records, query),
            suggested_interests: self.suggest_interests(&matches, query),
        })
    }

    /// One row each for age window, gender, goal and every selected interest
    fn attribute_matches(
        &self,
        records: &[UserRecord],
        query: &QueryProfile,
    ) -> Vec<AttributeMatch> {
        let tolerance = self.criteria.age_tolerance;
        let mut rows = vec![
            row(
                records,
                MatchAttribute::AgeWindow {
                    center: query.age,
                    tolerance,
                },
                |record| query.age_matches(record, tolerance),
            ),
            row(
                records,
                MatchAttribute::Gender {
                    gender: query.gender,
                },
                |record| query.gender_matches(record),
            ),
            row(
                records,
                MatchAttribute::Goal {
                    goal: query.goal.clone(),
                },
                |record| query.goal_matches(record),
            ),
        ];
        rows.extend(query.interests.iter().map(|interest| {
            row(records, MatchAttribute::Interest { interest }, |record| {
                record.has_interest(interest)
            })
        }));
        rows
    }

    fn suggest_interests(&self, matches: &[&UserRecord], query: &QueryProfile) -> Vec<Interest> {
        let mut counts = [0usize; Interest::COUNT];
        for record in matches {
            for interest in record.interests.iter() {
                if !query.interests.contains(interest) {
                    counts[interest.index()] += 1;
                }
            }
        }
        let mut ranked: Vec<(Interest, usize)> = Interest::ALL
            .into_iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .collect();
        // Stable: ties stay in vocabulary order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(self.criteria.suggestion_limit.into_inner())
            .map(|(interest, _)| interest)
            .collect()
    }
}

fn row<F>(records: &[UserRecord], attribute: MatchAttribute, predicate: F) -> AttributeMatch
where
    F: Fn(&UserRecord) -> bool,
{
    let satisfied = records.iter().filter(|record| predicate(record)).count();
    AttributeMatch {
        label: attribute.label(),
        attribute,
        percent: percent_of(satisfied, records.len()),
    }
}

fn percent_of(part: usize, whole: usize) -> Percentage {
    Percentage::of(part, whole).unwrap_or_else(Percentage::zero)
}
