use crate::domain::interests::{Interest, InterestSet};
use crate::domain::types::{
    Age, ChildrenStatus, EducationLevel, Height, Occupation, RecordId, RelationshipGoal,
    SwipeCount, UsageFrequency,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender as encoded by the dataset (strictly binary in the source)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Display label used by the profile form and attribute rows
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Decodes the numeric source encoding: `0` is male, anything else female
    ///
    /// Returns the gender and whether the code was one of the two expected values.
    pub fn from_code(code: f64) -> (Self, bool) {
        if code == 0.0 {
            (Gender::Male, true)
        } else {
            (Gender::Female, code == 1.0)
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "0" => Ok(Gender::Male),
            "female" | "f" | "1" => Ok(Gender::Female),
            _ => Err(format!("Invalid gender: {s}")),
        }
    }
}

/// One row of the population dataset
///
/// Created once by the loader and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: RecordId,
    pub age: Age,
    pub gender: Gender,
    pub height: Height,
    pub goal: RelationshipGoal,
    pub children: Option<ChildrenStatus>,
    pub education_level: EducationLevel,
    pub occupation: Occupation,
    pub swiping_history: SwipeCount,
    pub usage_frequency: UsageFrequency,
    pub interests: InterestSet,
}

impl UserRecord {
    pub fn has_interest(&self, interest: Interest) -> bool {
        self.interests.contains(interest)
    }
}
