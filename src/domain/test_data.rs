//! Test data for consistent testing
//!
//! This module centralizes the record fixtures used throughout the test suite and the
//! benchmarks, so every test builds populations the same way.

use crate::domain::interests::{Interest, InterestSet};
use crate::domain::types::{
    goals, Age, ChildrenStatus, EducationLevel, Height, Occupation, RecordId, RelationshipGoal,
    SwipeCount, UsageFrequency,
};
use crate::domain::user::{Gender, UserRecord};

/// Usage frequency labels for testing
pub mod usage {
    pub const DAILY: &str = "Daily";
    pub const WEEKLY: &str = "Weekly";
    pub const MONTHLY: &str = "Monthly";
}

/// Education labels for testing
pub mod education {
    pub const BACHELORS: &str = "Bachelor's";
    pub const MASTERS: &str = "Master's";
    pub const PHD: &str = "PhD";
}

/// Occupation labels for testing
pub mod occupations {
    pub const ENGINEER: &str = "Engineer";
    pub const TEACHER: &str = "Teacher";
    pub const DOCTOR: &str = "Doctor";
}

/// Builder for [`UserRecord`] fixtures with sensible defaults
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    id: u32,
    age: u8,
    gender: Gender,
    goal: String,
    usage: String,
    swipes: f64,
    interests: InterestSet,
}

impl RecordBuilder {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            age: 25,
            gender: Gender::Male,
            goal: goals::CASUAL_DATING.to_string(),
            usage: usage::DAILY.to_string(),
            swipes: 50.0,
            interests: InterestSet::empty(),
        }
    }

    pub fn age(mut self, age: u8) -> Self {
        self.age = age;
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn goal(mut self, goal: &str) -> Self {
        self.goal = goal.to_string();
        self
    }

    pub fn usage(mut self, usage: &str) -> Self {
        self.usage = usage.to_string();
        self
    }

    pub fn swipes(mut self, swipes: f64) -> Self {
        self.swipes = swipes;
        self
    }

    pub fn interests(mut self, interests: &[Interest]) -> Self {
        self.interests = interests.iter().copied().collect();
        self
    }

    /// Builds the record
    ///
    /// # Panics
    ///
    /// Panics when a field is outside its validated range; fixtures are expected to be valid.
    pub fn build(self) -> UserRecord {
        UserRecord {
            id: RecordId::new(self.id),
            age: Age::try_new(self.age).expect("fixture age is valid"),
            gender: self.gender,
            height: Height::try_new(170.0).expect("fixture height is valid"),
            goal: RelationshipGoal::try_new(self.goal).expect("fixture goal is valid"),
            children: Some(
                ChildrenStatus::try_new("No".to_string()).expect("fixture children is valid"),
            ),
            education_level: EducationLevel::try_new(education::BACHELORS.to_string())
                .expect("fixture education is valid"),
            occupation: Occupation::try_new(occupations::ENGINEER.to_string())
                .expect("fixture occupation is valid"),
            swiping_history: SwipeCount::try_new(self.swipes).expect("fixture swipes are valid"),
            usage_frequency: UsageFrequency::try_new(self.usage)
                .expect("fixture usage is valid"),
            interests: self.interests,
        }
    }
}

/// A deterministic synthetic population of `size` records covering every band, goal,
/// usage label and interest
pub fn synthetic_population(size: usize) -> Vec<UserRecord> {
    let usages = [usage::DAILY, usage::WEEKLY, usage::MONTHLY];
    (0..size)
        .map(|n| {
            let interests: InterestSet = Interest::ALL
                .into_iter()
                .filter(|interest| (n + interest.index() * 3) % 4 == 0)
                .collect();
            let mut record = RecordBuilder::new(n as u32)
                .age(18 + (n % 25) as u8)
                .gender(if n % 2 == 0 {
                    Gender::Male
                } else {
                    Gender::Female
                })
                .goal(goals::ALL[n % goals::ALL.len()])
                .usage(usages[n % usages.len()])
                .swipes(((n * 7) % 100) as f64)
                .build();
            record.interests = interests;
            record
        })
        .collect()
}
