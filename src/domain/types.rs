//! Validated value types for population records and analytics output
//!
//! This module provides newtypes for the scalar concepts of the dataset to avoid
//! primitive obsession and ensure validation at the loading boundary.

use crate::domain::constants::age_bands;
use nutype::nutype;
#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};

/// Identifier of a record in the source dataset
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display
))]
pub struct RecordId(u32);

/// Age in whole years
///
/// Restricted to 18..=120: the dataset only covers adults, and every accepted age must
/// fall into exactly one age band.
#[nutype(
    validate(greater_or_equal = 18, less_or_equal = 120),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct Age(u8);

impl Age {
    /// Youngest accepted age
    pub fn youngest() -> Self {
        Self::try_new(age_bands::MIN_RECORD_AGE).expect("Minimum record age is valid")
    }

    /// Absolute difference in years
    pub fn years_apart(&self, other: Age) -> u8 {
        self.into_inner().abs_diff(other.into_inner())
    }

    /// Parses a numeric age as found in JSON/CSV sources (`27` or `27.0`)
    pub fn from_source(value: f64) -> Option<Self> {
        if !value.is_finite() || value.fract() != 0.0 || !(0.0..=255.0).contains(&value) {
            return None;
        }
        Self::try_new(value as u8).ok()
    }
}

/// Height as recorded in the source data
#[nutype(
    validate(finite, greater = 0.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display)
)]
pub struct Height(f64);

/// Number of swipes recorded for a user
#[nutype(
    validate(finite, greater_or_equal = 0.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display)
)]
pub struct SwipeCount(f64);

impl SwipeCount {
    pub fn zero() -> Self {
        Self::try_new(0.0).expect("Zero swipes is valid")
    }
}

/// Whole-number percentage (0..=100)
#[nutype(
    validate(less_or_equal = 100),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct Percentage(u8);

impl Percentage {
    pub fn zero() -> Self {
        Self::try_new(0).expect("Zero percent is valid")
    }

    pub fn full() -> Self {
        Self::try_new(100).expect("Hundred percent is valid")
    }

    /// `part / whole` as a percentage rounded half up
    ///
    /// Returns `None` for an empty whole or a part larger than the whole.
    pub fn of(part: usize, whole: usize) -> Option<Self> {
        if whole == 0 || part > whole {
            return None;
        }
        let rounded = (200 * part + whole) / (2 * whole);
        Self::try_new(rounded as u8).ok()
    }
}

/// Relationship goal label (`looking_for` in the source data)
///
/// Kept open-ended: summaries group by whatever goals the data contains.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 100),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct RelationshipGoal(String);

/// Well-known relationship goals offered by the profile form
pub mod goals {
    pub const CASUAL_DATING: &str = "Casual Dating";
    pub const FRIENDSHIP: &str = "Friendship";
    pub const LONG_TERM_RELATIONSHIP: &str = "Long-term Relationship";
    pub const MARRIAGE: &str = "Marriage";

    pub const ALL: [&str; 4] = [CASUAL_DATING, FRIENDSHIP, LONG_TERM_RELATIONSHIP, MARRIAGE];
}

/// How often a user opens the app (`Daily`, `Weekly`, `Monthly`, ...)
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 100),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct UsageFrequency(String);

/// Highest completed education level
#[nutype(
    sanitize(trim),
    validate(len_char_max = 100),
    derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, AsRef, Display)
)]
pub struct EducationLevel(String);

/// Occupation, free text
#[nutype(
    sanitize(trim),
    validate(len_char_max = 200),
    derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, AsRef, Display)
)]
pub struct Occupation(String);

/// Whether/how the user has or wants children, free text
#[nutype(
    sanitize(trim),
    validate(len_char_max = 100),
    derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, AsRef, Display)
)]
pub struct ChildrenStatus(String);
