//! Per-gender counting shared by every summary

use crate::domain::user::Gender;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Record counts split by gender
///
/// The total is always derived from the parts, so `male + female == total` holds for
/// every bucket by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenderSplit {
    male: usize,
    female: usize,
}

impl GenderSplit {
    pub fn new(male: usize, female: usize) -> Self {
        Self { male, female }
    }

    /// Counts one record of the given gender
    pub fn record(&mut self, gender: Gender) {
        match gender {
            Gender::Male => self.male += 1,
            Gender::Female => self.female += 1,
        }
    }

    pub fn male(&self) -> usize {
        self.male
    }

    pub fn female(&self) -> usize {
        self.female
    }

    pub fn for_gender(&self, gender: Gender) -> usize {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }

    pub fn total(&self) -> usize {
        self.male + self.female
    }
}

impl FromIterator<Gender> for GenderSplit {
    fn from_iter<I: IntoIterator<Item = Gender>>(iter: I) -> Self {
        let mut split = GenderSplit::default();
        for gender in iter {
            split.record(gender);
        }
        split
    }
}

#[derive(Serialize)]
struct ByGender {
    male: usize,
    female: usize,
}

// Same `{count, byGender}` shape as the precomputed aggregates document.
impl Serialize for GenderSplit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("GenderSplit", 2)?;
        state.serialize_field("count", &self.total())?;
        state.serialize_field(
            "byGender",
            &ByGender {
                male: self.male,
                female: self.female,
            },
        )?;
        state.end()
    }
}
