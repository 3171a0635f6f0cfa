//! Age distribution in fixed five-year bands

use crate::domain::aggregation::GenderSplit;
use crate::domain::types::Age;
use crate::domain::user::UserRecord;
use serde::{Serialize, Serializer};
use std::fmt;

/// Fixed age bands; every band but the last is inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgeBand {
    From18To22,
    From23To27,
    From28To32,
    From33To37,
    /// Open-ended catch-all for 38 and older
    From38,
}

impl AgeBand {
    pub const ALL: [AgeBand; 5] = [
        AgeBand::From18To22,
        AgeBand::From23To27,
        AgeBand::From28To32,
        AgeBand::From33To37,
        AgeBand::From38,
    ];

    /// The unique band containing an age
    pub fn for_age(age: Age) -> Self {
        match age.into_inner() {
            ..=22 => AgeBand::From18To22,
            23..=27 => AgeBand::From23To27,
            28..=32 => AgeBand::From28To32,
            33..=37 => AgeBand::From33To37,
            _ => AgeBand::From38,
        }
    }

    pub fn contains(&self, age: Age) -> bool {
        Self::for_age(age) == *self
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::From18To22 => "18-22",
            AgeBand::From23To27 => "23-27",
            AgeBand::From28To32 => "28-32",
            AgeBand::From33To37 => "33-37",
            AgeBand::From38 => "38+",
        }
    }

    pub fn is_open_ended(&self) -> bool {
        matches!(self, AgeBand::From38)
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for AgeBand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Record counts for one age band
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeBucket {
    pub band: AgeBand,
    #[serde(flatten)]
    pub counts: GenderSplit,
}

/// Counts per age band, one bucket per band in band order (empty bands included)
pub fn age_distribution(records: &[UserRecord]) -> Vec<AgeBucket> {
    let mut counts = [GenderSplit::default(); 5];
    for record in records {
        counts[AgeBand::for_age(record.age) as usize].record(record.gender);
    }
    AgeBand::ALL
        .into_iter()
        .zip(counts)
        .map(|(band, counts)| AgeBucket { band, counts })
        .collect()
}
