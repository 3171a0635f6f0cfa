//! The immutable record collection every analytics view reads from

use crate::domain::user::{Gender, UserRecord};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::Arc;

/// SHA-256 content hash of a population, used as a memoization key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PopulationFingerprint(String);

impl PopulationFingerprint {
    fn of(records: &[UserRecord]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update((records.len() as u64).to_le_bytes());
        for record in records {
            hasher.update(record.id.into_inner().to_le_bytes());
            hasher.update([record.age.into_inner()]);
            hasher.update([match record.gender {
                Gender::Male => 0u8,
                Gender::Female => 1u8,
            }]);
            hasher.update(record.height.into_inner().to_bits().to_le_bytes());
            update_str(&mut hasher, record.goal.as_ref());
            update_str(
                &mut hasher,
                record.children.as_ref().map(|c| c.as_ref()).unwrap_or(""),
            );
            update_str(&mut hasher, record.education_level.as_ref());
            update_str(&mut hasher, record.occupation.as_ref());
            hasher.update(record.swiping_history.into_inner().to_bits().to_le_bytes());
            update_str(&mut hasher, record.usage_frequency.as_ref());
            for interest in record.interests.iter() {
                hasher.update([interest.index() as u8]);
            }
            hasher.update([0xff]);
        }
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PopulationFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0)
    }
}

// Length-prefixed so adjacent fields cannot run together.
fn update_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

/// A loaded, read-only collection of records
///
/// Cheap to clone; clones share the same records and fingerprint.
#[derive(Debug, Clone)]
pub struct Population {
    records: Arc<[UserRecord]>,
    fingerprint: PopulationFingerprint,
}

impl Population {
    pub fn new(records: Vec<UserRecord>) -> Self {
        let fingerprint = PopulationFingerprint::of(&records);
        Self {
            records: records.into(),
            fingerprint,
        }
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn fingerprint(&self) -> &PopulationFingerprint {
        &self.fingerprint
    }
}

impl From<Vec<UserRecord>> for Population {
    fn from(records: Vec<UserRecord>) -> Self {
        Self::new(records)
    }
}
