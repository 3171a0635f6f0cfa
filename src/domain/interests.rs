//! The fixed interest vocabulary and a compact set representation
//!
//! Every record's interests are drawn from a closed vocabulary of seven tags. Sets of
//! interests are stored as a bitset, so membership, intersection and pairwise
//! co-occurrence checks are single integer operations.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One tag of the interest vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Cooking,
    Hiking,
    Movies,
    Music,
    Reading,
    Sports,
    Travel,
}

impl Interest {
    /// Vocabulary size
    pub const COUNT: usize = 7;

    /// The whole vocabulary, in display (alphabetical) order
    pub const ALL: [Interest; Interest::COUNT] = [
        Interest::Cooking,
        Interest::Hiking,
        Interest::Movies,
        Interest::Music,
        Interest::Reading,
        Interest::Sports,
        Interest::Travel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Cooking => "cooking",
            Interest::Hiking => "hiking",
            Interest::Movies => "movies",
            Interest::Music => "music",
            Interest::Reading => "reading",
            Interest::Sports => "sports",
            Interest::Travel => "travel",
        }
    }

    /// Position of this tag in [`Interest::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Interest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cooking" => Ok(Interest::Cooking),
            "hiking" => Ok(Interest::Hiking),
            "movies" => Ok(Interest::Movies),
            "music" => Ok(Interest::Music),
            "reading" => Ok(Interest::Reading),
            "sports" => Ok(Interest::Sports),
            "travel" => Ok(Interest::Travel),
            _ => Err(format!("Unknown interest: {s}")),
        }
    }
}

/// A subset of the interest vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InterestSet(u8);

impl InterestSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every tag of the vocabulary
    pub fn full() -> Self {
        Interest::ALL.into_iter().collect()
    }

    /// Adds an interest, returning `true` if it was not already present
    pub fn insert(&mut self, interest: Interest) -> bool {
        let added = !self.contains(interest);
        self.0 |= interest.bit();
        added
    }

    /// Removes an interest, returning `true` if it was present
    pub fn remove(&mut self, interest: Interest) -> bool {
        let present = self.contains(interest);
        self.0 &= !interest.bit();
        present
    }

    /// Flips membership of an interest (form checkbox semantics)
    pub fn toggle(&mut self, interest: Interest) {
        self.0 ^= interest.bit();
    }

    pub fn contains(self, interest: Interest) -> bool {
        self.0 & interest.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// True when both sets hold at least one common interest
    pub fn intersects(self, other: InterestSet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn intersection(self, other: InterestSet) -> InterestSet {
        InterestSet(self.0 & other.0)
    }

    /// Members in vocabulary order
    pub fn iter(self) -> impl Iterator<Item = Interest> {
        Interest::ALL
            .into_iter()
            .filter(move |interest| self.contains(*interest))
    }
}

impl FromIterator<Interest> for InterestSet {
    fn from_iter<I: IntoIterator<Item = Interest>>(iter: I) -> Self {
        let mut set = InterestSet::empty();
        for interest in iter {
            set.insert(interest);
        }
        set
    }
}

impl Serialize for InterestSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for InterestSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let interests = Vec::<Interest>::deserialize(deserializer)?;
        Ok(interests.into_iter().collect())
    }
}

impl fmt::Display for InterestSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|i| i.as_str()).collect();
        write!(f, "{}", names.join(", "))
    }
}
