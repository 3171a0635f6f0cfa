//! Constants for population analytics, matching and the statistics quiz

/// Age banding used by the age distribution summary
pub mod age_bands {
    /// Youngest age accepted from the source data
    pub const MIN_RECORD_AGE: u8 = 18;

    /// Oldest age accepted from the source data
    pub const MAX_RECORD_AGE: u8 = 120;

    /// Inclusive lower bound of each band, in display order
    pub const BAND_STARTS: [u8; 5] = [18, 23, 28, 33, 38];

    /// Width of every closed band (inclusive on both ends)
    pub const CLOSED_BAND_WIDTH: u8 = 5;
}

/// Interest co-occurrence graph construction
pub mod network {
    /// Fraction of the smaller endpoint's popularity a pair must exceed to be linked
    pub const DEFAULT_OVERLAP_RATIO: f64 = 0.2;

    /// Number of connections reported for a hovered interest
    pub const DEFAULT_TOP_CONNECTIONS: usize = 3;
}

/// Profile matching
pub mod matching {
    /// Years either side of the query age that still count as an age match
    pub const DEFAULT_AGE_TOLERANCE: u8 = 2;

    /// Predicates (out of four) a record must satisfy to be a fuzzy match
    pub const DEFAULT_REQUIRED_AGREEMENTS: u8 = 3;

    /// Number of predicates evaluated per record
    pub const PREDICATE_COUNT: u8 = 4;

    /// Number of unselected interests suggested from close matches
    pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;
}

/// Statistics quiz
pub mod game {
    /// Answers per game before it is over
    pub const DEFAULT_ROUNDS: u8 = 10;

    /// Upper bound on configurable rounds
    pub const MAX_ROUNDS: u8 = 100;
}

/// Avatar generation for profiles
pub mod avatar {
    pub const BASE_URL: &str = "https://api.dicebear.com/7.x";
    pub const STYLE: &str = "adventurer-neutral";
}
