//! Log message constants for infrastructure components
//!
//! This module centralizes the log messages used by the loader, fetch scopes and
//! application layer so wording stays consistent across call sites.

/// Application startup and lifecycle messages
pub mod application {
    pub const STARTING: &str = "Starting swipe_stats";
    pub const LOADING_DATASET: &str = "Loading dataset";
    pub const DATASET_LOADED: &str = "Dataset loaded";
    pub const DASHBOARD_READY: &str = "Dashboard report ready";
    pub const OPTIONAL_ASSET_UNAVAILABLE: &str =
        "Optional asset unavailable, continuing without it";
    pub const PROFILE_STORED: &str = "Profile stored in user journey";
    pub const PROFILE_NOT_STORED: &str = "Profile not stored: population is empty";
}

/// Asset loading and row decoding messages
pub mod loading {
    pub const READING_ASSET: &str = "Reading asset";
    pub const ASSET_READ: &str = "Asset read";
    pub const RECORDS_DECODED: &str = "Records decoded";
    pub const UNKNOWN_INTEREST_DROPPED: &str = "Dropping interest outside the vocabulary";
    pub const UNEXPECTED_GENDER_CODE: &str = "Unexpected gender code, decoding as female";
    pub const USING_BUILT_IN_STATEMENTS: &str =
        "No statement asset configured, using built-in table";
}

/// View-scoped fetch lifecycle messages
pub mod scope {
    pub const FETCH_STARTED: &str = "Fetch started";
    pub const FETCH_COMPLETED: &str = "Fetch completed";
    pub const FETCH_FAILED: &str = "Fetch failed";
    pub const FETCH_CANCELLED: &str = "Fetch cancelled with its view";
    pub const SCOPE_CLOSED: &str = "View scope closed";
}

/// Configuration messages
pub mod configuration {
    pub const CONFIG_LOADED: &str = "Configuration loaded successfully";
}
