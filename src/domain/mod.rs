//! Domain types and analytics for swipe_stats
//!
//! This module contains the population model and every derived view over it:
//! grouped summaries, the interest co-occurrence graph, profile matching, profile
//! browsing and the statistics quiz. Values are validated once at the loading
//! boundary and trusted afterwards.

pub mod aggregation;
pub mod avatar;
pub mod config_types;
pub mod constants;
pub mod explorer;
pub mod interests;
pub mod matching;
pub mod network;
pub mod population;
pub mod quiz;
pub mod test_data;
pub mod types;
pub mod user;

pub use aggregation::{DashboardSummary, SummaryCache};
pub use interests::{Interest, InterestSet};
pub use matching::{MatchCriteria, MatchReport, ProfileMatcher, QueryProfile};
pub use network::{InterestGraph, NetworkDocument, NetworkOptions};
pub use population::Population;
pub use user::*;
