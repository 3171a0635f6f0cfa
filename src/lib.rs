//! swipe_stats - Analytics core for a dating-app statistics explorer
//!
//! Loads a static population of user records and derives display-ready views from
//! it: grouped summaries, an interest co-occurrence graph, profile matching against a
//! submitted profile, profile browsing and a true/false statistics quiz.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::Application;
pub use error::{Error, Result};
