//! Application services and view orchestration
//!
//! This module wires the loaders, caches and domain services together for the
//! views of the statistics explorer.

pub mod app;
pub mod generator;
pub mod journey;

pub use app::{Application, DashboardReport, LoadedDataset};
pub use generator::{GeneratedProfile, ProfileGenerator};
pub use journey::UserJourney;
