//! Infrastructure layer for swipe_stats
//!
//! This module contains the implementations for external concerns: reading the
//! static dataset assets, decoding them, and scoping asynchronous fetches to the
//! views that consume them.

pub mod assets;
pub mod dataset;
pub mod log_messages;
pub mod scope;

pub use assets::{AssetSource, FileSystemSource, MemorySource};
pub use dataset::{LabelCount, PrecomputedAggregates};
pub use scope::{FetchHandle, FetchState, ViewScope};
