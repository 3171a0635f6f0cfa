//! Type-safe configuration types
//!
//! This module provides domain-specific types for configuration values,
//! ensuring validation at boundaries and preventing primitive obsession.

use crate::domain::constants::{game, matching, network};
use crate::domain::interests::Interest;
use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative path of a static asset below the data root
///
/// Only plain relative paths are accepted; no parent traversal, no absolute paths.
#[nutype(
    sanitize(trim),
    validate(
        not_empty,
        len_char_max = 255,
        regex = r"^[A-Za-z0-9_-][A-Za-z0-9_./-]*$",
        predicate = |path| !path.split('/').any(|segment| segment == "..")
    ),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct AssetPath(String);

/// Years either side of the query age that still count as an age match
#[nutype(
    validate(less_or_equal = 50),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct AgeTolerance(u8);

impl Default for AgeTolerance {
    fn default() -> Self {
        Self::try_new(matching::DEFAULT_AGE_TOLERANCE).expect("Default age tolerance is valid")
    }
}

/// Number of the four match predicates a record must satisfy
#[nutype(
    validate(greater_or_equal = 1, less_or_equal = 4),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct RequiredAgreements(u8);

impl Default for RequiredAgreements {
    fn default() -> Self {
        Self::try_new(matching::DEFAULT_REQUIRED_AGREEMENTS)
            .expect("Default required agreements is valid")
    }
}

/// How many interests to suggest from close matches
#[nutype(
    validate(less_or_equal = 7),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct SuggestionLimit(usize);

impl Default for SuggestionLimit {
    fn default() -> Self {
        Self::try_new(matching::DEFAULT_SUGGESTION_LIMIT)
            .expect("Default suggestion limit is valid")
    }
}

/// Fraction of the less popular endpoint's holders two interests must share to be linked
#[nutype(
    validate(finite, greater_or_equal = 0.0, less_or_equal = 1.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display)
)]
pub struct OverlapRatio(f64);

impl Default for OverlapRatio {
    fn default() -> Self {
        Self::try_new(network::DEFAULT_OVERLAP_RATIO).expect("Default overlap ratio is valid")
    }
}

/// Label of the synthetic center node of the interest graph
///
/// Must not collide with a vocabulary tag, otherwise the center would link to itself.
#[nutype(
    sanitize(trim),
    validate(
        not_empty,
        len_char_max = 100,
        predicate = |label| label.parse::<Interest>().is_err()
    ),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct CenterLabel(String);

/// Answers per quiz game
#[nutype(
    validate(greater_or_equal = 1, less_or_equal = 100),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct RoundCount(u8);

impl Default for RoundCount {
    fn default() -> Self {
        Self::try_new(game::DEFAULT_ROUNDS).expect("Default round count is valid")
    }
}

/// Source format of the user records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    #[default]
    Json,
    Csv,
}

impl DataFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataFormat::Json => "json",
            DataFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DataFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(DataFormat::Json),
            "csv" => Ok(DataFormat::Csv),
            _ => Err(format!("Invalid data format: {s}")),
        }
    }
}

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {s}")),
        }
    }
}

/// Log format configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
    Compact,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Json => "json",
            LogFormat::Pretty => "pretty",
            LogFormat::Compact => "compact",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(format!("Invalid log format: {s}")),
        }
    }
}
