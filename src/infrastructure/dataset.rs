//! Decoding of the static dataset assets
//!
//! User rows arrive either as a JSON array of objects or as the legacy CSV export with
//! one-hot interest columns. Both are normalised into the same field map before being
//! validated into [`UserRecord`]s, so the two formats accept exactly the same values.
//! Row numbers in errors are zero-based positions in the source collection.

use crate::config::DataSettings;
use crate::domain::config_types::{AssetPath, DataFormat};
use crate::domain::interests::{Interest, InterestSet};
use crate::domain::network::NetworkDocument;
use crate::domain::population::Population;
use crate::domain::quiz::{GameStatement, StatementBank};
use crate::domain::types::{
    Age, ChildrenStatus, EducationLevel, Height, Occupation, RecordId, RelationshipGoal,
    SwipeCount, UsageFrequency,
};
use crate::domain::user::{Gender, UserRecord};
use crate::error::{Error, Result};
use crate::infrastructure::assets::AssetSource;
use crate::infrastructure::log_messages::loading;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

type Row = Map<String, Value>;

/// Decodes the JSON user array
pub fn parse_users_json(bytes: &[u8]) -> Result<Vec<UserRecord>> {
    let rows: Vec<Row> = serde_json::from_slice(bytes)?;
    let records = rows
        .iter()
        .enumerate()
        .map(|(index, row)| decode_row(index, row))
        .collect::<Result<Vec<_>>>()?;
    debug!(records = records.len(), format = "json", "{}", loading::RECORDS_DECODED);
    Ok(records)
}

/// Decodes the legacy CSV export
pub fn parse_users_csv(bytes: &[u8]) -> Result<Vec<UserRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);
    let headers = reader.headers()?.clone();
    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let fields = result?;
        let row: Row = headers
            .iter()
            .zip(fields.iter())
            .filter(|(_, value)| !value.is_empty())
            .map(|(header, value)| (header.to_string(), Value::String(value.to_string())))
            .collect();
        records.push(decode_row(index, &row)?);
    }
    debug!(records = records.len(), format = "csv", "{}", loading::RECORDS_DECODED);
    Ok(records)
}

fn decode_row(index: usize, row: &Row) -> Result<UserRecord> {
    let id = match row.get("user_id") {
        Some(value) => {
            let id = number(index, "user_id", value)?;
            if id < 0.0 || id.fract() != 0.0 || id > f64::from(u32::MAX) {
                return Err(Error::invalid_record(index, format!("invalid user_id {id}")));
            }
            id as u32
        }
        None => u32::try_from(index)
            .map_err(|_| Error::invalid_record(index, "row index exceeds id range"))?,
    };

    let age = number(index, "age", required(index, row, "age")?)?;
    let age = Age::from_source(age)
        .ok_or_else(|| Error::invalid_record(index, format!("age {age} outside 18..=120")))?;

    let gender = decode_gender(index, required(index, row, "gender")?)?;

    let height = number(index, "height", required(index, row, "height")?)?;
    let height = Height::try_new(height)
        .map_err(|e| Error::invalid_record(index, format!("height: {e}")))?;

    let goal = row
        .get("looking_for")
        .or_else(|| row.get("goal"))
        .ok_or_else(|| Error::invalid_record(index, "missing field looking_for"))?;
    let goal = RelationshipGoal::try_new(text(goal))
        .map_err(|e| Error::invalid_record(index, format!("looking_for: {e}")))?;

    let children = match row.get("children").map(text) {
        Some(children) if !children.trim().is_empty() => Some(
            ChildrenStatus::try_new(children)
                .map_err(|e| Error::invalid_record(index, format!("children: {e}")))?,
        ),
        _ => None,
    };

    let education_level =
        EducationLevel::try_new(row.get("education_level").map(text).unwrap_or_default())
            .map_err(|e| Error::invalid_record(index, format!("education_level: {e}")))?;
    let occupation = Occupation::try_new(row.get("occupation").map(text).unwrap_or_default())
        .map_err(|e| Error::invalid_record(index, format!("occupation: {e}")))?;

    let swiping_history = match row.get("swiping_history") {
        Some(value) => SwipeCount::try_new(number(index, "swiping_history", value)?)
            .map_err(|e| Error::invalid_record(index, format!("swiping_history: {e}")))?,
        None => SwipeCount::zero(),
    };

    let usage_frequency = UsageFrequency::try_new(text(required(
        index,
        row,
        "usage_frequency",
    )?))
    .map_err(|e| Error::invalid_record(index, format!("usage_frequency: {e}")))?;

    Ok(UserRecord {
        id: RecordId::new(id),
        age,
        gender,
        height,
        goal,
        children,
        education_level,
        occupation,
        swiping_history,
        usage_frequency,
        interests: decode_interests(index, row)?,
    })
}

fn required<'a>(index: usize, row: &'a Row, field: &str) -> Result<&'a Value> {
    row.get(field)
        .filter(|value| !value.is_null())
        .ok_or_else(|| Error::invalid_record(index, format!("missing field {field}")))
}

fn number(index: usize, field: &str, value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|n| n.is_finite())
        .ok_or_else(|| Error::invalid_record(index, format!("{field} is not a number")))
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Numeric codes decode as `0` = male and anything else = female; text labels parse
fn decode_gender(index: usize, value: &Value) -> Result<Gender> {
    if let Ok(code) = number(index, "gender", value) {
        let (gender, expected) = Gender::from_code(code);
        if !expected {
            warn!(row = index, code, "{}", loading::UNEXPECTED_GENDER_CODE);
        }
        return Ok(gender);
    }
    text(value)
        .parse::<Gender>()
        .map_err(|e| Error::invalid_record(index, e))
}

/// Interests from an `interests` array and/or one-hot columns named after each tag
fn decode_interests(index: usize, row: &Row) -> Result<InterestSet> {
    let mut interests = InterestSet::empty();

    match row.get("interests") {
        None | Some(Value::Null) => {}
        Some(Value::Array(tags)) => {
            for tag in tags {
                let tag = text(tag);
                match tag.parse::<Interest>() {
                    Ok(interest) => {
                        interests.insert(interest);
                    }
                    Err(_) => {
                        debug!(row = index, tag = %tag, "{}", loading::UNKNOWN_INTEREST_DROPPED)
                    }
                }
            }
        }
        Some(_) => {
            return Err(Error::invalid_record(index, "interests is not an array"));
        }
    }

    for interest in Interest::ALL {
        if let Some(value) = row.get(interest.as_str()) {
            if number(index, interest.as_str(), value)? == 1.0 {
                interests.insert(interest);
            }
        }
    }
    Ok(interests)
}

/// One precomputed aggregate: a bare count or a count with a gender split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AggregateEntry {
    Count(u64),
    Split {
        count: u64,
        #[serde(rename = "byGender", default, skip_serializing_if = "Option::is_none")]
        by_gender: Option<BTreeMap<String, u64>>,
    },
}

impl AggregateEntry {
    pub fn count(&self) -> u64 {
        match self {
            AggregateEntry::Count(count) | AggregateEntry::Split { count, .. } => *count,
        }
    }

    pub fn by_gender(&self) -> Option<&BTreeMap<String, u64>> {
        match self {
            AggregateEntry::Count(_) => None,
            AggregateEntry::Split { by_gender, .. } => by_gender.as_ref(),
        }
    }
}

/// A chart-ready `(label, count)` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: u64,
    #[serde(rename = "byGender", skip_serializing_if = "Option::is_none")]
    pub by_gender: Option<BTreeMap<String, u64>>,
}

/// Contents of `aggregates.json`
///
/// Labels are kept in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrecomputedAggregates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_distribution: Option<BTreeMap<String, AggregateEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_goals: Option<BTreeMap<String, AggregateEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_distribution: Option<BTreeMap<String, AggregateEntry>>,
}

impl PrecomputedAggregates {
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn relationship_goals_rows(&self) -> Vec<LabelCount> {
        rows(self.relationship_goals.as_ref())
    }

    pub fn age_distribution_rows(&self) -> Vec<LabelCount> {
        rows(self.age_distribution.as_ref())
    }

    pub fn interest_distribution_rows(&self) -> Vec<LabelCount> {
        rows(self.interest_distribution.as_ref())
    }
}

fn rows(section: Option<&BTreeMap<String, AggregateEntry>>) -> Vec<LabelCount> {
    section
        .map(|entries| {
            entries
                .iter()
                .map(|(label, entry)| LabelCount {
                    label: label.clone(),
                    count: entry.count(),
                    by_gender: entry.by_gender().cloned(),
                })
                .collect()
        })
        .unwrap_or_default()
}

pub fn parse_network(bytes: &[u8]) -> Result<NetworkDocument> {
    Ok(serde_json::from_slice(bytes)?)
}

pub fn parse_statements(bytes: &[u8]) -> Result<StatementBank> {
    let statements: Vec<GameStatement> = serde_json::from_slice(bytes)?;
    StatementBank::new(statements)
}

/// Decodes `interests.json`, dropping tags outside the vocabulary
pub fn parse_interests(bytes: &[u8]) -> Result<Vec<Interest>> {
    let tags: Vec<String> = serde_json::from_slice(bytes)?;
    Ok(tags
        .iter()
        .filter_map(|tag| match tag.parse::<Interest>() {
            Ok(interest) => Some(interest),
            Err(_) => {
                debug!(tag = %tag, "{}", loading::UNKNOWN_INTEREST_DROPPED);
                None
            }
        })
        .collect())
}

/// Loads the user records in the configured format
pub async fn load_population(source: &dyn AssetSource, data: &DataSettings) -> Result<Population> {
    let records = match data.format {
        DataFormat::Json => parse_users_json(&source.fetch(&data.users_path).await?)?,
        DataFormat::Csv => parse_users_csv(&source.fetch(&data.csv_path).await?)?,
    };
    info!(records = records.len(), format = %data.format, "{}", loading::RECORDS_DECODED);
    Ok(Population::new(records))
}

pub async fn load_aggregates(
    source: &dyn AssetSource,
    asset: &AssetPath,
) -> Result<PrecomputedAggregates> {
    PrecomputedAggregates::parse(&source.fetch(asset).await?)
}

pub async fn load_network(source: &dyn AssetSource, asset: &AssetPath) -> Result<NetworkDocument> {
    parse_network(&source.fetch(asset).await?)
}

/// The configured statement table, or the built-in one when none is configured
pub async fn load_statements(
    source: &dyn AssetSource,
    asset: Option<&AssetPath>,
) -> Result<StatementBank> {
    match asset {
        Some(asset) => parse_statements(&source.fetch(asset).await?),
        None => {
            debug!("{}", loading::USING_BUILT_IN_STATEMENTS);
            Ok(StatementBank::built_in())
        }
    }
}

pub async fn load_interests(source: &dyn AssetSource, asset: &AssetPath) -> Result<Vec<Interest>> {
    parse_interests(&source.fetch(asset).await?)
}
