//! Statement event replay
//!
//! Reads newline-delimited JSON notifications, one statement per line, and
//! pushes each through a `StatementLogFilter`:
//!
//! ```json
//! {"sql": "DELETE FROM users WHERE id = $1", "name": "SQL", "cached": false,
//!  "binds": [{"name": "id", "value": 1, "type": "integer"}]}
//! ```
//!
//! Every field is optional. `name` defaults to `SQL`. A bind without `type`
//! takes its variant from the JSON value; with a `type` the value is cast, the
//! way a driver casts bound attributes before notifying.
//!
//! The overall data processing architecture is:
//!
//! reader
//! parse_event
//! StatementEvent
//! StatementLogFilter
//! ReplaySummary

mod error;


pub use error::ReplayError;

use crate::event::{BindParam, BindValue, StatementEvent};
use crate::filter::{FilterOutcome, SkipReason, StatementLogFilter};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::io::BufRead;

/// Declared type of a bind in a replay record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindType {
    Integer,
    Float,
    String,
    Boolean,
    Date,
    Datetime,
    Binary,
}

impl BindType {
    pub fn as_str(self) -> &'static str {
        match self {
            BindType::Integer => "integer",
            BindType::Float => "float",
            BindType::String => "string",
            BindType::Boolean => "boolean",
            BindType::Date => "date",
            BindType::Datetime => "datetime",
            BindType::Binary => "binary",
        }
    }
}

impl fmt::Display for BindType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct EventRecord {
    #[serde(default)]
    sql: Option<String>,

    #[serde(default)]
    binds: Vec<BindRecord>,

    #[serde(default)]
    cached: bool,

    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BindRecord {
    name: String,

    #[serde(default)]
    value: Value,

    #[serde(default, rename = "type")]
    ty: Option<BindType>,
}

/// Counts of what happened to the replayed events.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    pub total: usize,
    pub emitted: usize,
    pub skipped: BTreeMap<SkipReason, usize>,
}

impl ReplaySummary {
    fn record(&mut self, outcome: FilterOutcome) {
        self.total += 1;
        match outcome {
            FilterOutcome::Emitted(_) => self.emitted += 1,
            FilterOutcome::Skipped(reason) => *self.skipped.entry(reason).or_default() += 1,
        }
    }

    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }
}

/// Feeds every non-blank line of `reader` through `filter`.
///
/// Stops at the first malformed line or filter error; the error carries the
/// 1-based line number.
pub fn replay<R: BufRead>(
    reader: R,
    filter: &StatementLogFilter,
) -> Result<ReplaySummary, ReplayError> {
    let mut summary = ReplaySummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        let event = parse_event(&line, line_no)?;
        let outcome = filter
            .process(&event)
            .map_err(|source| ReplayError::Filter {
                line: line_no,
                source,
            })?;

        summary.record(outcome);
    }

    tracing::debug!(
        total = summary.total,
        emitted = summary.emitted,
        skipped = summary.skipped_total(),
        "replay finished"
    );

    Ok(summary)
}

/// Parses one JSON notification into a `StatementEvent`.
pub fn parse_event(line: &str, line_no: usize) -> Result<StatementEvent, ReplayError> {
    let record: EventRecord =
        serde_json::from_str(line).map_err(|source| ReplayError::Malformed {
            line: line_no,
            source,
        })?;

    let parameters = record
        .binds
        .into_iter()
        .map(|bind| {
            let value = cast(bind.value, bind.ty).map_err(|reason| ReplayError::Cast {
                line: line_no,
                name: bind.name.clone(),
                ty: bind.ty.unwrap_or(BindType::String),
                reason,
            })?;
            Ok(BindParam {
                name: bind.name,
                value,
            })
        })
        .collect::<Result<Vec<_>, ReplayError>>()?;

    Ok(StatementEvent {
        statement_text: record.sql,
        parameters,
        is_cached: record.cached,
        operation_name: record
            .name
            .unwrap_or_else(|| StatementEvent::DEFAULT_OPERATION_NAME.to_string()),
    })
}

/// Casts a JSON value to the declared bind type. `null` is always `Null`.
fn cast(value: Value, ty: Option<BindType>) -> Result<BindValue, String> {
    if value.is_null() {
        return Ok(BindValue::Null);
    }

    let Some(ty) = ty else {
        return Ok(infer(value));
    };

    match (ty, value) {
        (BindType::Integer, Value::Number(n)) => n
            .as_i64()
            .map(BindValue::Integer)
            .ok_or_else(|| format!("{n} does not fit in a 64-bit integer")),
        (BindType::Integer, Value::String(s)) => s
            .trim()
            .parse()
            .map(BindValue::Integer)
            .map_err(|e| format!("'{s}': {e}")),

        (BindType::Float, Value::Number(n)) => n
            .as_f64()
            .map(BindValue::Float)
            .ok_or_else(|| format!("{n} is not representable as a float")),
        (BindType::Float, Value::String(s)) => s
            .trim()
            .parse()
            .map(BindValue::Float)
            .map_err(|e| format!("'{s}': {e}")),

        (BindType::String, Value::String(s)) => Ok(BindValue::Text(s)),
        (BindType::String, other) => Ok(BindValue::Text(other.to_string())),

        (BindType::Boolean, Value::Bool(b)) => Ok(BindValue::Bool(b)),
        (BindType::Boolean, Value::Number(n)) => match n.as_i64() {
            Some(0) => Ok(BindValue::Bool(false)),
            Some(1) => Ok(BindValue::Bool(true)),
            _ => Err(format!("{n} is neither 0 nor 1")),
        },
        (BindType::Boolean, Value::String(s)) => parse_bool(&s).map(BindValue::Bool),

        (BindType::Date, Value::String(s)) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(BindValue::Date)
            .map_err(|e| format!("'{s}': {e}")),
        (BindType::Datetime, Value::String(s)) => parse_datetime(&s).map(BindValue::Timestamp),

        (BindType::Binary, Value::String(s)) => Ok(BindValue::Binary(s.into_bytes())),
        (BindType::Binary, Value::Array(items)) => items
            .iter()
            .map(|v| {
                v.as_u64()
                    .and_then(|b| u8::try_from(b).ok())
                    .ok_or_else(|| format!("{v} is not a byte"))
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(BindValue::Binary),

        (_, other) => Err(format!("unexpected JSON {}", json_kind(&other))),
    }
}

fn infer(value: Value) -> BindValue {
    match value {
        Value::Null => BindValue::Null,
        Value::Bool(b) => BindValue::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => BindValue::Integer(i),
            None => BindValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => BindValue::Text(s),
        other => BindValue::Text(other.to_string()),
    }
}

fn parse_bool(s: &str) -> Result<bool, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" => Ok(true),
        "false" | "f" | "0" => Ok(false),
        _ => Err(format!("'{s}' is not a boolean")),
    }
}

fn parse_datetime(s: &str) -> Result<NaiveDateTime, String> {
    let trimmed = s.trim();
    trimmed
        .parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f"))
        .map_err(|e| format!("'{s}': {e}"))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
