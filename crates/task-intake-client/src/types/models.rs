/*
[INPUT]:  Task endpoint schema and serde requirements
[OUTPUT]: Typed Rust structs for server-owned records
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the task record schema changes
*/

use std::fmt;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::enums::TaskStatus;

/// Server-assigned task identifier. Backends differ on whether this is numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(u64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(id) => write!(f, "{id}"),
            TaskId::Text(id) => f.write_str(id),
        }
    }
}

/// Status as reported back on a created task.
///
/// Unknown values are kept verbatim so a created task is never rejected
/// over a status the client does not model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportedStatus {
    Known(TaskStatus),
    Other(String),
}

impl ReportedStatus {
    /// Label for known statuses, the raw value otherwise
    pub fn label(&self) -> &str {
        match self {
            ReportedStatus::Known(status) => status.label(),
            ReportedStatus::Other(raw) => raw,
        }
    }

    pub fn known(&self) -> Option<TaskStatus> {
        match self {
            ReportedStatus::Known(status) => Some(*status),
            ReportedStatus::Other(_) => None,
        }
    }
}

impl From<TaskStatus> for ReportedStatus {
    fn from(status: TaskStatus) -> Self {
        ReportedStatus::Known(status)
    }
}

impl PartialEq<TaskStatus> for ReportedStatus {
    fn eq(&self, other: &TaskStatus) -> bool {
        self.known() == Some(*other)
    }
}

/// Naive layouts accepted after RFC 3339, all read as wall-clock time
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// A timestamp on a task record, decoded as precisely as the backend allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    /// RFC 3339 or epoch milliseconds
    Instant(DateTime<Utc>),
    /// Date and time without an offset
    Naive(NaiveDateTime),
    /// Anything else, shown as sent
    Raw(String),
}

impl Timestamp {
    pub fn parse(raw: &str) -> Self {
        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Timestamp::Instant(instant.with_timezone(&Utc));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .map(Timestamp::Naive)
            .unwrap_or_else(|| Timestamp::Raw(raw.to_string()))
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Instant(instant) => Some(*instant),
            _ => None,
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Timestamp::Instant(instant)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Instant(instant) => {
                f.write_str(&instant.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Timestamp::Naive(naive) => write!(f, "{}", naive.format("%Y-%m-%dT%H:%M:%S%.3f")),
            Timestamp::Raw(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Text(String),
            Millis(i64),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Text(raw) => Timestamp::parse(&raw),
            Wire::Millis(millis) => DateTime::from_timestamp_millis(millis)
                .map(Timestamp::Instant)
                .unwrap_or_else(|| Timestamp::Raw(millis.to_string())),
        })
    }
}

/// A created task as confirmed by the backend. Display-only for the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ReportedStatus,
    pub due_date_time: Timestamp,
    pub created_at: Timestamp,
}
