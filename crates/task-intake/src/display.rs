/*
[INPUT]:  Created Task and the viewer's time zone
[OUTPUT]: Labelled confirmation rows with locale-style timestamps
[POS]:    Confirmation view formatting shared by the TUI and CLI output
[UPDATE]: When the confirmation layout or timestamp format changes
*/

use chrono::TimeZone;
use task_intake_client::{Task, Timestamp};

/// `dd/mm/yyyy, HH:MM:SS`
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Render a timestamp in the viewer's zone.
///
/// Offset-less values are shown as wall-clock time and unparsed ones verbatim.
pub fn format_timestamp<Tz>(timestamp: &Timestamp, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match timestamp {
        Timestamp::Instant(instant) => instant
            .with_timezone(tz)
            .format(TIMESTAMP_FORMAT)
            .to_string(),
        Timestamp::Naive(naive) => naive.format(TIMESTAMP_FORMAT).to_string(),
        Timestamp::Raw(raw) => raw.clone(),
    }
}

/// Rows of the confirmation view. Description only appears when non-empty.
pub fn confirmation_rows<Tz>(task: &Task, tz: &Tz) -> Vec<(&'static str, String)>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut rows = vec![
        ("Task ID", task.id.to_string()),
        ("Title", task.title.clone()),
    ];
    if let Some(description) = task.description.as_deref().filter(|d| !d.is_empty()) {
        rows.push(("Description", description.to_string()));
    }
    rows.push(("Status", task.status.label().to_string()));
    rows.push(("Due Date", format_timestamp(&task.due_date_time, tz)));
    rows.push(("Created", format_timestamp(&task.created_at, tz)));
    rows
}
