/*
[INPUT]:  Draft form input and the evaluation-time local date
[OUTPUT]: ValidatedPayload ready for submission, or per-field error messages
[POS]:    Form controller - client-side validation rules
[UPDATE]: When form fields or validation rules change
*/

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Serialize;
use task_intake_client::{CreateTaskRequest, TaskStatus};

pub const TITLE_MAX_CHARS: usize = 255;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Form fields that can carry an error message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Title,
    Description,
    Status,
    DueDate,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Title, Field::Description, Field::Status, Field::DueDate];

    /// Key used for the field in form state (`dueDate`, not `due_date`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Status => "status",
            Field::DueDate => "dueDate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Description => "Description",
            Field::Status => "Status",
            Field::DueDate => "Due date",
        }
    }

    /// Resolve a field name sent by the backend in a structured error detail
    pub fn from_api_name(name: &str) -> Option<Field> {
        match name {
            "title" => Some(Field::Title),
            "description" => Some(Field::Description),
            "status" => Some(Field::Status),
            "dueDate" | "due_date" | "due_date_time" => Some(Field::DueDate),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name to human readable message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Set the message for `field`, replacing any previous one
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl FromIterator<(Field, String)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Reason a single field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    Required,
    TooLong { max: usize },
    MustBeFuture,
    InvalidDate,
}

impl ValidationIssue {
    pub fn message(&self, field: Field) -> String {
        let label = field.label();
        match self {
            ValidationIssue::Required => format!("{label} is required"),
            ValidationIssue::TooLong { max } => {
                format!("{label} must not exceed {max} characters")
            }
            ValidationIssue::MustBeFuture => format!("{label} must be in the future"),
            ValidationIssue::InvalidDate => format!("{label} must be a valid date (YYYY-MM-DD)"),
        }
    }
}

/// In-progress, unvalidated form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
}

/// Raw form text, before the due date is parsed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftInput {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub due_date: String,
}

impl DraftInput {
    /// Draft for validation plus the due-date parse problem, if any.
    /// An unparseable date leaves `due_date` unset.
    pub fn to_draft(&self) -> (Draft, Option<ValidationIssue>) {
        let (due_date, issue) = match parse_due_date(&self.due_date) {
            Ok(due_date) => (due_date, None),
            Err(issue) => (None, Some(issue)),
        };
        let draft = Draft {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            due_date,
        };
        (draft, issue)
    }
}

/// Draft data that passed every rule. Only [`validate`] constructs one.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPayload(CreateTaskRequest);

impl ValidatedPayload {
    pub fn request(&self) -> &CreateTaskRequest {
        &self.0
    }

    pub fn into_request(self) -> CreateTaskRequest {
        self.0
    }

    pub fn title(&self) -> &str {
        &self.0.title
    }

    pub fn due_date_time(&self) -> DateTime<Utc> {
        self.0.due_date_time
    }
}

/// Validate `draft` as of `today` in time zone `tz`.
///
/// Every rule runs; all violations are reported together.
pub fn validate<Tz: TimeZone>(
    draft: &Draft,
    today: NaiveDate,
    tz: &Tz,
) -> Result<ValidatedPayload, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = draft.title.trim();
    if title.is_empty() {
        errors.insert(Field::Title, ValidationIssue::Required.message(Field::Title));
    } else if draft.title.chars().count() > TITLE_MAX_CHARS {
        errors.insert(
            Field::Title,
            ValidationIssue::TooLong { max: TITLE_MAX_CHARS }.message(Field::Title),
        );
    }

    if draft.description.chars().count() > DESCRIPTION_MAX_CHARS {
        errors.insert(
            Field::Description,
            ValidationIssue::TooLong {
                max: DESCRIPTION_MAX_CHARS,
            }
            .message(Field::Description),
        );
    }

    let due_date_time = match draft.due_date {
        None => {
            errors.insert(Field::DueDate, ValidationIssue::Required.message(Field::DueDate));
            None
        }
        Some(day) if day <= today => {
            errors.insert(
                Field::DueDate,
                ValidationIssue::MustBeFuture.message(Field::DueDate),
            );
            None
        }
        Some(day) => {
            let instant = end_of_day(day, tz);
            if instant.is_none() {
                errors.insert(
                    Field::DueDate,
                    ValidationIssue::InvalidDate.message(Field::DueDate),
                );
            }
            instant
        }
    };

    match due_date_time {
        Some(due_date_time) if errors.is_empty() => Ok(ValidatedPayload(CreateTaskRequest {
            title: title.to_string(),
            description: draft.description.trim().to_string(),
            status: draft.status,
            due_date_time,
        })),
        _ => Err(errors),
    }
}

/// 23:59:59 local time on `day`, as an absolute instant
pub fn end_of_day<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> Option<DateTime<Utc>> {
    let local = day.and_time(NaiveTime::from_hms_opt(23, 59, 59)?);
    tz.from_local_datetime(&local)
        .earliest()
        .map(|instant| instant.with_timezone(&Utc))
}

/// Earliest day the form should offer for the due date
pub fn min_due_date(today: NaiveDate) -> NaiveDate {
    today.succ_opt().unwrap_or(today)
}

/// Parse due-date text as typed into the form. Blank input means "not chosen".
pub fn parse_due_date(text: &str) -> Result<Option<NaiveDate>, ValidationIssue> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(text, DUE_DATE_FORMAT)
        .map(Some)
        .map_err(|_| ValidationIssue::InvalidDate)
}
