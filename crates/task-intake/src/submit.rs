/*
[INPUT]:  Draft from the form, TaskApi implementation, TaskStore
[OUTPUT]: Store driven to Success or Error (or field errors without a request)
[POS]:    Submission orchestrator - bridges validation, API client and state store
[UPDATE]: When the submission flow or error extraction changes
*/

use chrono::{Local, NaiveDate, TimeZone, Utc};
use task_intake_client::{CreateTaskResponse, Task, TaskApi, TaskApiError};

use crate::form::{Draft, DraftInput, Field, ValidatedPayload, validate};
use crate::store::{ErrorInfo, TaskStore};

/// How a submission attempt ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; no request was sent
    Invalid,
    Created(Task),
    Failed,
}

impl From<TaskApiError> for ErrorInfo {
    fn from(err: TaskApiError) -> Self {
        match err {
            TaskApiError::Api { body, .. } => ErrorInfo {
                error: body.error,
                details: body.details,
            },
            other => ErrorInfo::message(other.to_string()),
        }
    }
}

/// Runs the create-task flow against an API.
///
/// `Tz` decides what "today" and "end of day" mean; it is the local zone in
/// the application and a fixed zone in tests.
#[derive(Debug, Clone)]
pub struct Submitter<A, Tz: TimeZone = Local> {
    api: A,
    tz: Tz,
}

impl<A: TaskApi> Submitter<A, Local> {
    pub fn new(api: A) -> Self {
        Self::with_time_zone(api, Local)
    }
}

impl<A: TaskApi, Tz: TimeZone> Submitter<A, Tz> {
    pub fn with_time_zone(api: A, tz: Tz) -> Self {
        Self { api, tz }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Current calendar date in the submitter's zone
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }

    /// Validate and, if valid, move the store to Pending.
    ///
    /// On failure the field errors go to the store and `None` is returned.
    pub fn prepare(
        &self,
        store: &mut TaskStore,
        draft: &Draft,
        today: NaiveDate,
    ) -> Option<ValidatedPayload> {
        match validate(draft, today, &self.tz) {
            Ok(payload) => {
                store.submit(&payload);
                Some(payload)
            }
            Err(errors) => {
                tracing::debug!(fields = %errors, "draft rejected by validation");
                store.set_form_errors(errors);
                None
            }
        }
    }

    /// Like [`Submitter::prepare`], starting from raw form text.
    ///
    /// A due date that does not parse is reported next to any other field errors.
    pub fn prepare_input(
        &self,
        store: &mut TaskStore,
        input: &DraftInput,
        today: NaiveDate,
    ) -> Option<ValidatedPayload> {
        let (draft, due_issue) = input.to_draft();
        let Some(issue) = due_issue else {
            return self.prepare(store, &draft, today);
        };
        let mut errors = validate(&draft, today, &self.tz)
            .err()
            .unwrap_or_default();
        errors.insert(Field::DueDate, issue.message(Field::DueDate));
        store.set_form_errors(errors);
        None
    }

    /// Full flow with an explicit `today`
    pub async fn submit_on(
        &self,
        store: &mut TaskStore,
        draft: &Draft,
        today: NaiveDate,
    ) -> SubmitOutcome {
        let Some(payload) = self.prepare(store, draft, today) else {
            return SubmitOutcome::Invalid;
        };
        let result = self.api.create_task(payload.request()).await;
        complete(store, result)
    }

    /// Full flow as of the current date
    pub async fn submit(&self, store: &mut TaskStore, draft: &Draft) -> SubmitOutcome {
        let today = self.today();
        self.submit_on(store, draft, today).await
    }
}

/// Resolve a Pending store with the API result
pub fn complete(
    store: &mut TaskStore,
    result: task_intake_client::Result<CreateTaskResponse>,
) -> SubmitOutcome {
    match result {
        Ok(response) => {
            store.succeed(response.task.clone());
            SubmitOutcome::Created(response.task)
        }
        Err(err) => {
            store.fail(ErrorInfo::from(err));
            SubmitOutcome::Failed
        }
    }
}
