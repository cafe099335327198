/*
[INPUT]:  Submission lifecycle events (submit, succeed, fail, reset, clear errors)
[OUTPUT]: TaskState snapshot read by the UI
[POS]:    Task state store - submission state machine over accumulated history
[UPDATE]: When lifecycle transitions or backend error mapping change
*/

use task_intake_client::{ErrorDetail, Task};

use crate::form::{Field, FieldErrors, ValidatedPayload};

pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to create task";

/// Phase of the most recent create-task attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Pending,
    Success,
    Error,
}

/// What a failed submission reported
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorInfo {
    pub error: Option<String>,
    pub details: Vec<ErrorDetail>,
}

impl ErrorInfo {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            details: Vec::new(),
        }
    }
}

/// State of the create-task flow for the session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskState {
    tasks: Vec<Task>,
    current_task: Option<Task>,
    loading: bool,
    success: bool,
    error: Option<String>,
    form_errors: FieldErrors,
}

impl TaskState {
    /// Created tasks, in completion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn current_task(&self) -> Option<&Task> {
        self.current_task.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn success(&self) -> bool {
        self.success
    }

    /// Global error shown as a banner
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn form_errors(&self) -> &FieldErrors {
        &self.form_errors
    }

    pub fn phase(&self) -> SubmissionPhase {
        if self.loading {
            SubmissionPhase::Pending
        } else if self.success {
            SubmissionPhase::Success
        } else if self.error.is_some() {
            SubmissionPhase::Error
        } else {
            SubmissionPhase::Idle
        }
    }
}

/// Owner of the single [`TaskState`]; the only place it is mutated.
#[derive(Debug, Default)]
pub struct TaskStore {
    state: TaskState,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TaskState {
        &self.state
    }

    /// Idle → Pending
    pub fn submit(&mut self, payload: &ValidatedPayload) {
        self.state.loading = true;
        self.state.success = false;
        self.state.current_task = None;
        self.state.error = None;
        self.state.form_errors.clear();
        self.log_transition("submit");
        tracing::debug!(title = payload.title(), "request pending");
    }

    /// Pending → Success
    pub fn succeed(&mut self, task: Task) {
        tracing::info!(task_id = %task.id, total = self.state.tasks.len() + 1, "task confirmed");
        self.state.loading = false;
        self.state.success = true;
        self.state.tasks.push(task.clone());
        self.state.current_task = Some(task);
        self.state.error = None;
        self.state.form_errors.clear();
        self.log_transition("succeed");
    }

    /// Pending → Error
    pub fn fail(&mut self, info: ErrorInfo) {
        let message = info
            .error
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
        tracing::warn!(error = %message, details = info.details.len(), "submission failed");

        self.state.loading = false;
        self.state.success = false;
        self.state.current_task = None;
        self.state.error = Some(message);
        self.state.form_errors = map_error_details(&info.details);
        self.log_transition("fail");
    }

    /// Success/Error → Idle. History is kept.
    pub fn reset(&mut self) {
        self.state.current_task = None;
        self.state.success = false;
        self.state.error = None;
        self.state.form_errors.clear();
        self.log_transition("reset");
    }

    pub fn clear_errors(&mut self) {
        self.state.error = None;
        self.state.form_errors.clear();
        self.log_transition("clear_errors");
    }

    /// Replace the field errors, e.g. with local validation results
    pub fn set_form_errors(&mut self, errors: FieldErrors) {
        tracing::debug!(fields = %errors, "form errors set");
        self.state.form_errors = errors;
    }

    fn log_transition(&self, event: &'static str) {
        tracing::debug!(
            event,
            phase = ?self.state.phase(),
            tasks = self.state.tasks.len(),
            "task state updated"
        );
    }
}

/// Best-effort mapping of backend `details` onto form fields.
///
/// Structured details name their field. Free text is matched by case-sensitive
/// keyword; one string may fill several fields and later details overwrite
/// earlier ones. Anything that matches nothing is dropped.
pub fn map_error_details(details: &[ErrorDetail]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for detail in details {
        match detail {
            ErrorDetail::Field { field, message } => match Field::from_api_name(field) {
                Some(field) => errors.insert(field, message.as_str()),
                None => map_text_detail(&mut errors, message),
            },
            ErrorDetail::Text(text) => map_text_detail(&mut errors, text),
        }
    }
    errors
}

fn map_text_detail(errors: &mut FieldErrors, detail: &str) {
    let mut matched = false;
    if detail.contains("Title") {
        errors.insert(Field::Title, detail);
        matched = true;
    }
    if detail.contains("Description") {
        errors.insert(Field::Description, detail);
        matched = true;
    }
    if detail.contains("Status") {
        errors.insert(Field::Status, detail);
        matched = true;
    }
    if detail.contains("date") || detail.contains("Date") {
        errors.insert(Field::DueDate, detail);
        matched = true;
    }
    if !matched {
        tracing::debug!(detail, "error detail matches no form field; dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Draft, validate};
    use chrono::{NaiveDate, TimeZone, Utc};
    use task_intake_client::{TaskId, TaskStatus};

    fn payload() -> ValidatedPayload {
        let draft = Draft {
            title: "Review file".to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 10, 17),
            ..Draft::default()
        };
        validate(&draft, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(), &Utc).unwrap()
    }

    fn task(id: u64) -> Task {
        Task {
            id: TaskId::Number(id),
            title: "Review file".to_string(),
            description: None,
            status: TaskStatus::Pending.into(),
            due_date_time: Utc.with_ymd_and_hms(2026, 10, 17, 23, 59, 59).unwrap().into(),
            created_at: Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap().into(),
        }
    }

    fn assert_invariants(state: &TaskState) {
        assert!(!(state.loading() && state.success()));
        if state.current_task().is_some() {
            assert!(state.success());
        }
    }

    #[test]
    fn test_initial_state() {
        let store = TaskStore::new();
        let state = store.state();
        assert!(state.tasks().is_empty());
        assert!(state.current_task().is_none());
        assert!(!state.loading());
        assert!(!state.success());
        assert!(state.error().is_none());
        assert!(state.form_errors().is_empty());
        assert_eq!(state.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_submit_then_succeed() {
        let mut store = TaskStore::new();
        let mut stale = FieldErrors::new();
        stale.insert(Field::Title, "Title is required");
        store.set_form_errors(stale);

        store.submit(&payload());
        assert_eq!(store.state().phase(), SubmissionPhase::Pending);
        assert!(store.state().loading());
        assert!(store.state().form_errors().is_empty());
        assert_invariants(store.state());

        store.succeed(task(1));
        let state = store.state();
        assert_eq!(state.phase(), SubmissionPhase::Success);
        assert!(!state.loading());
        assert!(state.success());
        assert_eq!(state.current_task(), Some(&task(1)));
        assert_eq!(state.tasks(), &[task(1)]);
        assert_invariants(state);
    }

    #[test]
    fn test_fail_maps_details() {
        let mut store = TaskStore::new();
        store.submit(&payload());
        store.fail(ErrorInfo {
            error: Some("Validation failed".to_string()),
            details: vec!["Title is required".into(), "Invalid date".into()],
        });

        let state = store.state();
        assert_eq!(state.phase(), SubmissionPhase::Error);
        assert_eq!(state.error(), Some("Validation failed"));
        assert!(!state.success());
        assert!(!state.loading());
        assert_eq!(state.form_errors().len(), 2);
        assert_eq!(state.form_errors().get(Field::Title), Some("Title is required"));
        assert_eq!(state.form_errors().get(Field::DueDate), Some("Invalid date"));
        assert_invariants(state);
    }

    #[test]
    fn test_fail_without_message_uses_fallback() {
        let mut store = TaskStore::new();
        store.submit(&payload());
        store.fail(ErrorInfo::default());
        assert_eq!(store.state().error(), Some(DEFAULT_FAILURE_MESSAGE));
        assert!(store.state().form_errors().is_empty());
    }

    #[test]
    fn test_fail_after_success_keeps_history_but_not_success() {
        let mut store = TaskStore::new();
        store.submit(&payload());
        store.succeed(task(1));
        store.submit(&payload());
        assert!(!store.state().success());
        assert!(store.state().current_task().is_none());
        store.fail(ErrorInfo::message("Server unavailable"));
        assert_invariants(store.state());
        assert_eq!(store.state().tasks().len(), 1);
        assert_eq!(store.state().error(), Some("Server unavailable"));
    }

    #[test]
    fn test_clear_errors_is_idempotent() {
        let mut store = TaskStore::new();
        store.submit(&payload());
        store.fail(ErrorInfo {
            error: Some("Validation failed".to_string()),
            details: vec!["Status is invalid".into()],
        });

        store.clear_errors();
        let once = store.state().clone();
        store.clear_errors();
        assert_eq!(store.state(), &once);
        assert!(once.error().is_none());
        assert!(once.form_errors().is_empty());
        assert!(!once.success());
    }

    #[test]
    fn test_reset_keeps_history() {
        let mut store = TaskStore::new();
        store.submit(&payload());
        store.succeed(task(1));
        store.submit(&payload());
        store.succeed(task(2));
        let history = store.state().tasks().to_vec();

        store.reset();
        let state = store.state();
        assert!(state.current_task().is_none());
        assert!(!state.success());
        assert_eq!(state.tasks(), history.as_slice());
        assert_eq!(state.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_set_form_errors_leaves_lifecycle_alone() {
        let mut store = TaskStore::new();
        store.submit(&payload());
        store.succeed(task(1));

        let mut errors = FieldErrors::new();
        errors.insert(Field::DueDate, "Due date is required");
        store.set_form_errors(errors.clone());

        assert!(store.state().success());
        assert_eq!(store.state().form_errors(), &errors);
    }

    #[test]
    fn test_detail_matching_multiple_keywords() {
        let errors = map_error_details(&["Title and Description are both too long".into()]);
        assert_eq!(
            errors.get(Field::Title),
            Some("Title and Description are both too long")
        );
        assert_eq!(
            errors.get(Field::Description),
            Some("Title and Description are both too long")
        );
    }

    #[test]
    fn test_later_detail_overwrites_field() {
        let errors = map_error_details(&["Title is required".into(), "Title is too short".into()]);
        assert_eq!(errors.get(Field::Title), Some("Title is too short"));
    }

    #[test]
    fn test_unmatched_and_lowercase_details_dropped() {
        let errors = map_error_details(&[
            "title is required".into(),
            "Something went wrong".into(),
        ]);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_structured_details() {
        let errors = map_error_details(&[
            ErrorDetail::Field {
                field: "due_date_time".to_string(),
                message: "must be after today".to_string(),
            },
            ErrorDetail::Field {
                field: "priority".to_string(),
                message: "Status conflicts with priority".to_string(),
            },
        ]);
        assert_eq!(errors.get(Field::DueDate), Some("must be after today"));
        assert_eq!(
            errors.get(Field::Status),
            Some("Status conflicts with priority")
        );
    }
}
