/*
[INPUT]:  TaskClient, log buffer, UI event sender
[OUTPUT]: AppState owning the store, form widget state and submission wiring
[POS]:    TUI application state
[UPDATE]: When adding UI state or changing how submissions are dispatched
*/

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::mpsc;

use task_intake::{Field, SubmitOutcome, Submitter, TaskStore, complete};
use task_intake_client::{CreateTaskResponse, TaskClient};

use super::form::TaskFormState;
use super::runtime::{LogBufferHandle, UiEvent};

pub(super) struct AppState {
    pub(super) store: TaskStore,
    pub(super) form: TaskFormState,
    pub(super) submitter: Submitter<Arc<TaskClient>>,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) status_message: String,
    event_tx: mpsc::UnboundedSender<UiEvent>,
}

impl AppState {
    pub(super) fn new(
        client: TaskClient,
        log_buffer: LogBufferHandle,
        event_tx: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        Self {
            store: TaskStore::new(),
            form: TaskFormState::new(),
            submitter: Submitter::new(Arc::new(client)),
            log_buffer,
            status_message: "Ready".to_string(),
            event_tx,
        }
    }

    pub(super) fn today(&self) -> NaiveDate {
        self.submitter.today()
    }

    /// Any edit to a field that shows an error wipes all errors
    pub(super) fn after_edit(&mut self, edited: Option<Field>) {
        if let Some(field) = edited {
            if self.store.state().form_errors().contains(field) {
                self.store.clear_errors();
            }
        }
    }

    /// Validate and, if valid, send the request in the background.
    ///
    /// The response comes back as [`UiEvent::Submission`].
    pub(super) fn begin_submit(&mut self) {
        if self.store.state().loading() {
            return;
        }
        let today = self.today();
        let Some(payload) =
            self.submitter
                .prepare_input(&mut self.store, &self.form.to_input(), today)
        else {
            self.status_message = "Please fix the highlighted fields".to_string();
            return;
        };

        self.status_message = "Creating task...".to_string();
        let api = Arc::clone(self.submitter.api());
        let event_tx = self.event_tx.clone();
        let request = payload.into_request();
        tokio::spawn(async move {
            let result = api.create_task(&request).await;
            let _ = event_tx.send(UiEvent::Submission(result));
        });
    }

    pub(super) fn finish_submit(
        &mut self,
        result: task_intake_client::Result<CreateTaskResponse>,
    ) {
        match complete(&mut self.store, result) {
            SubmitOutcome::Created(task) => {
                self.form.reset();
                self.status_message = format!("Task {} created", task.id);
            }
            SubmitOutcome::Failed => {
                self.status_message = "Task creation failed".to_string();
            }
            SubmitOutcome::Invalid => {}
        }
    }

    /// Close the global error banner
    pub(super) fn dismiss_error(&mut self) {
        self.store.clear_errors();
        self.status_message = "Ready".to_string();
    }

    /// Leave the confirmation view for a fresh form
    pub(super) fn clear_confirmation(&mut self) {
        self.store.reset();
        self.status_message = "Ready".to_string();
    }
}
