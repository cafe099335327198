/*
[INPUT]:  Public API exports for task-intake crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod display;
pub mod form;
pub mod store;
pub mod submit;

// Re-export main types for convenience
pub use config::AppConfig;
pub use form::{Draft, DraftInput, Field, FieldErrors, ValidatedPayload, validate};
pub use store::{ErrorInfo, SubmissionPhase, TaskState, TaskStore};
pub use submit::{SubmitOutcome, Submitter, complete};
