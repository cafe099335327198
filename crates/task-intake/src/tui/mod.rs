/*
[INPUT]:  AppConfig-built TaskClient and the shared log buffer
[OUTPUT]: Ratatui create-task form with confirmation, error banner and logs
[POS]:    TUI module for the task-intake binary
[UPDATE]: When changing TUI layout, keybindings, or submission wiring
*/

mod app;
mod events;
mod form;
mod runtime;
mod terminal;
mod ui;

pub use runtime::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory, run_tui};
