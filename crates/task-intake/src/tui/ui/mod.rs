/*
[INPUT]:  AppState, TaskState and form widget state for UI components
[OUTPUT]: UI component render functions and module exports
[POS]:    TUI UI module root
[UPDATE]: When adding or removing panels
*/

mod banner;
mod confirmation;
mod form;
mod layout;
mod logs;

pub(in crate::tui) use banner::draw_error_banner;
pub(in crate::tui) use confirmation::{draw_confirmation, draw_history};
pub(in crate::tui) use form::draw_form;
pub(in crate::tui) use layout::{draw_footer, draw_header};
pub(in crate::tui) use logs::draw_logs;
