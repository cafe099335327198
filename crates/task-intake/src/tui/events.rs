/*
[INPUT]:  Crossterm key events
[OUTPUT]: Form edits, submission, banner dismissal and quit requests on AppState
[POS]:    TUI key routing
[UPDATE]: When changing keybindings
*/

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::AppState;
use super::form::Focus;

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) fn handle_key_event(app: &mut AppState, key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    let state = app.store.state();
    if key.code == KeyCode::Esc {
        if state.error().is_some() {
            app.dismiss_error();
            return false;
        }
        return true;
    }

    // Inputs are disabled while a request is in flight
    if state.loading() {
        return false;
    }

    if state.success() && key.code == KeyCode::F(2) {
        app.clear_confirmation();
        return false;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focus_prev(),
        KeyCode::Enter => app.begin_submit(),
        KeyCode::Left if app.form.focus() == Focus::Status => {
            let edited = app.form.cycle_status(false);
            app.after_edit(Some(edited));
        }
        KeyCode::Right | KeyCode::Char(' ') if app.form.focus() == Focus::Status => {
            let edited = app.form.cycle_status(true);
            app.after_edit(Some(edited));
        }
        KeyCode::Backspace => {
            let edited = app.form.backspace();
            app.after_edit(edited);
        }
        KeyCode::Char(c) => {
            let edited = app.form.input_char(c);
            app.after_edit(edited);
        }
        _ => {}
    }
    false
}
