/*
[INPUT]:  Key edits routed from the event handler
[OUTPUT]: Editable form text and focus, converted to DraftInput on submit
[POS]:    TUI form widget state
[UPDATE]: When adding form fields or changing focus order
*/

use task_intake::{DraftInput, Field};
use task_intake_client::TaskStatus;

/// Focusable rows of the form, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    Title,
    Description,
    Status,
    DueDate,
    Submit,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Title,
        Focus::Description,
        Focus::Status,
        Focus::DueDate,
        Focus::Submit,
    ];

    pub(super) fn field(self) -> Option<Field> {
        match self {
            Focus::Title => Some(Field::Title),
            Focus::Description => Some(Field::Description),
            Focus::Status => Some(Field::Status),
            Focus::DueDate => Some(Field::DueDate),
            Focus::Submit => None,
        }
    }
}

#[derive(Debug, Default)]
pub(super) struct TaskFormState {
    pub(super) title: String,
    pub(super) description: String,
    status_index: usize,
    pub(super) due_date: String,
    focus_index: usize,
}

impl TaskFormState {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Back to blank values, focus on Title
    pub(super) fn reset(&mut self) {
        *self = Self::default();
    }

    pub(super) fn focus(&self) -> Focus {
        Focus::ORDER[self.focus_index]
    }

    pub(super) fn focus_next(&mut self) {
        self.focus_index = (self.focus_index + 1) % Focus::ORDER.len();
    }

    pub(super) fn focus_prev(&mut self) {
        self.focus_index = (self.focus_index + Focus::ORDER.len() - 1) % Focus::ORDER.len();
    }

    pub(super) fn status(&self) -> TaskStatus {
        TaskStatus::ALL[self.status_index]
    }

    /// Step through the status options, wrapping at both ends
    pub(super) fn cycle_status(&mut self, forward: bool) -> Field {
        let len = TaskStatus::ALL.len();
        self.status_index = if forward {
            (self.status_index + 1) % len
        } else {
            (self.status_index + len - 1) % len
        };
        Field::Status
    }

    /// Append to the focused text field; returns the edited field
    pub(super) fn input_char(&mut self, c: char) -> Option<Field> {
        let target = self.focused_text_mut()?;
        target.push(c);
        self.focus().field()
    }

    pub(super) fn backspace(&mut self) -> Option<Field> {
        let target = self.focused_text_mut()?;
        target.pop();
        self.focus().field()
    }

    pub(super) fn description_chars(&self) -> usize {
        self.description.chars().count()
    }

    pub(super) fn to_input(&self) -> DraftInput {
        DraftInput {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status(),
            due_date: self.due_date.clone(),
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus() {
            Focus::Title => Some(&mut self.title),
            Focus::Description => Some(&mut self.description),
            Focus::DueDate => Some(&mut self.due_date),
            Focus::Status | Focus::Submit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_follows_focus() {
        let mut form = TaskFormState::new();
        assert_eq!(form.input_char('A'), Some(Field::Title));
        form.focus_next();
        assert_eq!(form.input_char('b'), Some(Field::Description));
        form.focus_next();
        assert_eq!(form.input_char('x'), None);
        form.focus_next();
        for c in "2026-10-17".chars() {
            form.input_char(c);
        }
        form.backspace();

        assert_eq!(form.title, "A");
        assert_eq!(form.description, "b");
        assert_eq!(form.due_date, "2026-10-1");
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = TaskFormState::new();
        form.focus_prev();
        assert_eq!(form.focus(), Focus::Submit);
        form.focus_next();
        assert_eq!(form.focus(), Focus::Title);
    }

    #[test]
    fn test_status_cycles_both_ways() {
        let mut form = TaskFormState::new();
        assert_eq!(form.status(), TaskStatus::Pending);
        form.cycle_status(false);
        assert_eq!(form.status(), TaskStatus::Completed);
        form.cycle_status(true);
        form.cycle_status(true);
        assert_eq!(form.status(), TaskStatus::InProgress);
    }

    #[test]
    fn test_reset_and_input() {
        let mut form = TaskFormState::new();
        form.title.push_str("Review file");
        form.cycle_status(true);
        form.focus_next();

        let input = form.to_input();
        assert_eq!(input.title, "Review file");
        assert_eq!(input.status, TaskStatus::InProgress);

        form.reset();
        assert!(form.title.is_empty());
        assert_eq!(form.status(), TaskStatus::Pending);
        assert_eq!(form.focus(), Focus::Title);
    }
}
