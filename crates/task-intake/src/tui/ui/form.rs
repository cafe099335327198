/*
[INPUT]:  TaskFormState, TaskState (loading flag and field errors), today's date
[OUTPUT]: Create-task form panel with inline errors and hints
[POS]:    TUI UI form panel
[UPDATE]: When adding form fields or changing hint text
*/

use chrono::NaiveDate;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use task_intake::form::{DESCRIPTION_MAX_CHARS, DUE_DATE_FORMAT, min_due_date};
use task_intake::{Field, TaskState};
use task_intake_client::TaskStatus;

use crate::tui::form::{Focus, TaskFormState};
use crate::tui::runtime::{border_style, error_style};

pub(in crate::tui) fn draw_form(
    frame: &mut ratatui::Frame,
    area: Rect,
    form: &TaskFormState,
    state: &TaskState,
    today: NaiveDate,
) {
    let disabled = state.loading();
    let errors = state.form_errors();
    let hint_style = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();

    let push_field = |lines: &mut Vec<Line<'static>>, focus: Focus, value: String| {
        let Some(field) = focus.field() else {
            return;
        };
        let focused = form.focus() == focus && !disabled;
        let label = match field {
            Field::Title => "Title *",
            Field::Description => "Description",
            Field::Status => "Status",
            Field::DueDate => "Due Date *",
        };
        let value_style = if disabled {
            Style::default().fg(Color::DarkGray)
        } else if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let cursor = if focused && field != Field::Status { "_" } else { "" };
        lines.push(Line::from(Span::styled(
            label,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(format!(" {value}{cursor} "), value_style)));
        if let Some(message) = errors.get(field) {
            lines.push(Line::from(Span::styled(message.to_string(), error_style())));
        }
    };

    push_field(&mut lines, Focus::Title, form.title.clone());

    push_field(&mut lines, Focus::Description, form.description.clone());
    lines.push(Line::from(Span::styled(
        format!("{}/{DESCRIPTION_MAX_CHARS} characters", form.description_chars()),
        hint_style,
    )));

    let options = TaskStatus::ALL
        .iter()
        .map(|status| {
            if *status == form.status() {
                format!("(x) {}", status.label())
            } else {
                format!("( ) {}", status.label())
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    push_field(&mut lines, Focus::Status, options);

    push_field(&mut lines, Focus::DueDate, form.due_date.clone());
    lines.push(Line::from(Span::styled(
        format!(
            "YYYY-MM-DD, earliest {}",
            min_due_date(today).format(DUE_DATE_FORMAT)
        ),
        hint_style,
    )));

    lines.push(Line::from(""));
    let (button, button_style) = if disabled {
        ("[ Creating Task... ]", Style::default().fg(Color::DarkGray))
    } else if form.focus() == Focus::Submit {
        (
            "[ Create Task ]",
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("[ Create Task ]", Style::default().fg(Color::LightGreen))
    };
    lines.push(Line::from(Span::styled(button, button_style)));

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("New Task"),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}
