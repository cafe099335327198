/*
[INPUT]:  Created Task (current) and session history from TaskState
[OUTPUT]: Confirmation panel or list of tasks created this session
[POS]:    TUI UI result panels
[UPDATE]: When changing confirmation fields or history layout
*/

use chrono::Local;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use task_intake::display::{confirmation_rows, format_timestamp};
use task_intake_client::Task;

use crate::tui::runtime::{border_style, key_style};

pub(in crate::tui) fn draw_confirmation(frame: &mut ratatui::Frame, area: Rect, task: &Task) {
    let label_style = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled(
            "Task created successfully",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(
        confirmation_rows(task, &Local)
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{label}: "), label_style),
                    Span::raw(value),
                ])
            }),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[F2]", key_style()),
        Span::raw(" Create another task"),
    ]));

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::LightGreen))
                .title("Confirmation"),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

pub(in crate::tui) fn draw_history(frame: &mut ratatui::Frame, area: Rect, tasks: &[Task]) {
    let items: Vec<ListItem> = if tasks.is_empty() {
        vec![ListItem::new("(none yet)")]
    } else {
        tasks
            .iter()
            .rev()
            .map(|task| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("#{} ", task.id), Style::default().fg(Color::Cyan)),
                    Span::raw(task.title.clone()),
                    Span::raw(format!(
                        "  [{}] due {}",
                        task.status.label(),
                        format_timestamp(&task.due_date_time, &Local)
                    )),
                ]))
            })
            .collect()
    };
    let widget = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(format!("Created this session ({})", tasks.len())),
    );
    frame.render_widget(widget, area);
}
