/*
[INPUT]:  AppState status message and current year
[OUTPUT]: Header bar and hotkey footer
[POS]:    TUI UI page chrome
[UPDATE]: When changing hotkeys or page titles
*/

use chrono::{Datelike, Local};
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::app::AppState;
use crate::tui::runtime::{border_style, header_style, key_style};

pub(in crate::tui) fn draw_header(frame: &mut ratatui::Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" Task Intake ", header_style()),
        Span::raw("  Create a new case task"),
    ]);
    let widget = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style()),
    );
    frame.render_widget(widget, area);
}

pub(in crate::tui) fn draw_footer(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let key_style = key_style();
    let mut keys = vec![
        Span::styled("[Tab/Up/Down]", key_style),
        Span::raw(" Field  "),
        Span::styled("[Left/Right]", key_style),
        Span::raw(" Status  "),
        Span::styled("[Enter]", key_style),
        Span::raw(" Create  "),
    ];
    if app.store.state().success() {
        keys.push(Span::styled("[F2]", key_style));
        keys.push(Span::raw(" New task  "));
    }
    keys.push(Span::styled("[Esc]", key_style));
    keys.push(Span::raw(" Quit"));

    let line2 = Line::from(vec![
        Span::raw(format!("Status: {}", app.status_message)),
        Span::raw(format!("  |  \u{a9} {} Task Intake", Local::now().year())),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let text = Text::from(vec![Line::from(keys), line2]);
    let widget = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}
