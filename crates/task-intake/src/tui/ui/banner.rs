/*
[INPUT]:  Global error message from TaskState
[OUTPUT]: Dismissable error banner
[POS]:    TUI UI error banner
[UPDATE]: When changing banner wording or dismissal key
*/

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::runtime::{error_style, key_style};

pub(in crate::tui) fn draw_error_banner(frame: &mut ratatui::Frame, area: Rect, message: &str) {
    let line = Line::from(vec![
        Span::styled(message.to_string(), error_style()),
        Span::raw("  "),
        Span::styled("[Esc]", key_style()),
        Span::raw(" Dismiss"),
    ]);
    let widget = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::LightRed))
                .title("Error"),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}
