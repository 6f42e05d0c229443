use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);

    horizontal_layout[1]
}

/// Clears `area` and draws a bordered box. Returns the inner area.
pub fn popup_frame(f: &mut Frame<'_>, area: Rect, title: &str, color: Color) -> Rect {
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(block, area);
    inner
}

/// Blocking message box with a dismiss hint, like a browser alert.
pub fn render_message_popup(f: &mut Frame<'_>, title: &str, message: &str, color: Color) {
    let area = centered_rect(50, 25, f.area());
    let inner = popup_frame(f, area, title, color);

    let text = Text::from(vec![
        TextLine::from(message.to_string()),
        TextLine::from(""),
        TextLine::styled("Press Enter to continue", Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), inner);
}
