use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, ThrobberState};

/// Spinner shown while any request is still out.
pub fn render_loading(f: &mut Frame<'_>, area: Rect, state: &ThrobberState, pending: usize) {
    let throbber = Throbber::default()
        .label(format!("Loading {pending}..."))
        .style(Style::default().fg(Color::Gray))
        .throbber_style(Style::default().fg(Color::Cyan));

    let mut state = state.clone();
    f.render_stateful_widget(throbber, area, &mut state);
}
