use crate::app::App;
use crate::ui::widgets::charts::render_chart;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;
use taxi_dashboard_core::models::TimeMetric;

pub fn render_trends(app: &App, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let session = &app.session;
    let date = session
        .dates
        .selected()
        .map_or("no date", |option| option.label.as_str());
    render_chart(
        f,
        rows[0],
        &format!("Trips by Hour ({date})"),
        session.hourly_chart.as_ref(),
        "No trip data for this date",
    );

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(20)])
        .split(rows[1]);

    render_metric_list(session.metric, f, bottom[0]);
    render_chart(
        f,
        bottom[1],
        &format!("{} over Time", session.metric.label()),
        session.metric_chart.as_ref(),
        "Loading...",
    );
}

fn render_metric_list(current: TimeMetric, f: &mut Frame<'_>, area: Rect) {
    let items: Vec<ListItem<'_>> = TimeMetric::ALL
        .iter()
        .map(|metric| {
            let selected = *metric == current;
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if selected { "▶ " } else { "  " };
            ListItem::new(TextLine::from(Span::styled(
                format!("{marker}{}", metric.label()),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title("Metric")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(list, area);
}
