use crate::app::App;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use taxi_dashboard_core::view::SummaryCard;

pub fn render_dashboard(app: &App, f: &mut Frame<'_>, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    render_cards(app, f, layout[0]);
    render_insights(app, f, layout[1]);
}

fn render_cards(app: &App, f: &mut Frame<'_>, area: Rect) {
    let cards = app.session.cards.cards();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, u32::try_from(cards.len()).unwrap_or(1).max(1)); cards.len()])
        .split(area);

    for (card, column) in cards.iter().zip(columns.iter()) {
        f.render_widget(card_widget(app, card), *column);
    }
}

fn card_widget<'a>(app: &'a App, card: &'a SummaryCard) -> Paragraph<'a> {
    let value_style = if card.is_animating() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    Paragraph::new(vec![
        TextLine::from(""),
        TextLine::from(Span::styled(app.session.cards.text(card.kind), value_style)),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(card.kind.label())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    )
}

fn render_insights(app: &App, f: &mut Frame<'_>, area: Rect) {
    let insights = &app.session.insights;
    let row = |label: &'static str, value: &str| {
        TextLine::from(vec![
            Span::styled(format!("{label:<20}"), Style::default().fg(Color::Gray)),
            Span::styled(
                value.to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    };

    let lines = vec![
        TextLine::from(""),
        row("Peak Hour", &insights.peak_hour),
        row("Busiest Day", &insights.busiest_day),
        row("Avg. Daily Trips", &insights.avg_daily_trips),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title("Insights")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(paragraph, area);
}
