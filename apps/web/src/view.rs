use crate::state::{Focus, WebState};
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Cell, Clear, Paragraph, Row, Sparkline, Table,
        Tabs, Wrap,
    },
    Frame,
};
use taxi_dashboard_core::charts::{ChartSpec, Series};
use taxi_dashboard_core::search::{SearchField, SearchMethod};
use taxi_dashboard_core::session::PAYMENT_PROMPT;
use taxi_dashboard_core::toggle::Section;
use taxi_dashboard_core::view::{TableRegion, TableRow};

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

pub fn render(state: &WebState, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(10), Constraint::Length(1)])
        .split(f.area());

    render_tabs(state, f, layout[0]);

    let body = layout[1];
    match state.session.section {
        Section::Dashboard => render_dashboard(state, f, body),
        Section::TopLocations => {
            let columns = halves(Direction::Horizontal, body);
            f.render_widget(region_table("Top Pickup Locations", &state.session.top_pickups), columns[0]);
            f.render_widget(region_table("Top Drop-off Locations", &state.session.top_dropoffs), columns[1]);
        }
        Section::Map => render_markers(state, f, body),
        Section::Trends => render_trends(state, f, body),
        Section::Search => render_search(state, f, body),
    }

    let hint = Paragraph::new("1-5/Tab: section  ←/→ ↑/↓: trends  Enter: search")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, layout[2]);

    if state.session.results.is_open() {
        render_results(state, f);
    }
    if let Some(notice) = &state.session.notice {
        render_notice(notice, f);
    }
}

fn halves(direction: Direction, area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
}

fn render_tabs(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    let titles = Section::ALL
        .iter()
        .map(|section| TextLine::from(section.label()))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(state.session.section.index())
        .block(
            Block::default()
                .title("NYC Taxi Trip Analytics")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));
    f.render_widget(tabs, area);
}

fn render_dashboard(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(5), Constraint::Min(4)])
        .split(area);

    let cards = state.session.cards.cards();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Fill(1); cards.len()])
        .split(rows[0]);
    for (card, column) in cards.iter().zip(columns.iter()) {
        let value = Paragraph::new(Span::styled(
            state.session.cards.text(card.kind),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(panel(card.kind.label()));
        f.render_widget(value, *column);
    }

    let insights = &state.session.insights;
    let lines = vec![
        TextLine::from(format!("Peak Hour: {}", insights.peak_hour)),
        TextLine::from(format!("Busiest Day: {}", insights.busiest_day)),
        TextLine::from(format!("Avg. Daily Trips: {}", insights.avg_daily_trips)),
    ];
    f.render_widget(Paragraph::new(Text::from(lines)).block(panel("Insights")), rows[1]);

    f.render_widget(
        region_table("Average Fare by Borough", &state.session.borough_fares),
        rows[2],
    );
}

fn region_table<'a>(title: &'a str, region: &'a TableRegion) -> Table<'a> {
    let header = Row::new(region.headers().iter().map(|header| Cell::from(*header))).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row<'_>> = if region.is_loaded() {
        region
            .rows()
            .iter()
            .map(|row| match row {
                TableRow::Cells(cells) => Row::new(cells.iter().map(|cell| Cell::from(cell.as_str()))),
                TableRow::Placeholder { text, .. } => Row::new([Cell::from(text.as_str())]),
            })
            .collect()
    } else {
        vec![Row::new([Cell::from("Loading...")])]
    };

    Table::new(rows, vec![Constraint::Fill(1); region.colspan().max(1)])
        .header(header)
        .block(panel(title))
}

fn render_markers(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    let markers = state.session.map.layer.markers();
    let rows = markers.iter().map(|marker| {
        Row::new(vec![
            Cell::from(marker.zone.as_str()),
            Cell::from(format!("{:.4}, {:.4}", marker.position.lat, marker.position.lng)),
            Cell::from(marker.trip_count.to_string()),
        ])
    });
    let table = Table::new(
        rows,
        [Constraint::Fill(2), Constraint::Fill(2), Constraint::Fill(1)],
    )
    .header(Row::new(["Zone", "Position", "Trips"]).style(Style::default().fg(Color::Yellow)))
    .block(panel("Top Pickup Zones"));
    f.render_widget(table, area);
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn render_trends(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    let rows = halves(Direction::Vertical, area);
    let session = &state.session;

    let date = session
        .dates
        .selected()
        .map_or("no date", |option| option.label.as_str());
    let title = format!("Trips by Hour ({date})");
    match session.hourly_chart.as_ref().map(|spec| &spec.series) {
        Some(Series::Categorical { labels, values }) if !values.is_empty() => {
            let bars: Vec<Bar<'_>> = labels
                .iter()
                .zip(values)
                .map(|(label, value)| {
                    Bar::default()
                        .value(value.max(0.0).round() as u64)
                        .label(TextLine::from(label.as_str()))
                })
                .collect();
            let chart = BarChart::default()
                .block(panel(&title))
                .data(BarGroup::default().bars(&bars))
                .bar_gap(1)
                .bar_width(3);
            f.render_widget(chart, rows[0]);
        }
        _ => f.render_widget(
            Paragraph::new("No trip data for this date").block(panel(&title)),
            rows[0],
        ),
    }

    let metric_title = format!("{} over Time (↑/↓)", session.metric.label());
    let data = session
        .metric_chart
        .as_ref()
        .map(ChartSpec::values)
        .unwrap_or_default()
        .into_iter()
        .map(|value| value.max(0.0).round() as u64)
        .collect::<Vec<_>>();
    let sparkline = Sparkline::default()
        .block(panel(&metric_title))
        .data(&data)
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(sparkline, rows[1]);
}

fn render_search(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    let search = &state.session.search;
    let cursor = |focus: Focus| if state.focus == focus { "▶ " } else { "  " };

    let mut lines = vec![TextLine::from(format!(
        "{}Method: {}",
        cursor(Focus::Method),
        search.method().map_or("(choose with ←/→)", SearchMethod::label),
    ))];
    for field in search.visible_fields() {
        let value = if *field == SearchField::PaymentType {
            state
                .session
                .payment_types
                .selected()
                .map_or(PAYMENT_PROMPT, |option| option.label.as_str())
                .to_string()
        } else {
            search.field(*field).to_string()
        };
        lines.push(TextLine::from(format!(
            "{}{}: {value}",
            cursor(Focus::Field(*field)),
            field.label()
        )));
    }
    lines.push(TextLine::from(Span::styled(
        format!("{}[ Search ]", cursor(Focus::Submit)),
        Style::default().fg(Color::Green),
    )));

    f.render_widget(Paragraph::new(Text::from(lines)).block(panel("Search Trips")), area);
}

fn render_results(state: &WebState, f: &mut Frame<'_>) {
    let area = inset(f.area(), 4, 3);
    let results = &state.session.results;
    f.render_widget(Clear, area);
    f.render_widget(
        region_table("Search Results (Esc to close)", &results.table),
        area,
    );
}

fn render_notice(notice: &str, f: &mut Frame<'_>) {
    let area = inset(f.area(), f.area().width / 4, f.area().height / 3);
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(vec![
            TextLine::from(notice.to_string()),
            TextLine::from(""),
            TextLine::styled("Press Enter to continue", Style::default().fg(Color::Gray)),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Notice")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        ),
        area,
    );
}

fn inset(area: Rect, x: u16, y: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(x),
        y: area.y.saturating_add(y),
        width: area.width.saturating_sub(x.saturating_mul(2)),
        height: area.height.saturating_sub(y.saturating_mul(2)),
    }
}
