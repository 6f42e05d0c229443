// UI module for the taxi dashboard
// One screen per nav section, overlays drawn on top

pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;
use taxi_dashboard_core::animation::OverlayPhase;
use taxi_dashboard_core::toggle::Section;

/// Terminal width from which the section tabs are shown inline instead of
/// behind the menu.
pub const WIDE_LAYOUT: u16 = 100;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    if app.intro_phase() != OverlayPhase::Hidden {
        screens::overlays::render_intro(app, f);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Section content
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_header(app, f, layout[0]);

    match app.session.section {
        Section::Dashboard => screens::dashboard::render_dashboard(app, f, layout[1]),
        Section::TopLocations => screens::locations::render_locations(app, f, layout[1]),
        Section::Map => screens::map::render_map(app, f, layout[1]),
        Section::Trends => screens::trends::render_trends(app, f, layout[1]),
        Section::Search => screens::search::render_search(app, f, layout[1]),
    }

    render_status(app, f, layout[2]);
    render_shortcuts(app, f, layout[3]);

    screens::overlays::render_overlays(app, f);
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" NYC Taxi Trip Analytics ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(18)])
        .split(inner);

    if area.width >= WIDE_LAYOUT {
        let titles = Section::ALL
            .iter()
            .enumerate()
            .map(|(index, section)| TextLine::from(format!("{} {}", index + 1, section.label())))
            .collect::<Vec<_>>();

        let tabs = Tabs::new(titles)
            .select(app.session.section.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .divider(Span::raw("|"));
        f.render_widget(tabs, split[0]);
    } else {
        let current = Paragraph::new(TextLine::from(vec![
            Span::styled("☰ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                app.session.section.label(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (m: menu)", Style::default().fg(Color::DarkGray)),
        ]));
        f.render_widget(current, split[0]);
    }

    if app.is_loading() {
        widgets::loading::render_loading(f, split[1], &app.throbber, app.actions.in_flight());
    }
}

/// Most recent load failure, if any.
fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let Some(last) = app.session.diagnostics().last() else {
        return;
    };
    let line = TextLine::from(vec![
        Span::styled("! ", Style::default().fg(Color::Red)),
        Span::styled(
            format!("{}: {}", last.source, last.message),
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let section_keys = match app.session.section {
        Section::Trends => "←/→: date  ↑/↓: metric  ",
        Section::Search => "↑/↓: field  Enter: choose/search  Esc: back  ",
        Section::Dashboard | Section::TopLocations | Section::Map => "",
    };
    let hint = format!("{section_keys}Tab/1-5: section  m: menu  r: reload  ?: help  q: quit");
    f.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
        area,
    );
}
