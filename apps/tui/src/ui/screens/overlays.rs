use crate::app::App;
use crate::ui::widgets::charts::render_chart;
use crate::ui::widgets::popup::{centered_rect, popup_frame, render_message_popup};
use crate::ui::widgets::tables::region_table;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use ratatui::Frame;
use taxi_dashboard_core::toggle::Section;

/// Overlays in stacking order: menu, results, notice, help.
pub fn render_overlays(app: &App, f: &mut Frame<'_>) {
    if app.session.menu.is_open() {
        render_menu(app, f);
    }
    if app.session.results.is_open() {
        render_results(app, f);
    }
    if let Some(notice) = &app.session.notice {
        render_message_popup(f, "Notice", notice, Color::Yellow);
    }
    if app.show_help {
        render_help(f);
    }
}

fn render_menu(app: &App, f: &mut Frame<'_>) {
    let area = centered_rect(40, 40, f.area());
    let inner = popup_frame(f, area, "Menu", Color::Cyan);

    let items: Vec<ListItem<'_>> = Section::ALL
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let style = if index == app.menu_index {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else if *section == app.session.section {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(format!(" {} {}", index + 1, section.label()), style))
        })
        .collect();

    f.render_widget(List::new(items), inner);
}

fn render_results(app: &App, f: &mut Frame<'_>) {
    let area = centered_rect(85, 85, f.area());
    let results = &app.session.results;
    let inner = popup_frame(
        f,
        area,
        &format!("Search Results ({})", results.trips.len()),
        Color::Green,
    );

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45), Constraint::Length(1)])
        .split(inner);

    f.render_widget(region_table("Trips", &results.table, app.results_scroll), split[0]);
    render_chart(
        f,
        split[1],
        "Fare vs Distance",
        app.session.results_chart.as_ref(),
        "No trips to plot",
    );
    f.render_widget(
        Paragraph::new("↑/↓: scroll  Esc: close").style(Style::default().fg(Color::DarkGray)),
        split[2],
    );
}

fn render_help(f: &mut Frame<'_>) {
    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let key = |keys: &'static str, action: &'static str| {
        TextLine::from(vec![
            Span::styled(format!("{keys:<14}"), Style::default().fg(Color::Yellow)),
            Span::raw(action),
        ])
    };

    let lines = vec![
        key("1-5", "Jump to section"),
        key("Tab/Shift-Tab", "Next/previous section"),
        key("m", "Toggle menu"),
        key("r", "Reload every panel"),
        key("←/→", "Trends: change date"),
        key("↑/↓", "Trends: change metric"),
        key("Enter", "Search: open method list or submit"),
        key("?/F1", "Toggle this help"),
        key("q", "Quit"),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(paragraph, area);
}

/// Splash drawn over an empty screen until the intro fades out.
pub fn render_intro(app: &App, f: &mut Frame<'_>) {
    let opacity = app.session.intro.opacity(app.started.elapsed());
    let color = if opacity > 0.5 { Color::Cyan } else { Color::DarkGray };

    let area = centered_rect(50, 30, f.area());
    let lines = vec![
        TextLine::from(""),
        TextLine::from(Span::styled(
            "NYC Taxi Trip Analytics",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color))),
        area,
    );
}
