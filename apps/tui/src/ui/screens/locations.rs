use crate::app::App;
use crate::ui::widgets::tables::region_table;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

pub fn render_locations(app: &App, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let session = &app.session;
    f.render_widget(region_table("Top Pickup Locations", &session.top_pickups, 0), top[0]);
    f.render_widget(region_table("Top Drop-off Locations", &session.top_dropoffs, 0), top[1]);
    f.render_widget(
        region_table("Average Fare by Borough", &session.borough_fares, 0),
        rows[1],
    );
}
