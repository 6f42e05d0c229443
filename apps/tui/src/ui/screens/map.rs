use crate::app::App;
use crate::ui::widgets::map::render_marker_map;
use ratatui::layout::Rect;
use ratatui::Frame;

pub fn render_map(app: &App, f: &mut Frame<'_>, area: Rect) {
    let map = &app.session.map;
    let title = if map.layer.is_empty() {
        "Top Pickup Zones".to_string()
    } else {
        format!("Top Pickup Zones ({} placed)", map.layer.len())
    };
    render_marker_map(f, area, map, &title);
}
