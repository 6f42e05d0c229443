use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker as Symbol;
use ratatui::text::Line as TextLine;
use ratatui::widgets::canvas::{Canvas, Points, Rectangle};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;
use taxi_dashboard_core::markers::{Bounds, MapState, MapView};
use taxi_dashboard_core::zones::LatLng;

/// Degrees of longitude spanned at zoom 0.
const WORLD_SPAN: f64 = 360.0;
/// Fitted views grow by this many degrees per padding unit.
const DEGREES_PER_PADDING_UNIT: f64 = 0.000_5;

/// Visible `[lng, lat]` window for the current view.
pub fn viewport(view: &MapView) -> ([f64; 2], [f64; 2]) {
    match *view {
        MapView::Centered { center, zoom } => {
            let half = WORLD_SPAN / 2_f64.powi(i32::from(zoom)) / 2.0;
            (
                [center.lng - half, center.lng + half],
                [center.lat - half / 2.0, center.lat + half / 2.0],
            )
        }
        MapView::Fitted { bounds, padding } => padded(bounds, padding),
    }
}

fn padded(bounds: Bounds, (pad_x, pad_y): (u16, u16)) -> ([f64; 2], [f64; 2]) {
    let pad_lng = f64::from(pad_x) * DEGREES_PER_PADDING_UNIT;
    let pad_lat = f64::from(pad_y) * DEGREES_PER_PADDING_UNIT;
    (
        [bounds.south_west.lng - pad_lng, bounds.north_east.lng + pad_lng],
        [bounds.south_west.lat - pad_lat, bounds.north_east.lat + pad_lat],
    )
}

/// Pickup markers on a lat/lng canvas, each labelled with its zone.
pub fn render_marker_map(f: &mut Frame<'_>, area: Rect, map: &MapState, title: &str) {
    let (x_bounds, y_bounds) = viewport(&map.view);
    let coords: Vec<(f64, f64)> = map
        .layer
        .markers()
        .iter()
        .map(|marker| (marker.position.lng, marker.position.lat))
        .collect();

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .marker(Symbol::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            if let MapView::Fitted { bounds, .. } = map.view {
                let LatLng { lat, lng } = bounds.south_west;
                ctx.draw(&Rectangle {
                    x: lng,
                    y: lat,
                    width: bounds.north_east.lng - lng,
                    height: bounds.north_east.lat - lat,
                    color: Color::DarkGray,
                });
            }

            ctx.draw(&Points {
                coords: &coords,
                color: Color::Yellow,
            });
            ctx.layer();

            for marker in map.layer.markers() {
                ctx.print(
                    marker.position.lng,
                    marker.position.lat,
                    TextLine::styled(format!("● {}", marker.zone), Style::default().fg(Color::Yellow)),
                );
            }
        });

    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxi_dashboard_core::markers::{DEFAULT_CENTER, FIT_PADDING};

    #[test]
    fn default_view_is_centred_on_the_city() {
        let (lng, lat) = viewport(&MapView::default());
        assert!(lng[0] < DEFAULT_CENTER.lng && DEFAULT_CENTER.lng < lng[1]);
        assert!(lat[0] < DEFAULT_CENTER.lat && DEFAULT_CENTER.lat < lat[1]);
    }

    #[test]
    fn fitted_view_contains_its_bounds() {
        let bounds = Bounds {
            south_west: LatLng { lat: 40.64, lng: -73.98 },
            north_east: LatLng { lat: 40.75, lng: -73.78 },
        };
        let (lng, lat) = viewport(&MapView::Fitted {
            bounds,
            padding: FIT_PADDING,
        });

        assert!(lng[0] < -73.98 && lng[1] > -73.78);
        assert!(lat[0] < 40.64 && lat[1] > 40.75);
    }
}
