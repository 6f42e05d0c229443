//! Map pins for the top pickup zones.
//!
//! Rendering needs two independent loads, the pickups aggregate and the zone
//! lookup. [`MarkerJoin`] holds whichever has arrived and releases them
//! together exactly once per data generation.

use crate::format;
use crate::models::LocationAggregate;
use crate::zones::{LatLng, ZoneLookup};

/// Lower Manhattan, the view before any marker has been placed.
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 40.7128,
    lng: -74.0060,
};
pub const DEFAULT_ZOOM: u8 = 11;
pub const FIT_PADDING: (u16, u16) = (50, 50);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    pub fn around(points: impl IntoIterator<Item = LatLng>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self {
            south_west: first,
            north_east: first,
        };
        for point in points {
            bounds.south_west.lat = bounds.south_west.lat.min(point.lat);
            bounds.south_west.lng = bounds.south_west.lng.min(point.lng);
            bounds.north_east.lat = bounds.north_east.lat.max(point.lat);
            bounds.north_east.lng = bounds.north_east.lng.max(point.lng);
        }
        Some(bounds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapView {
    Centered { center: LatLng, zoom: u8 },
    Fitted { bounds: Bounds, padding: (u16, u16) },
}

impl Default for MapView {
    fn default() -> Self {
        Self::Centered {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub zone: String,
    pub position: LatLng,
    pub trip_count: u64,
}

impl Marker {
    pub fn label(&self) -> String {
        format!("{}\nTrips: {}", self.zone, format::thousands(self.trip_count))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerLayer {
    markers: Vec<Marker>,
}

impl MarkerLayer {
    pub fn clear(&mut self) {
        self.markers.clear();
    }

    pub fn add(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapState {
    pub layer: MarkerLayer,
    pub view: MapView,
    /// Bumped on every redraw of the layer.
    pub(crate) redraws: u64,
}

/// Clears the layer, pins every pickup zone with known geometry and fits the
/// view around the pins. Zones missing from the lookup are skipped. With no
/// pins the view is left alone. Returns the number of markers placed.
pub fn render_top_pickup_markers(
    pickups: &[LocationAggregate],
    zones: &ZoneLookup,
    map: &mut MapState,
) -> usize {
    map.layer.clear();
    map.redraws += 1;

    for pickup in pickups {
        let Some(position) = zones
            .get(&pickup.zone)
            .and_then(|feature| feature.geometry.representative_point())
        else {
            continue;
        };

        map.layer.add(Marker {
            zone: pickup.zone.clone(),
            position,
            trip_count: pickup.trip_count,
        });
    }

    if let Some(bounds) = Bounds::around(map.layer.markers().iter().map(|m| m.position)) {
        map.view = MapView::Fitted {
            bounds,
            padding: FIT_PADDING,
        };
    }

    map.layer.len()
}

/// Join barrier between the pickups load and the zone lookup load.
#[derive(Debug, Clone, Default)]
pub struct MarkerJoin {
    pickups: Option<Vec<LocationAggregate>>,
    zones: Option<ZoneLookup>,
    generation: u64,
    rendered: Option<u64>,
}

impl MarkerJoin {
    pub fn resolve_pickups(&mut self, pickups: Vec<LocationAggregate>) {
        self.pickups = Some(pickups);
        self.generation += 1;
    }

    /// A failed pickups load still resolves its side of the join, keeping
    /// whatever was there before (or nothing).
    pub fn pickups_failed(&mut self) {
        if self.pickups.is_none() {
            self.pickups = Some(Vec::new());
            self.generation += 1;
        }
    }

    pub fn resolve_zones(&mut self, zones: ZoneLookup) {
        self.zones = Some(zones);
        self.generation += 1;
    }

    pub fn zones_failed(&mut self) {
        if self.zones.is_none() {
            self.zones = Some(ZoneLookup::default());
            self.generation += 1;
        }
    }

    /// Renders into `map` when both sides have resolved and the current
    /// generation has not been drawn yet. Returns the marker count when a
    /// render happened.
    pub fn render_if_ready(&mut self, map: &mut MapState) -> Option<usize> {
        if self.rendered == Some(self.generation) {
            return None;
        }
        let (Some(pickups), Some(zones)) = (self.pickups.as_ref(), self.zones.as_ref()) else {
            return None;
        };

        let placed = render_top_pickup_markers(pickups, zones, map);
        self.rendered = Some(self.generation);
        Some(placed)
    }
}
