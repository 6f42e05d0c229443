//! Zone-name to boundary lookup built from the taxi-zone GeoJSON document.

use std::collections::HashMap;

use geojson::GeoJson;

/// Property holding the zone name on each feature.
pub const ZONE_PROPERTY: &str = "zone";

#[derive(Debug, thiserror::Error)]
pub enum ZoneError {
    #[error("invalid GeoJSON: {0}")]
    Json(#[from] geojson::Error),

    #[error("expected a FeatureCollection")]
    NotFeatureCollection,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Vertices as `[lng, lat]`, GeoJSON order.
pub type LinearRing = Vec<[f64; 2]>;

#[derive(Debug, Clone, PartialEq)]
pub enum ZoneGeometry {
    Polygon(Vec<LinearRing>),
    MultiPolygon(Vec<Vec<LinearRing>>),
}

impl ZoneGeometry {
    fn from_value(value: &geojson::Value) -> Option<Self> {
        match value {
            geojson::Value::Polygon(rings) => Some(Self::Polygon(convert_rings(rings))),
            geojson::Value::MultiPolygon(polygons) => Some(Self::MultiPolygon(
                polygons.iter().map(|rings| convert_rings(rings)).collect(),
            )),
            _ => None,
        }
    }

    /// First vertex of the first ring (of the first polygon).
    pub fn representative_point(&self) -> Option<LatLng> {
        let first_ring = match self {
            Self::Polygon(rings) => rings.first(),
            Self::MultiPolygon(polygons) => polygons.first().and_then(|rings| rings.first()),
        }?;
        let [lng, lat] = *first_ring.first()?;
        Some(LatLng { lat, lng })
    }
}

fn convert_rings(rings: &[Vec<Vec<f64>>]) -> Vec<LinearRing> {
    rings
        .iter()
        .map(|ring| {
            ring.iter()
                .filter_map(|position| match position.as_slice() {
                    [lng, lat, ..] => Some([*lng, *lat]),
                    _ => None,
                })
                .collect()
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneFeature {
    pub zone: String,
    pub geometry: ZoneGeometry,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneLookup {
    zones: HashMap<String, ZoneFeature>,
}

impl ZoneLookup {
    pub fn from_geojson_str(document: &str) -> Result<Self, ZoneError> {
        let GeoJson::FeatureCollection(collection) = document.parse::<GeoJson>()? else {
            return Err(ZoneError::NotFeatureCollection);
        };

        let mut lookup = Self::default();
        let mut skipped = 0_usize;
        for feature in &collection.features {
            let zone = feature
                .property(ZONE_PROPERTY)
                .and_then(serde_json::Value::as_str);
            let geometry = feature
                .geometry
                .as_ref()
                .and_then(|geometry| ZoneGeometry::from_value(&geometry.value));

            match (zone, geometry) {
                (Some(zone), Some(geometry)) => lookup.insert(ZoneFeature {
                    zone: zone.to_string(),
                    geometry,
                }),
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            log::warn!("Skipped {skipped} zone features without a name or polygon geometry");
        }
        log::debug!("Zone lookup ready with {} zones", lookup.len());

        Ok(lookup)
    }

    /// Later features with the same name replace earlier ones.
    pub fn insert(&mut self, feature: ZoneFeature) {
        self.zones.insert(feature.zone.clone(), feature);
    }

    pub fn get(&self, zone: &str) -> Option<&ZoneFeature> {
        self.zones.get(zone)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn polygon_feature(zone: &str, lng: f64, lat: f64) -> String {
        format!(
            r#"{{"type": "Feature", "properties": {{"zone": "{zone}"}},
                "geometry": {{"type": "Polygon",
                  "coordinates": [[[{lng}, {lat}], [{lng}, 40.9], [-73.9, 40.9], [{lng}, {lat}]]]}}}}"#
        )
    }

    pub(crate) fn collection(features: &[String]) -> String {
        format!(
            r#"{{"type": "FeatureCollection", "features": [{}]}}"#,
            features.join(",")
        )
    }

    #[test]
    fn builds_lookup_keyed_by_zone_name() -> Result<(), ZoneError> {
        let document = collection(&[
            polygon_feature("Midtown Center", -73.98, 40.75),
            polygon_feature("JFK Airport", -73.78, 40.64),
        ]);
        let lookup = ZoneLookup::from_geojson_str(&document)?;

        assert_eq!(lookup.len(), 2);
        let point = lookup
            .get("JFK Airport")
            .and_then(|feature| feature.geometry.representative_point());
        assert_eq!(
            point,
            Some(LatLng {
                lat: 40.64,
                lng: -73.78
            })
        );
        Ok(())
    }

    #[test]
    fn duplicate_names_keep_last_feature() -> Result<(), ZoneError> {
        let document = collection(&[
            polygon_feature("Astoria", -73.92, 40.76),
            polygon_feature("Astoria", -73.91, 40.77),
        ]);
        let lookup = ZoneLookup::from_geojson_str(&document)?;

        assert_eq!(lookup.len(), 1);
        let point = lookup
            .get("Astoria")
            .and_then(|feature| feature.geometry.representative_point());
        assert_eq!(
            point,
            Some(LatLng {
                lat: 40.77,
                lng: -73.91
            })
        );
        Ok(())
    }

    #[test]
    fn multipolygon_uses_first_vertex_of_first_polygon() -> Result<(), ZoneError> {
        let document = collection(&[r#"{"type": "Feature", "properties": {"zone": "Rockaway"},
            "geometry": {"type": "MultiPolygon", "coordinates": [
                [[[-73.83, 40.58], [-73.82, 40.59], [-73.81, 40.58], [-73.83, 40.58]]],
                [[[-73.70, 40.60], [-73.69, 40.61], [-73.68, 40.60], [-73.70, 40.60]]]
            ]}}"#
            .to_string()]);
        let lookup = ZoneLookup::from_geojson_str(&document)?;

        let point = lookup
            .get("Rockaway")
            .and_then(|feature| feature.geometry.representative_point());
        assert_eq!(
            point,
            Some(LatLng {
                lat: 40.58,
                lng: -73.83
            })
        );
        Ok(())
    }

    #[test]
    fn features_without_name_or_polygon_are_skipped() -> Result<(), ZoneError> {
        let document = collection(&[
            r#"{"type": "Feature", "properties": {"borough": "Queens"},
                "geometry": {"type": "Point", "coordinates": [-73.8, 40.7]}}"#
                .to_string(),
            r#"{"type": "Feature", "properties": {"zone": "Pier"},
                "geometry": {"type": "Point", "coordinates": [-73.8, 40.7]}}"#
                .to_string(),
            polygon_feature("Kept", -74.0, 40.7),
        ]);
        let lookup = ZoneLookup::from_geojson_str(&document)?;

        assert_eq!(lookup.len(), 1);
        assert!(lookup.get("Pier").is_none());
        Ok(())
    }

    #[test]
    fn bare_geometry_is_rejected() {
        let result =
            ZoneLookup::from_geojson_str(r#"{"type": "Point", "coordinates": [-73.8, 40.7]}"#);
        assert!(matches!(result, Err(ZoneError::NotFeatureCollection)));
    }
}
