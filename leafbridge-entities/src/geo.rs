use std::fmt;

const POINT_KIND: &str = "Point";

const LAT_IDX: usize = 0;
const LON_IDX: usize = 1;

/// Position of a marker as a GeoJSON-like point.
///
/// The coordinate pair is stored as `[lat, lon]` (Leaflet order,
/// not GeoJSON order) and is never resized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    kind: &'static str,
    coordinates: [f64; 2],
}

impl Geometry {
    pub const fn point(lat: f64, lon: f64) -> Self {
        Self {
            kind: POINT_KIND,
            coordinates: [lat, lon],
        }
    }

    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    pub const fn coordinates(&self) -> &[f64; 2] {
        &self.coordinates
    }

    pub const fn lat(&self) -> f64 {
        self.coordinates[LAT_IDX]
    }

    pub fn set_lat(&mut self, lat: f64) {
        self.coordinates[LAT_IDX] = lat;
    }

    pub const fn lon(&self) -> f64 {
        self.coordinates[LON_IDX]
    }

    pub fn set_lon(&mut self, lon: f64) {
        self.coordinates[LON_IDX] = lon;
    }

    pub fn is_finite(&self) -> bool {
        self.coordinates.iter().all(|c| c.is_finite())
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat(), self.lon())
    }
}
