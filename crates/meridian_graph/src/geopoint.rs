use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }

    /// Great-circle distance in kilometers.
    pub fn haversine_distance(&self, other: &GeoPoint) -> f64 {
        haversine_distance(self.lat, self.lng, other.lat, other.lng)
    }

    /// Position on the unit sphere. Chord length between two of these grows
    /// monotonically with the great-circle distance, which lets an R-tree
    /// answer nearest queries with plain euclidean metrics.
    pub(crate) fn to_unit_vector(self) -> [f64; 3] {
        let lat = self.lat.to_radians();
        let lng = self.lng.to_radians();
        [lat.cos() * lng.cos(), lat.cos() * lng.sin(), lat.sin()]
    }
}

impl From<GeoPoint> for geo_types::Point {
    fn from(value: GeoPoint) -> Self {
        geo_types::Point::new(value.lng, value.lat)
    }
}

impl From<geo_types::Point> for GeoPoint {
    fn from(value: geo_types::Point) -> Self {
        GeoPoint {
            lat: value.y(),
            lng: value.x(),
        }
    }
}

/// Haversine distance in kilometers between two coordinates given in degrees.
pub fn haversine_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let lng1_rad = lng1.to_radians();
    let lng2_rad = lng2.to_radians();

    let u = ((lat2_rad - lat1_rad).abs() / 2.0).sin();
    let v = ((lng2_rad - lng1_rad).abs() / 2.0).sin();

    2.0 * EARTH_RADIUS_KM * (u * u + lat1_rad.cos() * lat2_rad.cos() * v * v).sqrt().asin()
}
