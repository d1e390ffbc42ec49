//! Geographic coordinate type and great-circle distance.
//!
//! Routing providers hand geometry over as `[longitude, latitude]` pairs;
//! `GeoPoint` stores the two fields by name so the axis order never leaks
//! past [`GeoPoint::from_lng_lat`].

/// Mean Earth radius used by the haversine formula, metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate.
///
/// Serialized as `{"lat": .., "lng": ..}`, the shape log-sheet consumers and
/// map front ends expect.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    #[cfg_attr(feature = "serde", serde(rename = "lng"))]
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build from a provider vertex in `[lng, lat]` order.
    #[inline]
    pub fn from_lng_lat(vertex: [f64; 2]) -> Self {
        Self { lat: vertex[1], lon: vertex[0] }
    }

    /// The vertex in `[lng, lat]` order.
    #[inline]
    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// `true` when both axes differ by less than `tol_deg` degrees.
    ///
    /// Used to detect legs whose endpoints geocoded to the same place.
    #[inline]
    pub fn same_place(self, other: GeoPoint, tol_deg: f64) -> bool {
        (self.lat - other.lat).abs() < tol_deg && (self.lon - other.lon).abs() < tol_deg
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
