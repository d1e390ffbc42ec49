//! Route polylines and distance-along-route sampling.
//!
//! Stop markers on a log sheet only need to land near the right place on the
//! map, so sampling snaps to the vertex that closes the segment containing
//! the target distance instead of interpolating inside it.

use hos_core::GeoPoint;

// ── RouteGeometry ────────────────────────────────────────────────────────────

/// An ordered polyline of route vertices.
///
/// With the `serde` feature it reads and writes the provider wire format: a
/// list of `[lng, lat]` pairs.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>"))]
pub struct RouteGeometry {
    points: Vec<GeoPoint>,
}

impl RouteGeometry {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from provider vertices in `[lng, lat]` order.
    pub fn from_lng_lat(vertices: &[[f64; 2]]) -> Self {
        Self {
            points: vertices.iter().copied().map(GeoPoint::from_lng_lat).collect(),
        }
    }

    #[inline]
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append every vertex of `other`, without deduplicating the joint.
    pub fn extend(&mut self, other: &RouteGeometry) {
        self.points.extend_from_slice(&other.points);
    }

    /// Sum of haversine segment lengths, metres.
    pub fn length_m(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance_m(w[1])).sum()
    }

    /// See [`coordinate_at_distance`].
    #[inline]
    pub fn coordinate_at_distance(&self, target_m: f64) -> Option<GeoPoint> {
        coordinate_at_distance(&self.points, target_m)
    }
}

impl From<Vec<[f64; 2]>> for RouteGeometry {
    fn from(vertices: Vec<[f64; 2]>) -> Self {
        Self::from_lng_lat(&vertices)
    }
}

impl From<RouteGeometry> for Vec<[f64; 2]> {
    fn from(g: RouteGeometry) -> Self {
        g.points.into_iter().map(GeoPoint::to_lng_lat).collect()
    }
}

// ── Sampling ─────────────────────────────────────────────────────────────────

/// The vertex reached after travelling `target_m` metres along `geometry`.
///
/// Walks the segments accumulating great-circle length and returns the
/// *second* vertex of the first segment whose end reaches or passes
/// `target_m`.  A target beyond the end of the line yields the last vertex;
/// an empty line yields `None`.
pub fn coordinate_at_distance(geometry: &[GeoPoint], target_m: f64) -> Option<GeoPoint> {
    let last = *geometry.last()?;

    let mut travelled = 0.0;
    for w in geometry.windows(2) {
        travelled += w[0].distance_m(w[1]);
        if travelled >= target_m {
            return Some(w[1]);
        }
    }
    Some(last)
}
