//! Geographic locations and great-circle distance.
//!
//! A [`Location`] is identified by its index in the fixed input sequence
//! handed to the optimizer; it is never mutated after load.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean earth radius used by [`haversine_km`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A named point on the earth's surface, in decimal degrees.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Display name (used by renderers, ignored by the optimizer).
    pub name: String,
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_to(&self, other: &Location) -> f64 {
        haversine_km(self, other)
    }
}

/// Great-circle distance between two locations (haversine formula).
///
/// Symmetric and non-negative. Identical coordinates give exactly `0.0`.
/// The intermediate term is clamped to `[0, 1]` so rounding near antipodal
/// points cannot produce NaN.
///
/// # Examples
///
/// ```
/// use u_antlion::geo::{haversine_km, Location};
///
/// let a = Location::new("a", 0.0, 0.0);
/// let b = Location::new("b", 0.0, 1.0);
/// assert!((haversine_km(&a, &b) - 111.194_926_644_558_7).abs() < 1e-6);
/// assert_eq!(haversine_km(&a, &a), 0.0);
/// ```
pub fn haversine_km(a: &Location, b: &Location) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();
    let s_lat = (d_lat / 2.0).sin();
    let s_lng = (d_lng / 2.0).sin();
    let h = s_lat * s_lat
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * s_lng * s_lng;
    let h = h.clamp(0.0, 1.0);
    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Supplies the ordered, fixed location sequence for a run.
///
/// Read-only to the optimizer: it is asked once, at controller construction.
pub trait LocationSource {
    fn locations(&self) -> Vec<Location>;
}

impl LocationSource for [Location] {
    fn locations(&self) -> Vec<Location> {
        self.to_vec()
    }
}

impl LocationSource for Vec<Location> {
    fn locations(&self) -> Vec<Location> {
        self.clone()
    }
}

/// Ten cities in East Java, Indonesia.
///
/// A small, realistic instance for demos and benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct EastJava;

impl LocationSource for EastJava {
    fn locations(&self) -> Vec<Location> {
        east_java()
    }
}

/// Returns the [`EastJava`] city list.
pub fn east_java() -> Vec<Location> {
    [
        ("Surabaya", -7.2575, 112.7521),
        ("Malang", -7.9839, 112.6214),
        ("Blitar", -8.0954, 112.1611),
        ("Kediri", -7.8483, 112.0160),
        ("Madiun", -7.6296, 111.5233),
        ("Bojonegoro", -7.1500, 111.8810),
        ("Jember", -8.1845, 113.6681),
        ("Banyuwangi", -8.2192, 114.3691),
        ("Mojokerto", -7.4724, 112.4381),
        ("Pasuruan", -7.6451, 112.9076),
    ]
    .into_iter()
    .map(|(name, lat, lng)| Location::new(name, lat, lng))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_degree_longitude_at_equator() {
        let a = Location::new("a", 0.0, 0.0);
        let b = Location::new("b", 0.0, 1.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        assert!((haversine_km(&a, &b) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_identical_points_are_exactly_zero() {
        let p = Location::new("p", -7.2575, 112.7521);
        let d = haversine_km(&p, &p.clone());
        assert_eq!(d, 0.0);
        assert!(!d.is_nan());
    }

    #[test]
    fn test_symmetric() {
        let cities = east_java();
        for a in &cities {
            for b in &cities {
                let ab = haversine_km(a, b);
                let ba = haversine_km(b, a);
                assert!(ab >= 0.0);
                assert!((ab - ba).abs() < 1e-12, "{} vs {}", a.name, b.name);
            }
        }
    }

    #[test]
    fn test_surabaya_malang() {
        let cities = east_java();
        let d = cities[0].distance_to(&cities[1]);
        assert!((d - 82.046_394_849_868_42).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn test_antipodal_is_finite() {
        let a = Location::new("a", 0.0, 0.0);
        let b = Location::new("b", 0.0, 180.0);
        let d = haversine_km(&a, &b);
        assert!(d.is_finite());
        assert!((d - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_sources() {
        assert_eq!(EastJava.locations().len(), 10);
        let v = vec![Location::new("x", 1.0, 2.0)];
        assert_eq!(v.locations(), v);
        assert_eq!(v.as_slice().locations(), v);
    }
}
