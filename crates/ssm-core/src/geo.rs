//! Geographic coordinate type and great-circle distance.
//!
//! Coordinates are WGS-84 degrees in `f64`. Travel times are derived from
//! kilometre distances, so the Haversine helper returns kilometres.

/// A geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Mean Earth radius 6371 km. Accurate to ~0.5 % against the true
    /// ellipsoidal distance, which is well inside the error of treating a
    /// road segment as a great-circle arc in the first place.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        const R: f64 = 6371.0;

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.7}, {:.7})", self.lat, self.lon)
    }
}
