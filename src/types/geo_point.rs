use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in decimal degrees.
///
/// GeoJSON geometries list coordinates as `[longitude, latitude]`; use
/// [`GeoPoint::from_lon_lat`] when building a point from that order so the
/// two values land in the right fields.
///
/// # Examples
///
/// ```
/// use metobs::GeoPoint;
///
/// let skagen = GeoPoint::from_lon_lat(10.6036, 57.7364);
/// assert_eq!(skagen.latitude, 57.7364);
/// assert_eq!(skagen.longitude, 10.6036);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees (positive for North, negative for South).
    pub latitude: f64,
    /// Longitude in decimal degrees (positive for East, negative for West).
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Builds a point from GeoJSON `(x, y)` order.
    pub fn from_lon_lat(longitude: f64, latitude: f64) -> Self {
        Self::new(latitude, longitude)
    }
}
