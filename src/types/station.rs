//! The weather station entity as exposed to callers, plus the `rstar`
//! glue that lets stations be indexed by location.

use crate::types::geo_point::GeoPoint;
use chrono::{DateTime, Local};
use rstar::{PointDistance, RTreeObject, AABB};
use serde::{Deserialize, Serialize};

/// A single DMI measuring station and its metadata.
///
/// The API may list the same `station_id` several times, one entry per
/// validity period (`valid_from` .. `valid_to`). Each entry is kept as its own
/// `Station`; `id` is the feature id and is unique per entry.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// Feature id of this station entry.
    pub id: String,
    /// Station identifier used to filter observations (e.g. "06030").
    pub station_id: String,
    pub name: String,
    /// Country code (e.g. "DNK", "GRL").
    pub country: String,
    pub owner: Option<String>,
    pub region_id: Option<String>,
    /// Station position, taken from the feature geometry.
    pub location: GeoPoint,
    /// Barometer height above sea level in meters, if the station has one.
    pub barometer_height: Option<f64>,
    /// Station height above sea level in meters, if known.
    pub station_height: Option<f64>,
    pub created: DateTime<Local>,
    pub operation_from: DateTime<Local>,
    /// `None` while the station is still in operation.
    pub operation_to: Option<DateTime<Local>>,
    pub valid_from: DateTime<Local>,
    /// `None` for the currently valid entry.
    pub valid_to: Option<DateTime<Local>>,
    /// Operational status, e.g. "Active" or "Inactive".
    pub status: String,
    /// Station type, e.g. "Synop" or "Pluvio".
    #[serde(rename = "type")]
    pub station_type: String,
    /// Parameters this station reports.
    pub parameter_id: Vec<String>,
    pub wmo_country_code: Option<String>,
    pub wmo_station_id: Option<String>,
}

impl Station {
    /// Whether this station lists `parameter_id` among its reported parameters.
    pub fn reports(&self, parameter_id: &str) -> bool {
        self.parameter_id.iter().any(|p| p == parameter_id)
    }
}

impl RTreeObject for Station {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.location.latitude, self.location.longitude])
    }
}

impl PointDistance for Station {
    // Squared Euclidean distance on raw degrees; only used to order candidates.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.location.latitude - point[0];
        let dy = self.location.longitude - point[1];
        dx * dx + dy * dy
    }
}
