//! Wire shapes of the GeoJSON feature collections returned by the API.
//! Field names follow the API exactly.

use crate::decode::error::DecodeError;
use crate::types::geo_point::GeoPoint;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCollection<P> {
    pub features: Vec<Feature<P>>,
    pub number_returned: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct Feature<P> {
    /// Always present on station features; observation features may omit it.
    #[serde(default)]
    pub id: Option<String>,
    pub geometry: Geometry,
    pub properties: P,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    /// `[longitude, latitude]`
    pub coordinates: Vec<f64>,
}

impl Geometry {
    pub fn point(&self, feature: Option<&str>) -> Result<GeoPoint, DecodeError> {
        match self.coordinates.as_slice() {
            [longitude, latitude, ..] => Ok(GeoPoint::from_lon_lat(*longitude, *latitude)),
            other => Err(DecodeError::MissingCoordinates {
                feature: feature.unwrap_or("<unnamed>").to_string(),
                found: other.len(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationProperties {
    pub barometer_height: Option<f64>,
    pub country: String,
    pub created: DateTime<FixedOffset>,
    pub name: String,
    pub operation_from: DateTime<FixedOffset>,
    pub operation_to: Option<DateTime<FixedOffset>>,
    pub owner: Option<String>,
    #[serde(default)]
    pub parameter_id: Vec<String>,
    pub region_id: Option<String>,
    pub station_height: Option<f64>,
    pub station_id: String,
    pub status: String,
    #[serde(rename = "type")]
    pub station_type: String,
    pub valid_from: DateTime<FixedOffset>,
    pub valid_to: Option<DateTime<FixedOffset>>,
    pub wmo_country_code: Option<String>,
    pub wmo_station_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationProperties {
    pub station_id: String,
    pub parameter_id: String,
    pub observed: DateTime<FixedOffset>,
    pub created: DateTime<FixedOffset>,
    pub value: f64,
}

pub type StationFeature = Feature<StationProperties>;
pub type ObservationFeature = Feature<ObservationProperties>;
