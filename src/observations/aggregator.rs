//! Folds the flat observation records of a response into the nested
//! station -> parameter -> observation model.
//!
//! The first record seen for a given station, parameter and `observed`
//! timestamp wins. Later records for the same key are dropped and reported,
//! never merged or overwritten.

use crate::types::geo_point::GeoPoint;
use crate::types::station_data::{Observation, ParameterData, StationData, StationObservations};
use chrono::{DateTime, Local};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;

/// One observation as returned by the API, before nesting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    pub station_id: String,
    pub parameter_id: String,
    pub observed: DateTime<Local>,
    pub created: DateTime<Local>,
    pub value: f64,
    /// Location of the parameter's sensor.
    pub location: GeoPoint,
}

/// A record that was dropped because its timestamp was already present.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateObservation {
    pub station_id: String,
    pub parameter_id: String,
    pub observed: DateTime<Local>,
    /// Value of the first record with this timestamp, which is the one kept.
    pub retained_value: f64,
    pub discarded_value: f64,
}

/// Result of [`aggregate_with_report`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Aggregation {
    pub stations: StationObservations,
    /// Dropped records, in input order.
    pub duplicates: Vec<DuplicateObservation>,
}

/// Nests `records` per station, parameter and observation time.
///
/// Stations and parameters iterate alphabetically and observations
/// chronologically, independent of input order. See the module docs for the
/// duplicate policy.
///
/// # Examples
///
/// ```
/// use chrono::{Local, TimeZone};
/// use metobs::{aggregate, GeoPoint, ObservationRecord};
///
/// let t = Local.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
/// let record = |station: &str, value: f64| ObservationRecord {
///     station_id: station.to_string(),
///     parameter_id: "temp_dry".to_string(),
///     observed: t,
///     created: t,
///     value,
///     location: GeoPoint::new(55.7, 12.5),
/// };
///
/// let stations = aggregate(vec![record("B", 1.0), record("A", 2.0), record("B", 3.0)]);
/// let ids: Vec<_> = stations.keys().cloned().collect();
/// assert_eq!(ids, ["A", "B"]);
/// assert_eq!(stations["B"].parameters["temp_dry"].observations[&t].value, 1.0);
/// ```
pub fn aggregate<I>(records: I) -> StationObservations
where
    I: IntoIterator<Item = ObservationRecord>,
{
    aggregate_with_report(records).stations
}

/// Same as [`aggregate`], but also returns the records that were dropped as
/// duplicates.
pub fn aggregate_with_report<I>(records: I) -> Aggregation
where
    I: IntoIterator<Item = ObservationRecord>,
{
    let mut aggregation = Aggregation::default();

    for record in records {
        let station = aggregation
            .stations
            .entry(record.station_id)
            .or_insert_with_key(|id| StationData::new(id.clone()));

        // Location is taken from the first record of a parameter only.
        let parameter = station
            .parameters
            .entry(record.parameter_id)
            .or_insert_with_key(|name| ParameterData::new(name.clone(), record.location));

        match parameter.observations.entry(record.observed) {
            Entry::Vacant(entry) => {
                entry.insert(Observation {
                    created: record.created,
                    observed: record.observed,
                    value: record.value,
                });
            }
            Entry::Occupied(entry) => {
                let existing = entry.get();
                debug!(
                    "Duplicate data for station {}, parameter {}, time {}: keeping {}, dropping {}",
                    station.station_id,
                    parameter.name,
                    existing.observed,
                    existing.value,
                    record.value
                );
                aggregation.duplicates.push(DuplicateObservation {
                    station_id: station.station_id.clone(),
                    parameter_id: parameter.name.clone(),
                    observed: existing.observed,
                    retained_value: existing.value,
                    discarded_value: record.value,
                });
            }
        }
    }

    aggregation
}
