//! The nested observation model: station -> parameter -> time-ordered
//! observations. All three levels are `BTreeMap`s so iteration is always in
//! ascending key order, whatever order the API returned the records in.

use crate::types::geo_point::GeoPoint;
use chrono::{DateTime, Local, NaiveDateTime};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Observations for every station in a response, keyed by station id.
pub type StationObservations = BTreeMap<String, StationData>;

/// One timestamped measurement of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// When the value was registered by the API.
    pub created: DateTime<Local>,
    /// When the value was measured. Unique within its [`ParameterData`].
    pub observed: DateTime<Local>,
    pub value: f64,
}

/// All observations of one parameter at one station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterData {
    /// The parameter id, e.g. "temp_dry".
    pub name: String,
    pub location: GeoPoint,
    /// Keyed by `observed`, ascending. At most one entry per timestamp.
    pub observations: BTreeMap<DateTime<Local>, Observation>,
}

impl ParameterData {
    pub fn new(name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            name: name.into(),
            location,
            observations: BTreeMap::new(),
        }
    }

    /// Collects the observations into a `DataFrame` with the columns
    /// `observed`, `created` and `value`, in chronological order.
    ///
    /// Timestamps are stored as local wall-clock datetimes.
    ///
    /// # Examples
    ///
    /// ```
    /// use metobs::{GeoPoint, ParameterData};
    ///
    /// let data = ParameterData::new("temp_dry", GeoPoint::new(55.68, 12.57));
    /// let frame = data.to_dataframe().unwrap();
    /// assert_eq!(frame.height(), 0);
    /// assert_eq!(frame.width(), 3);
    /// ```
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let observed: Vec<NaiveDateTime> = self
            .observations
            .keys()
            .map(|t| t.naive_local())
            .collect();
        let created: Vec<NaiveDateTime> = self
            .observations
            .values()
            .map(|o| o.created.naive_local())
            .collect();
        let value: Vec<f64> = self.observations.values().map(|o| o.value).collect();

        df!(
            "observed" => observed,
            "created" => created,
            "value" => value
        )
    }
}

/// All parameters reported by one station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationData {
    pub station_id: String,
    /// Keyed by parameter id, ascending.
    pub parameters: BTreeMap<String, ParameterData>,
}

impl StationData {
    pub fn new(station_id: impl Into<String>) -> Self {
        Self {
            station_id: station_id.into(),
            parameters: BTreeMap::new(),
        }
    }

    /// Total number of observations across all parameters.
    pub fn observation_count(&self) -> usize {
        self.parameters
            .values()
            .map(|p| p.observations.len())
            .sum()
    }

    /// Long-format `DataFrame` of every observation at this station, with the
    /// columns `parameter`, `observed`, `created` and `value`. Rows are ordered
    /// by parameter, then by time.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let rows = self.observation_count();
        let mut parameter: Vec<&str> = Vec::with_capacity(rows);
        let mut observed: Vec<NaiveDateTime> = Vec::with_capacity(rows);
        let mut created: Vec<NaiveDateTime> = Vec::with_capacity(rows);
        let mut value: Vec<f64> = Vec::with_capacity(rows);

        for (name, data) in &self.parameters {
            for observation in data.observations.values() {
                parameter.push(name.as_str());
                observed.push(observation.observed.naive_local());
                created.push(observation.created.naive_local());
                value.push(observation.value);
            }
        }

        df!(
            "parameter" => parameter,
            "observed" => observed,
            "created" => created,
            "value" => value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2023, 1, 1, hour, minute, 0).unwrap()
    }

    fn parameter(name: &str, values: &[(DateTime<Local>, f64)]) -> ParameterData {
        let mut data = ParameterData::new(name, GeoPoint::new(55.68, 12.57));
        for &(observed, value) in values {
            data.observations.insert(
                observed,
                Observation {
                    created: observed,
                    observed,
                    value,
                },
            );
        }
        data
    }

    #[test]
    fn test_parameter_frame_is_chronological() -> PolarsResult<()> {
        let data = parameter("temp_dry", &[(at(0, 10), 5.2), (at(0, 0), 5.0)]);
        let frame = data.to_dataframe()?;

        assert_eq!(frame.shape(), (2, 3));
        assert_eq!(frame.get_column_names(), ["observed", "created", "value"]);

        let values = frame.column("value")?.as_materialized_series().f64()?.clone();
        assert_eq!(values.get(0), Some(5.0));
        assert_eq!(values.get(1), Some(5.2));
        Ok(())
    }

    #[test]
    fn test_station_frame_is_long_format() -> PolarsResult<()> {
        let mut station = StationData::new("06030");
        station.parameters.insert(
            "wind_speed".to_string(),
            parameter("wind_speed", &[(at(0, 0), 3.1)]),
        );
        station.parameters.insert(
            "temp_dry".to_string(),
            parameter("temp_dry", &[(at(0, 0), 5.0), (at(0, 10), 5.2)]),
        );

        assert_eq!(station.observation_count(), 3);

        let frame = station.to_dataframe()?;
        assert_eq!(frame.shape(), (3, 4));

        let names = frame
            .column("parameter")?
            .as_materialized_series()
            .str()?
            .clone();
        assert_eq!(names.get(0), Some("temp_dry"));
        assert_eq!(names.get(1), Some("temp_dry"));
        assert_eq!(names.get(2), Some("wind_speed"));

        let recent = frame
            .lazy()
            .filter(col("value").gt(lit(5.1)))
            .collect()?;
        assert_eq!(recent.height(), 1);
        Ok(())
    }

    #[test]
    fn test_empty_station_frame_keeps_columns() -> PolarsResult<()> {
        let frame = StationData::new("06030").to_dataframe()?;
        assert_eq!(frame.shape(), (0, 4));
        Ok(())
    }
}
