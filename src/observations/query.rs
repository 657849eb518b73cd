use crate::request::{ApiRequest, Collection};
use crate::types::period::Period;
use bon::Builder;
use chrono::{DateTime, Local};

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";
const OPEN_BOUND: &str = "..";

/// Filters for an observation request. Every filter is optional and an unset
/// filter is left out of the request entirely.
///
/// `period` and explicit `from`/`to` bounds may both be set; they are passed
/// through as-is and the API decides how they combine.
///
/// # Examples
///
/// ```
/// use metobs::{ObservationQuery, Period};
///
/// let query = ObservationQuery::builder()
///     .station_id("06030")
///     .parameter_id("temp_dry")
///     .period(Period::LatestHour)
///     .build();
/// assert_eq!(query.period, Some(Period::LatestHour));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder)]
pub struct ObservationQuery {
    /// Maximum number of observations returned.
    pub limit: Option<u32>,
    /// Number of matching observations to skip.
    pub offset: Option<u32>,
    #[builder(into)]
    pub station_id: Option<String>,
    /// Inclusive lower time bound.
    #[builder(into)]
    pub from: Option<DateTime<Local>>,
    /// Inclusive upper time bound.
    #[builder(into)]
    pub to: Option<DateTime<Local>>,
    pub period: Option<Period>,
    #[builder(into)]
    pub parameter_id: Option<String>,
    /// Station status, e.g. "Active".
    #[builder(into)]
    pub status: Option<String>,
    /// Station type, e.g. "Synop".
    #[builder(into)]
    pub station_type: Option<String>,
}

impl ObservationQuery {
    /// The `datetime` filter value: `from/to`, with `..` for a missing side.
    /// `None` when neither bound is set.
    pub fn datetime_interval(&self) -> Option<String> {
        if self.from.is_none() && self.to.is_none() {
            return None;
        }
        let render = |bound: Option<DateTime<Local>>| {
            bound
                .map(|dt| dt.format(DATETIME_FORMAT).to_string())
                .unwrap_or_else(|| OPEN_BOUND.to_string())
        };
        Some(format!("{}/{}", render(self.from), render(self.to)))
    }

    pub fn to_request(&self) -> ApiRequest {
        ApiRequest::new(Collection::Observation)
            .maybe_param("limit", self.limit)
            .maybe_param("offset", self.offset)
            .maybe_param("stationId", self.station_id.as_deref())
            .maybe_param("datetime", self.datetime_interval())
            .maybe_param("period", self.period)
            .maybe_param("parameterId", self.parameter_id.as_deref())
            .maybe_param("status", self.status.as_deref())
            .maybe_param("type", self.station_type.as_deref())
    }
}
