//! The main entry point: a client for the station and observation
//! collections of the DMI meteorological observation API.

use crate::decode::{decode_observations, decode_stations};
use crate::error::MetObsError;
use crate::observations::aggregator::aggregate;
use crate::observations::query::ObservationQuery;
use crate::request::{redact_api_key, ApiRequest, Collection, DEFAULT_BASE_URL};
use crate::stations::locate_station::StationLocator;
use crate::transport::error::TransportError;
use crate::transport::http::HttpTransport;
use crate::transport::Transport;
use crate::types::geo_point::GeoPoint;
use crate::types::period::Period;
use crate::types::station::Station;
use crate::types::station_data::StationObservations;
use bon::bon;
use chrono::{DateTime, Local};
use log::info;

/// Client for the meteorological observation API.
///
/// Every call issues exactly one blocking GET and either returns a complete
/// result or an error; nothing is cached or retried.
///
/// # Examples
///
/// ```no_run
/// # use metobs::{MetObs, MetObsError, Period};
/// # fn main() -> Result<(), MetObsError> {
/// let client = MetObs::new("my-api-key");
///
/// let stations = client.stations()?;
/// println!("{} stations", stations.len());
///
/// let observations = client
///     .observations()
///     .station_id("06030")
///     .period(Period::LatestDay)
///     .call()?;
///
/// for (station_id, station) in &observations {
///     for (parameter, data) in &station.parameters {
///         println!("{station_id} {parameter}: {} values", data.observations.len());
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct MetObs<T: Transport = HttpTransport> {
    api_key: String,
    base_url: String,
    transport: T,
}

impl MetObs<HttpTransport> {
    /// Creates a client for the public API endpoint. The HTTP connection is
    /// set up on the first request.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a client for a different deployment of the same API, e.g. a
    /// proxy or a local mirror.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::with_transport(api_key, base_url, HttpTransport::new())
    }
}

#[bon]
impl<T: Transport> MetObs<T> {
    /// Creates a client that sends its requests through `transport`.
    pub fn with_transport(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        transport: T,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn fetch(&self, request: &ApiRequest) -> Result<String, TransportError> {
        let url = request.url(&self.base_url, &self.api_key)?;
        info!(
            "Requesting {} collection: {}",
            request.collection(),
            redact_api_key(url.as_str())
        );
        self.transport.get(url.as_str())
    }

    /// Fetches every station, in the order the API lists them.
    ///
    /// # Errors
    ///
    /// Returns [`MetObsError::Network`] if the request fails and
    /// [`MetObsError::Decode`] if the body is not a station collection.
    pub fn stations(&self) -> Result<Vec<Station>, MetObsError> {
        let body = self.fetch(&ApiRequest::new(Collection::Station))?;
        Ok(decode_stations(&body)?)
    }

    /// Fetches observations matching the given filters and nests them per
    /// station, parameter and observation time.
    ///
    /// This method uses a builder pattern; every filter is optional and
    /// `.call()` executes the request.
    ///
    /// # Arguments
    ///
    /// * `.limit(u32)` / `.offset(u32)`: paging, controlled by the caller.
    /// * `.station_id(..)`, `.parameter_id(..)`, `.status(..)`, `.station_type(..)`: exact-match filters.
    /// * `.from(..)` / `.to(..)`: time bounds; one side may be left open.
    /// * `.period(Period)`: a predefined relative window.
    ///
    /// When the response holds several values for the same station, parameter
    /// and time, the first one is kept and the rest are logged and dropped.
    ///
    /// # Errors
    ///
    /// Returns [`MetObsError::Network`] if the request fails and
    /// [`MetObsError::Decode`] if the body is not an observation collection.
    #[builder]
    pub fn observations(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
        #[builder(into)] station_id: Option<String>,
        #[builder(into)] from: Option<DateTime<Local>>,
        #[builder(into)] to: Option<DateTime<Local>>,
        period: Option<Period>,
        #[builder(into)] parameter_id: Option<String>,
        #[builder(into)] status: Option<String>,
        #[builder(into)] station_type: Option<String>,
    ) -> Result<StationObservations, MetObsError> {
        self.observations_for(&ObservationQuery {
            limit,
            offset,
            station_id,
            from,
            to,
            period,
            parameter_id,
            status,
            station_type,
        })
    }

    /// Same as [`MetObs::observations`], for a prebuilt [`ObservationQuery`].
    pub fn observations_for(
        &self,
        query: &ObservationQuery,
    ) -> Result<StationObservations, MetObsError> {
        let body = self.fetch(&query.to_request())?;
        let records = decode_observations(&body)?;
        Ok(aggregate(records))
    }

    /// Fetches the station list and returns the stations closest to
    /// `location`, nearest first.
    ///
    /// # Arguments
    ///
    /// * `.location(GeoPoint)`: **Required.** Search center.
    /// * `.max_distance_km(f64)`: search radius. Defaults to `50.0`.
    /// * `.station_limit(usize)`: maximum number of stations. Defaults to `5`.
    /// * `.parameter_id(..)`: only stations that report this parameter.
    #[builder]
    pub fn find_stations(
        &self,
        location: GeoPoint,
        max_distance_km: Option<f64>,
        station_limit: Option<usize>,
        #[builder(into)] parameter_id: Option<String>,
    ) -> Result<Vec<Station>, MetObsError> {
        let max_distance_km = max_distance_km.unwrap_or(50.0);
        let station_limit = station_limit.unwrap_or(5);

        let locator = StationLocator::new(self.stations()?);
        Ok(locator
            .query(
                location.latitude,
                location.longitude,
                station_limit,
                max_distance_km,
                parameter_id.as_deref(),
            )
            .into_iter()
            .map(|(station, _distance)| station)
            .collect())
    }
}
