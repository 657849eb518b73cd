mod decode;
mod error;
mod metobs;
mod observations;
mod request;
mod stations;
mod transport;
mod types;

#[cfg(test)]
mod fixtures;

pub use error::MetObsError;
pub use metobs::*;

pub use decode::error::DecodeError;
pub use decode::{decode_observations, decode_stations};
pub use observations::aggregator::{
    aggregate, aggregate_with_report, Aggregation, DuplicateObservation, ObservationRecord,
};
pub use observations::query::ObservationQuery;
pub use request::{ApiRequest, Collection, DEFAULT_BASE_URL};
pub use stations::locate_station::StationLocator;
pub use transport::error::TransportError;
pub use transport::http::HttpTransport;
pub use transport::Transport;

pub use types::geo_point::GeoPoint;
pub use types::into_local_trait::IntoLocalDateTime;
pub use types::period::Period;
pub use types::station::Station;
pub use types::station_data::{Observation, ParameterData, StationData, StationObservations};
