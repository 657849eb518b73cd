use crate::request::Collection;
use thiserror::Error;

/// The response body did not match the expected feature collection.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to parse {collection} response")]
    Json {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },

    #[error("Feature '{feature}' has {found} coordinate(s), expected [longitude, latitude]")]
    MissingCoordinates { feature: String, found: usize },

    #[error("Station feature for station '{station_id}' has no id")]
    MissingStationId { station_id: String },
}
