//! Parsing of response bodies into stations and flat observation records.

pub mod dto;
pub mod error;

use crate::decode::dto::{FeatureCollection, ObservationFeature, ObservationProperties, StationProperties};
use crate::decode::error::DecodeError;
use crate::observations::aggregator::ObservationRecord;
use crate::request::Collection;
use crate::stations::mapper::map_station;
use crate::types::into_local_trait::IntoLocalDateTime;
use crate::types::station::Station;
use log::info;
use serde::de::DeserializeOwned;

fn parse<P: DeserializeOwned>(
    body: &str,
    collection: Collection,
) -> Result<FeatureCollection<P>, DecodeError> {
    let parsed: FeatureCollection<P> = serde_json::from_str(body)
        .map_err(|source| DecodeError::Json { collection, source })?;
    info!(
        "Decoded {} {} feature(s) (numberReturned: {:?})",
        parsed.features.len(),
        collection,
        parsed.number_returned
    );
    Ok(parsed)
}

/// Decodes a station collection body into stations, in response order.
pub fn decode_stations(body: &str) -> Result<Vec<Station>, DecodeError> {
    parse::<StationProperties>(body, Collection::Station)?
        .features
        .into_iter()
        .map(map_station)
        .collect()
}

/// Decodes an observation collection body into flat records, in response
/// order, with timestamps normalized to local time.
pub fn decode_observations(body: &str) -> Result<Vec<ObservationRecord>, DecodeError> {
    parse::<ObservationProperties>(body, Collection::Observation)?
        .features
        .into_iter()
        .map(observation_record)
        .collect()
}

fn observation_record(feature: ObservationFeature) -> Result<ObservationRecord, DecodeError> {
    let location = feature.geometry.point(feature.id.as_deref())?;
    let properties = feature.properties;
    Ok(ObservationRecord {
        station_id: properties.station_id,
        parameter_id: properties.parameter_id,
        observed: properties.observed.into_local(),
        created: properties.created.into_local(),
        value: properties.value,
        location,
    })
}
