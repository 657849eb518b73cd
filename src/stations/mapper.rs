use crate::decode::dto::StationFeature;
use crate::decode::error::DecodeError;
use crate::types::into_local_trait::IntoLocalDateTime;
use crate::types::station::Station;

/// Converts one station feature into a [`Station`].
///
/// The geometry's `[longitude, latitude]` pair is swapped into the named
/// fields and all timestamps are normalized to local time.
pub fn map_station(feature: StationFeature) -> Result<Station, DecodeError> {
    let location = feature.geometry.point(feature.id.as_deref())?;
    let p = feature.properties;
    let id = feature.id.ok_or_else(|| DecodeError::MissingStationId {
        station_id: p.station_id.clone(),
    })?;
    Ok(Station {
        id,
        station_id: p.station_id,
        name: p.name,
        country: p.country,
        owner: p.owner,
        region_id: p.region_id,
        location,
        barometer_height: p.barometer_height,
        station_height: p.station_height,
        created: p.created.into_local(),
        operation_from: p.operation_from.into_local(),
        operation_to: p.operation_to.map(IntoLocalDateTime::into_local),
        valid_from: p.valid_from.into_local(),
        valid_to: p.valid_to.map(IntoLocalDateTime::into_local),
        status: p.status,
        station_type: p.station_type,
        parameter_id: p.parameter_id,
        wmo_country_code: p.wmo_country_code,
        wmo_station_id: p.wmo_station_id,
    })
}

#[cfg(test)]
mod tests {
    use crate::decode::decode_stations;
    use crate::decode::error::DecodeError;
    use crate::fixtures::STATIONS;
    use crate::types::geo_point::GeoPoint;
    use crate::types::into_local_trait::IntoLocalDateTime;
    use chrono::DateTime;

    #[test]
    fn test_maps_fields_in_input_order() -> Result<(), DecodeError> {
        let stations = decode_stations(STATIONS)?;
        assert_eq!(stations.len(), 2);

        let first = &stations[0];
        assert_eq!(first.id, "a1b2c3");
        assert_eq!(first.station_id, "06186");
        assert_eq!(first.name, "Landbohøjskolen");
        assert_eq!(first.barometer_height, Some(12.5));
        assert_eq!(first.station_height, Some(9.0));
        assert_eq!(first.operation_to, None);
        assert_eq!(first.parameter_id, ["temp_dry", "humidity"]);
        assert!(first.reports("humidity"));
        assert!(!first.reports("wind_speed"));

        let second = &stations[1];
        assert_eq!(second.station_id, "04250");
        assert_eq!(second.owner, None);
        assert_eq!(second.wmo_station_id, None);
        assert_eq!(
            second.valid_to,
            Some(
                DateTime::parse_from_rfc3339("2019-12-31T23:59:59Z")
                    .unwrap()
                    .into_local()
            )
        );
        Ok(())
    }

    #[test]
    fn test_station_without_id() {
        let body = STATIONS.replace(r#""id": "a1b2c3","#, "");
        match decode_stations(&body) {
            Err(DecodeError::MissingStationId { station_id }) => assert_eq!(station_id, "06186"),
            other => panic!("expected MissingStationId, got {:?}", other),
        }
    }

    #[test]
    fn test_geometry_is_lon_lat() -> Result<(), DecodeError> {
        let stations = decode_stations(STATIONS)?;
        assert_eq!(stations[0].location, GeoPoint::new(55.7156, 12.5269));
        assert_eq!(stations[1].location, GeoPoint::new(64.1914, -51.7490));
        Ok(())
    }
}
