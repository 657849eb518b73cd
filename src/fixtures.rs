//! Canned response bodies and a recording transport shared by the unit tests.

use crate::transport::error::TransportError;
use crate::transport::Transport;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

pub const STATIONS: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "geometry": {"coordinates": [12.5269, 55.7156], "type": "Point"},
            "id": "a1b2c3",
            "type": "Feature",
            "properties": {
                "barometerHeight": 12.5,
                "country": "DNK",
                "created": "2021-02-09T09:48:55Z",
                "name": "Landbohøjskolen",
                "operationFrom": "1960-01-01T00:00:00Z",
                "operationTo": null,
                "owner": "DMI",
                "parameterId": ["temp_dry", "humidity"],
                "regionId": "2",
                "stationHeight": 9.0,
                "stationId": "06186",
                "status": "Active",
                "type": "Synop",
                "updated": null,
                "validFrom": "2020-01-01T00:00:00Z",
                "validTo": null,
                "wmoCountryCode": "6050",
                "wmoStationId": "06186"
            }
        },
        {
            "geometry": {"coordinates": [-51.7490, 64.1914], "type": "Point"},
            "id": "d4e5f6",
            "type": "Feature",
            "properties": {
                "barometerHeight": null,
                "country": "GRL",
                "created": "2021-02-09T09:48:55Z",
                "name": "Nuuk",
                "operationFrom": "1958-01-01T00:00:00Z",
                "operationTo": "2019-12-31T23:59:59Z",
                "owner": null,
                "parameterId": [],
                "regionId": null,
                "stationHeight": null,
                "stationId": "04250",
                "status": "Inactive",
                "type": "Pluvio",
                "validFrom": "1958-01-01T00:00:00Z",
                "validTo": "2019-12-31T23:59:59Z",
                "wmoCountryCode": null,
                "wmoStationId": null
            }
        }
    ],
    "numberReturned": 2
}"#;

/// Two stations interleaved, out of time order, with one duplicate of the
/// 06030 `temp_dry` reading at 00:00+01:00 written in UTC.
pub const OBSERVATIONS: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "geometry": {"coordinates": [12.1, 55.6], "type": "Point"},
            "id": "f1", "type": "Feature",
            "properties": {"stationId": "06180", "parameterId": "wind_speed",
                "observed": "2023-01-01T00:00:00+01:00", "created": "2023-01-01T00:05:00+01:00", "value": 7.5}
        },
        {
            "geometry": {"coordinates": [9.9, 57.1], "type": "Point"},
            "id": "f2", "type": "Feature",
            "properties": {"stationId": "06030", "parameterId": "temp_dry",
                "observed": "2023-01-01T00:10:00+01:00", "created": "2023-01-01T00:15:00+01:00", "value": 5.2}
        },
        {
            "geometry": {"coordinates": [9.9, 57.1], "type": "Point"},
            "id": "f3", "type": "Feature",
            "properties": {"stationId": "06030", "parameterId": "temp_dry",
                "observed": "2023-01-01T00:00:00+01:00", "created": "2023-01-01T00:05:00+01:00", "value": 5.0}
        },
        {
            "geometry": {"coordinates": [12.1, 55.6], "type": "Point"},
            "id": "f4", "type": "Feature",
            "properties": {"stationId": "06180", "parameterId": "temp_dry",
                "observed": "2023-01-01T00:00:00+01:00", "created": "2023-01-01T00:05:00+01:00", "value": 3.3}
        },
        {
            "geometry": {"coordinates": [9.9, 57.1], "type": "Point"},
            "id": "f5", "type": "Feature",
            "properties": {"stationId": "06030", "parameterId": "temp_dry",
                "observed": "2022-12-31T23:00:00Z", "created": "2023-01-01T00:30:00+01:00", "value": 99.0}
        }
    ],
    "numberReturned": 5
}"#;

/// Answers every request with the same canned result and remembers the URLs.
pub struct RecordingTransport {
    response: Result<String, String>,
    pub requests: RefCell<Vec<String>>,
}

impl RecordingTransport {
    pub fn ok(body: &str) -> Self {
        Self {
            response: Ok(body.to_string()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            response: Err(reason.to_string()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn last_request(&self) -> Option<String> {
        self.requests.borrow().last().cloned()
    }
}

impl Transport for RecordingTransport {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        self.requests.borrow_mut().push(url.to_string());
        match &self.response {
            Ok(body) => Ok(body.clone()),
            Err(reason) => Err(TransportError::Unavailable {
                url: crate::request::redact_api_key(url),
                reason: reason.clone(),
            }),
        }
    }
}

thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

// Records log lines per thread so parallel tests don't see each other's output.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|lines| {
            lines
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT_LOGGER: Once = Once::new();

/// Runs `f` and returns its result with every line logged on this thread meanwhile.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<(Level, String)>) {
    INIT_LOGGER.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Debug);
        }
    });
    CAPTURED.with(|lines| lines.borrow_mut().clear());
    let result = f();
    let lines = CAPTURED.with(|lines| lines.borrow_mut().drain(..).collect());
    (result, lines)
}
