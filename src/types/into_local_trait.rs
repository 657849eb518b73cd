use chrono::{DateTime, FixedOffset, Local};

/// Normalizes a timestamp into the local time zone of the running process.
///
/// Observation keys and ordering are computed on the normalized value, so two
/// instants written with different offsets compare equal once converted.
pub trait IntoLocalDateTime {
    fn into_local(self) -> DateTime<Local>;
}

impl IntoLocalDateTime for DateTime<FixedOffset> {
    fn into_local(self) -> DateTime<Local> {
        self.with_timezone(&Local)
    }
}
