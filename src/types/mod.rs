pub mod geo_point;
pub mod into_local_trait;
pub mod period;
pub mod station;
pub mod station_data;
