pub mod aggregator;
pub mod query;
