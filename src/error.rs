use crate::decode::error::DecodeError;
use crate::transport::error::TransportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetObsError {
    #[error(transparent)]
    Network(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
