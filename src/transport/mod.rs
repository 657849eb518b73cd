//! The seam between the client and the network.

pub mod error;
pub mod http;

use crate::transport::error::TransportError;

/// Performs a GET for a fully formed URL and returns the body as text.
///
/// Non-success statuses must be reported as errors. Authentication travels in
/// the URL itself, so implementations need no headers.
pub trait Transport {
    fn get(&self, url: &str) -> Result<String, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        (**self).get(url)
    }
}
