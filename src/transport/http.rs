use crate::request::redact_api_key;
use crate::transport::error::TransportError;
use crate::transport::Transport;
use log::{info, warn};
use reqwest::blocking::Client;
use std::sync::OnceLock;

/// Blocking HTTP transport backed by `reqwest`.
///
/// The underlying client is created on the first request and reused for every
/// request after that.
#[derive(Debug, Default)]
pub struct HttpTransport {
    client: OnceLock<Client>,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an already configured client (timeouts, proxies, ...).
    pub fn with_client(client: Client) -> Self {
        Self {
            client: OnceLock::from(client),
        }
    }

    fn client(&self) -> &Client {
        self.client.get_or_init(|| {
            info!("Creating HTTP client");
            Client::new()
        })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        let shown_url = redact_api_key(url);

        let response = self
            .client()
            .get(url)
            .send()
            .map_err(|e| TransportError::NetworkRequest(shown_url.clone(), e.without_url()))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", shown_url, e.status());
                return Err(if let Some(status) = e.status() {
                    TransportError::HttpStatus {
                        url: shown_url,
                        status,
                        source: e.without_url(),
                    }
                } else {
                    TransportError::NetworkRequest(shown_url, e.without_url())
                });
            }
        };

        let body = response
            .text()
            .map_err(|e| TransportError::ResponseBody(shown_url.clone(), e.without_url()))?;
        info!("Received {} bytes from {}", body.len(), shown_url);
        Ok(body)
    }
}
