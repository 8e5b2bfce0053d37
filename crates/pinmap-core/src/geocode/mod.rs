//! Reverse-geocoding adapter
//!
//! Wraps the Nominatim reverse endpoint. The public entry point,
//! [`GeocodeClient::resolve`], never fails: every failure mode (network,
//! non-2xx, unparseable body, missing `display_name`) is downgraded to the
//! fixed [`FALLBACK_ADDRESS`] so callers never treat geocoding as fallible.

use std::time::Duration;

use reqwest::{Client, Request};
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/reverse";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Nominatim asks clients to identify themselves.
const USER_AGENT: &str = concat!("pinmap/", env!("CARGO_PKG_VERSION"));

/// Address used whenever reverse geocoding fails for any reason.
pub const FALLBACK_ADDRESS: &str = "Address not available";

/// Errors internal to the adapter; they never escape [`GeocodeClient::resolve`].
#[derive(Debug, Error)]
enum GeocodeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Geocoding endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("Geocoding response had no usable display_name")]
    MalformedResponse,
}

#[derive(Debug, Deserialize)]
struct ReverseGeocodeResponse {
    #[serde(default)]
    display_name: Option<String>,
}

impl ReverseGeocodeResponse {
    fn into_address(self) -> Result<String, GeocodeError> {
        match self.display_name {
            Some(name) if !name.trim().is_empty() => Ok(name.trim().to_string()),
            _ => Err(GeocodeError::MalformedResponse),
        }
    }
}

/// Client for resolving a coordinate to a human-readable address.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    endpoint: String,
}

impl GeocodeClient {
    /// Build a client against the default Nominatim endpoint.
    pub fn new() -> crate::Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Build a client against a custom endpoint (used by tests).
    pub fn with_endpoint(endpoint: impl Into<String>) -> crate::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Resolve a coordinate to an address, falling back to
    /// [`FALLBACK_ADDRESS`] on any failure.
    pub async fn resolve(&self, lat: f64, lng: f64) -> String {
        match self.try_resolve(lat, lng).await {
            Ok(address) => address,
            Err(error) => {
                tracing::warn!("Reverse geocoding ({lat}, {lng}) failed: {error}");
                FALLBACK_ADDRESS.to_string()
            }
        }
    }

    async fn try_resolve(&self, lat: f64, lng: f64) -> Result<String, GeocodeError> {
        let request = self.build_reverse_request(lat, lng)?;
        let response = self.client.execute(request).await?;

        if !response.status().is_success() {
            return Err(GeocodeError::Status(response.status()));
        }

        let payload: ReverseGeocodeResponse = response.json().await?;
        payload.into_address()
    }

    fn build_reverse_request(&self, lat: f64, lng: f64) -> Result<Request, GeocodeError> {
        self.client
            .get(&self.endpoint)
            .query(&[
                ("format", "json".to_string()),
                ("lat", lat.to_string()),
                ("lon", lng.to_string()),
            ])
            .build()
            .map_err(GeocodeError::Http)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_request_shape_is_correct() {
        let client = GeocodeClient::new().unwrap();
        let request = client.build_reverse_request(12.9716, 77.5946).unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        let url = request.url();
        assert_eq!(
            format!("{}://{}{}", url.scheme(), url.host_str().unwrap(), url.path()),
            DEFAULT_ENDPOINT
        );

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert!(pairs.contains(&("format".to_string(), "json".to_string())));
        assert!(pairs.contains(&("lat".to_string(), "12.9716".to_string())));
        assert!(pairs.contains(&("lon".to_string(), "77.5946".to_string())));
    }

    #[test]
    fn parse_display_name() {
        let payload: ReverseGeocodeResponse =
            serde_json::from_str(r#"{"display_name":"MG Road, Bangalore"}"#).unwrap();
        assert_eq!(payload.into_address().unwrap(), "MG Road, Bangalore");
    }

    #[test]
    fn missing_display_name_is_malformed() {
        let payload: ReverseGeocodeResponse =
            serde_json::from_str(r#"{"error":"Unable to geocode"}"#).unwrap();
        assert!(matches!(
            payload.into_address(),
            Err(GeocodeError::MalformedResponse)
        ));
    }

    #[test]
    fn blank_display_name_is_malformed() {
        let payload: ReverseGeocodeResponse =
            serde_json::from_str(r#"{"display_name":"   "}"#).unwrap();
        assert!(matches!(
            payload.into_address(),
            Err(GeocodeError::MalformedResponse)
        ));
    }

    #[tokio::test]
    async fn unreachable_endpoint_yields_fallback() {
        // Discard port; the connection is refused immediately.
        let client = GeocodeClient::with_endpoint("http://127.0.0.1:9/reverse").unwrap();
        let address = client.resolve(12.9716, 77.5946).await;
        assert_eq!(address, FALLBACK_ADDRESS);
    }
}
