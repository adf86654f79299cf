use crate::config::{ConfigBuilder, PlacesConfig};
use crate::error::PlacesError;
use crate::types::{Envelope, Params, PhotoStream, Transport};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use strum_macros::{Display, EnumString};

/// Values of the `status` field in a Places JSON envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiStatus {
    Ok,
    ZeroResults,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    NotFound,
    UnknownError,
}

/// HTTP transport for the Places web service
#[derive(Clone)]
pub struct PlacesClient {
    config: PlacesConfig,
    client: Client,
}

impl PlacesClient {
    /// Create a new client; the configuration is validated first
    pub fn new(config: PlacesConfig) -> Result<Self, PlacesError> {
        config.validate()?;

        let mut header_map = HeaderMap::new();
        for (key, value) in config.headers() {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                PlacesError::configuration(format!("Invalid header name {key:?}: {e}"))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                PlacesError::configuration(format!("Invalid value for header {key:?}: {e}"))
            })?;
            header_map.insert(name, value);
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(header_map)
            .user_agent(concat!("places-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PlacesError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Create client from environment variables
    pub fn from_env() -> Result<Self, PlacesError> {
        Self::new(ConfigBuilder::from_env()?)
    }

    pub fn config(&self) -> &PlacesConfig {
        &self.config
    }

    async fn send(&self, path: &str, params: &Params) -> Result<Response, PlacesError> {
        let url = format!("{}{}", self.config.base_url(), path);
        let mut query = params.to_query_pairs();
        query.push(("key", self.config.api_key.clone()));

        log::debug!(
            "GET {} [{}]",
            path,
            params.keys().collect::<Vec<_>>().join(", ")
        );

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| transfer_error(e, self.config.timeout()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        log::warn!("GET {path} failed with HTTP {status}");
        Err(http_status_error(status, &error_text))
    }
}

/// Map a reqwest failure, reporting timeouts with the configured duration.
/// The conversion strips the request URL, which carries the key.
fn transfer_error(err: reqwest::Error, timeout: Duration) -> PlacesError {
    if err.is_timeout() {
        PlacesError::timeout(timeout)
    } else {
        PlacesError::from(err)
    }
}

fn http_status_error(status: StatusCode, body: &str) -> PlacesError {
    let message = format!("HTTP {status}: {body}");
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => PlacesError::authentication(message),
        StatusCode::TOO_MANY_REQUESTS => PlacesError::rate_limit(message),
        _ => PlacesError::api(status.as_u16().to_string(), message),
    }
}

/// Map an API-level `status` in the envelope to an error.
///
/// `OK` and `ZERO_RESULTS` pass, as do envelopes without a status field.
pub fn check_envelope_status(envelope: &Envelope) -> Result<(), PlacesError> {
    let Some(status) = envelope.get("status").and_then(|s| s.as_str()) else {
        return Ok(());
    };

    let message = envelope
        .get("error_message")
        .and_then(|m| m.as_str())
        .unwrap_or(status)
        .to_string();

    match status.parse::<ApiStatus>() {
        Ok(ApiStatus::Ok | ApiStatus::ZeroResults) => Ok(()),
        Ok(ApiStatus::OverQueryLimit) => Err(PlacesError::rate_limit(message)),
        Ok(ApiStatus::RequestDenied) => Err(PlacesError::authentication(message)),
        _ => Err(PlacesError::api(status, message)),
    }
}

#[async_trait::async_trait]
impl Transport for PlacesClient {
    async fn get(&self, path: &str, params: &Params) -> Result<Envelope, PlacesError> {
        let response = self.send(path, params).await?;

        let envelope: Envelope = response
            .json()
            .await
            .map_err(|e| transfer_error(e, self.config.timeout()))?;

        if let Err(err) = check_envelope_status(&envelope) {
            log::warn!("GET {path} returned error status: {err}");
            return Err(err);
        }

        Ok(envelope)
    }

    async fn get_raw(&self, path: &str, params: &Params) -> Result<PhotoStream, PlacesError> {
        let mut response = self.send(path, params).await?;
        let timeout = self.config.timeout();

        let stream = async_stream::stream! {
            loop {
                match response.chunk().await {
                    Ok(Some(chunk)) => yield Ok::<_, PlacesError>(chunk),
                    Ok(None) => break,
                    Err(e) if e.is_timeout() => {
                        yield Err(PlacesError::timeout(timeout));
                        break;
                    }
                    Err(e) => {
                        yield Err(PlacesError::network_with_source(
                            "Body stream interrupted",
                            e.without_url(),
                        ));
                        break;
                    }
                }
            }
        };

        Ok(Box::pin(stream))
    }
}
