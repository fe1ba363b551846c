//! Twilight client trait and sunrise-sunset.org implementation.
//!
//! The [`TwilightClient`] trait allows for dependency injection and easier
//! testing by enabling mock clients; the [`SunriseSunsetClient`]
//! implementation fetches twilight data from the public sunrise-sunset.org
//! JSON API via `reqwest`.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, trace, warn};

use super::error::TwilightError;
use super::model::TwilightRecord;
use crate::coord::Coordinate;

/// HTTP timeout for a single API request.
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// User-Agent string sent with API requests.
const USER_AGENT: &str = concat!("dawnwatch/", env!("CARGO_PKG_VERSION"));

/// Trait for fetching twilight data for one coordinate.
pub trait TwilightClient: Send + Sync {
    /// Fetches the current date's twilight record for `coordinate`.
    fn fetch(
        &self,
        coordinate: &Coordinate,
    ) -> impl Future<Output = Result<TwilightRecord, TwilightError>> + Send;
}

/// Client for the sunrise-sunset.org JSON API.
///
/// Uses a reusable `reqwest::Client` with connection pooling, so one
/// instance serves every request in a run.
#[derive(Clone)]
pub struct SunriseSunsetClient {
    http: reqwest::Client,
    /// Base URL of the JSON endpoint.
    api_url: String,
}

impl SunriseSunsetClient {
    /// Creates a client for the given endpoint URL.
    pub fn new(api_url: String) -> Result<Self, TwilightError> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TwilightError::Http(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, api_url })
    }
}

impl TwilightClient for SunriseSunsetClient {
    async fn fetch(&self, coordinate: &Coordinate) -> Result<TwilightRecord, TwilightError> {
        trace!(coordinate = %coordinate, "twilight request starting");

        let response = self
            .http
            .get(&self.api_url)
            // formatted=0 requests full ISO-8601 timestamps instead of
            // locale-formatted clock times
            .query(&[
                ("lat", coordinate.latitude.as_str()),
                ("lng", coordinate.longitude.as_str()),
                ("formatted", "0"),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!(coordinate = %coordinate, error = %e, "twilight request failed");
                TwilightError::Http(format!("Request failed: {e}"))
            })?;

        if !response.status().is_success() {
            warn!(
                coordinate = %coordinate,
                status = response.status().as_u16(),
                "twilight request returned error status"
            );
            return Err(TwilightError::Http(format!(
                "HTTP {} for {}",
                response.status(),
                coordinate
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TwilightError::Http(format!("Failed to read response: {e}")))?;

        let record: TwilightRecord = serde_json::from_slice(&bytes)
            .map_err(|e| TwilightError::Json(e.to_string()))?;

        debug!(
            coordinate = %coordinate,
            status = %record.status,
            day_length = record.results.day_length,
            "twilight record fetched"
        );

        Ok(record)
    }
}
