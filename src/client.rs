//! Netatmo REST API client.
//!
//! Thin transport around the decoding core: acquires an OAuth2 token with the
//! password grant, issues GET requests and hands the raw bodies to
//! [`crate::decode`]. Token refresh and retries are left to the caller.

use crate::decode::{DecodeError, decode_measure};
use crate::measurement::{Measurement, MeasurementSet};
use crate::metric::measure_types;
use crate::response::{ErrorResponse, StationsDataResponse};
use crate::station::StationsData;
use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://api.netatmo.com";

/// OAuth scope needed to read weather station data.
const READ_STATION_SCOPE: &str = "read_station";

/// Errors returned by the API client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection, TLS or body read failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The API answered with its JSON error envelope
    #[error("API error {code} (HTTP {status}): {message}")]
    Api {
        status: u16,
        code: i64,
        message: String,
    },
    /// Non-2xx response without a recognizable error body
    #[error("Unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },
    /// Token endpoint did not return an access token
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Future returned by [`WeatherApi`] methods.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send + 'a>>;

/// API abstraction so the application can be tested without network access.
pub trait WeatherApi: Send + Sync {
    /// Stations, modules and account preferences.
    fn stations_data(&self) -> ApiFuture<'_, StationsData>;

    /// All records between `begin` and `end` (epoch seconds, inclusive).
    fn measure_range<'a>(
        &'a self,
        device_id: &'a str,
        module_id: &'a str,
        begin: i64,
        end: i64,
    ) -> ApiFuture<'a, MeasurementSet>;

    /// The most recent record, or `None` if the module has no data.
    fn measure_newest<'a>(
        &'a self,
        device_id: &'a str,
        module_id: &'a str,
    ) -> ApiFuture<'a, Option<Measurement>>;
}

/// Application credentials and account login.
#[derive(Clone, clap::Args)]
pub struct Credentials {
    /// Netatmo application client id
    #[arg(short = 'c', long, env = "NETATMO_CLIENT_ID", hide_env_values = true)]
    pub client_id: String,

    /// Netatmo application client secret
    #[arg(short = 's', long, env = "NETATMO_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: String,

    /// Netatmo account user name
    #[arg(short = 'u', long, env = "NETATMO_USERNAME", hide_env_values = true)]
    pub username: String,

    /// Netatmo account password
    #[arg(short = 'p', long, env = "NETATMO_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Time window of a `getmeasure` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureWindow {
    /// Real-time data between two epoch timestamps.
    Range { begin: i64, end: i64 },
    /// Only the latest available data.
    Newest,
}

/// Query parameters for `getmeasure`.
///
/// The `type` list comes from [`crate::metric::METRICS`], the same constant
/// the decoder uses to map columns.
pub fn measure_params(
    device_id: &str,
    module_id: &str,
    window: MeasureWindow,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("device_id", device_id.to_owned()),
        ("module_id", module_id.to_owned()),
        // {max, 30min, 1hour, 3hours, 1day, 1week, 1month}
        ("scale", "max".to_owned()),
        ("type", measure_types()),
    ];
    match window {
        MeasureWindow::Range { begin, end } => {
            params.push(("real_time", "true".to_owned()));
            params.push(("date_begin", begin.to_string()));
            params.push(("date_end", end.to_string()));
        }
        MeasureWindow::Newest => params.push(("date_end", "last".to_owned())),
    }
    params
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Extract the bearer token from a successful token response body.
fn access_token(body: &[u8]) -> Result<String, ApiError> {
    let token: TokenResponse = serde_json::from_slice(body).map_err(DecodeError::from)?;
    token
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Auth("token response has no access_token".into()))
}

/// Build an error from a non-2xx response body.
fn status_error(status: StatusCode, body: &[u8]) -> ApiError {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(resp) => ApiError::Api {
            status: status.as_u16(),
            code: resp.error.code,
            message: resp.error.message,
        },
        Err(_) => ApiError::Status {
            status: status.as_u16(),
            body: String::from_utf8_lossy(body).into_owned(),
        },
    }
}

/// Authenticated Netatmo client.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Authenticate against the default API host.
    pub async fn connect(credentials: &Credentials) -> Result<Self, ApiError> {
        Self::connect_to(DEFAULT_BASE_URL, credentials).await
    }

    /// Authenticate against `base_url` using the OAuth2 password grant.
    pub async fn connect_to(base_url: &str, credentials: &Credentials) -> Result<Self, ApiError> {
        let http = reqwest::Client::new();
        let base_url = base_url.trim_end_matches('/').to_owned();
        let url = format!("{base_url}/oauth2/token");

        tracing::debug!(%url, client_id = %credentials.client_id, "requesting access token");
        let resp = http
            .post(&url)
            .form(&[
                ("grant_type", "password"),
                ("client_id", credentials.client_id.as_str()),
                ("client_secret", credentials.client_secret.as_str()),
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
                ("scope", READ_STATION_SCOPE),
            ])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;
        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        let access_token = access_token(&body)?;

        Ok(Self {
            http,
            base_url,
            access_token,
        })
    }

    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Vec<u8>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, ?params, "GET");

        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(params)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "request failed");
            return Err(status_error(status, &body));
        }
        Ok(body.to_vec())
    }

    /// Fetch `/api/getstationsdata`.
    pub async fn get_stations_data(&self) -> Result<StationsData, ApiError> {
        let body = self.get("/api/getstationsdata", &[]).await?;
        let resp: StationsDataResponse =
            serde_json::from_slice(&body).map_err(DecodeError::from)?;
        Ok(resp.body)
    }

    /// Fetch `/api/getmeasure` for a window and decode it.
    pub async fn get_measure(
        &self,
        device_id: &str,
        module_id: &str,
        window: MeasureWindow,
    ) -> Result<MeasurementSet, ApiError> {
        let params = measure_params(device_id, module_id, window);
        let body = self.get("/api/getmeasure", &params).await?;
        Ok(decode_measure(&body, device_id, module_id)?)
    }
}

impl WeatherApi for Client {
    fn stations_data(&self) -> ApiFuture<'_, StationsData> {
        Box::pin(self.get_stations_data())
    }

    fn measure_range<'a>(
        &'a self,
        device_id: &'a str,
        module_id: &'a str,
        begin: i64,
        end: i64,
    ) -> ApiFuture<'a, MeasurementSet> {
        Box::pin(self.get_measure(device_id, module_id, MeasureWindow::Range { begin, end }))
    }

    fn measure_newest<'a>(
        &'a self,
        device_id: &'a str,
        module_id: &'a str,
    ) -> ApiFuture<'a, Option<Measurement>> {
        Box::pin(async move {
            let set = self
                .get_measure(device_id, module_id, MeasureWindow::Newest)
                .await?;
            Ok(set.into_newest())
        })
    }
}
