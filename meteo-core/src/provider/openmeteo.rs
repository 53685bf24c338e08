use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use tracing::debug;

use crate::model::{Location, RawDocument};
use crate::provider::{FetchError, ObservationSource, truncate_body};

const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// The `current=` variable list; one scalar per report field.
const CURRENT_VARIABLES: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
                                 precipitation,wind_speed_10m,wind_direction_10m,\
                                 weather_code,surface_pressure";

/// Open-Meteo forecast API client. No API key required.
#[derive(Debug, Clone)]
pub struct OpenMeteo {
    http: Client,
    base_url: String,
}

impl Default for OpenMeteo {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteo {
    pub fn new() -> Self {
        Self { http: Client::new(), base_url: DEFAULT_BASE_URL.to_string() }
    }

    /// Point the client at a different endpoint. Used by tests to target a
    /// local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { http: Client::new(), base_url: base_url.into() }
    }
}

#[async_trait]
impl ObservationSource for OpenMeteo {
    /// Fetch the current observation block for `location` as raw text.
    ///
    /// One attempt, no retries; a failed request surfaces as a
    /// [`FetchError`] for the caller to report.
    async fn fetch_current(&self, location: &Location) -> Result<RawDocument, FetchError> {
        debug!(url = %self.base_url, lat = location.latitude, lon = location.longitude,
               "requesting current observations");

        let latitude = format!("{:.4}", location.latitude);
        let longitude = format!("{:.4}", location.longitude);

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current", CURRENT_VARIABLES),
                ("temperature_unit", "celsius"),
                ("wind_speed_unit", "kmh"),
                ("timezone", "auto"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, bytes = body.len(), "response received");

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        Ok(RawDocument::new(body, Utc::now()))
    }
}
