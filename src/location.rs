//! Device location for the hospital locator.
//!
//! The host reports a geolocation outcome (a position or a
//! `GeolocationError`). A position is turned into a display label through a
//! `ReverseGeocoder`; any geocoding failure falls back to the raw
//! coordinates. Nothing here is fatal.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::config::DashboardConfig;
use crate::models::Coordinates;

pub const STATUS_REQUIRED: &str = "Location access required";
pub const STATUS_LOCATING: &str = "📍 Getting your location...";

/// Why the host could not produce a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
    PermissionDenied,
    Unavailable,
    Timeout,
    Unsupported,
}

impl GeolocationError {
    pub fn status(&self) -> &'static str {
        match self {
            Self::PermissionDenied => {
                "📍 Location access denied - Enable location to find nearby hospitals"
            }
            Self::Unavailable => "📍 Location unavailable - Showing all hospitals",
            Self::Timeout => "📍 Location timeout - Showing all hospitals",
            Self::Unsupported => "📍 Location services not supported",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("Cannot reach geocoding service at {0}")]
    Connection(String),

    #[error("Geocoding service returned error (status {0})")]
    Api(u16),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Geocoding response parsing error: {0}")]
    ResponseParsing(String),
}

/// Turns coordinates into a human-readable place name.
pub trait ReverseGeocoder: Send + Sync {
    fn name(&self) -> &'static str;

    /// `Ok(None)` when the service knows nothing about the position.
    fn reverse(&self, coordinates: Coordinates) -> Result<Option<String>, LocationError>;
}

/// Geocoder that never resolves anything; labels fall back to coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGeocoder;

impl ReverseGeocoder for OfflineGeocoder {
    fn name(&self) -> &'static str {
        "offline"
    }

    fn reverse(&self, _coordinates: Coordinates) -> Result<Option<String>, LocationError> {
        Ok(None)
    }
}

/// Blocking client for the OpenCage reverse-geocoding API.
pub struct OpenCageGeocoder {
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl OpenCageGeocoder {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, LocationError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LocationError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/geocode/v1/json", self.base_url)
    }
}

#[derive(Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Deserialize)]
struct GeocodeResult {
    formatted: Option<String>,
    #[serde(default)]
    components: GeocodeComponents,
}

#[derive(Deserialize, Default)]
struct GeocodeComponents {
    city: Option<String>,
    state: Option<String>,
}

/// Formatted address of the first result, else its city, else its state.
fn best_label(response: GeocodeResponse) -> Option<String> {
    let first = response.results.into_iter().next()?;
    [first.formatted, first.components.city, first.components.state]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
}

impl ReverseGeocoder for OpenCageGeocoder {
    fn name(&self) -> &'static str {
        "opencage"
    }

    fn reverse(&self, coordinates: Coordinates) -> Result<Option<String>, LocationError> {
        let q = format!("{} {}", coordinates.lat, coordinates.lng);
        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("q", q.as_str()),
                ("key", self.api_key.as_str()),
                ("no_annotations", "1"),
                ("limit", "1"),
            ])
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    LocationError::Connection(self.base_url.clone())
                } else {
                    LocationError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocationError::Api(status.as_u16()));
        }

        let parsed: GeocodeResponse = response
            .json()
            .map_err(|e| LocationError::ResponseParsing(e.to_string()))?;
        Ok(best_label(parsed))
    }
}

/// OpenCage when a key is configured, otherwise offline.
pub fn build_geocoder(config: &DashboardConfig) -> Box<dyn ReverseGeocoder> {
    let Some(key) = config.opencage_api_key.as_deref() else {
        return Box::new(OfflineGeocoder);
    };
    match OpenCageGeocoder::new(&config.opencage_base_url, key, config.request_timeout) {
        Ok(geocoder) => Box::new(geocoder),
        Err(e) => {
            tracing::warn!(error = %e, "Geocoder unavailable, showing raw coordinates");
            Box::new(OfflineGeocoder)
        }
    }
}

/// `"📍 LAT, LNG"` with four decimals.
pub fn coordinate_label(coordinates: Coordinates) -> String {
    format!("📍 {:.4}, {:.4}", coordinates.lat, coordinates.lng)
}

/// Display label for a position: the geocoded place, or the coordinates.
pub fn resolve_label(geocoder: &dyn ReverseGeocoder, coordinates: Coordinates) -> String {
    match geocoder.reverse(coordinates) {
        Ok(Some(place)) => format!("📍 {place}"),
        Ok(None) => coordinate_label(coordinates),
        Err(e) => {
            tracing::warn!(geocoder = geocoder.name(), error = %e, "Reverse geocoding failed");
            coordinate_label(coordinates)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocationState {
    Required,
    Locating,
    Located { coordinates: Coordinates, label: String },
    Failed(GeolocationError),
}

/// Tracks the locator's location request and the status line it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationTracker {
    state: LocationState,
}

impl Default for LocationTracker {
    fn default() -> Self {
        Self {
            state: LocationState::Required,
        }
    }
}

impl LocationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LocationState {
        &self.state
    }

    pub fn begin(&mut self) {
        self.state = LocationState::Locating;
    }

    pub fn on_position(&mut self, coordinates: Coordinates, geocoder: &dyn ReverseGeocoder) {
        let label = resolve_label(geocoder, coordinates);
        self.set_located(coordinates, label);
    }

    /// Record a position whose label was already resolved.
    pub fn set_located(&mut self, coordinates: Coordinates, label: String) {
        tracing::info!(%label, "Device located");
        self.state = LocationState::Located { coordinates, label };
    }

    pub fn on_error(&mut self, error: GeolocationError) {
        tracing::warn!(?error, "Geolocation failed");
        self.state = LocationState::Failed(error);
    }

    pub fn is_located(&self) -> bool {
        matches!(self.state, LocationState::Located { .. })
    }

    pub fn status(&self) -> &str {
        match &self.state {
            LocationState::Required => STATUS_REQUIRED,
            LocationState::Locating => STATUS_LOCATING,
            LocationState::Located { label, .. } => label,
            LocationState::Failed(error) => error.status(),
        }
    }
}
