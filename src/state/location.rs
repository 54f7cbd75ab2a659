//! One-shot lookup of the user's approximate location from their IP address.

use async_trait::async_trait;
use serde::Deserialize;

pub const GENERIC_LOCATION_ERROR: &str = "Failed to fetch location";

#[derive(Clone, Debug, PartialEq)]
pub struct LocationInfo {
    pub display: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for LocationInfo {
    fn default() -> Self {
        Self::pending()
    }
}

impl LocationInfo {
    pub fn pending() -> Self {
        Self {
            display: String::new(),
            loading: true,
            error: None,
        }
    }

    pub fn resolve(&mut self, outcome: Result<String, LocationError>) {
        match outcome {
            Ok(display) => self.display = display,
            Err(err) => self.error = Some(err.user_message()),
        }
        self.loading = false;
    }

    /// Text for the location slot: the place, or the error in its stead.
    pub fn label(&self) -> &str {
        self.error.as_deref().unwrap_or(&self.display)
    }
}

/// Response body of an ipapi-style lookup service.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct LocationPayload {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("location request failed: {0}")]
    Transport(String),
    #[error("location response was malformed: {0}")]
    Malformed(String),
    #[error("location service error: {}", .0.as_deref().unwrap_or("unspecified"))]
    Service(Option<String>),
}

impl LocationError {
    /// What the sidebar shows in place of the location.
    pub fn user_message(&self) -> String {
        match self {
            LocationError::Service(Some(reason)) if !reason.trim().is_empty() => reason.clone(),
            _ => GENERIC_LOCATION_ERROR.to_string(),
        }
    }
}

impl From<reqwest::Error> for LocationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LocationError::Malformed(err.to_string())
        } else {
            LocationError::Transport(err.to_string())
        }
    }
}

#[async_trait(?Send)]
pub trait LocationLookup {
    async fn lookup(&self) -> Result<LocationPayload, LocationError>;
}

pub struct IpApiLookup {
    client: reqwest::Client,
    endpoint: String,
}

impl IpApiLookup {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl LocationLookup for IpApiLookup {
    async fn lookup(&self) -> Result<LocationPayload, LocationError> {
        let payload = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .json::<LocationPayload>()
            .await?;
        Ok(payload)
    }
}

/// Turns a payload into "City, Region, Country".
pub fn describe(payload: LocationPayload) -> Result<String, LocationError> {
    if payload.error {
        return Err(LocationError::Service(payload.reason));
    }
    match (payload.city, payload.region, payload.country_name) {
        (Some(city), Some(region), Some(country)) => Ok(format!("{city}, {region}, {country}")),
        _ => Err(LocationError::Malformed(
            "missing city, region or country_name".to_string(),
        )),
    }
}

pub async fn probe(lookup: &dyn LocationLookup) -> LocationInfo {
    let outcome = match lookup.lookup().await {
        Ok(payload) => describe(payload),
        Err(err) => Err(err),
    };
    match &outcome {
        Ok(place) => tracing::info!(%place, "resolved location"),
        Err(err) => tracing::warn!("{err}"),
    }
    let mut info = LocationInfo::pending();
    info.resolve(outcome);
    info
}
