use std::error;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use model::{
    auth::{LoginRequest, LoginResponse, RegistrationRequest},
    location::{LocationRecord, LocationUpdate},
    sensor::{Sensor, SensorReading},
    shuttle::{NewShuttle, Shuttle, ShuttleId, ShuttleStatus},
};

pub mod auth;
pub mod client;
pub mod iot;
pub mod tracking;

pub use client::ApiClient;

#[derive(Debug, Clone)]
pub enum ApiError {
    RequestError(Arc<reqwest::Error>),
    JsonError(Arc<serde_json::Error>),
    InvalidUrl(String),
    InvalidResponse {
        status_code: reqwest::StatusCode,
        url: String,
        response: Option<String>,
    },
}

impl ApiError {
    /// Status code the backend answered with, if it answered at all.
    pub fn status_code(&self) -> Option<reqwest::StatusCode> {
        match self {
            ApiError::InvalidResponse { status_code, .. } => Some(*status_code),
            ApiError::RequestError(e) => e.status(),
            _ => None,
        }
    }
}

impl error::Error for ApiError {}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::RequestError(e) => write!(f, "HTTP request error: {}", e),
            ApiError::JsonError(e) => write!(f, "JSON parse error: {}", e),
            ApiError::InvalidUrl(e) => write!(f, "Invalid URL: {}", e),
            ApiError::InvalidResponse {
                status_code,
                url,
                response,
            } => match response {
                Some(text) => {
                    write!(f, "Invalid Response ({}) {}: {}", status_code, text, url)
                }
                None => write!(f, "Invalid Response({}) {}", status_code, url),
            },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::RequestError(Arc::new(e))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::JsonError(Arc::new(e))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Outcome of a sensor registration the IoT service did not reject outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Registered,
    AlreadyExists,
}

#[async_trait]
pub trait AuthApi {
    async fn login(&self, credentials: &LoginRequest) -> ApiResult<LoginResponse>;

    async fn register_user(&self, registration: &RegistrationRequest) -> ApiResult<()>;

    /// Attaches a bearer token to every following request.
    fn authorize(&mut self, token: String);
}

#[async_trait]
pub trait TrackingApi {
    async fn list_shuttles(&self) -> ApiResult<Vec<Shuttle>>;

    async fn create_shuttle(&self, shuttle: &NewShuttle) -> ApiResult<Shuttle>;

    async fn update_shuttle_status(
        &self,
        id: &ShuttleId,
        status: ShuttleStatus,
    ) -> ApiResult<()>;

    /// Submits one position report. The stored record is returned when the
    /// service echoes one back.
    async fn post_location(
        &self,
        update: &LocationUpdate,
    ) -> ApiResult<Option<LocationRecord>>;
}

#[async_trait]
pub trait IotApi {
    async fn register_sensor(&self, sensor: &Sensor) -> ApiResult<Registration>;

    async fn post_reading(
        &self,
        sensor_id: &str,
        reading: &SensorReading,
    ) -> ApiResult<()>;
}
