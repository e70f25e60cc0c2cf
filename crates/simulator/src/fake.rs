//! In-memory stand-in for the campus backend.

use std::sync::Mutex;

use async_trait::async_trait;
use campus_api::{ApiError, ApiResult, AuthApi, IotApi, Registration, TrackingApi};
use model::{
    auth::{LoginRequest, LoginResponse, RegistrationRequest},
    location::{LocationRecord, LocationUpdate},
    sensor::{Sensor, SensorReading},
    shuttle::{NewShuttle, Shuttle, ShuttleId, ShuttleStatus},
};
use reqwest::StatusCode;

fn rejected(status_code: StatusCode, body: &str) -> ApiError {
    ApiError::InvalidResponse {
        status_code,
        url: "http://fake.invalid".to_owned(),
        response: Some(body.to_owned()),
    }
}

#[derive(Debug, Default)]
pub struct State {
    pub logins: Vec<String>,
    pub registered_users: Vec<String>,
    pub token: Option<String>,
    pub shuttles: Vec<Shuttle>,
    pub list_calls: usize,
    pub create_calls: usize,
    pub status_updates: Vec<(ShuttleId, ShuttleStatus)>,
    pub locations: Vec<LocationUpdate>,
    pub sensors: Vec<Sensor>,
    pub readings: Vec<(String, f64)>,
}

#[derive(Default)]
pub struct FakeBackend {
    pub state: Mutex<State>,
    /// Token handed out on login. `None` answers with an empty body.
    pub issued_token: Option<String>,
    pub reject_login: bool,
    pub reject_listing: bool,
    pub reject_create: bool,
    pub reject_status: bool,
    /// Location posts with these (zero-based) sequence numbers are refused.
    pub failing_locations: Vec<usize>,
    pub failing_sensor: Option<String>,
    pub location_posts: Mutex<usize>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            issued_token: Some("issued-token".to_owned()),
            ..Default::default()
        }
    }

    pub fn with_shuttles(shuttles: Vec<Shuttle>) -> Self {
        let backend = Self::new();
        backend.state.lock().unwrap().shuttles = shuttles;
        backend
    }

    pub fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }
}

#[async_trait]
impl AuthApi for FakeBackend {
    async fn login(&self, credentials: &LoginRequest) -> ApiResult<LoginResponse> {
        self.state().logins.push(credentials.username.clone());
        if self.reject_login {
            return Err(rejected(StatusCode::UNAUTHORIZED, "Invalid credentials"));
        }
        Ok(LoginResponse {
            token: self.issued_token.clone(),
            jwt: None,
        })
    }

    async fn register_user(&self, registration: &RegistrationRequest) -> ApiResult<()> {
        let mut state = self.state();
        if state.registered_users.contains(&registration.username) {
            return Err(rejected(StatusCode::BAD_REQUEST, "Username is already taken"));
        }
        state.registered_users.push(registration.username.clone());
        Ok(())
    }

    fn authorize(&mut self, token: String) {
        self.state().token = Some(token);
    }
}

#[async_trait]
impl TrackingApi for FakeBackend {
    async fn list_shuttles(&self) -> ApiResult<Vec<Shuttle>> {
        let mut state = self.state();
        state.list_calls += 1;
        if self.reject_listing {
            return Err(rejected(StatusCode::INTERNAL_SERVER_ERROR, "boom"));
        }
        Ok(state.shuttles.clone())
    }

    async fn create_shuttle(&self, shuttle: &NewShuttle) -> ApiResult<Shuttle> {
        let mut state = self.state();
        state.create_calls += 1;
        if self.reject_create {
            return Err(rejected(StatusCode::FORBIDDEN, "Forbidden"));
        }
        let created = Shuttle {
            id: ShuttleId::Number(100 + state.shuttles.len() as i64),
            vehicle_number: Some(shuttle.vehicle_number.clone()),
            route_name: Some(shuttle.route_name.clone()),
            capacity: Some(shuttle.capacity),
            status: Some(ShuttleStatus::Inactive),
        };
        state.shuttles.push(created.clone());
        Ok(created)
    }

    async fn update_shuttle_status(
        &self,
        id: &ShuttleId,
        status: ShuttleStatus,
    ) -> ApiResult<()> {
        if self.reject_status {
            return Err(rejected(StatusCode::NOT_FOUND, "Shuttle not found"));
        }
        self.state().status_updates.push((id.clone(), status));
        Ok(())
    }

    async fn post_location(
        &self,
        update: &LocationUpdate,
    ) -> ApiResult<Option<LocationRecord>> {
        let sequence = {
            let mut posts = self.location_posts.lock().unwrap();
            *posts += 1;
            *posts - 1
        };
        if self.failing_locations.contains(&sequence) {
            return Err(rejected(StatusCode::BAD_GATEWAY, "upstream down"));
        }
        self.state().locations.push(update.clone());
        Ok(Some(LocationRecord {
            id: Some(serde_json::json!(sequence)),
            shuttle_id: Some(update.shuttle_id.clone()),
            latitude: Some(update.latitude),
            longitude: Some(update.longitude),
            speed: Some(update.speed),
            heading: Some(update.heading),
            accuracy: Some(update.accuracy),
            ..Default::default()
        }))
    }
}

#[async_trait]
impl IotApi for FakeBackend {
    async fn register_sensor(&self, sensor: &Sensor) -> ApiResult<Registration> {
        let mut state = self.state();
        if self.failing_sensor.as_deref() == Some(sensor.sensor_id.as_str()) {
            return Err(rejected(StatusCode::FORBIDDEN, "Forbidden"));
        }
        if state.sensors.iter().any(|s| s.sensor_id == sensor.sensor_id) {
            return Ok(Registration::AlreadyExists);
        }
        state.sensors.push(sensor.clone());
        Ok(Registration::Registered)
    }

    async fn post_reading(
        &self,
        sensor_id: &str,
        reading: &SensorReading,
    ) -> ApiResult<()> {
        if self.failing_sensor.as_deref() == Some(sensor_id) {
            return Err(rejected(StatusCode::NOT_FOUND, "Sensor not found"));
        }
        self.state().readings.push((sensor_id.to_owned(), reading.value));
        Ok(())
    }
}
