use async_trait::async_trait;
use model::sensor::{Sensor, SensorReading};
use reqwest::StatusCode;

use crate::{client::send, ApiClient, ApiError, ApiResult, IotApi, Registration};

pub const REGISTER_SENSOR_PATH: &str = "/api/iot/sensors/register";

fn reading_path(sensor_id: &str) -> String {
    format!("/api/iot/sensors/{sensor_id}/reading")
}

/// The IoT service reports duplicates as a plain failure whose body
/// mentions that the sensor "already" exists.
fn is_duplicate(error: &ApiError) -> bool {
    match error {
        ApiError::InvalidResponse {
            response: Some(text),
            ..
        } => text.to_lowercase().contains("already"),
        _ => false,
    }
}

#[async_trait]
impl IotApi for ApiClient {
    async fn register_sensor(&self, sensor: &Sensor) -> ApiResult<Registration> {
        let url = self.endpoint(REGISTER_SENSOR_PATH)?;
        let result = send(
            self.post(url).json(sensor),
            &[StatusCode::OK, StatusCode::CREATED],
        )
        .await;
        match result {
            Ok(_) => Ok(Registration::Registered),
            Err(why) if is_duplicate(&why) => Ok(Registration::AlreadyExists),
            Err(why) => Err(why),
        }
    }

    async fn post_reading(
        &self,
        sensor_id: &str,
        reading: &SensorReading,
    ) -> ApiResult<()> {
        let url = self.endpoint(&reading_path(sensor_id))?;
        send(self.post(url).json(reading), &[StatusCode::OK]).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use model::sensor::campus_sensors;
    use reqwest::Url;
    use serde_json::json;

    use super::*;

    fn client(server: &MockServer) -> ApiClient {
        ApiClient::new(Url::parse(&server.base_url()).unwrap())
            .unwrap()
            .with_token("tok")
    }

    #[tokio::test]
    async fn registers_sensor() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(REGISTER_SENSOR_PATH)
                    .header("Authorization", "Bearer tok")
                    .json_body(json!({
                        "sensorId": "gu-rasht-classroom-a1-temp",
                        "name": "Classroom A1 Temperature",
                        "type": "TEMPERATURE",
                        "location": "University of Guilan - Classroom A1",
                        "unit": "C"
                    }));
                then.status(201).json_body(json!({ "id": 1 }));
            })
            .await;

        let sensor = &campus_sensors()[0].sensor;
        let outcome = client(&server).register_sensor(sensor).await.unwrap();
        mock.assert_async().await;
        assert_eq!(outcome, Registration::Registered);
    }

    #[tokio::test]
    async fn duplicate_sensor_is_reported_as_existing() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(REGISTER_SENSOR_PATH);
                then.status(500)
                    .body("Sensor ALREADY exists: gu-rasht-library-light");
            })
            .await;

        let sensor = &campus_sensors()[3].sensor;
        let outcome = client(&server).register_sensor(sensor).await.unwrap();
        assert_eq!(outcome, Registration::AlreadyExists);
    }

    #[tokio::test]
    async fn other_registration_failures_are_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(REGISTER_SENSOR_PATH);
                then.status(403).body("Forbidden");
            })
            .await;

        let sensor = &campus_sensors()[3].sensor;
        let error = client(&server).register_sensor(sensor).await.unwrap_err();
        assert_eq!(error.status_code(), Some(StatusCode::FORBIDDEN));
    }

    #[tokio::test]
    async fn posts_reading_value() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/iot/sensors/gu-rasht-lab-occupancy/reading")
                    .json_body(json!({ "value": 13.25 }));
                then.status(200);
            })
            .await;

        client(&server)
            .post_reading("gu-rasht-lab-occupancy", &SensorReading { value: 13.25 })
            .await
            .unwrap();
        mock.assert_async().await;
    }
}
