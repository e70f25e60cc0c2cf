use async_trait::async_trait;
use model::{
    location::{LocationRecord, LocationUpdate},
    shuttle::{NewShuttle, Shuttle, ShuttleId, ShuttleStatus},
};
use reqwest::StatusCode;

use crate::{
    client::{parse, send},
    ApiClient, ApiResult, TrackingApi,
};

pub const SHUTTLES_PATH: &str = "/api/tracking/shuttles";
pub const LOCATION_PATH: &str = "/api/tracking/location";

fn status_path(id: &ShuttleId) -> String {
    format!("{SHUTTLES_PATH}/{id}/status")
}

#[async_trait]
impl TrackingApi for ApiClient {
    async fn list_shuttles(&self) -> ApiResult<Vec<Shuttle>> {
        let url = self.endpoint(SHUTTLES_PATH)?;
        let response = send(self.get(url), &[StatusCode::OK]).await?;
        parse(response).await
    }

    async fn create_shuttle(&self, shuttle: &NewShuttle) -> ApiResult<Shuttle> {
        // the tracking service takes these as request parameters, not as a body
        let url = self.endpoint(SHUTTLES_PATH)?;
        let response = send(
            self.post(url).query(shuttle),
            &[StatusCode::OK, StatusCode::CREATED],
        )
        .await?;
        parse(response).await
    }

    async fn update_shuttle_status(
        &self,
        id: &ShuttleId,
        status: ShuttleStatus,
    ) -> ApiResult<()> {
        let url = self.endpoint(&status_path(id))?;
        send(
            self.patch(url).query(&[("status", status.as_str())]),
            &[StatusCode::OK],
        )
        .await?;
        Ok(())
    }

    async fn post_location(
        &self,
        update: &LocationUpdate,
    ) -> ApiResult<Option<LocationRecord>> {
        let url = self.endpoint(LOCATION_PATH)?;
        let response = send(self.post(url).json(update), &[StatusCode::OK]).await?;
        match parse::<serde_json::Value>(response).await {
            Ok(body) => {
                let record = LocationRecord::from_json(body);
                if record.is_none() {
                    log::debug!("Location accepted, response body is not a record.");
                }
                Ok(record)
            }
            Err(why) => {
                log::debug!("Location accepted without a readable record: {why}");
                Ok(None)
            }
        }
    }
}
