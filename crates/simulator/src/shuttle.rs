use campus_api::TrackingApi;
use model::shuttle::{Shuttle, ShuttleId};

use crate::{config::ShuttleConfig, error::SetupError};

/// First listed shuttle carrying `vehicle_number`. Duplicates on the server
/// side are not an error; the earliest entry wins.
pub fn find_shuttle<'a>(shuttles: &'a [Shuttle], vehicle_number: &str) -> Option<&'a Shuttle> {
    shuttles
        .iter()
        .find(|shuttle| shuttle.vehicle_number.as_deref() == Some(vehicle_number))
}

/// Returns the id of the configured shuttle, registering it first if the
/// tracking service does not know it yet. Running this twice never creates
/// a second shuttle.
pub async fn resolve_shuttle<T>(api: &T, shuttle: &ShuttleConfig) -> Result<ShuttleId, SetupError>
where
    T: TrackingApi + ?Sized,
{
    match api.list_shuttles().await {
        Ok(shuttles) => {
            if let Some(existing) = find_shuttle(&shuttles, &shuttle.vehicle_number) {
                log::info!(
                    "Using existing shuttle {} (id {}).",
                    shuttle.vehicle_number,
                    existing.id
                );
                return Ok(existing.id.clone());
            }
        }
        Err(why) => log::warn!("Could not list shuttles: {why}"),
    }

    let created = api
        .create_shuttle(&shuttle.new_shuttle())
        .await
        .map_err(SetupError::ShuttleUnresolved)?;
    log::info!(
        "Registered shuttle {} on '{}' (id {}).",
        shuttle.vehicle_number,
        shuttle.route_name,
        created.id
    );
    Ok(created.id)
}
