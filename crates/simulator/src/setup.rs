use campus_api::{AuthApi, TrackingApi};
use model::{
    auth::RegistrationRequest,
    location::{LocationRecord, LocationUpdate},
    route::Route,
    shuttle::{ShuttleId, ShuttleStatus},
};

use crate::{
    auth::resolve_token, config::SetupConfig, error::SetupError, shuttle::resolve_shuttle,
};

pub const SETUP_SPEED: f64 = 25.5;
pub const SETUP_ACCURACY: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SetupReport {
    pub shuttle_id: ShuttleId,
    pub activated: bool,
    pub location_posted: bool,
    pub record: Option<LocationRecord>,
}

/// Prepares the tracking service for a demo: makes sure the setup account
/// exists, brings one shuttle online and places it at the start of `route`.
///
/// Only authentication and shuttle resolution can fail the run; the other
/// steps are logged and skipped on error.
pub async fn run_setup<C>(
    client: &mut C,
    config: &SetupConfig,
    route: &Route,
) -> Result<SetupReport, SetupError>
where
    C: AuthApi + TrackingApi,
{
    let registration = RegistrationRequest {
        username: config.user.username.clone(),
        password: config.user.password.clone(),
        role: config.user.role.clone(),
    };
    match client.register_user(&registration).await {
        Ok(()) => log::info!(
            "Registered {} user '{}'.",
            registration.role,
            registration.username
        ),
        Err(why) => log::warn!("Registration status: {why}"),
    }

    let token = resolve_token(&config.auth(), &*client).await?;
    client.authorize(token);

    let shuttle_id = resolve_shuttle(&*client, &config.shuttle).await?;

    let activated = match client
        .update_shuttle_status(&shuttle_id, ShuttleStatus::Active)
        .await
    {
        Ok(()) => {
            log::info!("Shuttle {shuttle_id} status updated to ACTIVE.");
            true
        }
        Err(why) => {
            log::warn!("Status update failed: {why}");
            false
        }
    };

    let start = &route.waypoints()[0];
    let update = LocationUpdate::at(
        shuttle_id.clone(),
        start,
        SETUP_SPEED,
        start.bearing_to(route.next_of(0)),
        SETUP_ACCURACY,
    );
    let (location_posted, record) = match client.post_location(&update).await {
        Ok(record) => {
            log::info!("Location updated successfully.");
            (true, record)
        }
        Err(why) => {
            log::warn!("Location update failed: {why}");
            (false, None)
        }
    };

    Ok(SetupReport {
        shuttle_id,
        activated,
        location_posted,
        record,
    })
}
