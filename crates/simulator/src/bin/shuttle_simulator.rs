use std::process::ExitCode;

use campus_api::{ApiClient, AuthApi};
use model::route::Route;
use simulator::{
    auth::resolve_token, config::SimulationConfig, shuttle::resolve_shuttle,
    stepper::run_route, SetupError,
};

async fn run() -> Result<(), SetupError> {
    let config = SimulationConfig::from_env()?;
    let mut client = ApiClient::new(config.base_url.clone()).map_err(SetupError::Client)?;

    let token = resolve_token(&config.auth, &client).await?;
    client.authorize(token);

    let shuttle_id = resolve_shuttle(&client, &config.shuttle).await?;

    let route = Route::guilan_campus_loop();
    log::info!(
        "Simulating shuttle {} (id {}) on {} waypoints, {:.2} km per lap.",
        config.shuttle.vehicle_number,
        shuttle_id,
        route.len(),
        route.lap_length_km()
    );

    let summary = run_route(&client, &shuttle_id, &route, &config.drive).await;
    log::info!(
        "Done. {} location updates sent, {} failed.",
        summary.ticks,
        summary.failed
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    simulator::init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            log::error!("{why}");
            ExitCode::from(why.exit_code())
        }
    }
}
