use std::process::ExitCode;

use campus_api::{ApiClient, AuthApi};
use model::sensor::campus_sensors;
use rand::{rngs::StdRng, SeedableRng};
use simulator::{
    auth::resolve_token, config::SeederConfig, seeder::seed_sensors, SetupError,
};

async fn run() -> Result<(), SetupError> {
    let config = SeederConfig::from_env()?;
    let mut client = ApiClient::new(config.base_url.clone()).map_err(SetupError::Client)?;

    let token = resolve_token(&config.auth, &client).await?;
    client.authorize(token);

    let sensors = campus_sensors();
    let mut rng = StdRng::from_entropy();
    let summary = seed_sensors(&client, &sensors, &config.seeding, &mut rng).await;
    log::info!(
        "Done. {} registered, {} already present, {} readings sent, {} failures.",
        summary.registered,
        summary.existing,
        summary.readings,
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
