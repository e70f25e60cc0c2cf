use std::process::ExitCode;

use campus_api::ApiClient;
use model::route::Route;
use simulator::{config::SetupConfig, setup::run_setup, SetupError};

async fn run() -> Result<(), SetupError> {
    let config = SetupConfig::from_env()?;
    let mut client = ApiClient::new(config.base_url.clone()).map_err(SetupError::Client)?;

    let report = run_setup(&mut client, &config, &Route::guilan_campus_loop()).await?;

    if let Some(record) = &report.record {
        match serde_json::to_string_pretty(record) {
            Ok(json) => println!("{json}"),
            Err(why) => log::warn!("Could not render location record: {why}"),
        }
    }
    log::info!(
        "Setup complete for shuttle {}. Check the app now.",
        report.shuttle_id
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
