use campus_api::{IotApi, Registration};
use model::sensor::SensorSpec;
use rand::Rng;
use tokio::time::sleep;

use crate::config::SeedingConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub registered: usize,
    pub existing: usize,
    pub readings: usize,
    pub failed: usize,
}

/// Registers `sensors` and then posts one jittered reading per sensor for
/// every round, pausing `seeding.delay` after each round. Nothing here is
/// fatal: failed registrations and readings are logged and skipped.
pub async fn seed_sensors<A, R>(
    api: &A,
    sensors: &[SensorSpec],
    seeding: &SeedingConfig,
    rng: &mut R,
) -> SeedSummary
where
    A: IotApi + ?Sized,
    R: Rng,
{
    let mut summary = SeedSummary::default();

    for spec in sensors {
        match api.register_sensor(&spec.sensor).await {
            Ok(Registration::Registered) => {
                summary.registered += 1;
                log::info!("Registered: {}", spec.sensor_id());
            }
            Ok(Registration::AlreadyExists) => {
                summary.existing += 1;
                log::info!("Sensor exists: {}", spec.sensor_id());
            }
            Err(why) => {
                summary.failed += 1;
                log::warn!("Register failed for {}: {why}", spec.sensor_id());
            }
        }
    }

    for round in 0..seeding.rounds {
        log::debug!("Reading round {} of {}.", round + 1, seeding.rounds);
        for spec in sensors {
            let reading = spec.reading(rng.gen_range(-1.0..=1.0));
            match api.post_reading(spec.sensor_id(), &reading).await {
                Ok(()) => summary.readings += 1,
                Err(why) => {
                    summary.failed += 1;
                    log::warn!("Reading failed for {}: {why}", spec.sensor_id());
                }
            }
        }
        sleep(seeding.delay).await;
    }

    summary
}
