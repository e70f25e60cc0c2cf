pub mod auth;
pub mod config;
pub mod error;
pub mod seeder;
pub mod setup;
pub mod shuttle;
pub mod stepper;

#[cfg(test)]
mod fake;

pub use error::SetupError;

/// Logs at `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
