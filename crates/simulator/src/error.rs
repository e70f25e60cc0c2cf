use std::{error, fmt};

use campus_api::ApiError;

use crate::config::ConfigError;

/// Failures that end a run before any telemetry is sent.
#[derive(Debug, Clone)]
pub enum SetupError {
    Config(ConfigError),
    Client(ApiError),
    MissingCredentials,
    Login(ApiError),
    NoToken,
    ShuttleUnresolved(ApiError),
}

impl SetupError {
    /// Every setup failure terminates the process with status 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl error::Error for SetupError {}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SetupError::Config(e) => write!(f, "{e}"),
            SetupError::Client(e) => write!(f, "Could not build HTTP client: {e}"),
            SetupError::MissingCredentials => {
                write!(f, "Set AUTH_TOKEN or USERNAME/PASSWORD env vars.")
            }
            SetupError::Login(e) => write!(f, "Login failed: {e}"),
            SetupError::NoToken => write!(f, "No token obtained."),
            SetupError::ShuttleUnresolved(e) => {
                write!(f, "Failed to create shuttle: {e}")
            }
        }
    }
}

impl From<ConfigError> for SetupError {
    fn from(e: ConfigError) -> Self {
        SetupError::Config(e)
    }
}
