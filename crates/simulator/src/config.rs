//! Run configuration, read once from the environment at startup.
//!
//! Every constructor goes through a lookup function, `from_env` just plugs
//! in [`std::env::var`].

use std::{env, error, fmt, str::FromStr, time::Duration};

use campus_api::client::DEFAULT_BASE_URL;
use model::shuttle::NewShuttle;
use reqwest::Url;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl error::Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Invalid { var, value, reason } => {
                write!(f, "Invalid value '{value}' for {var}: {reason}")
            }
        }
    }
}

/// Reads a variable, treating empty values as unset.
fn var<L>(lookup: &L, key: &'static str) -> Option<String>
where
    L: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.is_empty())
}

fn parsed<L, T>(lookup: &L, key: &'static str, default: T) -> Result<T, ConfigError>
where
    L: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match var(lookup, key) {
        Some(value) => value.trim().parse().map_err(|why: T::Err| ConfigError::Invalid {
            var: key,
            value,
            reason: why.to_string(),
        }),
        None => Ok(default),
    }
}

fn seconds<L>(lookup: &L, key: &'static str, default: f64) -> Result<Duration, ConfigError>
where
    L: Fn(&str) -> Option<String>,
{
    let secs: f64 = parsed(lookup, key, default)?;
    Duration::try_from_secs_f64(secs).map_err(|why| ConfigError::Invalid {
        var: key,
        value: secs.to_string(),
        reason: why.to_string(),
    })
}

fn base_url<L>(lookup: &L) -> Result<Url, ConfigError>
where
    L: Fn(&str) -> Option<String>,
{
    let value = var(lookup, "BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
    Url::parse(&value).map_err(|why| ConfigError::Invalid {
        var: "BASE_URL",
        value,
        reason: why.to_string(),
    })
}

fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Either a pre-issued bearer token or credentials to log in with.
#[derive(Clone, Default, PartialEq)]
pub struct AuthConfig {
    pub token: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl AuthConfig {
    pub fn from_lookup<L>(lookup: &L) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        Self {
            token: var(lookup, "AUTH_TOKEN"),
            username: var(lookup, "USERNAME"),
            password: var(lookup, "PASSWORD"),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShuttleConfig {
    pub vehicle_number: String,
    pub route_name: String,
    pub capacity: u32,
}

impl ShuttleConfig {
    fn from_lookup<L>(lookup: &L, defaults: ShuttleConfig) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            vehicle_number: var(lookup, "VEHICLE_NUMBER").unwrap_or(defaults.vehicle_number),
            route_name: var(lookup, "ROUTE_NAME").unwrap_or(defaults.route_name),
            capacity: parsed(lookup, "CAPACITY", defaults.capacity)?,
        })
    }

    pub fn new_shuttle(&self) -> NewShuttle {
        NewShuttle {
            vehicle_number: self.vehicle_number.clone(),
            route_name: self.route_name.clone(),
            capacity: self.capacity,
        }
    }
}

/// How a shuttle is driven around its route.
#[derive(Debug, Clone, PartialEq)]
pub struct DriveConfig {
    pub laps: u32,
    pub interval: Duration,
    /// Nominal speed reported with every position, roughly km/h.
    pub speed: f64,
    /// GPS accuracy reported with every position, in metres.
    pub accuracy: f64,
}

pub const NOMINAL_SPEED: f64 = 18.0;
pub const NOMINAL_ACCURACY: f64 = 8.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub base_url: Url,
    pub auth: AuthConfig,
    pub shuttle: ShuttleConfig,
    pub drive: DriveConfig,
}

impl SimulationConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup<L>(lookup: &L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            base_url: base_url(lookup)?,
            auth: AuthConfig::from_lookup(lookup),
            shuttle: ShuttleConfig::from_lookup(
                lookup,
                ShuttleConfig {
                    vehicle_number: "GU-SHUTTLE-01".to_owned(),
                    route_name: "Guilan Campus Loop".to_owned(),
                    capacity: 24,
                },
            )?,
            drive: DriveConfig {
                laps: parsed(lookup, "LOOPS", 5)?,
                interval: seconds(lookup, "UPDATE_INTERVAL", 2.0)?,
                speed: NOMINAL_SPEED,
                accuracy: NOMINAL_ACCURACY,
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeedingConfig {
    pub rounds: u32,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeederConfig {
    pub base_url: Url,
    pub auth: AuthConfig,
    pub seeding: SeedingConfig,
}

impl SeederConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup<L>(lookup: &L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            base_url: base_url(lookup)?,
            auth: AuthConfig::from_lookup(lookup),
            seeding: SeedingConfig {
                rounds: parsed(lookup, "READING_ROUNDS", 5)?,
                delay: seconds(lookup, "READING_DELAY", 2.0)?,
            },
        })
    }
}

/// The account the setup run registers and then logs in with.
#[derive(Clone, PartialEq)]
pub struct SetupUser {
    pub username: String,
    pub password: String,
    pub role: String,
}

impl fmt::Debug for SetupUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetupUser")
            .field("username", &self.username)
            .field("password", &"***")
            .field("role", &self.role)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetupConfig {
    pub base_url: Url,
    pub user: SetupUser,
    pub shuttle: ShuttleConfig,
}

impl SetupConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup<L>(lookup: &L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            base_url: base_url(lookup)?,
            user: SetupUser {
                username: var(lookup, "USERNAME")
                    .unwrap_or_else(|| "faculty_tracker".to_owned()),
                password: var(lookup, "PASSWORD")
                    .unwrap_or_else(|| "password123".to_owned()),
                role: var(lookup, "USER_ROLE").unwrap_or_else(|| "FACULTY".to_owned()),
            },
            shuttle: ShuttleConfig::from_lookup(
                lookup,
                ShuttleConfig {
                    vehicle_number: "BUS-001".to_owned(),
                    route_name: "Campus Loop A".to_owned(),
                    capacity: 30,
                },
            )?,
        })
    }

    /// Setup always logs in with the account it just registered.
    pub fn auth(&self) -> AuthConfig {
        AuthConfig {
            token: None,
            username: Some(self.user.username.clone()),
            password: Some(self.user.password.clone()),
        }
    }
}
