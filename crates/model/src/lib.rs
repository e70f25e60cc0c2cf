pub use serde_with;

pub mod auth;
pub mod location;
pub mod route;
pub mod sensor;
pub mod shuttle;
