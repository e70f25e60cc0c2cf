use campus_api::AuthApi;
use model::auth::LoginRequest;

use crate::{config::AuthConfig, error::SetupError};

/// Produces the bearer token for the run.
///
/// A pre-issued token is used as is. Otherwise a single login exchange is
/// made; missing credentials fail before anything is sent.
pub async fn resolve_token<A>(auth: &AuthConfig, api: &A) -> Result<String, SetupError>
where
    A: AuthApi + ?Sized,
{
    if let Some(token) = &auth.token {
        log::debug!("Using pre-issued token.");
        return Ok(token.clone());
    }

    let (Some(username), Some(password)) = (&auth.username, &auth.password) else {
        return Err(SetupError::MissingCredentials);
    };

    let response = api
        .login(&LoginRequest {
            username: username.clone(),
            password: password.clone(),
        })
        .await
        .map_err(SetupError::Login)?;
    log::info!("Logged in as '{username}'.");

    response.into_token().ok_or(SetupError::NoToken)
}
