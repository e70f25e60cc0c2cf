use async_trait::async_trait;
use model::auth::{LoginRequest, LoginResponse, RegistrationRequest};
use reqwest::StatusCode;

use crate::{
    client::{parse, send},
    ApiClient, ApiResult, AuthApi,
};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, credentials: &LoginRequest) -> ApiResult<LoginResponse> {
        let url = self.endpoint(LOGIN_PATH)?;
        log::debug!("Logging in as '{}'.", credentials.username);
        let response = send(self.post(url).json(credentials), &[StatusCode::OK]).await?;
        parse(response).await
    }

    async fn register_user(&self, registration: &RegistrationRequest) -> ApiResult<()> {
        let url = self.endpoint(REGISTER_PATH)?;
        send(
            self.post(url).json(registration),
            &[StatusCode::OK, StatusCode::CREATED],
        )
        .await?;
        Ok(())
    }

    fn authorize(&mut self, token: String) {
        self.set_token(token);
    }
}
