use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;

use crate::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Every request is abandoned after this long.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the campus backend (auth, IoT and tracking services).
#[derive(Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            base_url,
            http,
            token: None,
        })
    }

    pub fn with_token<S: Into<String>>(mut self, token: S) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn is_authorized(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Resolves an absolute endpoint path against the base url. As with
    /// ordinary url joining, a path on the base url itself is replaced.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|why| ApiError::InvalidUrl(format!("{path}: {why}")))
    }

    pub(crate) fn get(&self, url: Url) -> RequestBuilder {
        self.authorized(self.http.get(url))
    }

    pub(crate) fn post(&self, url: Url) -> RequestBuilder {
        self.authorized(self.http.post(url))
    }

    pub(crate) fn patch(&self, url: Url) -> RequestBuilder {
        self.authorized(self.http.patch(url))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Sends a request and hands the response back when its status is one of
/// `accepted`. Any other status becomes [`ApiError::InvalidResponse`]
/// carrying the response body.
pub(crate) async fn send(
    request: RequestBuilder,
    accepted: &[StatusCode],
) -> Result<Response, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    let url = response.url().to_string();
    log::debug!("{status} from '{url}'.");

    if accepted.contains(&status) {
        return Ok(response);
    }

    match response.text().await {
        Ok(val) => Err(ApiError::InvalidResponse {
            status_code: status,
            url,
            response: Some(val),
        }),
        Err(_) => Err(ApiError::InvalidResponse {
            status_code: status,
            url,
            response: None,
        }),
    }
}

pub(crate) async fn parse<T: for<'de> Deserialize<'de>>(
    response: Response,
) -> Result<T, ApiError> {
    Ok(serde_json::from_str(&response.text().await?)?)
}
