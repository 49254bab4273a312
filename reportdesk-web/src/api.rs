//! Backend client.
//!
//! JSON endpoints under `api_url`: `auth/login` and `auth/register` answer
//! with a [`Session`]; `feedback` takes a suggestion and its body is ignored.

use reportdesk_core::auth::{LOGIN_PATH, LoginRequest, REGISTER_PATH, RegisterRequest, Session};
use reportdesk_core::feedback::{FEEDBACK_PATH, SuggestionRequest};
use reportdesk_core::{ApiError, AppConfig};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Thin wrapper over `reqwest::Client` bound to one backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// `POST auth/login`
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        let response = self.post(LOGIN_PATH, request, None).await?;
        decode(response).await
    }

    /// `POST auth/register`
    pub async fn register(&self, request: &RegisterRequest) -> Result<Session, ApiError> {
        let response = self.post(REGISTER_PATH, request, None).await?;
        decode(response).await
    }

    /// `POST feedback`, authenticated with the session token when there is one.
    pub async fn send_suggestion(
        &self,
        request: &SuggestionRequest,
        token: Option<&str>,
    ) -> Result<(), ApiError> {
        self.post(FEEDBACK_PATH, request, token).await.map(drop)
    }

    /// Send `body` as JSON; any non-2xx status becomes [`ApiError::Status`].
    async fn post<B>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<reqwest::Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.endpoint(path);
        debug!(%url, "POST");

        let mut request = self.http.post(&url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(%url, status = status.as_u16(), "request rejected");
            return Err(ApiError::from_status(status.as_u16(), &text));
        }
        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
