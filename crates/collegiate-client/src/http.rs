//! Request plumbing shared by every API call.
//!
//! [`Api`] owns the HTTP client, the base URL, and a handle to the session
//! store. Each outgoing request is authorized once, tagged with a
//! correlation id, and logged with its latency and status class.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use collegiate_config::ApiConfig;
use collegiate_session::SessionStore;

use crate::authorizer::authorize;
use crate::error::{ApiError, ErrorBody};

/// Shared handle to the college API.
///
/// Cheap to clone; all clones reuse the same connection pool and session
/// store.
#[derive(Clone)]
pub struct Api {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl Api {
    /// Build an API handle from configuration.
    pub fn new(config: &ApiConfig, session: Arc<SessionStore>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            session,
        })
    }

    /// The session store this handle reads tokens from.
    #[must_use]
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// The absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        let token = self.session.token();
        authorize(self.http.request(method, &url), &url, token.as_deref())
    }

    /// Issue a prepared request, logging it and mapping non-success statuses
    /// into [`ApiError::Status`] with the server's message when present.
    async fn execute(
        &self,
        builder: RequestBuilder,
        method: &Method,
        path: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let start = Instant::now();

        debug!(
            request_id = %request_id,
            method = %method,
            path = %path,
            "Issuing request"
        );

        let response = builder.send().await?;
        let latency = start.elapsed();
        let status = response.status();

        match status.as_u16() {
            200..=299 => {
                info!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    status = %status.as_u16(),
                    latency_ms = %latency.as_millis(),
                    "Request completed"
                );
                Ok(response)
            }
            code => {
                if (400..500).contains(&code) {
                    warn!(
                        request_id = %request_id,
                        method = %method,
                        path = %path,
                        status = %code,
                        latency_ms = %latency.as_millis(),
                        "Request rejected"
                    );
                } else {
                    error!(
                        request_id = %request_id,
                        method = %method,
                        path = %path,
                        status = %code,
                        latency_ms = %latency.as_millis(),
                        "Server error"
                    );
                }
                let message = response
                    .json::<ErrorBody>()
                    .await
                    .ok()
                    .and_then(|body| body.message);
                Err(ApiError::Status { status, message })
            }
        }
    }

    async fn into_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|err| ApiError::InvalidResponse(err.to_string()))
    }

    /// `GET path` returning a JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path);
        let response = self.execute(builder, &Method::GET, path).await?;
        Self::into_json(response).await
    }

    /// `GET path?query` returning a JSON body.
    pub async fn get_json_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path).query(query);
        let response = self.execute(builder, &Method::GET, path).await?;
        Self::into_json(response).await
    }

    /// `POST path` with a JSON body, returning a JSON body.
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::POST, path).json(body);
        let response = self.execute(builder, &Method::POST, path).await?;
        Self::into_json(response).await
    }

    /// `POST path` with a JSON body, discarding the response body.
    pub async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, path).json(body);
        self.execute(builder, &Method::POST, path).await?;
        Ok(())
    }

    /// `PUT path` with a JSON body, returning a JSON body.
    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::PUT, path).json(body);
        let response = self.execute(builder, &Method::PUT, path).await?;
        Self::into_json(response).await
    }

    /// `DELETE path`, discarding the response body.
    pub async fn delete_unit(&self, path: &str) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, path);
        self.execute(builder, &Method::DELETE, path).await?;
        Ok(())
    }
}
