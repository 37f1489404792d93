//! API gateway client
//!
//! Single chokepoint for outbound portal requests. Credential attachment
//! and expiry handling live here and nowhere else: feature wrappers never
//! touch the bearer token themselves.

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::auth::context::AuthContext;
use crate::config::PortalConfig;
use crate::error::{PortalError, Result};

/// Bearer-authenticated HTTP client for the portal API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth: Arc<AuthContext>,
}

impl ApiClient {
    /// Build a client against the configured base URL.
    pub fn new(config: &PortalConfig, auth: Arc<AuthContext>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PortalError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    /// The session owner this gateway reports rejections to.
    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::GET, path, None::<&()>).await
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method.clone(), &url);

        // Outbound interception: attach the credential if a session is
        // active; otherwise the request proceeds unauthenticated and the
        // server is the final arbiter.
        if let Some(token) = self.auth.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, %url, "dispatching portal request");

        let response = request
            .send()
            .await
            .map_err(|e| PortalError::Network(e.to_string()))?;
        let status = response.status();

        // Inbound interception: a rejected credential always ends the
        // session, even if a guard approved the view from stale local
        // state moments earlier.
        if status == StatusCode::UNAUTHORIZED {
            warn!(%url, "credential rejected, forcing logout");
            self.auth.invalidate();
            return Err(PortalError::Unauthorized(
                "credential rejected by the server".to_string(),
            ));
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PortalError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| PortalError::Parse(e.to_string()))
    }
}
