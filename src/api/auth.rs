//! Login exchange

use serde::{Deserialize, Serialize};

use crate::api::client::ApiClient;
use crate::auth::session::UserInfo;
use crate::error::Result;

/// Credential pair submitted to the login endpoint.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    /// Login name
    pub username: String,
    /// Password
    pub password: String,
}

/// Canonical login response: `{ token, user }`.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer credential
    pub token: String,
    /// Authenticated identity
    pub user: UserInfo,
}

impl ApiClient {
    /// Exchange credentials and install the resulting session.
    ///
    /// The only call site permitted to move the auth context to
    /// `Authenticated`; a rejected exchange surfaces as an error and the
    /// state stays anonymous.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserInfo> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.post("/auth/login", &request).await?;
        self.auth().login(response.user.clone(), response.token)?;
        Ok(response.user)
    }
}
