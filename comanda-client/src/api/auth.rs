//! Auth API

use shared::client::{LoginRequest, LoginResponse, OwnerUpdate, RegisterRequest, UserInfo};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    // ========== Auth API ==========

    /// Login with username and password
    ///
    /// The returned token is not stored automatically; pass it back via
    /// [`HttpClient::set_token`] or keep a client built with
    /// `ClientConfig::with_token`.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        self.post(
            "/users/login",
            &LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    /// Register a new owner account
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<LoginResponse> {
        self.post("/users/register", request).await
    }

    /// Update the authenticated owner's profile
    pub async fn update_owner(&self, update: &OwnerUpdate) -> ClientResult<UserInfo> {
        self.patch("/users/update-owner", update).await
    }

    /// Drop the auth token
    pub fn logout(&mut self) {
        self.set_token(None);
    }
}
