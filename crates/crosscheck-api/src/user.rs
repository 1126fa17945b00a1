//! User management and authentication client

use crosscheck_core::{ApiSettings, LoginRequest, LoginResponse, User};

use crate::client::HttpClient;
use crate::error::ApiResult;

/// Login and user listing operations
#[derive(Debug, Clone)]
pub struct UserClient {
    http: HttpClient,
}

impl UserClient {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    ///
    /// Returns error if the transport cannot be constructed
    pub fn from_settings(settings: &ApiSettings) -> ApiResult<Self> {
        Ok(Self::new(HttpClient::new(settings)?))
    }

    /// Authenticate with username and password.
    ///
    /// Wrong credentials surface as the access-denied kind, not a generic
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns the classified failure
    pub fn login(&self, credentials: &LoginRequest) -> ApiResult<LoginResponse> {
        self.http.post(credentials, "/api/users/login")
    }

    /// # Errors
    ///
    /// Returns the classified failure
    pub fn list(&self) -> ApiResult<Vec<User>> {
        self.http.get("/api/users")
    }
}
