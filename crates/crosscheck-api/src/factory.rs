//! Tagged dispatch from resource kind to typed client
//!
//! The set of resource kinds is closed at compile time; there is no plugin
//! loading, only a match.

use std::str::FromStr;

use crosscheck_core::ApiSettings;

use crate::analytics::AnalyticsClient;
use crate::client::HttpClient;
use crate::error::ApiResult;
use crate::product::ProductClient;
use crate::user::UserClient;

/// Resource kinds the factory can construct clients for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientKind {
    Product,
    User,
    Analytics,
}

impl ClientKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::User => "user",
            Self::Analytics => "analytics",
        }
    }
}

impl std::fmt::Display for ClientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown client kind: {0}")]
pub struct UnknownKindError(String);

impl FromStr for ClientKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "product" => Ok(Self::Product),
            "user" => Ok(Self::User),
            "analytics" => Ok(Self::Analytics),
            other => Err(UnknownKindError(other.to_string())),
        }
    }
}

/// A constructed typed client
#[derive(Debug, Clone)]
pub enum ApiClient {
    Product(ProductClient),
    User(UserClient),
    Analytics(AnalyticsClient),
}

impl ApiClient {
    #[must_use]
    pub const fn kind(&self) -> ClientKind {
        match self {
            Self::Product(_) => ClientKind::Product,
            Self::User(_) => ClientKind::User,
            Self::Analytics(_) => ClientKind::Analytics,
        }
    }

    #[must_use]
    pub fn into_product(self) -> Option<ProductClient> {
        match self {
            Self::Product(client) => Some(client),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_user(self) -> Option<UserClient> {
        match self {
            Self::User(client) => Some(client),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_analytics(self) -> Option<AnalyticsClient> {
        match self {
            Self::Analytics(client) => Some(client),
            _ => None,
        }
    }
}

/// Constructs typed clients wired to the process-wide API settings
#[derive(Debug, Clone)]
pub struct ApiClientFactory {
    settings: ApiSettings,
}

impl ApiClientFactory {
    #[must_use]
    pub fn new(settings: &ApiSettings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }

    /// Construct the client for a resource kind
    ///
    /// # Errors
    ///
    /// Returns error if the transport cannot be constructed
    pub fn create(&self, kind: ClientKind) -> ApiResult<ApiClient> {
        let http = HttpClient::new(&self.settings)?;

        Ok(match kind {
            ClientKind::Product => ApiClient::Product(ProductClient::new(http)),
            ClientKind::User => ApiClient::User(UserClient::new(http)),
            ClientKind::Analytics => ApiClient::Analytics(AnalyticsClient::new(http)),
        })
    }

    /// # Errors
    ///
    /// Returns error if the transport cannot be constructed
    pub fn product(&self) -> ApiResult<ProductClient> {
        Ok(ProductClient::new(HttpClient::new(&self.settings)?))
    }

    /// # Errors
    ///
    /// Returns error if the transport cannot be constructed
    pub fn user(&self) -> ApiResult<UserClient> {
        Ok(UserClient::new(HttpClient::new(&self.settings)?))
    }

    /// # Errors
    ///
    /// Returns error if the transport cannot be constructed
    pub fn analytics(&self) -> ApiResult<AnalyticsClient> {
        Ok(AnalyticsClient::new(HttpClient::new(&self.settings)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ApiSettings {
        ApiSettings {
            base_url: "http://localhost:8080".to_string(),
            timeout_ms: 1_000,
        }
    }

    #[test]
    fn create_dispatches_on_kind() {
        let factory = ApiClientFactory::new(&settings());

        for kind in [ClientKind::Product, ClientKind::User, ClientKind::Analytics] {
            let client = factory.create(kind).unwrap();
            assert_eq!(client.kind(), kind);
        }
    }

    #[test]
    fn accessors_match_variant() {
        let factory = ApiClientFactory::new(&settings());

        assert!(factory.create(ClientKind::Product).unwrap().into_product().is_some());
        assert!(factory.create(ClientKind::Product).unwrap().into_user().is_none());
        assert!(factory.create(ClientKind::User).unwrap().into_user().is_some());
        assert!(factory.create(ClientKind::Analytics).unwrap().into_analytics().is_some());
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("product".parse::<ClientKind>().unwrap(), ClientKind::Product);
        assert_eq!("User".parse::<ClientKind>().unwrap(), ClientKind::User);
        assert_eq!("ANALYTICS".parse::<ClientKind>().unwrap(), ClientKind::Analytics);
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let err = "inventory".parse::<ClientKind>().unwrap_err();
        assert!(err.to_string().contains("inventory"));
    }
}
