//! Per-test lifecycle for API suites
//!
//! A fixture owns the settings, the per-test logger and the shared transport.
//! Teardown is RAII: dropping the fixture releases everything on every exit
//! path, including panics.

use crosscheck_core::config::ConfigError;
use crosscheck_core::logging::{self, LogError};
use crosscheck_core::{Settings, TestLogger};

use crate::analytics::AnalyticsClient;
use crate::client::HttpClient;
use crate::error::ApiError;
use crate::product::ProductClient;
use crate::user::UserClient;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Log(#[from] LogError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Per-test resources for API suites
pub struct ApiFixture {
    settings: Settings,
    logger: TestLogger,
    http: HttpClient,
}

impl ApiFixture {
    /// Load settings (file + environment), create the per-test logger and
    /// the shared transport.
    ///
    /// # Errors
    ///
    /// Returns error if settings cannot be loaded, the log file cannot be
    /// created, or the transport cannot be constructed
    pub fn new(test_name: &str) -> Result<Self, FixtureError> {
        logging::init();

        let settings = Settings::from_env()?;
        let logger = TestLogger::create(test_name)?;
        let http = HttpClient::new(&settings.api)?;

        logger.info(&format!("api fixture ready against {}", settings.api.base_url));

        Ok(Self {
            settings,
            logger,
            http,
        })
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn logger(&self) -> &TestLogger {
        &self.logger
    }

    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Product client over the fixture's shared transport
    #[must_use]
    pub fn products(&self) -> ProductClient {
        ProductClient::new(self.http.clone())
    }

    /// User client over the fixture's shared transport
    #[must_use]
    pub fn users(&self) -> UserClient {
        UserClient::new(self.http.clone())
    }

    /// Analytics client over the fixture's shared transport
    #[must_use]
    pub fn analytics(&self) -> AnalyticsClient {
        AnalyticsClient::new(self.http.clone())
    }
}

/// Run a test body inside a fixture, logging start and outcome.
///
/// Failures propagate unchanged; the log entry is a side effect, never a
/// replacement for the original error.
///
/// # Errors
///
/// Returns fixture construction failures, or the test body's own error
pub fn with_fixture<T>(
    test_name: &str,
    f: impl FnOnce(&ApiFixture) -> Result<T, ApiError>,
) -> Result<T, FixtureError> {
    let fixture = ApiFixture::new(test_name)?;
    fixture.logger.info("test started");

    match f(&fixture) {
        Ok(value) => {
            fixture.logger.info("test passed");
            Ok(value)
        }
        Err(e) => {
            fixture.logger.error(&format!("test failed: {e}"));
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, ErrorKind};

    #[test]
    fn fixture_hands_out_clients_over_one_transport() {
        let fixture = ApiFixture::new("fixture_hands_out_clients").unwrap();

        let _ = fixture.products();
        let _ = fixture.users();
        let _ = fixture.analytics();

        assert!(fixture.logger().path().exists());
    }

    #[test]
    fn with_fixture_propagates_the_body_error() {
        let result: Result<(), FixtureError> =
            with_fixture("with_fixture_propagates", |_fixture| {
                Err(ApiError::NotFound {
                    message: "gone".to_string(),
                })
            });

        match result.unwrap_err() {
            FixtureError::Api(e) => assert_eq!(e.kind(), ErrorKind::NotFound),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn with_fixture_returns_the_body_value() {
        let value = with_fixture("with_fixture_returns", |_fixture| Ok(21 * 2)).unwrap();
        assert_eq!(value, 42);
    }
}
