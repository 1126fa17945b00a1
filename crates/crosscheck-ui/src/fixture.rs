//! Per-test lifecycle for browser suites

use crosscheck_core::config::ConfigError;
use crosscheck_core::logging::{self, LogError};
use crosscheck_core::{Settings, TestLogger};

use crate::error::{UiError, UiResult};
use crate::pages::{LoginPage, WebElementsPage};
use crate::session::BrowserSession;

#[derive(Debug, thiserror::Error)]
pub enum UiFixtureError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Log(#[from] LogError),
    #[error(transparent)]
    Ui(#[from] UiError),
}

/// Per-test resources for browser suites
pub struct UiFixture {
    settings: Settings,
    logger: TestLogger,
    session: BrowserSession,
}

impl UiFixture {
    /// Load settings (file + environment), create the per-test logger and
    /// the browser session.
    ///
    /// # Errors
    ///
    /// Returns error if settings cannot be loaded, the log file cannot be
    /// created, or Playwright is unavailable
    pub fn new(test_name: &str) -> Result<Self, UiFixtureError> {
        logging::init();

        let settings = Settings::from_env()?;
        let logger = TestLogger::create(test_name)?;
        let session = BrowserSession::new(settings.browser.clone())?;

        logger.info(&format!(
            "ui fixture ready: {} against {}",
            settings.browser.kind, settings.browser.base_url
        ));

        Ok(Self {
            settings,
            logger,
            session,
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
    pub fn session(&self) -> &BrowserSession {
        &self.session
    }

    #[must_use]
    pub fn login_page(&self) -> LoginPage<'_> {
        LoginPage::new(&self.session, &self.logger)
    }

    #[must_use]
    pub fn web_elements_page(&self) -> WebElementsPage<'_> {
        WebElementsPage::new(&self.session, &self.logger)
    }
}

/// Run a test body inside a UI fixture, logging start and outcome.
///
/// Failures propagate unchanged; the failure screenshot path, when one was
/// captured, is logged as a pointer, not consumed.
///
/// # Errors
///
/// Returns fixture construction failures, or the test body's own error
pub fn with_ui_fixture<T>(
    test_name: &str,
    f: impl FnOnce(&UiFixture) -> UiResult<T>,
) -> Result<T, UiFixtureError> {
    let fixture = UiFixture::new(test_name)?;
    fixture.logger.info("test started");

    match f(&fixture) {
        Ok(value) => {
            fixture.logger.info("test passed");
            Ok(value)
        }
        Err(e) => {
            if let Some(shot) = e.screenshot() {
                fixture
                    .logger
                    .error(&format!("test failed: {e} (screenshot: {})", shot.display()));
            } else {
                fixture.logger.error(&format!("test failed: {e}"));
            }
            Err(e.into())
        }
    }
}
