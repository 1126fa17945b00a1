//! crosscheck-ui: Playwright-driven browser flows
//!
//! A browser run is one generated Node script: launch the configured engine,
//! execute the recorded steps, capture a screenshot on failure, close
//! everything. Page objects compose steps; [`BrowserSession`] executes them.

pub mod error;
pub mod fixture;
pub mod pages;
pub mod script;
pub mod session;
pub mod step;

pub use error::{UiError, UiResult};
pub use fixture::{UiFixture, UiFixtureError, with_ui_fixture};
pub use pages::{LoginPage, WebElementsPage};
pub use session::BrowserSession;
pub use step::Step;
