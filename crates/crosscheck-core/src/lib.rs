//! crosscheck-core: shared plumbing for API and browser test suites
//!
//! This crate provides the process-wide settings, the wire models exchanged
//! with the system under test, random test-data generation, and the per-test
//! logging handle that the fixture layers pass around.

pub mod config;
pub mod logging;
pub mod models;
pub mod testdata;

pub use config::{ApiSettings, BrowserKind, BrowserSettings, ConfigError, Settings};
pub use logging::{LogError, TestLogger};
pub use models::{
    AnalyticsSummary, LoginRequest, LoginResponse, MergedProduct, Product, TopProduct, User,
};
pub use testdata::TestData;
