//! crosscheck-api: typed HTTP clients with uniform response classification
//!
//! The [`HttpClient`] base dispatches JSON requests and maps every outcome to
//! either a typed value or one classified [`ApiError`]. The typed clients
//! (product, user, analytics) fix paths and payload types on top of it, and
//! [`ApiClientFactory`] wires them to process-wide settings.

pub mod analytics;
pub mod builder;
pub mod client;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod product;
pub mod user;

pub use analytics::AnalyticsClient;
pub use builder::ProductBuilder;
pub use client::{HttpClient, RawResponse};
pub use error::{ApiError, ApiResult, ErrorKind, classify_failure};
pub use factory::{ApiClient, ApiClientFactory, ClientKind, UnknownKindError};
pub use fixture::{ApiFixture, FixtureError, with_fixture};
pub use product::{ProductClient, TEST_MARKER_HEADER};
pub use user::UserClient;
