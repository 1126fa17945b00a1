//! Error types for browser-driven tests

use std::path::{Path, PathBuf};
use thiserror::Error;

pub type UiResult<T> = Result<T, UiError>;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("Playwright not found. Install with: npx playwright install")]
    PlaywrightNotFound,

    /// A run that failed inside the browser, with the failure screenshot
    /// when one was captured
    #[error("browser run '{name}' failed: {message}")]
    Run {
        name: String,
        message: String,
        screenshot: Option<PathBuf>,
    },

    /// The script died without reporting a structured result
    #[error("browser script '{name}' produced no result\nstdout: {stdout}\nstderr: {stderr}")]
    Script {
        name: String,
        stdout: String,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl UiError {
    /// Failure screenshot captured for this error, if any
    #[must_use]
    pub fn screenshot(&self) -> Option<&Path> {
        match self {
            Self::Run { screenshot, .. } => screenshot.as_deref(),
            _ => None,
        }
    }
}
