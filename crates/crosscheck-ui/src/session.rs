//! Browser session execution
//!
//! Each run renders its script, executes it under `node`, and maps the
//! process outcome back to a typed result.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crosscheck_core::BrowserSettings;

use crate::error::{UiError, UiResult};
use crate::script::render_script;
use crate::step::Step;

const SCREENSHOT_DIR: &str = "test-results/screenshots";

/// Executes scripted browser runs against the configured engine.
///
/// The session owns its artifact directory; the browser itself lives only
/// for the duration of a single [`BrowserSession::run`].
#[derive(Debug, Clone)]
pub struct BrowserSession {
    settings: BrowserSettings,
    screenshot_dir: PathBuf,
}

impl BrowserSession {
    /// Create a session writing screenshots under the default artifact dir
    ///
    /// # Errors
    ///
    /// Returns error if Playwright is not installed or the artifact
    /// directory cannot be created
    pub fn new(settings: BrowserSettings) -> UiResult<Self> {
        Self::with_screenshot_dir(settings, PathBuf::from(SCREENSHOT_DIR))
    }

    /// Create a session with an explicit screenshot directory
    ///
    /// # Errors
    ///
    /// Returns error if Playwright is not installed or the artifact
    /// directory cannot be created
    pub fn with_screenshot_dir(
        settings: BrowserSettings,
        screenshot_dir: PathBuf,
    ) -> UiResult<Self> {
        check_playwright_installed()?;
        std::fs::create_dir_all(&screenshot_dir)?;

        Ok(Self {
            settings,
            screenshot_dir,
        })
    }

    #[must_use]
    pub fn settings(&self) -> &BrowserSettings {
        &self.settings
    }

    #[must_use]
    pub fn screenshot_dir(&self) -> &Path {
        &self.screenshot_dir
    }

    /// Render and execute one scripted browser run.
    ///
    /// On failure the generated script has already captured
    /// `<name>-failure.png`; the returned error carries its path.
    ///
    /// # Errors
    ///
    /// Returns the in-browser failure, or an IO error if `node` cannot run
    pub fn run(&self, name: &str, steps: &[Step]) -> UiResult<()> {
        let script = render_script(&self.settings, &self.screenshot_dir, name, steps);

        let temp = tempfile::tempdir()?;
        let script_path = temp.path().join("run.js");
        std::fs::write(&script_path, &script)?;

        debug!(name, script = %script_path.display(), "running browser script");

        let output = Command::new("node").arg(&script_path).output()?;
        if output.status.success() {
            return Ok(());
        }

        Err(parse_failure(name, &output.stdout, &output.stderr))
    }
}

/// Check that Playwright is reachable through npx
fn check_playwright_installed() -> UiResult<()> {
    let status = Command::new("npx")
        .args(["playwright", "--version"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) if status.success() => Ok(()),
        _ => Err(UiError::PlaywrightNotFound),
    }
}

/// Pull the structured failure line out of the script's stderr.
///
/// The generated script prints one JSON object on failure; anything else
/// (module resolution errors, crashes) falls through to the raw-output error.
fn parse_failure(name: &str, stdout: &[u8], stderr: &[u8]) -> UiError {
    let stderr_text = String::from_utf8_lossy(stderr);

    for line in stderr_text.lines().rev() {
        let Ok(value) = serde_json::from_str::<serde_json::Value>(line) else {
            continue;
        };
        if value.get("success").and_then(serde_json::Value::as_bool) == Some(false) {
            let message = value
                .get("error")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            let screenshot = value
                .get("screenshot")
                .and_then(serde_json::Value::as_str)
                .map(PathBuf::from);

            return UiError::Run {
                name: name.to_string(),
                message,
                screenshot,
            };
        }
    }

    UiError::Script {
        name: name.to_string(),
        stdout: String::from_utf8_lossy(stdout).into_owned(),
        stderr: stderr_text.into_owned(),
    }
}
