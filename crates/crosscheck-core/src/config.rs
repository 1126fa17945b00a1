//! Layered test-run configuration: TOML file plus environment overrides

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Process-wide settings, loaded once at test start and shared read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// API client settings
    #[serde(default)]
    pub api: ApiSettings,

    /// Browser session settings
    #[serde(default)]
    pub browser: BrowserSettings,
}

/// Settings for the HTTP client layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the API under test
    #[serde(default = "default_api_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Settings for browser-driven tests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserSettings {
    /// Browser engine (or branded channel) to launch
    #[serde(default)]
    pub kind: BrowserKind,

    /// Run without a visible window
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Base URL of the web application under test
    #[serde(default = "default_ui_base_url")]
    pub base_url: String,

    /// Viewport dimensions
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: u32,

    /// Default timeout applied to every page action, in milliseconds
    #[serde(default = "default_action_timeout_ms")]
    pub default_timeout_ms: u64,

    /// Delay inserted between browser actions, in milliseconds (0 = off)
    #[serde(default)]
    pub slow_mo_ms: u64,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            kind: BrowserKind::default(),
            headless: default_headless(),
            base_url: default_ui_base_url(),
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            default_timeout_ms: default_action_timeout_ms(),
            slow_mo_ms: 0,
        }
    }
}

fn default_api_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_headless() -> bool {
    true
}

fn default_ui_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_viewport_width() -> u32 {
    1280
}

fn default_viewport_height() -> u32 {
    800
}

fn default_action_timeout_ms() -> u64 {
    30_000
}

/// Supported browser engines and branded channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    #[default]
    Chromium,
    Chrome,
    Edge,
    Firefox,
    Webkit,
}

impl BrowserKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chromium => "chromium",
            Self::Chrome => "chrome",
            Self::Edge => "edge",
            Self::Firefox => "firefox",
            Self::Webkit => "webkit",
        }
    }
}

impl std::fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrowserKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chromium" => Ok(Self::Chromium),
            "chrome" => Ok(Self::Chrome),
            "edge" | "msedge" => Ok(Self::Edge),
            "firefox" => Ok(Self::Firefox),
            "webkit" => Ok(Self::Webkit),
            other => Err(ConfigError::UnknownBrowser(other.to_string())),
        }
    }
}

/// Environment keys recognized by [`Settings::overlaid`].
const ENV_API_BASE_URL: &str = "CROSSCHECK_BASE_URL";
const ENV_API_TIMEOUT_MS: &str = "CROSSCHECK_TIMEOUT_MS";
const ENV_BROWSER: &str = "CROSSCHECK_BROWSER";
const ENV_HEADLESS: &str = "CROSSCHECK_HEADLESS";
const ENV_UI_BASE_URL: &str = "CROSSCHECK_UI_BASE_URL";

impl Settings {
    /// Load settings from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from the default locations, falling back to built-in defaults
    ///
    /// # Errors
    ///
    /// Returns error if a config file exists but cannot be read or parsed
    pub fn load_default() -> Result<Self, ConfigError> {
        let candidates = ["crosscheck.toml", ".crosscheck.toml"];

        for name in candidates {
            let path = Path::new(name);
            if path.exists() {
                return Self::load(path);
            }
        }

        Ok(Self::default())
    }

    /// Load from the default locations and apply process-environment overrides
    ///
    /// # Errors
    ///
    /// Returns error if the file layer fails or an override value is malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load_default()?.overlaid(|key| std::env::var(key).ok())
    }

    /// Apply environment-style overrides through an injected lookup.
    ///
    /// The lookup indirection keeps the layering testable without mutating
    /// the process environment.
    ///
    /// # Errors
    ///
    /// Returns error if an override value fails to parse for its key
    pub fn overlaid(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(url) = lookup(ENV_API_BASE_URL) {
            self.api.base_url = url;
        }
        if let Some(raw) = lookup(ENV_API_TIMEOUT_MS) {
            self.api.timeout_ms = raw.parse().map_err(|_| ConfigError::Env {
                key: ENV_API_TIMEOUT_MS,
                value: raw,
            })?;
        }
        if let Some(raw) = lookup(ENV_BROWSER) {
            self.browser.kind = raw.parse()?;
        }
        if let Some(raw) = lookup(ENV_HEADLESS) {
            self.browser.headless = parse_flag(&raw).ok_or(ConfigError::Env {
                key: ENV_HEADLESS,
                value: raw,
            })?;
        }
        if let Some(url) = lookup(ENV_UI_BASE_URL) {
            self.browser.base_url = url;
        }
        Ok(self)
    }

    /// Create example config file content
    pub fn example() -> &'static str {
        r#"# crosscheck configuration

[api]
# API under test
base_url = "http://localhost:8080"
# Per-request timeout in milliseconds
timeout_ms = 10000

[browser]
# chromium | chrome | edge | firefox | webkit
kind = "chromium"
headless = true
base_url = "http://localhost:3000"
viewport_width = 1280
viewport_height = 800
default_timeout_ms = 30000
# slow_mo_ms = 500

# Any value can also be overridden per run:
#   CROSSCHECK_BASE_URL, CROSSCHECK_TIMEOUT_MS, CROSSCHECK_BROWSER,
#   CROSSCHECK_HEADLESS, CROSSCHECK_UI_BASE_URL
"#
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read {0}: {1}")]
    Io(PathBuf, String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid value '{value}' for {key}")]
    Env { key: &'static str, value: String },
    #[error("Unknown browser kind: {0}")]
    UnknownBrowser(String),
}
