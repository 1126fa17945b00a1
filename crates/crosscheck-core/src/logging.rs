//! Test-run logging: a console subscriber plus per-test log files
//!
//! Each test creates its own [`TestLogger`] and passes the handle to the
//! fixtures and page objects it uses. There is no process-global "current
//! logger" to swap.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

/// Default directory for per-test log files
const LOG_DIR: &str = "test-results/logs";

/// Install the process-wide console subscriber.
///
/// Honors `RUST_LOG`; defaults to `info`. Safe to call from every test —
/// only the first call installs anything.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Cannot create log file {0}: {1}")]
    Create(PathBuf, String),
}

/// Per-test logging handle writing to its own log file.
///
/// The handle owns a dedicated `tracing` dispatcher; events emitted through
/// the logging methods (or inside [`TestLogger::scoped`]) land in
/// `test-results/logs/<name>.log` and nowhere else.
pub struct TestLogger {
    name: String,
    path: PathBuf,
    dispatch: Dispatch,
}

impl TestLogger {
    /// Create a logger writing under the default log directory
    ///
    /// # Errors
    ///
    /// Returns error if the log directory or file cannot be created
    pub fn create(name: &str) -> Result<Self, LogError> {
        Self::create_in(Path::new(LOG_DIR), name)
    }

    /// Create a logger writing under `dir`
    ///
    /// # Errors
    ///
    /// Returns error if the log directory or file cannot be created
    pub fn create_in(dir: &Path, name: &str) -> Result<Self, LogError> {
        fs::create_dir_all(dir).map_err(|e| LogError::Create(dir.to_path_buf(), e.to_string()))?;

        let path = dir.join(format!("{}.log", sanitize(name)));
        let file =
            File::create(&path).map_err(|e| LogError::Create(path.clone(), e.to_string()))?;

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("debug"))
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .finish();

        Ok(Self {
            name: name.to_string(),
            path,
            dispatch: Dispatch::new(subscriber),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the log file backing this handle
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run a closure with this logger installed as the thread-default
    /// subscriber, so plain `tracing` macros inside it hit the test log.
    pub fn scoped<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    pub fn info(&self, message: &str) {
        self.scoped(|| tracing::info!("{message}"));
    }

    pub fn debug(&self, message: &str) {
        self.scoped(|| tracing::debug!("{message}"));
    }

    pub fn warn(&self, message: &str) {
        self.scoped(|| tracing::warn!("{message}"));
    }

    pub fn error(&self, message: &str) {
        self.scoped(|| tracing::error!("{message}"));
    }

    /// Mark the start of a named step within the test
    pub fn step(&self, step: &str) {
        self.scoped(|| tracing::info!(step, "step"));
    }
}

impl std::fmt::Debug for TestLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestLogger")
            .field("name", &self.name)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Keep log file names filesystem-safe
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
