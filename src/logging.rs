//! Process-wide logger bootstrap.
//!
//! The registry reports through the [`log`] facade and stays silent until
//! the host installs a logger. Hosts without their own logging stack can
//! call [`init_logging`] to start a `flexi_logger` backend that writes to
//! stderr, or to rotating files when a directory is configured.
//!
//! Initialisation happens at most once per process. Repeating it with the
//! same configuration is a no-op; a different configuration is rejected.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const LOG_FILE_BASENAME: &str = "taskdeck";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: Option<PathBuf>,
    _handle: LoggerHandle,
}

/// Logger settings.
///
/// # Examples
///
/// ```
/// use taskdeck::logging::LoggingConfig;
///
/// let config: LoggingConfig = serde_json::from_str(r#"{ "level": "warn" }"#)
///     .expect("valid logging config");
/// assert_eq!(config.level, "warn");
/// assert!(config.log_dir.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn` (or `warning`) and `error`.
    pub level: String,
    /// Absolute directory for rotating log files. Logs go to stderr when
    /// unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_owned(),
            log_dir: None,
        }
    }
}

/// Errors returned while starting the logger.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The level string is not recognised.
    #[error("unsupported log level `{0}`; expected trace|debug|info|warn|error")]
    UnsupportedLevel(String),

    /// The log directory is not an absolute path.
    #[error("log directory must be an absolute path, got `{0}`")]
    RelativeLogDir(PathBuf),

    /// A logger with different settings is already running.
    #[error("logging already initialised with {active}; refusing to switch to {requested}")]
    AlreadyInitialised {
        /// Description of the running configuration.
        active: String,
        /// Description of the rejected configuration.
        requested: String,
    },

    /// The log directory could not be created.
    #[error("failed to create log directory `{path}`: {source}")]
    CreateLogDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The logging backend failed to start.
    #[error("failed to start logger: {0}")]
    Backend(#[from] flexi_logger::FlexiLoggerError),
}

/// Starts the process-wide logger.
///
/// # Errors
///
/// Returns [`LoggingError::UnsupportedLevel`] or
/// [`LoggingError::RelativeLogDir`] for invalid settings,
/// [`LoggingError::AlreadyInitialised`] when a logger with different
/// settings is running, and [`LoggingError::CreateLogDir`] or
/// [`LoggingError::Backend`] when the backend cannot start.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let level = normalize_level(&config.level)?;
    let log_dir = config
        .log_dir
        .as_deref()
        .map(normalize_log_dir)
        .transpose()?;

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(level, log_dir.as_deref()))?;
    if state.level != level || state.log_dir != log_dir {
        return Err(LoggingError::AlreadyInitialised {
            active: describe(state.level, state.log_dir.as_deref()),
            requested: describe(level, log_dir.as_deref()),
        });
    }
    Ok(())
}

/// Returns the active level and log directory, or `None` before
/// [`init_logging`] has succeeded.
#[must_use]
pub fn logging_status() -> Option<(&'static str, Option<PathBuf>)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.log_dir.clone()))
}

/// Returns `debug` for debug builds and `info` otherwise.
#[must_use]
pub const fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "info" }
}

fn start_logger(level: &'static str, log_dir: Option<&Path>) -> Result<LoggingState, LoggingError> {
    let logger = Logger::try_with_str(level)?;
    let handle = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|source| LoggingError::CreateLogDir {
                path: dir.to_path_buf(),
                source,
            })?;
            logger
                .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
                .start()?
        }
        None => logger.log_to_stderr().start()?,
    };

    info!(
        "event=logging_started level={level} target={}",
        log_dir.map_or_else(|| "stderr".to_owned(), |dir| dir.display().to_string())
    );

    Ok(LoggingState {
        level,
        log_dir: log_dir.map(Path::to_path_buf),
        _handle: handle,
    })
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        _ => Err(LoggingError::UnsupportedLevel(level.to_owned())),
    }
}

fn normalize_log_dir(dir: &Path) -> Result<PathBuf, LoggingError> {
    if !dir.is_absolute() {
        return Err(LoggingError::RelativeLogDir(dir.to_path_buf()));
    }
    Ok(dir.to_path_buf())
}

fn describe(level: &str, log_dir: Option<&Path>) -> String {
    match log_dir {
        Some(dir) => format!("level `{level}` at `{}`", dir.display()),
        None => format!("level `{level}` on stderr"),
    }
}
