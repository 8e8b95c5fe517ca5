//! Defines the lifecycle data passed between the CLI and the client handlers.
//!
//! Includes:
//! - `Action`: the closed set of lifecycle actions this client answers to.
//! - `LifecycleEnv`: the invocation context supplied by the host after the action name.
//! - `host_log_level`: maps the host's log level names onto tracing filters.
//!
//! The log level mapping is best effort: it accepts the usual level names
//! (including `WARNING`, `CRITICAL` and `FATAL`) and ignores anything else.

use crate::error::{AppError, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// A lifecycle action selected by the host at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Install,
    Configure,
}

impl Action {
    /// Every action, in the order they are listed to the host.
    pub const ALL: [Action; 2] = [Action::Install, Action::Configure];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Install => "install",
            Action::Configure => "configure",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Action::ALL
            .into_iter()
            .find(|action| action.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| AppError::UnknownAction(name.to_string()))
    }
}

/// Invocation context handed to every lifecycle handler.
///
/// The host appends these positionally after the action name. Values are
/// carried as given; the handlers never open the paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleEnv {
    /// Command description file prepared by the host.
    pub command_json: Option<PathBuf>,
    /// Base directory of the service package.
    pub base_dir: Option<PathBuf>,
    /// Where the host expects structured output to be written.
    pub structured_output: Option<PathBuf>,
    /// Host log level name (`DEBUG`, `INFO`, `WARNING`, ...).
    pub log_level: Option<String>,
    /// Scratch directory.
    pub tmp_dir: Option<PathBuf>,
    /// Any further values the host appends, kept as given.
    pub extra: Vec<String>,
}

impl LifecycleEnv {
    /// Tracing filter implied by the host's log level, if it names one we know.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        self.log_level.as_deref().and_then(host_log_level)
    }
}

/// Maps a host log level name onto a tracing `LevelFilter`.
///
/// Returns `None` for names it does not recognise.
pub fn host_log_level(name: &str) -> Option<LevelFilter> {
    match name.trim().to_ascii_uppercase().as_str() {
        "TRACE" => Some(LevelFilter::TRACE),
        "DEBUG" => Some(LevelFilter::DEBUG),
        "INFO" => Some(LevelFilter::INFO),
        "WARN" | "WARNING" => Some(LevelFilter::WARN),
        // tracing has nothing above ERROR
        "ERROR" | "CRITICAL" | "FATAL" => Some(LevelFilter::ERROR),
        _ => None,
    }
}
