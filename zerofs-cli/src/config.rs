//! CLI configuration
//!
//! Log levels for the CLI itself and for the file system layer.

use tracing::Level;

/// Log target of file system events (see `zerofs::LoggedFs`)
pub use zerofs::LOG_TARGET as VFS_TARGET;
/// Log target of the CLI
pub const CLI_TARGET: &str = "zerofs::cli";

/// CLI log configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub vfs: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::INFO,
            vfs: None,
        }
    }
}

impl LogConfig {
    /// Build from a `-v` count
    pub fn from_verbosity(verbose: u8) -> Self {
        let global = match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self { global, vfs: None }
    }

    pub fn with_vfs(mut self, level: Option<Level>) -> Self {
        self.vfs = level;
        self
    }

    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        match target {
            VFS_TARGET => self.vfs.unwrap_or(self.global),
            _ => self.global,
        }
    }
}

/// Parse log level string
pub fn parse_level(s: &str) -> Option<Level> {
    match s.to_lowercase().as_str() {
        "silent" => Some(Level::ERROR), // silent = only errors
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

/// `--log-vfs` value parser
pub fn parse_level_arg(s: &str) -> Result<Level, String> {
    parse_level(s).ok_or_else(|| {
        format!("unknown log level '{s}' (expected silent, error, warn, info, debug or trace)")
    })
}
