//! CLI formatted output
//!
//! Renders file metadata, entry lists and errors as text or JSON.

use serde::Serialize;
use std::fmt;
use std::time::SystemTime;
use zerofs::{FileInfo, FsError};

/// Output mode selected on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Output {
    #[default]
    Text,
    Json,
}

/// Metadata of one entry, ready for printing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoReport {
    pub name: String,
    pub size: u64,
    pub mode: String,
    pub mode_bits: u32,
    pub is_dir: bool,
    /// Seconds since the Unix epoch
    pub modified: u64,
}

impl InfoReport {
    pub fn from_info<I: FileInfo + ?Sized>(info: &I) -> Self {
        let modified = info
            .modified()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            name: info.name().to_string(),
            size: info.size(),
            mode: info.mode().to_string(),
            mode_bits: info.mode().bits(),
            is_dir: info.is_dir(),
            modified,
        }
    }
}

impl fmt::Display for InfoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.mode, self.size, self.name)
    }
}

/// Error as printed with `--json`
#[derive(Debug, Serialize)]
struct ErrorReport<'a> {
    op: &'static str,
    path: &'a str,
    kind: String,
    message: String,
}

impl Output {
    /// Render one entry's metadata
    pub fn info(&self, report: &InfoReport) -> serde_json::Result<String> {
        match self {
            Output::Text => Ok(report.to_string()),
            Output::Json => serde_json::to_string_pretty(report),
        }
    }

    /// Render a list of names or paths, one per line in text mode
    pub fn names(&self, names: &[String]) -> serde_json::Result<String> {
        match self {
            Output::Text => Ok(names.join("\n")),
            Output::Json => serde_json::to_string_pretty(names),
        }
    }

    /// Render a file system error
    pub fn error(&self, err: &FsError) -> String {
        match self {
            Output::Text => format!("Error: {}", err),
            Output::Json => {
                let report = ErrorReport {
                    op: err.op().as_str(),
                    path: err.path(),
                    kind: format!("{:?}", err.kind()),
                    message: err.to_string(),
                };
                serde_json::to_string_pretty(&report)
                    .unwrap_or_else(|e| format!("Error: {} ({})", err, e))
            }
        }
    }
}

/// Print a file system error to stderr
pub fn print_error(err: &FsError, output: Output) {
    eprintln!("{}", output.error(err));
}

#[cfg(test)]
mod tests {
    use super::*;
    use zerofs::{Op, RootDir, ROOT};

    #[test]
    fn test_root_report() {
        let report = InfoReport::from_info(&RootDir);
        assert_eq!(report.name, ROOT);
        assert_eq!(report.size, 0);
        assert_eq!(report.mode, "dr-xr-xr-x");
        assert_eq!(report.mode_bits, (1 << 31) | 0o555);
        assert!(report.is_dir);
        assert_eq!(report.modified, 0);
    }

    #[test]
    fn test_text_info() {
        let report = InfoReport::from_info(&RootDir);
        assert_eq!(Output::Text.info(&report).unwrap(), "dr-xr-xr-x 0 .");
    }

    #[test]
    fn test_json_info() {
        let report = InfoReport::from_info(&RootDir);
        let json = Output::Json.info(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], ".");
        assert_eq!(value["is_dir"], true);
        assert_eq!(value["mode"], "dr-xr-xr-x");
        assert_eq!(value["modified"], 0);
    }

    #[test]
    fn test_names() {
        assert_eq!(Output::Text.names(&[]).unwrap(), "");
        assert_eq!(Output::Json.names(&[]).unwrap(), "[]");
        let names = vec![".".to_string(), "a".to_string()];
        assert_eq!(Output::Text.names(&names).unwrap(), ".\na");
    }

    #[test]
    fn test_error_rendering() {
        let err = FsError::not_found(Op::Open, "nonexistent");
        assert_eq!(
            Output::Text.error(&err),
            "Error: open nonexistent: file does not exist"
        );

        let value: serde_json::Value =
            serde_json::from_str(&Output::Json.error(&err)).unwrap();
        assert_eq!(value["op"], "open");
        assert_eq!(value["path"], "nonexistent");
        assert_eq!(value["kind"], "NotFound");

        let err = FsError::is_a_directory(Op::Read, ROOT);
        let value: serde_json::Value =
            serde_json::from_str(&Output::Json.error(&err)).unwrap();
        assert_eq!(value["op"], "read");
        assert_eq!(value["kind"], "IsADirectory");
    }
}
