//! Runtime configuration read from the environment.

use std::ffi::OsStr;
use std::path::Path;

const DEFAULT_LOG_DIR: &str = "logs";
const DEFAULT_LOG_FILE: &str = "grade_report.log";
const DEFAULT_FILTER: &str = "info";

/// Logging settings.
///
/// | Variable        | Meaning                                        |
/// |-----------------|------------------------------------------------|
/// | `RUST_LOG`      | stderr filter directive, default `info`        |
/// | `LOG_FILE_PATH` | optional JSON log file, rotated daily          |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub file_path: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            file_path: None,
        }
    }
}

impl LogConfig {
    /// Loads `.env` if present, then reads the environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var("LOG_FILE_PATH").ok(),
        )
    }

    fn from_vars(filter: Option<String>, file_path: Option<String>) -> Self {
        Self {
            filter: filter
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FILTER.to_string()),
            file_path: file_path.filter(|p| !p.trim().is_empty()),
        }
    }

    pub fn log_dir(&self) -> &Path {
        self.file_path
            .as_deref()
            .map(Path::new)
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new(DEFAULT_LOG_DIR))
    }

    pub fn log_file_name(&self) -> &OsStr {
        self.file_path
            .as_deref()
            .map(Path::new)
            .and_then(Path::file_name)
            .unwrap_or(OsStr::new(DEFAULT_LOG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let cfg = LogConfig::from_vars(None, None);
        assert_eq!(cfg, LogConfig::default());
        assert_eq!(cfg.log_dir(), Path::new("logs"));
        assert_eq!(cfg.log_file_name(), OsStr::new("grade_report.log"));
    }

    #[test]
    fn test_blank_values_fall_back() {
        let cfg = LogConfig::from_vars(Some("  ".into()), Some("".into()));
        assert_eq!(cfg.filter, "info");
        assert!(cfg.file_path.is_none());
    }

    #[test]
    fn test_log_path_split() {
        let cfg = LogConfig::from_vars(Some("debug".into()), Some("/var/log/grades/run.log".into()));
        assert_eq!(cfg.filter, "debug");
        assert_eq!(cfg.log_dir(), Path::new("/var/log/grades"));
        assert_eq!(cfg.log_file_name(), OsStr::new("run.log"));
    }

    #[test]
    fn test_bare_file_name_uses_default_dir() {
        let cfg = LogConfig::from_vars(None, Some("run.log".into()));
        assert_eq!(cfg.log_dir(), Path::new("logs"));
        assert_eq!(cfg.log_file_name(), OsStr::new("run.log"));
    }
}
