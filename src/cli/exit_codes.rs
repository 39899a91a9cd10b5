//! CLI Exit Codes
//!
//! Standard exit codes for CLI operations and automation.

use crate::config::ConfigError;
use crate::core::{SectionError, SnapshotError};
use std::process::ExitCode;

/// Exit code constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCodes;

impl ExitCodes {
    /// Success
    pub const SUCCESS: u8 = 0;

    /// General error
    pub const ERROR: u8 = 1;

    /// Invalid arguments
    pub const INVALID_ARGS: u8 = 2;

    /// File not found
    pub const FILE_NOT_FOUND: u8 = 6;

    /// Permission denied
    pub const PERMISSION_DENIED: u8 = 7;

    /// Configuration error
    pub const CONFIG_ERROR: u8 = 8;

    /// Snapshot could not be parsed
    pub const SNAPSHOT_ERROR: u8 = 9;

    /// Unknown status bar section
    pub const VALIDATION_FAILED: u8 = 17;

    /// Internal error
    pub const INTERNAL_ERROR: u8 = 127;

    /// Every code in ascending order
    pub const ALL: [u8; 9] = [
        Self::SUCCESS,
        Self::ERROR,
        Self::INVALID_ARGS,
        Self::FILE_NOT_FOUND,
        Self::PERMISSION_DENIED,
        Self::CONFIG_ERROR,
        Self::SNAPSHOT_ERROR,
        Self::VALIDATION_FAILED,
        Self::INTERNAL_ERROR,
    ];
}

/// CLI operation result
#[derive(Debug)]
pub enum CliResult {
    /// Success with optional message
    Success(Option<String>),

    /// Error with code and message
    Error(u8, String),
}

impl CliResult {
    /// Success without output
    pub fn success() -> Self {
        Self::Success(None)
    }

    /// Success printing `msg`
    pub fn success_with_message(msg: impl Into<String>) -> Self {
        Self::Success(Some(msg.into()))
    }

    /// Missing input file
    pub fn file_not_found(path: &str) -> Self {
        Self::Error(ExitCodes::FILE_NOT_FOUND, format!("File not found: {}", path))
    }

    /// Get exit code
    pub fn code(&self) -> u8 {
        match self {
            Self::Success(_) => ExitCodes::SUCCESS,
            Self::Error(code, _) => *code,
        }
    }

    /// Get message
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(Some(msg)) => Some(msg),
            Self::Error(_, msg) => Some(msg),
            Self::Success(None) => None,
        }
    }

    /// Convert to ExitCode
    pub fn to_exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    /// Is success?
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl From<std::io::Error> for CliResult {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind;

        let code = match err.kind() {
            ErrorKind::NotFound => ExitCodes::FILE_NOT_FOUND,
            ErrorKind::PermissionDenied => ExitCodes::PERMISSION_DENIED,
            _ => ExitCodes::ERROR,
        };

        Self::Error(code, err.to_string())
    }
}

impl From<ConfigError> for CliResult {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => io.into(),
            other => Self::Error(ExitCodes::CONFIG_ERROR, other.to_string()),
        }
    }
}

impl From<SnapshotError> for CliResult {
    fn from(err: SnapshotError) -> Self {
        match err {
            SnapshotError::Io(io) => io.into(),
            SnapshotError::Json(json) => Self::Error(ExitCodes::SNAPSHOT_ERROR, json.to_string()),
        }
    }
}

impl From<SectionError> for CliResult {
    fn from(err: SectionError) -> Self {
        let code = match err {
            SectionError::UnknownSection(_) => ExitCodes::VALIDATION_FAILED,
            SectionError::PositionOutOfRange { .. } => ExitCodes::INVALID_ARGS,
        };
        Self::Error(code, err.to_string())
    }
}

impl From<serde_json::Error> for CliResult {
    fn from(err: serde_json::Error) -> Self {
        Self::Error(ExitCodes::INTERNAL_ERROR, err.to_string())
    }
}

/// Exit code description
pub fn exit_code_description(code: u8) -> &'static str {
    match code {
        0 => "Success",
        1 => "General error",
        2 => "Invalid arguments",
        6 => "File not found",
        7 => "Permission denied",
        8 => "Configuration error",
        9 => "Invalid snapshot",
        17 => "Validation failed",
        127 => "Internal error",
        _ => "Unknown error",
    }
}

/// Print exit code table
pub fn print_exit_codes() {
    println!("Exit Codes:");
    for code in ExitCodes::ALL {
        println!("  {:>3}  {}", code, exit_code_description(code));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_result() {
        let success = CliResult::success();
        assert!(success.is_success());
        assert_eq!(success.code(), 0);

        let error = CliResult::Error(ExitCodes::CONFIG_ERROR, "Bad config".to_string());
        assert!(!error.is_success());
        assert_eq!(error.code(), 8);
        assert_eq!(error.message(), Some("Bad config"));
    }

    #[test]
    fn test_from_io_error() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let result = CliResult::from(err);
        assert_eq!(result.code(), ExitCodes::FILE_NOT_FOUND);
    }

    #[test]
    fn test_from_section_error() {
        let result = CliResult::from(SectionError::UnknownSection("x".into()));
        assert_eq!(result.code(), ExitCodes::VALIDATION_FAILED);
        let result = CliResult::from(SectionError::PositionOutOfRange { position: 9, len: 6 });
        assert_eq!(result.code(), ExitCodes::INVALID_ARGS);
    }

    #[test]
    fn test_from_snapshot_error() {
        let err = crate::core::StatusSnapshot::from_json("{").unwrap_err();
        assert_eq!(CliResult::from(err).code(), ExitCodes::SNAPSHOT_ERROR);
    }

    #[test]
    fn test_code_table() {
        let table: Vec<(u8, &str)> = ExitCodes::ALL
            .iter()
            .map(|&code| (code, exit_code_description(code)))
            .collect();
        assert_eq!(
            table,
            vec![
                (0, "Success"),
                (1, "General error"),
                (2, "Invalid arguments"),
                (6, "File not found"),
                (7, "Permission denied"),
                (8, "Configuration error"),
                (9, "Invalid snapshot"),
                (17, "Validation failed"),
                (127, "Internal error"),
            ]
        );
        assert_eq!(exit_code_description(3), "Unknown error");
    }

    #[test]
    fn test_from_config_error() {
        let err = toml::from_str::<crate::config::AppConfig>("interface = 3").unwrap_err();
        assert_eq!(CliResult::from(ConfigError::from(err)).code(), ExitCodes::CONFIG_ERROR);
        assert_eq!(CliResult::from(ConfigError::NoConfigDir).code(), ExitCodes::CONFIG_ERROR);
    }
}
