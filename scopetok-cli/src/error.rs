//! Errors reported by the binaries.
//!
//! Only the edges of a run can fail: reading stdin, loading configuration, installing the
//! logger and serializing output. Resolution itself never fails.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum CliError {
    Io(io::Error),
    Config(scopetok_config::ConfigError),
    LogLevel(String),
    Logger(log::SetLoggerError),
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(err) => write!(f, "failed to read input: {}", err),
            CliError::Config(err) => write!(f, "invalid configuration: {}", err),
            CliError::LogLevel(level) => write!(f, "invalid log level: {:?}", level),
            CliError::Logger(err) => write!(f, "failed to set up logging: {}", err),
            CliError::Json(err) => write!(f, "failed to serialize output: {}", err),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(err) => Some(err),
            CliError::Config(err) => Some(err),
            CliError::LogLevel(_) => None,
            CliError::Logger(err) => Some(err),
            CliError::Json(err) => Some(err),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<scopetok_config::ConfigError> for CliError {
    fn from(err: scopetok_config::ConfigError) -> Self {
        CliError::Config(err)
    }
}

impl From<log::SetLoggerError> for CliError {
    fn from(err: log::SetLoggerError) -> Self {
        CliError::Logger(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_describe_the_input() {
        let err = CliError::from(io::Error::new(io::ErrorKind::InvalidData, "closed"));
        assert_eq!(err.to_string(), "failed to read input: closed");
    }

    #[test]
    fn log_level_errors_quote_the_value() {
        assert_eq!(
            CliError::LogLevel("loud".into()).to_string(),
            r#"invalid log level: "loud""#
        );
    }
}
