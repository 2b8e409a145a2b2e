//! Configuration error types.
//!
//! The simulation itself is total; errors only arise when an external
//! configuration document is parsed or validated.

use std::fmt;

/// Error produced while loading or validating [`crate::Settings`] / [`crate::Tuning`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for the expected shape.
    Parse(String),

    /// A numeric value is outside its accepted range.
    OutOfRange {
        /// Name of the field (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f64,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "invalid configuration: {}", msg),
            ConfigError::OutOfRange {
                name,
                value,
                expected,
            } => write!(
                f,
                "configuration value '{}' = {} is out of range (expected {})",
                name, value, expected
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_range() {
        let err = ConfigError::OutOfRange {
            name: "bonus_chance",
            value: 1.5,
            expected: "0.0 ..= 1.0",
        };
        let msg = err.to_string();
        assert!(msg.contains("bonus_chance"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn test_from_serde_error() {
        let err: ConfigError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
