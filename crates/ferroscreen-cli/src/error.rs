use thiserror::Error;

use ferroscreen_core::{CoreError, ScreenError, SourceError, ValidationError};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("strict mode failed: warnings={warning_count}, errors={error_count}")]
    StrictModeViolation {
        warning_count: usize,
        error_count: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Core(CoreError::Serialization(_)) => 4,
            Self::Core(_) => 2,
            Self::Source(_) => 3,
            Self::StrictModeViolation { .. } => 5,
            Self::Io(_) => 10,
        }
    }
}

impl From<ValidationError> for CliError {
    fn from(error: ValidationError) -> Self {
        Self::Core(CoreError::Validation(error))
    }
}

impl From<ScreenError> for CliError {
    fn from(error: ScreenError) -> Self {
        Self::Core(CoreError::Screen(error))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        Self::Core(CoreError::Serialization(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_by_category() {
        let unknown: CliError = ScreenError::UnknownSymbol {
            name: String::from("Tesla"),
        }
        .into();
        assert_eq!(unknown.exit_code(), 2);
        assert_eq!(unknown.to_string(), "unknown stock 'Tesla'");

        let invalid: CliError = ValidationError::InvalidPeriod {
            value: String::from("2w"),
        }
        .into();
        assert_eq!(invalid.exit_code(), 2);

        let strict = CliError::StrictModeViolation {
            warning_count: 1,
            error_count: 0,
        };
        assert_eq!(strict.exit_code(), 5);

        assert_eq!(CliError::from(SourceError::internal("boom")).exit_code(), 3);
    }

    #[test]
    fn serialization_errors_exit_with_four() {
        let error = serde_json::from_str::<u32>("nope").expect_err("invalid json");
        assert_eq!(CliError::from(error).exit_code(), 4);
    }
}
