use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] yieldscout_core::ValidationError),

    #[error(transparent)]
    Fetch(#[from] yieldscout_core::FetchError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Fetch(_) => 3,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yieldscout_core::{FetchError, QueryError, ValidationError};

    #[test]
    fn input_errors_exit_before_fetch_errors() {
        let input = CliError::from(ValidationError::InvalidPageSize);
        let fetch = CliError::from(FetchError::Query(QueryError::transport("connection reset")));

        assert_eq!(input.exit_code(), 2);
        assert_eq!(fetch.exit_code(), 3);
        assert!(fetch.to_string().contains("connection reset"));
    }
}
