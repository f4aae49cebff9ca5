#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("missing data: {0}")]
    MissingData(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl ReadError {
    /// Message shown in place of the requested data.
    ///
    /// Credential and rate limit problems get a specific hint, every other failure is reported
    /// with a generic message naming `subject`.
    #[must_use]
    pub fn user_message(&self, subject: &str) -> String {
        match self {
            ReadError::Storage(StorageError::Unauthorized(_)) => {
                "API key error: Please check your API credentials".to_string()
            }
            ReadError::Storage(StorageError::RateLimited) => {
                "API rate limit exceeded. Please try again later".to_string()
            }
            _ => format!("Failed to fetch {subject}. Please try again later."),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error("unauthorized ({0})")]
    Unauthorized(u16),
    #[error("rate limit exceeded")]
    RateLimited,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("failed to read cache entry: {0}")]
    Read(String),
    #[error("failed to write cache entry: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        ReadError::Storage(StorageError::Unauthorized(401)),
        "API key error: Please check your API credentials"
    )]
    #[case(
        ReadError::Storage(StorageError::Unauthorized(403)),
        "API key error: Please check your API credentials"
    )]
    #[case(
        ReadError::Storage(StorageError::RateLimited),
        "API rate limit exceeded. Please try again later"
    )]
    #[case(
        ReadError::Storage(StorageError::NoConnection),
        "Failed to fetch data. Please try again later."
    )]
    #[case(
        ReadError::Storage(StorageError::Status(500)),
        "Failed to fetch data. Please try again later."
    )]
    #[case(
        ReadError::MissingData("empty body".to_string()),
        "Failed to fetch data. Please try again later."
    )]
    #[case(
        ReadError::Other("foo".into()),
        "Failed to fetch data. Please try again later."
    )]
    fn test_read_error_user_message(#[case] error: ReadError, #[case] expected: &str) {
        assert_eq!(error.user_message("data"), expected);
    }

    #[test]
    fn test_read_error_from_storage_error() {
        assert!(matches!(
            ReadError::from(StorageError::NoConnection),
            ReadError::Storage(StorageError::NoConnection)
        ));
        assert!(matches!(
            ReadError::from(StorageError::Other("foo".into())),
            ReadError::Storage(StorageError::Other(error)) if error.to_string() == "foo"
        ));
    }
}
