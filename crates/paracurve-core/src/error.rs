use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurveError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

pub type Result<T> = std::result::Result<T, CurveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CurveError::InvalidConfig("workers must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: workers must be at least 1"
        );

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: CurveError = io.into();
        assert!(matches!(err, CurveError::Io(_)));
    }
}
