use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ReorderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("data path error: {0}")]
    DataPath(String),

    #[error("scenario error: {0}")]
    Scenario(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("selector: empty".into());
        assert_eq!(err.to_string(), "config validation error: selector: empty");
    }

    #[test]
    fn reorder_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: ReorderError = config_err.into();
        assert!(matches!(err, ReorderError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn reorder_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ReorderError = io_err.into();
        assert!(matches!(err, ReorderError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn reorder_error_other_variants() {
        let err = ReorderError::DataPath("segment 'x' is not an object".into());
        assert_eq!(err.to_string(), "data path error: segment 'x' is not an object");

        let err = ReorderError::Scenario("no rows".into());
        assert_eq!(err.to_string(), "scenario error: no rows");
    }
}
