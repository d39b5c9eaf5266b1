//! Error types for grid_astar

use std::fmt;

/// Main error type for grid search
#[derive(Debug)]
pub enum AStarError {
    /// Grid dimensions, start/goal or blocked coordinates are unusable
    InvalidInput(String),
    /// Configuration could not be parsed or holds unusable values
    InvalidConfig(String),
    /// The goal cannot be reached (only reported by `AStarPlanner`)
    NoPath,
    /// I/O error
    IoError(std::io::Error),
    /// Visualization error
    VisualizationError(String),
}

impl fmt::Display for AStarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AStarError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AStarError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            AStarError::NoPath => write!(f, "No path found"),
            AStarError::IoError(e) => write!(f, "I/O error: {}", e),
            AStarError::VisualizationError(msg) => write!(f, "Visualization error: {}", msg),
        }
    }
}

impl std::error::Error for AStarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AStarError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AStarError {
    fn from(e: std::io::Error) -> Self {
        AStarError::IoError(e)
    }
}

impl From<toml::de::Error> for AStarError {
    fn from(e: toml::de::Error) -> Self {
        AStarError::InvalidConfig(e.to_string())
    }
}

/// Result type alias for grid search operations
pub type AStarResult<T> = Result<T, AStarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AStarError::InvalidInput("start (9, 9) is outside the grid".to_string());
        assert_eq!(format!("{}", err), "Invalid input: start (9, 9) is outside the grid");
        assert_eq!(format!("{}", AStarError::NoPath), "No path found");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AStarError = io_err.into();
        assert!(matches!(err, AStarError::IoError(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("orthogonal_cost = ").unwrap_err();
        let err: AStarError = toml_err.into();
        assert!(matches!(err, AStarError::InvalidConfig(_)));
    }
}
