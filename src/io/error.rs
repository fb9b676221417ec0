//! Error types for solver and survey operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver and survey operations
#[derive(Debug)]
pub enum SolverError {
    /// Parameter validation failed before any search began
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A tile description in the input could not be parsed
    TileParse {
        /// One-based input line number
        line: usize,
        /// Description of what's wrong with the line
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::TileParse { line, reason } => {
                write!(f, "Malformed tile on line {line}: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a tile parse error
pub fn tile_parse_error(line: usize, reason: &impl ToString) -> SolverError {
    SolverError::TileParse {
        line,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("maximum_size", &0, &"must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'maximum_size' = '0': must be at least 1"
        );
    }

    #[test]
    fn test_tile_parse_display() {
        let err = tile_parse_error(3, &"expected 4 colors, found 2");
        assert_eq!(
            err.to_string(),
            "Malformed tile on line 3: expected 4 colors, found 2"
        );
    }
}
