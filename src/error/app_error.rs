use crate::error::DatabaseErrorConverter;
use diesel_async::pooled_connection::bb8::RunError;
use thiserror::Error;

/// Application-wide error type that represents all possible errors in the system.
///
/// `Connectivity` and `ConnectionPool` cover every failure of the remote store
/// and are never recovered. Rejected form input never becomes an `AppError`;
/// the UI reducer reports it as a notice instead.
#[derive(Error, Debug)]
pub enum AppError {
    /// Any remote store failure (network, authentication, malformed query)
    #[error("Remote store operation failed: {operation}")]
    Connectivity {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Connection pool checkout failure
    #[error("Connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Bad request error with descriptive message
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Template rendering failure
    #[error("Failed to render view")]
    Render {
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Whether this error came from talking to the remote store.
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            AppError::Connectivity { .. } | AppError::ConnectionPool { .. }
        )
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(error: diesel::result::Error) -> Self {
        DatabaseErrorConverter::convert_diesel_error(error, "database operation")
    }
}

impl From<RunError> for AppError {
    fn from(error: RunError) -> Self {
        AppError::ConnectionPool {
            source: anyhow::Error::from(error),
        }
    }
}

impl From<tera::Error> for AppError {
    fn from(error: tera::Error) -> Self {
        AppError::Render {
            source: anyhow::Error::from(error),
        }
    }
}

impl From<crate::config::error::ConfigError> for AppError {
    fn from(error: crate::config::error::ConfigError) -> Self {
        let key = error.field().unwrap_or("settings").to_string();
        AppError::Configuration {
            key,
            source: anyhow::Error::from(error),
        }
    }
}

impl From<crate::cache::CacheError> for AppError {
    fn from(error: crate::cache::CacheError) -> Self {
        AppError::Internal {
            source: anyhow::Error::from(error),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
