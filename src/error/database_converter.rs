use crate::error::AppError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Utility for converting database errors into `AppError::Connectivity`.
///
/// The dashboard does not recover from any store failure, so every diesel
/// error maps to the same variant; the converter only shapes the message so
/// logs say which kind of failure happened.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an `AppError`.
    ///
    /// # Arguments
    /// * `error` - The Diesel error to convert
    /// * `operation` - Description of the database operation that failed
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                let detail = format!("{}: {}", Self::describe_kind(&kind), info.message());
                AppError::Connectivity {
                    operation: operation.to_string(),
                    source: anyhow::Error::msg(detail),
                }
            }
            other => AppError::Connectivity {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    /// Short label for a database error kind.
    fn describe_kind(kind: &DatabaseErrorKind) -> &'static str {
        match kind {
            DatabaseErrorKind::UniqueViolation => "Unique constraint violation",
            DatabaseErrorKind::ForeignKeyViolation => "Foreign key constraint violation",
            DatabaseErrorKind::NotNullViolation => "Not null constraint violation",
            DatabaseErrorKind::CheckViolation => "Check constraint violation",
            DatabaseErrorKind::ClosedConnection => "Connection closed",
            DatabaseErrorKind::SerializationFailure => "Serialization failure",
            DatabaseErrorKind::ReadOnlyTransaction => "Read-only transaction",
            _ => "Database error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockDatabaseErrorInfo {
        message: String,
    }

    impl diesel::result::DatabaseErrorInformation for MockDatabaseErrorInfo {
        fn message(&self) -> &str {
            &self.message
        }

        fn details(&self) -> Option<&str> {
            None
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            None
        }

        fn column_name(&self) -> Option<&str> {
            None
        }

        fn constraint_name(&self) -> Option<&str> {
            None
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    #[test]
    fn test_convert_foreign_key_violation() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ForeignKeyViolation,
            Box::new(MockDatabaseErrorInfo {
                message: "insert on table \"products\" violates foreign key".to_string(),
            }),
        );
        let result = DatabaseErrorConverter::convert_diesel_error(error, "insert product");

        match result {
            AppError::Connectivity { operation, source } => {
                assert_eq!(operation, "insert product");
                assert!(source.to_string().starts_with("Foreign key constraint violation"));
            }
            other => panic!("Expected Connectivity error, got {:?}", other),
        }
    }

    #[test]
    fn test_convert_not_found_is_connectivity() {
        let result = DatabaseErrorConverter::convert_diesel_error(DieselError::NotFound, "ping");
        assert!(matches!(result, AppError::Connectivity { .. }));
    }
}
