use std::borrow::Cow;
use wallet_owner_core::{UniqueField, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Wallet owner with the given {0} already exists")]
    AlreadyExists(UniqueField),
    #[error("Not found: {0}")]
    NotFound(Cow<'static, str>),
    #[error("Record corruption detected: {0}")]
    RecordCorruption(Cow<'static, str>),
    #[error("Storage error: {0}")]
    StorageError(Cow<'static, str>),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Unique-constraint violations are mapped back to the offending field, so that a duplicate that
/// slips past the store's pre-check is still reported as a duplicate.
#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(database_error) = &err {
            if database_error.is_unique_violation() {
                let detail = format!(
                    "{} {}",
                    database_error.message(),
                    database_error.constraint().unwrap_or_default()
                );
                for unique_field in [UniqueField::IdCard, UniqueField::WalletNumber] {
                    if detail.contains(unique_field.column_name()) {
                        return Self::AlreadyExists(unique_field);
                    }
                }
            }
        }
        Self::StorageError(err.to_string().into())
    }
}

impl From<storage_traits::Error> for Error {
    fn from(err: storage_traits::Error) -> Self {
        Self::StorageError(err.to_string().into())
    }
}
