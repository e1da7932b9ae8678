use std::borrow::Cow;

#[derive(Clone, Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage backend error: {0}")]
    Backend(Cow<'static, str>),
    #[error("Transaction type mismatch: expected {0}")]
    TransactionTypeMismatch(&'static str),
}

#[cfg(any(feature = "sqlx-postgres", feature = "sqlx-sqlite"))]
impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Self::Backend(err.to_string().into())
    }
}
