use crate::{Error, Result};

/// Object-safe transaction trait used by impls of StorageDynT.  The Drop impl must roll back
/// anything that wasn't committed.
#[allow(drop_bounds)]
#[async_trait::async_trait]
pub trait TransactionDynT: std::ops::Drop + Send + Sync {
    /// Lets the storage impl downcast this TransactionDynT to its expected transaction type.
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
    /// Commit the transaction, consuming it in the process.
    async fn commit(self: Box<Self>) -> Result<()>;
    /// Rollback the transaction, consuming it in the process.
    async fn rollback(self: Box<Self>) -> Result<()>;
}

/// Recover the backend-specific transaction type from a `dyn TransactionDynT`.  A storage impl
/// that is handed a transaction begun by a different backend gets an error instead of a panic.
pub fn downcast_transaction_mut<T: 'static>(
    transaction: &mut dyn TransactionDynT,
) -> Result<&mut T> {
    transaction
        .as_any_mut()
        .downcast_mut::<T>()
        .ok_or(Error::TransactionTypeMismatch(std::any::type_name::<T>()))
}

/// Reborrow an optional transaction so that it can be passed to several storage calls in turn.
/// `Option::as_deref_mut` doesn't work here, since it would tie the trait object's lifetime to
/// that of the original borrow.
pub fn reborrow_transaction_o<'a>(
    transaction_o: &'a mut Option<&mut dyn TransactionDynT>,
) -> Option<&'a mut dyn TransactionDynT> {
    match transaction_o {
        Some(transaction) => {
            let transaction: &'a mut dyn TransactionDynT = &mut **transaction;
            Some(transaction)
        }
        None => None,
    }
}

#[cfg(feature = "sqlx-postgres")]
#[async_trait::async_trait]
impl TransactionDynT for sqlx::Transaction<'static, sqlx::Postgres> {
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
    async fn commit(self: Box<Self>) -> Result<()> {
        Ok((*self).commit().await?)
    }
    async fn rollback(self: Box<Self>) -> Result<()> {
        Ok((*self).rollback().await?)
    }
}

#[cfg(feature = "sqlx-sqlite")]
#[async_trait::async_trait]
impl TransactionDynT for sqlx::Transaction<'static, sqlx::Sqlite> {
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
    async fn commit(self: Box<Self>) -> Result<()> {
        Ok((*self).commit().await?)
    }
    async fn rollback(self: Box<Self>) -> Result<()> {
        Ok((*self).rollback().await?)
    }
}
