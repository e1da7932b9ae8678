use crate::{Result, TransactionDynT};

/// Object-safe storage trait, able to begin a transaction of the backend's own type.  Storage
/// impls can be swapped behind an `Arc<dyn _>` without changing any generic parameter.
#[async_trait::async_trait]
pub trait StorageDynT {
    async fn begin_transaction(&self) -> Result<Box<dyn TransactionDynT>>;
}
