use crate::{Result, TransactionDynT};

/// Transaction for backends with no transactional isolation of their own (e.g. an in-process
/// map).  Every write is applied immediately, so commit and rollback have nothing to do.
#[derive(Debug, Default)]
pub struct NoopTransaction;

impl std::ops::Drop for NoopTransaction {
    fn drop(&mut self) {}
}

#[async_trait::async_trait]
impl TransactionDynT for NoopTransaction {
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
    async fn commit(self: Box<Self>) -> Result<()> {
        Ok(())
    }
    async fn rollback(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}
