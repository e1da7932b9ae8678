use storage_traits::{
    downcast_transaction_mut, reborrow_transaction_o, NoopTransaction, TransactionDynT,
};

struct OtherTransaction;

impl std::ops::Drop for OtherTransaction {
    fn drop(&mut self) {}
}

#[async_trait::async_trait]
impl TransactionDynT for OtherTransaction {
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
    async fn commit(self: Box<Self>) -> storage_traits::Result<()> {
        Ok(())
    }
    async fn rollback(self: Box<Self>) -> storage_traits::Result<()> {
        Ok(())
    }
}

#[test]
fn test_downcast_transaction_mut() {
    let mut transaction_b: Box<dyn TransactionDynT> = Box::new(NoopTransaction);
    assert!(downcast_transaction_mut::<NoopTransaction>(transaction_b.as_mut()).is_ok());

    let mut other_transaction_b: Box<dyn TransactionDynT> = Box::new(OtherTransaction);
    let err = downcast_transaction_mut::<NoopTransaction>(other_transaction_b.as_mut())
        .expect_err("pass");
    assert!(matches!(
        err,
        storage_traits::Error::TransactionTypeMismatch(_)
    ));
}

#[tokio::test]
async fn test_noop_transaction_commit_and_rollback() {
    let transaction_b: Box<dyn TransactionDynT> = Box::new(NoopTransaction);
    transaction_b.commit().await.expect("pass");
    let transaction_b: Box<dyn TransactionDynT> = Box::new(NoopTransaction);
    transaction_b.rollback().await.expect("pass");
}

fn is_noop_transaction(transaction_o: Option<&mut dyn TransactionDynT>) -> bool {
    transaction_o
        .map(|transaction| downcast_transaction_mut::<NoopTransaction>(transaction).is_ok())
        .unwrap_or(false)
}

#[test]
fn test_reborrow_transaction_o() {
    let mut transaction_b: Box<dyn TransactionDynT> = Box::new(NoopTransaction);
    let mut transaction_o: Option<&mut dyn TransactionDynT> = Some(transaction_b.as_mut());
    // The same transaction can be handed out repeatedly.
    assert!(is_noop_transaction(reborrow_transaction_o(&mut transaction_o)));
    assert!(is_noop_transaction(reborrow_transaction_o(&mut transaction_o)));
    assert!(is_noop_transaction(transaction_o));

    let mut transaction_o: Option<&mut dyn TransactionDynT> = None;
    assert!(reborrow_transaction_o(&mut transaction_o).is_none());
}
