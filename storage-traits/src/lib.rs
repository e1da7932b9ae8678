mod error;
mod noop_transaction;
mod storage_dyn_t;
mod transaction_dyn_t;

pub use crate::{
    error::Error,
    noop_transaction::NoopTransaction,
    storage_dyn_t::StorageDynT,
    transaction_dyn_t::{downcast_transaction_mut, reborrow_transaction_o, TransactionDynT},
};
pub type Result<T> = std::result::Result<T, Error>;
