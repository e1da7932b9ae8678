mod error;
mod wallet_owner_filter;
mod wallet_owner_storage;
mod wallet_owner_store;

pub use crate::{
    error::Error,
    wallet_owner_filter::{fold_case, WalletOwnerFilter},
    wallet_owner_storage::WalletOwnerStorage,
    wallet_owner_store::WalletOwnerStore,
};
pub type Result<T> = std::result::Result<T, Error>;
