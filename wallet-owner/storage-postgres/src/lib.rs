mod wallet_owner_storage_postgres;

pub use crate::wallet_owner_storage_postgres::WalletOwnerStoragePostgres;
