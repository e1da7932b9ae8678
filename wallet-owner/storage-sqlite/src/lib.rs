mod wallet_owner_storage_sqlite;

pub use crate::wallet_owner_storage_sqlite::WalletOwnerStorageSQLite;
