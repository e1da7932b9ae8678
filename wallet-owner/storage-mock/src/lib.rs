mod wallet_owner_storage_mock;

pub use crate::wallet_owner_storage_mock::WalletOwnerStorageMock;
