use crate::{Result, WalletOwnerFilter};
use storage_traits::TransactionDynT;
use wallet_owner_core::{WalletOwner, WalletOwnerInsert, WalletOwnerUpdate};

/// A backend for wallet owner records.  Every implementation must produce the same observable
/// ordering and filtering, and must itself reject a second record having the same ID card or
/// wallet number (with Error::AlreadyExists), independently of any check done by its caller.
#[async_trait::async_trait]
pub trait WalletOwnerStorage: Send + storage_traits::StorageDynT + Sync + 'static {
    /// Assign a new id and the current time to the given payload, persist it, and return the full
    /// record.
    async fn add_wallet_owner(
        &self,
        transaction_o: Option<&mut dyn TransactionDynT>,
        wallet_owner_insert: &WalletOwnerInsert,
    ) -> Result<WalletOwner>;
    /// Will return None if there is no wallet owner with the given id.
    async fn get_wallet_owner(
        &self,
        transaction_o: Option<&mut dyn TransactionDynT>,
        id: &str,
    ) -> Result<Option<WalletOwner>>;
    /// Exact-match lookup by ID card.  Will return None if no wallet owner has it.
    async fn get_wallet_owner_with_id_card(
        &self,
        transaction_o: Option<&mut dyn TransactionDynT>,
        id_card: &str,
    ) -> Result<Option<WalletOwner>>;
    /// Exact-match lookup by wallet number.  Will return None if no wallet owner has it.
    async fn get_wallet_owner_with_wallet_number(
        &self,
        transaction_o: Option<&mut dyn TransactionDynT>,
        wallet_number: &str,
    ) -> Result<Option<WalletOwner>>;
    /// Get all wallet owners selected by the given filter, newest first.  Records created at the
    /// same instant are ordered most-recently-inserted first.
    async fn get_wallet_owners(
        &self,
        transaction_o: Option<&mut dyn TransactionDynT>,
        wallet_owner_filter: &WalletOwnerFilter,
    ) -> Result<Vec<WalletOwner>>;
    /// Merge the provided fields onto the existing record, leaving id and created_at untouched.
    /// Will return None if there is no wallet owner with the given id.
    async fn update_wallet_owner(
        &self,
        transaction_o: Option<&mut dyn TransactionDynT>,
        wallet_owner_update: &WalletOwnerUpdate,
    ) -> Result<Option<WalletOwner>>;
    /// Returns false if there was no wallet owner with the given id.
    async fn delete_wallet_owner(
        &self,
        transaction_o: Option<&mut dyn TransactionDynT>,
        id: &str,
    ) -> Result<bool>;
}
