use crate::{Error, Result, WalletOwnerFilter, WalletOwnerStorage};
use std::sync::Arc;
use storage_traits::{reborrow_transaction_o, TransactionDynT};
use wallet_owner_core::{
    validate_insert, validate_update, UniqueField, WalletOwner, WalletOwnerCandidate,
};

/// Validating front for a WalletOwnerStorage.  This is where payload validation and the
/// application-level uniqueness checks happen.
///
/// The uniqueness check and the subsequent write are issued within whatever transaction the caller
/// passes in, but no isolation level is assumed: two concurrent writers may both pass the check.
/// In that case it's the storage backend's own uniqueness constraint that rejects the loser, which
/// still surfaces as Error::AlreadyExists.
#[derive(Clone)]
pub struct WalletOwnerStore {
    wallet_owner_storage_a: Arc<dyn WalletOwnerStorage>,
}

impl WalletOwnerStore {
    /// Create a new WalletOwnerStore using the given WalletOwnerStorage implementation.
    pub fn new(wallet_owner_storage_a: Arc<dyn WalletOwnerStorage>) -> Self {
        Self {
            wallet_owner_storage_a,
        }
    }
    pub async fn get_all_wallet_owners(
        &self,
        transaction_o: Option<&mut dyn TransactionDynT>,
    ) -> Result<Vec<WalletOwner>> {
        self.wallet_owner_storage_a
            .get_wallet_owners(transaction_o, &WalletOwnerFilter::all())
            .await
    }
    pub async fn search_wallet_owners(
        &self,
        transaction_o: Option<&mut dyn TransactionDynT>,
        search_query: &str,
    ) -> Result<Vec<WalletOwner>> {
        self.wallet_owner_storage_a
            .get_wallet_owners(transaction_o, &WalletOwnerFilter::search(search_query))
            .await
    }
    pub async fn get_wallet_owner(
        &self,
        transaction_o: Option<&mut dyn TransactionDynT>,
        id: &str,
    ) -> Result<Option<WalletOwner>> {
        self.wallet_owner_storage_a
            .get_wallet_owner(transaction_o, id)
            .await
    }
    /// Validate the candidate as an insert payload, check that neither its ID card nor its wallet
    /// number is already registered, then add it.
    pub async fn validate_and_add_wallet_owner(
        &self,
        mut transaction_o: Option<&mut dyn TransactionDynT>,
        wallet_owner_candidate: &WalletOwnerCandidate,
    ) -> Result<WalletOwner> {
        let wallet_owner_insert = validate_insert(wallet_owner_candidate)?;

        if self
            .wallet_owner_storage_a
            .get_wallet_owner_with_id_card(
                reborrow_transaction_o(&mut transaction_o),
                &wallet_owner_insert.id_card,
            )
            .await?
            .is_some()
        {
            return Err(Error::AlreadyExists(UniqueField::IdCard));
        }
        if self
            .wallet_owner_storage_a
            .get_wallet_owner_with_wallet_number(
                reborrow_transaction_o(&mut transaction_o),
                &wallet_owner_insert.wallet_number,
            )
            .await?
            .is_some()
        {
            return Err(Error::AlreadyExists(UniqueField::WalletNumber));
        }

        let wallet_owner = self
            .wallet_owner_storage_a
            .add_wallet_owner(transaction_o, &wallet_owner_insert)
            .await?;
        tracing::debug!(id = %wallet_owner.id, "added wallet owner");
        Ok(wallet_owner)
    }
    /// Validate the candidate as a partial update of the wallet owner with the given id, check that
    /// a changed ID card or wallet number doesn't belong to a different wallet owner, then apply it.
    pub async fn validate_and_update_wallet_owner(
        &self,
        mut transaction_o: Option<&mut dyn TransactionDynT>,
        id: &str,
        wallet_owner_candidate: &WalletOwnerCandidate,
    ) -> Result<WalletOwner> {
        let wallet_owner_update = validate_update(id, wallet_owner_candidate)?;

        if self
            .wallet_owner_storage_a
            .get_wallet_owner(reborrow_transaction_o(&mut transaction_o), id)
            .await?
            .is_none()
        {
            return Err(not_found(id));
        }

        if let Some(id_card) = wallet_owner_update.id_card_o.as_deref() {
            if let Some(existing) = self
                .wallet_owner_storage_a
                .get_wallet_owner_with_id_card(reborrow_transaction_o(&mut transaction_o), id_card)
                .await?
            {
                if existing.id != id {
                    return Err(Error::AlreadyExists(UniqueField::IdCard));
                }
            }
        }
        if let Some(wallet_number) = wallet_owner_update.wallet_number_o.as_deref() {
            if let Some(existing) = self
                .wallet_owner_storage_a
                .get_wallet_owner_with_wallet_number(
                    reborrow_transaction_o(&mut transaction_o),
                    wallet_number,
                )
                .await?
            {
                if existing.id != id {
                    return Err(Error::AlreadyExists(UniqueField::WalletNumber));
                }
            }
        }

        // The wallet owner could have been deleted since the existence check.
        let wallet_owner = self
            .wallet_owner_storage_a
            .update_wallet_owner(transaction_o, &wallet_owner_update)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::debug!(id, "updated wallet owner");
        Ok(wallet_owner)
    }
    /// Delete the wallet owner with the given id, returning Error::NotFound if there is none.
    pub async fn delete_wallet_owner(
        &self,
        transaction_o: Option<&mut dyn TransactionDynT>,
        id: &str,
    ) -> Result<()> {
        if self
            .wallet_owner_storage_a
            .delete_wallet_owner(transaction_o, id)
            .await?
        {
            tracing::debug!(id, "deleted wallet owner");
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: &str) -> Error {
    Error::NotFound(format!("wallet owner with id {:?}", id).into())
}

#[async_trait::async_trait]
impl storage_traits::StorageDynT for WalletOwnerStore {
    async fn begin_transaction(
        &self,
    ) -> storage_traits::Result<Box<dyn storage_traits::TransactionDynT>> {
        self.wallet_owner_storage_a.begin_transaction().await
    }
}
