use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use storage_traits::TransactionDynT;
use wallet_owner_core::{UniqueField, WalletOwner, WalletOwnerInsert, WalletOwnerUpdate};
use wallet_owner_store::{Error, Result, WalletOwnerFilter};

#[derive(Clone, Debug)]
struct WalletOwnerRecord {
    /// Insertion sequence number, used to break ties between records created at the same instant.
    seq: usize,
    wallet_owner: WalletOwner,
}

#[derive(Clone, Debug, Default)]
struct WalletOwnerStorageMockState {
    next_seq: usize,
    /// This is what actually stores the WalletOwners, keyed by id.
    wallet_owner_record_m: HashMap<String, WalletOwnerRecord>,
}

impl WalletOwnerStorageMockState {
    /// Returns the unique field that some record other than `except_id_o` already holds, if any.
    fn find_conflict(
        &self,
        except_id_o: Option<&str>,
        id_card_o: Option<&str>,
        wallet_number_o: Option<&str>,
    ) -> Option<UniqueField> {
        let held_by_other = |predicate: &dyn Fn(&WalletOwner) -> bool| {
            self.wallet_owner_record_m.values().any(|wallet_owner_record| {
                Some(wallet_owner_record.wallet_owner.id.as_str()) != except_id_o
                    && predicate(&wallet_owner_record.wallet_owner)
            })
        };
        if let Some(id_card) = id_card_o {
            if held_by_other(&|wallet_owner| wallet_owner.id_card == id_card) {
                return Some(UniqueField::IdCard);
            }
        }
        if let Some(wallet_number) = wallet_number_o {
            if held_by_other(&|wallet_owner| wallet_owner.wallet_number == wallet_number) {
                return Some(UniqueField::WalletNumber);
            }
        }
        None
    }
    fn add(&mut self, wallet_owner_insert: &WalletOwnerInsert) -> Result<WalletOwner> {
        let wallet_owner = WalletOwner::create(wallet_owner_insert);
        self.insert(wallet_owner.clone())?;
        Ok(wallet_owner)
    }
    fn insert(&mut self, wallet_owner: WalletOwner) -> Result<()> {
        if self.wallet_owner_record_m.contains_key(&wallet_owner.id) {
            return Err(Error::StorageError(
                format!("wallet owner with id {:?} already exists", wallet_owner.id).into(),
            ));
        }
        if let Some(unique_field) = self.find_conflict(
            None,
            Some(&wallet_owner.id_card),
            Some(&wallet_owner.wallet_number),
        ) {
            return Err(Error::AlreadyExists(unique_field));
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.wallet_owner_record_m.insert(
            wallet_owner.id.clone(),
            WalletOwnerRecord { seq, wallet_owner },
        );
        Ok(())
    }
    fn find(&self, predicate: impl Fn(&WalletOwner) -> bool) -> Option<WalletOwner> {
        self.wallet_owner_record_m
            .values()
            .map(|wallet_owner_record| &wallet_owner_record.wallet_owner)
            .find(|wallet_owner| predicate(wallet_owner))
            .cloned()
    }
    fn get(&self, wallet_owner_filter: &WalletOwnerFilter) -> Vec<WalletOwner> {
        let mut wallet_owner_record_v = self
            .wallet_owner_record_m
            .values()
            .filter(|wallet_owner_record| {
                wallet_owner_filter.matches(&wallet_owner_record.wallet_owner)
            })
            .collect::<Vec<_>>();
        // Newest first, then most recently inserted first.
        wallet_owner_record_v.sort_by(|a, b| {
            b.wallet_owner
                .created_at
                .cmp(&a.wallet_owner.created_at)
                .then(b.seq.cmp(&a.seq))
        });
        wallet_owner_record_v
            .into_iter()
            .map(|wallet_owner_record| wallet_owner_record.wallet_owner.clone())
            .collect()
    }
    fn update(&mut self, wallet_owner_update: &WalletOwnerUpdate) -> Result<Option<WalletOwner>> {
        if !self
            .wallet_owner_record_m
            .contains_key(&wallet_owner_update.id)
        {
            return Ok(None);
        }
        if let Some(unique_field) = self.find_conflict(
            Some(&wallet_owner_update.id),
            wallet_owner_update.id_card_o.as_deref(),
            wallet_owner_update.wallet_number_o.as_deref(),
        ) {
            return Err(Error::AlreadyExists(unique_field));
        }
        Ok(self
            .wallet_owner_record_m
            .get_mut(&wallet_owner_update.id)
            .map(|wallet_owner_record| {
                wallet_owner_record
                    .wallet_owner
                    .apply_update(wallet_owner_update);
                wallet_owner_record.wallet_owner.clone()
            }))
    }
}

/// In-process WalletOwnerStorage, for tests and for running the server without a database.
/// Every operation takes the lock exactly once, so each one is atomic, but a transaction spanning
/// several operations provides no isolation.
#[derive(Clone, Default)]
pub struct WalletOwnerStorageMock {
    state_la: Arc<RwLock<WalletOwnerStorageMockState>>,
}

impl WalletOwnerStorageMock {
    pub fn new() -> Self {
        Self::default()
    }
    /// Insert a complete record as-is, keeping its id and created_at.  Used to seed fixtures,
    /// e.g. several records created at the same instant.
    pub fn insert_wallet_owner(&self, wallet_owner: WalletOwner) -> Result<()> {
        self.write_state()?.insert(wallet_owner)
    }
    fn read_state(&self) -> Result<RwLockReadGuard<'_, WalletOwnerStorageMockState>> {
        self.state_la
            .read()
            .map_err(|_| Error::StorageError("WalletOwnerStorageMock lock poisoned".into()))
    }
    fn write_state(&self) -> Result<RwLockWriteGuard<'_, WalletOwnerStorageMockState>> {
        self.state_la
            .write()
            .map_err(|_| Error::StorageError("WalletOwnerStorageMock lock poisoned".into()))
    }
}

#[async_trait::async_trait]
impl storage_traits::StorageDynT for WalletOwnerStorageMock {
    async fn begin_transaction(
        &self,
    ) -> storage_traits::Result<Box<dyn storage_traits::TransactionDynT>> {
        Ok(Box::new(storage_traits::NoopTransaction))
    }
}

#[async_trait::async_trait]
impl wallet_owner_store::WalletOwnerStorage for WalletOwnerStorageMock {
    async fn add_wallet_owner(
        &self,
        _transaction_o: Option<&mut dyn TransactionDynT>,
        wallet_owner_insert: &WalletOwnerInsert,
    ) -> Result<WalletOwner> {
        self.write_state()?.add(wallet_owner_insert)
    }
    async fn get_wallet_owner(
        &self,
        _transaction_o: Option<&mut dyn TransactionDynT>,
        id: &str,
    ) -> Result<Option<WalletOwner>> {
        Ok(self
            .read_state()?
            .wallet_owner_record_m
            .get(id)
            .map(|wallet_owner_record| wallet_owner_record.wallet_owner.clone()))
    }
    async fn get_wallet_owner_with_id_card(
        &self,
        _transaction_o: Option<&mut dyn TransactionDynT>,
        id_card: &str,
    ) -> Result<Option<WalletOwner>> {
        Ok(self
            .read_state()?
            .find(|wallet_owner| wallet_owner.id_card == id_card))
    }
    async fn get_wallet_owner_with_wallet_number(
        &self,
        _transaction_o: Option<&mut dyn TransactionDynT>,
        wallet_number: &str,
    ) -> Result<Option<WalletOwner>> {
        Ok(self
            .read_state()?
            .find(|wallet_owner| wallet_owner.wallet_number == wallet_number))
    }
    async fn get_wallet_owners(
        &self,
        _transaction_o: Option<&mut dyn TransactionDynT>,
        wallet_owner_filter: &WalletOwnerFilter,
    ) -> Result<Vec<WalletOwner>> {
        Ok(self.read_state()?.get(wallet_owner_filter))
    }
    async fn update_wallet_owner(
        &self,
        _transaction_o: Option<&mut dyn TransactionDynT>,
        wallet_owner_update: &WalletOwnerUpdate,
    ) -> Result<Option<WalletOwner>> {
        self.write_state()?.update(wallet_owner_update)
    }
    async fn delete_wallet_owner(
        &self,
        _transaction_o: Option<&mut dyn TransactionDynT>,
        id: &str,
    ) -> Result<bool> {
        Ok(self
            .write_state()?
            .wallet_owner_record_m
            .remove(id)
            .is_some())
    }
}
