use crate::QueryKey;
use std::collections::HashMap;
use wallet_owner_core::WalletOwner;

/// Cached list and search results.  Each invalidation starts a new generation, and a result that
/// was fetched during an earlier generation is not stored, since a mutation may have landed while
/// it was in flight.
#[derive(Debug, Default)]
pub struct QueryCache {
    generation: u64,
    wallet_owner_vm: HashMap<QueryKey, Vec<WalletOwner>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }
    /// Record this before fetching, and pass it to `insert` afterwards.
    pub fn generation(&self) -> u64 {
        self.generation
    }
    pub fn get(&self, query_key: &QueryKey) -> Option<&Vec<WalletOwner>> {
        self.wallet_owner_vm.get(query_key)
    }
    /// Store a fetched result, unless the cache was invalidated since `generation` was read.
    /// Returns true if the result was stored.
    pub fn insert(
        &mut self,
        generation: u64,
        query_key: QueryKey,
        wallet_owner_v: Vec<WalletOwner>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.wallet_owner_vm.insert(query_key, wallet_owner_v);
        true
    }
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.wallet_owner_vm.clear();
    }
    pub fn len(&self) -> usize {
        self.wallet_owner_vm.len()
    }
    pub fn is_empty(&self) -> bool {
        self.wallet_owner_vm.is_empty()
    }
}
