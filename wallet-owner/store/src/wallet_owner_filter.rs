use wallet_owner_core::WalletOwner;

/// Selects wallet owners.  The default filter selects all of them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletOwnerFilter {
    /// Case-insensitive substring to look for in name, ID card, wallet number and phone.
    /// An empty query matches everything.
    pub search_query_o: Option<String>,
}

impl WalletOwnerFilter {
    pub fn all() -> Self {
        Self::default()
    }
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search_query_o: Some(query.into()),
        }
    }
    /// The search query in the case-folded form that SQL backends compare against their folded
    /// columns.
    pub fn folded_search_query_o(&self) -> Option<String> {
        self.search_query_o.as_deref().map(fold_case)
    }
    pub fn matches(&self, wallet_owner: &WalletOwner) -> bool {
        let Some(search_query) = self.search_query_o.as_deref() else {
            return true;
        };
        let search_query = fold_case(search_query);
        let contains = |haystack: &str| fold_case(haystack).contains(search_query.as_str());
        contains(&wallet_owner.name)
            || contains(&wallet_owner.id_card)
            || contains(&wallet_owner.wallet_number)
            // A wallet owner without a phone never matches on phone.
            || wallet_owner.phone_o.as_deref().is_some_and(contains)
    }
}

/// Case folding used for search by every backend.  SQL backends store each searchable field folded
/// with this at write time, and never use the database's own lower().
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}
