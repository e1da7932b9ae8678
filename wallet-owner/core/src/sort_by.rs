use crate::WalletOwner;

/// Display order for a fetched set of wallet owners.  Sorting is stable, so records that compare
/// equal keep the order in which the server returned them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SortBy {
    /// Ascending by name.
    Name,
    /// Newest first.
    #[default]
    Date,
}

impl SortBy {
    pub fn sort(self, wallet_owner_v: &mut [WalletOwner]) {
        match self {
            Self::Name => wallet_owner_v.sort_by(|a, b| a.name.cmp(&b.name)),
            Self::Date => wallet_owner_v.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }
    }
}
