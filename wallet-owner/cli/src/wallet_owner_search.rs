use crate::{ClientArgs, Result};
use wallet_owner_core::SortBy;

/// Search wallet owners by a case-insensitive substring of their name, ID card, wallet number or
/// phone.  An empty query lists everything.
#[derive(clap::Args, Debug)]
pub struct WalletOwnerSearch {
    #[command(flatten)]
    pub client_args: ClientArgs,
    /// The substring to search for.
    pub query: String,
    /// Specify the display order.
    #[arg(long, value_enum, default_value_t = SortBy::Date)]
    pub sort: SortBy,
}

impl WalletOwnerSearch {
    pub async fn handle(self) -> Result<()> {
        let wallet_owner_client = self.client_args.wallet_owner_client()?;
        let mut wallet_owner_v = wallet_owner_client
            .search_wallet_owners(self.query.as_str())
            .await?;
        self.sort.sort(&mut wallet_owner_v);
        crate::print_json(&wallet_owner_v)
    }
}
