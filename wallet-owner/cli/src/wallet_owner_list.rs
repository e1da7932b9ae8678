use crate::{ClientArgs, Result};
use wallet_owner_core::SortBy;

/// List all wallet owners.
#[derive(clap::Args, Debug)]
pub struct WalletOwnerList {
    #[command(flatten)]
    pub client_args: ClientArgs,
    /// Specify the display order.
    #[arg(long, value_enum, default_value_t = SortBy::Date)]
    pub sort: SortBy,
}

impl WalletOwnerList {
    pub async fn handle(self) -> Result<()> {
        let wallet_owner_client = self.client_args.wallet_owner_client()?;
        let mut wallet_owner_v = wallet_owner_client.list_wallet_owners().await?;
        self.sort.sort(&mut wallet_owner_v);
        crate::print_json(&wallet_owner_v)
    }
}
