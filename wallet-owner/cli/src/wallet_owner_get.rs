use crate::{ClientArgs, Result};

/// Print the wallet owner with the given id.
#[derive(clap::Args, Debug)]
pub struct WalletOwnerGet {
    #[command(flatten)]
    pub client_args: ClientArgs,
    pub id: String,
}

impl WalletOwnerGet {
    pub async fn handle(self) -> Result<()> {
        let wallet_owner_client = self.client_args.wallet_owner_client()?;
        let wallet_owner = wallet_owner_client.get_wallet_owner(&self.id).await?;
        crate::print_json(&wallet_owner)
    }
}
