use crate::{ClientArgs, Result};

/// Delete the wallet owner with the given id.  This can't be undone.
#[derive(clap::Args, Debug)]
pub struct WalletOwnerDelete {
    #[command(flatten)]
    pub client_args: ClientArgs,
    pub id: String,
}

impl WalletOwnerDelete {
    pub async fn handle(self) -> Result<()> {
        let wallet_owner_client = self.client_args.wallet_owner_client()?;
        let message = wallet_owner_client.delete_wallet_owner(&self.id).await?;
        eprintln!("{}", message);
        Ok(())
    }
}
