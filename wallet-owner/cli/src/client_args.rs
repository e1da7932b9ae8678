use crate::Result;

#[derive(clap::Args, Debug)]
pub struct ClientArgs {
    /// Specify the URL of the wallet owners server.
    #[arg(
        env = "WALLET_OWNERS_SERVER_URL",
        long,
        value_name = "URL",
        default_value = "http://localhost:5000"
    )]
    pub server_url: String,
}

impl ClientArgs {
    pub fn wallet_owner_client(&self) -> Result<wallet_owner_client::WalletOwnerClient> {
        Ok(wallet_owner_client::WalletOwnerClient::new(
            self.server_url.as_str(),
        )?)
    }
}
