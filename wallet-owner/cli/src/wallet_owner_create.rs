use crate::{ClientArgs, Result};
use wallet_owner_core::{WalletOwnerCandidate, MSG_OWNER_CREATED};

/// Register a new wallet owner and print the created record.
#[derive(clap::Args, Debug)]
pub struct WalletOwnerCreate {
    #[command(flatten)]
    pub client_args: ClientArgs,
    #[arg(long)]
    pub name: String,
    #[arg(long, value_name = "ID_CARD")]
    pub id_card: String,
    #[arg(long, value_name = "WALLET_NUMBER")]
    pub wallet_number: String,
    #[arg(name = "phone", long, value_name = "PHONE")]
    pub phone_o: Option<String>,
}

impl WalletOwnerCreate {
    pub async fn handle(self) -> Result<()> {
        let wallet_owner_client = self.client_args.wallet_owner_client()?;
        let mut wallet_owner_candidate = WalletOwnerCandidate::default()
            .with_name(self.name)
            .with_id_card(self.id_card)
            .with_wallet_number(self.wallet_number);
        if let Some(phone) = self.phone_o {
            wallet_owner_candidate = wallet_owner_candidate.with_phone(Some(phone));
        }
        let wallet_owner = wallet_owner_client
            .create_wallet_owner(&wallet_owner_candidate)
            .await?;
        crate::print_json(&wallet_owner)?;
        eprintln!("{}", MSG_OWNER_CREATED);
        Ok(())
    }
}
