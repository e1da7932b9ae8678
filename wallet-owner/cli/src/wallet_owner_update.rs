use crate::{ClientArgs, Result};
use wallet_owner_core::{WalletOwnerCandidate, MSG_OWNER_UPDATED};

/// Change some fields of an existing wallet owner and print the updated record.  Fields that
/// aren't specified are left unchanged.
#[derive(clap::Args, Debug)]
pub struct WalletOwnerUpdate {
    #[command(flatten)]
    pub client_args: ClientArgs,
    pub id: String,
    #[arg(name = "name", long, value_name = "NAME")]
    pub name_o: Option<String>,
    #[arg(name = "id-card", long, value_name = "ID_CARD")]
    pub id_card_o: Option<String>,
    #[arg(name = "wallet-number", long, value_name = "WALLET_NUMBER")]
    pub wallet_number_o: Option<String>,
    /// An empty value removes the phone.
    #[arg(name = "phone", long, value_name = "PHONE")]
    pub phone_o: Option<String>,
}

impl WalletOwnerUpdate {
    pub async fn handle(self) -> Result<()> {
        let wallet_owner_client = self.client_args.wallet_owner_client()?;
        let wallet_owner_candidate = WalletOwnerCandidate {
            name_o: self.name_o,
            id_card_o: self.id_card_o,
            wallet_number_o: self.wallet_number_o,
            phone_oo: self.phone_o.map(Some),
        };
        let wallet_owner = wallet_owner_client
            .update_wallet_owner(&self.id, &wallet_owner_candidate)
            .await?;
        crate::print_json(&wallet_owner)?;
        eprintln!("{}", MSG_OWNER_UPDATED);
        Ok(())
    }
}
