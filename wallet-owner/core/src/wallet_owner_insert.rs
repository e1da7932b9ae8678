/// Validated payload for creating a wallet owner.  The id and creation time are assigned by storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletOwnerInsert {
    pub name: String,
    pub id_card: String,
    pub wallet_number: String,
    pub phone_o: Option<String>,
}
