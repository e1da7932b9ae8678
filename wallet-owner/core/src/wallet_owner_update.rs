/// Validated partial update of an existing wallet owner.  Fields that are None are left unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletOwnerUpdate {
    pub id: String,
    pub name_o: Option<String>,
    pub id_card_o: Option<String>,
    pub wallet_number_o: Option<String>,
    /// None leaves the phone unchanged, `Some(None)` clears it, `Some(Some(_))` replaces it.
    pub phone_oo: Option<Option<String>>,
}

impl WalletOwnerUpdate {
    /// An update that changes nothing.
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name_o: None,
            id_card_o: None,
            wallet_number_o: None,
            phone_oo: None,
        }
    }
    pub fn is_empty(&self) -> bool {
        self.name_o.is_none()
            && self.id_card_o.is_none()
            && self.wallet_number_o.is_none()
            && self.phone_oo.is_none()
    }
}
