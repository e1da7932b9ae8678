use crate::{WalletOwnerField, MSG_ID_CARD_ALREADY_REGISTERED, MSG_WALLET_NUMBER_ALREADY_REGISTERED};

/// Fields which must be unique across all wallet owners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UniqueField {
    IdCard,
    WalletNumber,
}

impl UniqueField {
    pub fn field(self) -> WalletOwnerField {
        match self {
            Self::IdCard => WalletOwnerField::IdCard,
            Self::WalletNumber => WalletOwnerField::WalletNumber,
        }
    }
    /// Column name in the relational schema.  Unique-constraint violations reported by a database
    /// are mapped back to a UniqueField using this.
    pub fn column_name(self) -> &'static str {
        match self {
            Self::IdCard => "id_card",
            Self::WalletNumber => "wallet_number",
        }
    }
    pub fn already_registered_message(self) -> &'static str {
        match self {
            Self::IdCard => MSG_ID_CARD_ALREADY_REGISTERED,
            Self::WalletNumber => MSG_WALLET_NUMBER_ALREADY_REGISTERED,
        }
    }
}

impl std::fmt::Display for UniqueField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.field().fmt(f)
    }
}
