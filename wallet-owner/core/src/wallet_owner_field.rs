use crate::{MSG_ID_CARD_REQUIRED, MSG_NAME_REQUIRED, MSG_WALLET_NUMBER_REQUIRED};

/// The client-settable fields of a wallet owner, in the order that validation visits them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WalletOwnerField {
    Name,
    IdCard,
    WalletNumber,
    Phone,
}

impl WalletOwnerField {
    /// Name of the field in the JSON representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::IdCard => "idCard",
            Self::WalletNumber => "walletNumber",
            Self::Phone => "phone",
        }
    }
    /// Message reported when a required field is missing or empty.  Phone is never required.
    pub fn required_message(self) -> Option<&'static str> {
        match self {
            Self::Name => Some(MSG_NAME_REQUIRED),
            Self::IdCard => Some(MSG_ID_CARD_REQUIRED),
            Self::WalletNumber => Some(MSG_WALLET_NUMBER_REQUIRED),
            Self::Phone => None,
        }
    }
}

impl std::fmt::Display for WalletOwnerField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
