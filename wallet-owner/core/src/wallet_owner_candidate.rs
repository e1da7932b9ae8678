/// Unvalidated payload of a create or update request.  Every field is optional here; see
/// `validate_insert` and `validate_update` for the rules.  Unknown fields (including `id` and
/// `createdAt`) are ignored.  Name, ID card and wallet number may be absent but never `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct WalletOwnerCandidate {
    #[serde(
        rename = "name",
        default,
        deserialize_with = "deserialize_non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub name_o: Option<String>,
    #[serde(
        rename = "idCard",
        default,
        deserialize_with = "deserialize_non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub id_card_o: Option<String>,
    #[serde(
        rename = "walletNumber",
        default,
        deserialize_with = "deserialize_non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub wallet_number_o: Option<String>,
    /// Outer None means the field was absent; `Some(None)` means it was explicitly `null`.
    #[serde(
        rename = "phone",
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub phone_oo: Option<Option<String>>,
}

impl WalletOwnerCandidate {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name_o = Some(name.into());
        self
    }
    pub fn with_id_card(mut self, id_card: impl Into<String>) -> Self {
        self.id_card_o = Some(id_card.into());
        self
    }
    pub fn with_wallet_number(mut self, wallet_number: impl Into<String>) -> Self {
        self.wallet_number_o = Some(wallet_number.into());
        self
    }
    pub fn with_phone(mut self, phone_o: Option<String>) -> Self {
        self.phone_oo = Some(phone_o);
        self
    }
}


/// Only reached when the field is present, so an explicit `null` is rejected instead of being read
/// as absent.
fn deserialize_non_null<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    <String as serde::Deserialize>::deserialize(deserializer).map(Some)
}
