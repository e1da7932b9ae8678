use crate::{WalletOwnerInsert, WalletOwnerUpdate};
use time::OffsetDateTime;

/// A registered wallet owner, as stored and as served over HTTP.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletOwner {
    /// Opaque identifier (a UUID v4 string), assigned at creation and never changed.
    pub id: String,
    pub name: String,
    /// Globally unique.
    pub id_card: String,
    /// Globally unique.
    pub wallet_number: String,
    /// Serialized as `null` when absent.
    #[serde(rename = "phone")]
    pub phone_o: Option<String>,
    /// Assigned at creation and never changed.  This is the default sort key (newest first).
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl WalletOwner {
    /// Mint a new record from a validated insert payload, assigning a fresh id and the current time.
    pub fn create(wallet_owner_insert: &WalletOwnerInsert) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: wallet_owner_insert.name.clone(),
            id_card: wallet_owner_insert.id_card.clone(),
            wallet_number: wallet_owner_insert.wallet_number.clone(),
            phone_o: wallet_owner_insert.phone_o.clone(),
            created_at: now_utc_micros(),
        }
    }
    /// Merge the provided fields of a partial update onto this record.  The id and created_at
    /// fields are never touched.
    pub fn apply_update(&mut self, wallet_owner_update: &WalletOwnerUpdate) {
        if let Some(name) = wallet_owner_update.name_o.as_deref() {
            self.name = name.to_string();
        }
        if let Some(id_card) = wallet_owner_update.id_card_o.as_deref() {
            self.id_card = id_card.to_string();
        }
        if let Some(wallet_number) = wallet_owner_update.wallet_number_o.as_deref() {
            self.wallet_number = wallet_number.to_string();
        }
        if let Some(phone_o) = wallet_owner_update.phone_oo.as_ref() {
            self.phone_o = phone_o.clone();
        }
    }
}

/// Current UTC time truncated to microseconds, which is the finest precision that every storage
/// backend round-trips exactly.
pub fn now_utc_micros() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now.replace_nanosecond(now.nanosecond() / 1_000 * 1_000)
        .unwrap_or(now)
}
