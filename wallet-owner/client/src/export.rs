use crate::{Error, Result};
use wallet_owner_core::WalletOwner;

/// Pretty-printed JSON array of the given wallet owners.  An empty set is not exported.
pub fn export_json(wallet_owner_v: &[WalletOwner]) -> Result<String> {
    if wallet_owner_v.is_empty() {
        return Err(Error::NothingToExport);
    }
    serde_json::to_string_pretty(wallet_owner_v).map_err(|err| {
        Error::MalformedResponse(
            format!("Failed to serialize wallet owners; error was: {}", err).into(),
        )
    })
}

/// File name of the form `wallet_owners_YYYY-MM-DD.json`.
pub fn export_file_name(date: time::Date) -> String {
    format!(
        "wallet_owners_{:04}-{:02}-{:02}.json",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Export file name for today's date (UTC).
pub fn default_export_file_name() -> String {
    export_file_name(time::OffsetDateTime::now_utc().date())
}
