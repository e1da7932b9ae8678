use crate::{
    ValidationError, WalletOwnerCandidate, WalletOwnerField, WalletOwnerInsert, WalletOwnerUpdate,
};

/// Validate a create payload.  Name, ID card and wallet number must be present and non-empty,
/// checked in that order; the first failure is returned.  A null or empty phone means "no phone".
pub fn validate_insert(
    wallet_owner_candidate: &WalletOwnerCandidate,
) -> Result<WalletOwnerInsert, ValidationError> {
    let name = required(WalletOwnerField::Name, &wallet_owner_candidate.name_o)?;
    let id_card = required(WalletOwnerField::IdCard, &wallet_owner_candidate.id_card_o)?;
    let wallet_number = required(
        WalletOwnerField::WalletNumber,
        &wallet_owner_candidate.wallet_number_o,
    )?;
    let phone_o = wallet_owner_candidate
        .phone_oo
        .clone()
        .flatten()
        .and_then(normalize_phone);
    Ok(WalletOwnerInsert {
        name,
        id_card,
        wallet_number,
        phone_o,
    })
}

/// Validate a partial update payload for the wallet owner with the given id.  Every field is
/// optional, but a field that is present must be non-empty.  A null or empty phone clears it.
pub fn validate_update(
    id: &str,
    wallet_owner_candidate: &WalletOwnerCandidate,
) -> Result<WalletOwnerUpdate, ValidationError> {
    let name_o = optional(WalletOwnerField::Name, &wallet_owner_candidate.name_o)?;
    let id_card_o = optional(WalletOwnerField::IdCard, &wallet_owner_candidate.id_card_o)?;
    let wallet_number_o = optional(
        WalletOwnerField::WalletNumber,
        &wallet_owner_candidate.wallet_number_o,
    )?;
    let phone_oo = wallet_owner_candidate
        .phone_oo
        .clone()
        .map(|phone_o| phone_o.and_then(normalize_phone));
    Ok(WalletOwnerUpdate {
        id: id.to_string(),
        name_o,
        id_card_o,
        wallet_number_o,
        phone_oo,
    })
}

fn required(field: WalletOwnerField, value_o: &Option<String>) -> Result<String, ValidationError> {
    match value_o.as_deref() {
        None => Err(ValidationError::missing(field)),
        Some("") => Err(ValidationError::empty(field)),
        Some(value) => Ok(value.to_string()),
    }
}

fn optional(
    field: WalletOwnerField,
    value_o: &Option<String>,
) -> Result<Option<String>, ValidationError> {
    match value_o.as_deref() {
        None => Ok(None),
        Some("") => Err(ValidationError::empty(field)),
        Some(value) => Ok(Some(value.to_string())),
    }
}

fn normalize_phone(phone: String) -> Option<String> {
    if phone.is_empty() {
        None
    } else {
        Some(phone)
    }
}
