mod message_body;
mod messages;
mod sort_by;
mod unique_field;
mod validate;
mod validation_error;
mod wallet_owner;
mod wallet_owner_candidate;
mod wallet_owner_field;
mod wallet_owner_insert;
mod wallet_owner_update;

pub use crate::{
    message_body::MessageBody,
    messages::*,
    sort_by::SortBy,
    unique_field::UniqueField,
    validate::{validate_insert, validate_update},
    validation_error::{ValidationError, ValidationErrorKind},
    wallet_owner::{now_utc_micros, WalletOwner},
    wallet_owner_candidate::WalletOwnerCandidate,
    wallet_owner_field::WalletOwnerField,
    wallet_owner_insert::WalletOwnerInsert,
    wallet_owner_update::WalletOwnerUpdate,
};
