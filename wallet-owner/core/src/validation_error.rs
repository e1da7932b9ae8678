use crate::WalletOwnerField;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The field was absent (or null) in a payload that requires it.
    Missing,
    /// The field was present but empty.
    Empty,
}

/// The first validation failure found in a payload.  Later failures are not collected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.message())]
pub struct ValidationError {
    pub field: WalletOwnerField,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn missing(field: WalletOwnerField) -> Self {
        Self {
            field,
            kind: ValidationErrorKind::Missing,
        }
    }
    pub fn empty(field: WalletOwnerField) -> Self {
        Self {
            field,
            kind: ValidationErrorKind::Empty,
        }
    }
    /// The message that is surfaced verbatim to the caller.  Missing and empty fields share a message.
    pub fn message(&self) -> &'static str {
        self.field
            .required_message()
            .unwrap_or(crate::MSG_MALFORMED_PAYLOAD)
    }
}
