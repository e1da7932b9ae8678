use std::borrow::Cow;
use wallet_owner_core::MSG_NOTHING_TO_EXPORT;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server answered with an error status.  The message is the server's own, or the
    /// operation's fallback message if the response body didn't carry one.
    #[error("{message}")]
    Server {
        status_code: reqwest::StatusCode,
        message: Cow<'static, str>,
    },
    /// The request never produced a response (connection refused, timeout, etc).
    #[error("{fallback_message}: {description}")]
    Request {
        fallback_message: &'static str,
        description: Cow<'static, str>,
    },
    #[error("Malformed response: {0}")]
    MalformedResponse(Cow<'static, str>),
    #[error("Malformed URL: {0}")]
    MalformedURL(Cow<'static, str>),
    #[error("{}", MSG_NOTHING_TO_EXPORT)]
    NothingToExport,
}

impl Error {
    /// The HTTP status, if the server answered at all.
    pub fn status_code_o(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Server { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}
