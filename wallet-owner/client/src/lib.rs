mod error;
mod export;
mod query_cache;
mod query_key;
mod wallet_owner_client;

pub use crate::{
    error::Error,
    export::{default_export_file_name, export_file_name, export_json},
    query_cache::QueryCache,
    query_key::QueryKey,
    wallet_owner_client::WalletOwnerClient,
};
pub type Result<T> = std::result::Result<T, Error>;

lazy_static::lazy_static! {
    /// Building a reqwest::Client is *incredibly* slow, so we use a global instance and then clone
    /// it per use, as the documentation indicates.
    pub static ref REQWEST_CLIENT: reqwest::Client = reqwest::Client::new();
}
