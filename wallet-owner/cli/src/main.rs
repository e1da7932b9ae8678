mod client_args;
mod cmd;
mod wallet_owner_create;
mod wallet_owner_delete;
mod wallet_owner_export;
mod wallet_owner_get;
mod wallet_owner_list;
mod wallet_owner_search;
mod wallet_owner_update;

pub use crate::{
    client_args::ClientArgs, wallet_owner_create::WalletOwnerCreate,
    wallet_owner_delete::WalletOwnerDelete, wallet_owner_export::WalletOwnerExport,
    wallet_owner_get::WalletOwnerGet, wallet_owner_list::WalletOwnerList,
    wallet_owner_search::WalletOwnerSearch, wallet_owner_update::WalletOwnerUpdate,
};
pub use anyhow::Result;

/// Print the value to stdout as pretty JSON followed by a newline.
pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    use std::io::Write;
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ignore errors, since there may not be a .env file.
    let _ = dotenvy::dotenv();

    // It's necessary to specify EnvFilter::from_default_env in order to use RUST_LOG env var.
    // Logs go to stderr so that stdout is only the command's output.
    tracing_subscriber::fmt()
        .with_target(true)
        .with_line_number(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .compact()
        .init();

    use clap::Parser;
    // Note that if the env var RUST_BACKTRACE is set to 1 (or "full"), then the backtrace will be printed
    // to stderr if this returns error.
    cmd::Root::parse().handle().await
}
