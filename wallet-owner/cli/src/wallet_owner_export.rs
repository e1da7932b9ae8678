use crate::{ClientArgs, Result};
use std::path::PathBuf;
use wallet_owner_core::{SortBy, MSG_EXPORTED};

/// Write wallet owners to a pretty-printed JSON file, and print the path of that file.
#[derive(clap::Args, Debug)]
pub struct WalletOwnerExport {
    #[command(flatten)]
    pub client_args: ClientArgs,
    /// If specified, export only the wallet owners matching this search query.
    #[arg(name = "query", long, value_name = "QUERY")]
    pub query_o: Option<String>,
    /// Specify the order of the exported records.
    #[arg(long, value_enum, default_value_t = SortBy::Date)]
    pub sort: SortBy,
    /// Specify the output file.  Defaults to wallet_owners_<YYYY-MM-DD>.json in the current
    /// directory.
    #[arg(name = "output", short, long, value_name = "PATH")]
    pub output_o: Option<PathBuf>,
}

impl WalletOwnerExport {
    pub async fn handle(self) -> Result<()> {
        let wallet_owner_client = self.client_args.wallet_owner_client()?;
        let mut wallet_owner_v = match self.query_o.as_deref() {
            Some(query) => wallet_owner_client.search_wallet_owners(query).await?,
            None => wallet_owner_client.list_wallet_owners().await?,
        };
        self.sort.sort(&mut wallet_owner_v);
        let exported = wallet_owner_client::export_json(&wallet_owner_v)?;

        let output_path = self
            .output_o
            .unwrap_or_else(|| PathBuf::from(wallet_owner_client::default_export_file_name()));
        std::fs::write(&output_path, exported)?;
        tracing::debug!(
            "exported {} wallet owners to {:?}",
            wallet_owner_v.len(),
            output_path
        );

        println!("{}", output_path.display());
        eprintln!("{}", MSG_EXPORTED);
        Ok(())
    }
}
