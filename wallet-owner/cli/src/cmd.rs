use crate::{
    Result, WalletOwnerCreate, WalletOwnerDelete, WalletOwnerExport, WalletOwnerGet,
    WalletOwnerList, WalletOwnerSearch, WalletOwnerUpdate,
};

/// Command-line client for the wallet owners registry.  Records are printed to stdout as JSON;
/// confirmations and logs go to stderr.
#[derive(clap::Parser)]
pub enum Root {
    List(WalletOwnerList),
    Search(WalletOwnerSearch),
    Get(WalletOwnerGet),
    Create(WalletOwnerCreate),
    Update(WalletOwnerUpdate),
    Delete(WalletOwnerDelete),
    Export(WalletOwnerExport),
}

impl Root {
    pub async fn handle(self) -> Result<()> {
        match self {
            Self::List(x) => x.handle().await,
            Self::Search(x) => x.handle().await,
            Self::Get(x) => x.handle().await,
            Self::Create(x) => x.handle().await,
            Self::Update(x) => x.handle().await,
            Self::Delete(x) => x.handle().await,
            Self::Export(x) => x.handle().await,
        }
    }
}
