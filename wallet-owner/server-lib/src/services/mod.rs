pub mod wallet_owners;
