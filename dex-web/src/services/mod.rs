//! Wallet, verification and exchange services

pub mod dex;
pub mod statement;
pub mod verification;
pub mod wallet;
