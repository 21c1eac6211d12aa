//! Wallet-signature authentication for uploads and EVM transaction history scanning.
//!
//! * [`auth`] recovers the signing address of a `personal_sign` message.
//! * [`analyzer`] walks blocks on a JSON-RPC node and attributes transactions to an address.
//! * [`service`] ties signature checks to the content and metadata stores.

pub mod analyzer;
pub mod auth;
pub mod coin;
pub mod config;
pub mod content;
pub mod fetcher;
pub mod repository;
pub mod service;
pub mod shutdown;
pub mod types;

pub use types::AppError;
