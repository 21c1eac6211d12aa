pub mod types;
pub mod utils;
pub mod evm;

pub use types::{Direction, Transaction};
pub use evm::{classify, decode_transaction, match_transaction};
