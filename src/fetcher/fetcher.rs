/**
* filename : fetcher
* date: 2025. 4. 6.
* description: read-only node operations the scanner depends on
**/

use async_trait::async_trait;
use crate::coin::ethereum::model::{EthereumBlockHeader, EthereumFullBlock, TransactionResult};
use crate::types::AppError;

/// Node access used by [`crate::analyzer::scanner::ChainScanner`].
///
/// Implementations report connection-level failures as `AppError::NodeUnreachable`;
/// anything else is treated as a per-item failure and skipped by the scanner.
#[async_trait]
pub trait BlockFetcher: Send + Sync {
  /// Current head block number.
  async fn latest_block_number(&self) -> Result<u64, AppError>;
  /// Block header with its transaction hash list.
  async fn fetch_block(&self, block_number: u64) -> Result<EthereumBlockHeader, AppError>;
  async fn fetch_transaction(&self, tx_hash: &str) -> Result<TransactionResult, AppError>;
  /// Block with full transaction bodies embedded.
  async fn fetch_full_block(&self, block_number: u64) -> Result<EthereumFullBlock, AppError>;
  fn chain_name(&self) -> &'static str;
}
