/**
* filename : ethereum
* date: 2025. 4. 6.
* description:
**/

use crate::coin::ethereum::client::EthereumClient;
use crate::coin::ethereum::model::{EthereumBlockHeader, EthereumFullBlock, TransactionResult};
use crate::fetcher::fetcher::BlockFetcher;
use crate::types::AppError;

use async_trait::async_trait;
use std::sync::Arc;

pub struct EthereumFetcher {
  pub client: Arc<EthereumClient>,
}

impl EthereumFetcher {
  pub fn new(api_url: impl Into<String>) -> Self {
    Self { client: Arc::new(EthereumClient::new(api_url.into())) }
  }
}

#[async_trait]
impl BlockFetcher for EthereumFetcher {
  async fn latest_block_number(&self) -> Result<u64, AppError> {
    self.client.block_number().await
  }

  async fn fetch_block(&self, block_number: u64) -> Result<EthereumBlockHeader, AppError> {
    self.client.fetch_block_by_number(block_number).await
      .map_err(|e| block_error(block_number, e))
  }

  async fn fetch_transaction(&self, tx_hash: &str) -> Result<TransactionResult, AppError> {
    self.client.fetch_transaction_by_hash(tx_hash).await
      .map_err(|e| transaction_error(tx_hash, e))
  }

  async fn fetch_full_block(&self, block_number: u64) -> Result<EthereumFullBlock, AppError> {
    self.client.fetch_full_block_by_number(block_number).await
      .map_err(|e| block_error(block_number, e))
  }

  fn chain_name(&self) -> &'static str {
    "ETH"
  }
}

fn block_error(block: u64, err: AppError) -> AppError {
  match err {
    AppError::NodeUnreachable(_) => err,
    other => AppError::BlockFetchFailed { block, reason: other.to_string() },
  }
}

fn transaction_error(hash: &str, err: AppError) -> AppError {
  match err {
    AppError::NodeUnreachable(_) => err,
    other => AppError::TransactionFetchFailed { hash: hash.to_string(), reason: other.to_string() },
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rpc_failures_become_item_errors() {
    let err = block_error(7, AppError::Client("Reqwest error: HTTP status server error (500)".to_string()));
    assert!(matches!(err, AppError::BlockFetchFailed { block: 7, ref reason } if reason.contains("500")));

    let err = transaction_error("0xaa", AppError::Client("RPC error -32000: header not found".to_string()));
    assert!(matches!(err, AppError::TransactionFetchFailed { ref hash, .. } if hash == "0xaa"));
  }

  #[test]
  fn unreachable_node_passes_through() {
    let err = block_error(7, AppError::NodeUnreachable("connection refused".to_string()));
    assert!(matches!(err, AppError::NodeUnreachable(ref reason) if reason == "connection refused"));

    let err = transaction_error("0xaa", AppError::NodeUnreachable("connection refused".to_string()));
    assert!(matches!(err, AppError::NodeUnreachable(_)));
  }
}
