/**
* date: 2025. 4. 5.
* description: HTTP JSON-RPC client for Ethereum-compatible nodes
**/

use crate::analyzer::chains::utils::parse_hex_u64;
use crate::coin::coin_trait::BlockchainClient;
use crate::coin::ethereum::model::{EthereumBlockHeader, EthereumFullBlock, TransactionResult};
use crate::types::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

#[derive(Clone)]
pub struct EthereumClient {
  client: Client,
  api_url: String,
}

impl EthereumClient {
  pub fn new(api_url: String) -> Self {
    Self {
      client: Client::new(),
      api_url,
    }
  }

  pub async fn block_number(&self) -> Result<u64, AppError> {
    let head: String = self.call("eth_blockNumber", json!([])).await?;
    parse_hex_u64(&head)
  }

  pub async fn fetch_block_by_number(&self, block_number: u64) -> Result<EthereumBlockHeader, AppError> {
    let block_number_hex = format!("0x{:x}", block_number);
    self.call("eth_getBlockByNumber", json!([block_number_hex, false])).await
  }

  pub async fn fetch_full_block_by_number(&self, block_number: u64) -> Result<EthereumFullBlock, AppError> {
    let block_number_hex = format!("0x{:x}", block_number);
    self.call("eth_getBlockByNumber", json!([block_number_hex, true])).await
  }

  pub async fn fetch_transaction_by_hash(&self, tx_hash: &str) -> Result<TransactionResult, AppError> {
    self.call("eth_getTransactionByHash", json!([tx_hash])).await
  }
}

#[async_trait]
impl BlockchainClient for EthereumClient {
  fn get_http_client(&self) -> &Client {
    &self.client
  }

  fn get_api_url(&self) -> &str {
    &self.api_url
  }
}
