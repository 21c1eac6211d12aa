use crate::analyzer::chains::evm::match_transaction;
use crate::analyzer::chains::types::Transaction;
use crate::analyzer::chains::utils::parse_hex_timestamp;
use crate::fetcher::{BlockFetcher, EthereumFetcher};
use crate::types::AppError;
use alloy_primitives::Address;
use log::{debug, info, warn};
use std::str::FromStr;
use std::sync::Arc;

/// Reconstructs the transaction history of one address by walking mined blocks.
///
/// Node calls are issued one at a time, in block order. Per-block and
/// per-transaction failures are logged and skipped; only a node that cannot be
/// reached at all aborts the scan. Wrap `scan` in a timeout if the caller needs
/// a deadline, since individual calls carry none.
pub struct ChainScanner<F: BlockFetcher> {
    fetcher: Arc<F>,
}

impl<F: BlockFetcher> ChainScanner<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    /// Returns every transaction sent from or to `target_address`, ascending by
    /// block and in node order within a block.
    ///
    /// `end_block == 0` scans up to the current head. `start_block` is ignored:
    /// the scan always starts at genesis, as existing clients expect.
    ///
    /// When the per-hash pass finds nothing, the range is scanned a second time
    /// from full block bodies, for nodes whose `eth_getTransactionByHash` is
    /// unreliable.
    pub async fn scan(
        &self,
        target_address: &str,
        start_block: u64,
        end_block: u64,
    ) -> Result<Vec<Transaction>, AppError> {
        let target = normalize_target(target_address)?;
        let chain = self.fetcher.chain_name();

        let end_block = if end_block == 0 {
            self.fetcher.latest_block_number().await?
        } else {
            end_block
        };

        if start_block != 0 {
            warn!("[{} Scanner] start block {} ignored, scanning from genesis", chain, start_block);
        }
        let start_block = 0;

        info!("[{} Scanner] Scanning blocks {}..={} for {}", chain, start_block, end_block, target);

        let mut transactions = self.scan_by_hash(&target, start_block, end_block).await?;

        if transactions.is_empty() {
            info!("[{} Scanner] No matches via transaction lookups, re-scanning full blocks", chain);
            transactions = self.scan_full_blocks(&target, start_block, end_block).await?;
        }

        info!("[{} Scanner] Scan finished, {} transactions found", chain, transactions.len());
        Ok(transactions)
    }

    async fn scan_by_hash(&self, target: &str, start_block: u64, end_block: u64) -> Result<Vec<Transaction>, AppError> {
        let chain = self.fetcher.chain_name();
        let mut transactions = Vec::new();

        for block_number in start_block..=end_block {
            debug!("[{} Scanner] Block #{}", chain, block_number);

            let Some(block) = tolerate(chain, self.fetcher.fetch_block(block_number).await)? else {
                continue;
            };
            let Some(timestamp) = tolerate(chain, parse_hex_timestamp(&block.timestamp))? else {
                continue;
            };

            for tx_hash in &block.transactions {
                let Some(raw) = tolerate(chain, self.fetcher.fetch_transaction(tx_hash).await)? else {
                    continue;
                };

                let matched = match_transaction(&raw, tx_hash.clone(), block_number, timestamp, target);
                if let Some(Some(tx)) = tolerate(chain, matched)? {
                    info!("[{} Scanner] Found {} transaction in block {}: {}", chain, tx.direction, block_number, tx.hash);
                    transactions.push(tx);
                }
            }
        }

        Ok(transactions)
    }

    async fn scan_full_blocks(&self, target: &str, start_block: u64, end_block: u64) -> Result<Vec<Transaction>, AppError> {
        let chain = self.fetcher.chain_name();
        let mut transactions = Vec::new();

        for block_number in start_block..=end_block {
            let Some(block) = tolerate(chain, self.fetcher.fetch_full_block(block_number).await)? else {
                continue;
            };
            let Some(timestamp) = tolerate(chain, parse_hex_timestamp(&block.timestamp))? else {
                continue;
            };

            for raw in &block.transactions {
                let hash = raw.hash.clone().unwrap_or_default();
                let matched = match_transaction(raw, hash, block_number, timestamp, target);
                if let Some(Some(tx)) = tolerate(chain, matched)? {
                    info!("[{} Scanner] Found {} transaction in block {}: {}", chain, tx.direction, block_number, tx.hash);
                    transactions.push(tx);
                }
            }
        }

        Ok(transactions)
    }
}

/// Connects to `node_endpoint` over HTTP JSON-RPC and runs [`ChainScanner::scan`].
pub async fn scan_node(
    target_address: &str,
    start_block: u64,
    end_block: u64,
    node_endpoint: &str,
) -> Result<Vec<Transaction>, AppError> {
    let scanner = ChainScanner::new(Arc::new(EthereumFetcher::new(node_endpoint)));
    scanner.scan(target_address, start_block, end_block).await
}

/// Item-level errors become `None` after being logged; an unreachable node stays fatal.
fn tolerate<T>(chain: &str, result: Result<T, AppError>) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(AppError::NodeUnreachable(reason)) => Err(AppError::NodeUnreachable(reason)),
        Err(e) => {
            warn!("[{} Scanner] Skipping: {}", chain, e);
            Ok(None)
        }
    }
}

fn normalize_target(target_address: &str) -> Result<String, AppError> {
    let trimmed = target_address.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidRequest("target address is empty".to_string()));
    }
    match Address::from_str(trimmed) {
        Ok(address) => Ok(format!("{:#x}", address)),
        Err(_) => {
            warn!("{} is not a 20-byte hex address, matching it literally", trimmed);
            Ok(trimmed.to_lowercase())
        }
    }
}
