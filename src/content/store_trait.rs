use crate::types::AppError;
use async_trait::async_trait;

/// Content-addressed blob store.
#[async_trait]
pub trait ContentStore: Send + Sync {
  /// Stores `bytes` and returns their content identifier.
  async fn add(&self, filename: &str, bytes: Vec<u8>) -> Result<String, AppError>;
  /// Pins `cid` so the node keeps it.
  async fn pin(&self, cid: &str) -> Result<(), AppError>;
}
