/**
* filename : types
* date: 2025. 4. 6.
* description: crate-wide error type and its conversions
**/

// ====== Unified Error Type ======
#[derive(Debug, thiserror::Error)]
pub enum AppError {
  #[error("Malformed signature: {0}")]
  MalformedSignature(String),

  #[error("Invalid signature length: expected 65 bytes, got {0}")]
  InvalidSignatureLength(usize),

  #[error("Public key recovery failed: {0}")]
  RecoveryFailed(String),

  #[error("Node unreachable: {0}")]
  NodeUnreachable(String),

  #[error("Failed to fetch block {block}: {reason}")]
  BlockFetchFailed { block: u64, reason: String },

  #[error("Failed to fetch transaction {hash}: {reason}")]
  TransactionFetchFailed { hash: String, reason: String },

  #[error("Decode error: {0}")]
  DecodeFailed(String),

  #[error("API Client error: {0}")]
  Client(String),

  #[error("Configuration error: {0}")]
  Config(String),

  #[error("Database error: {0}")]
  Database(String),

  #[error("Content store error: {0}")]
  Storage(String),

  #[error("Unauthorized: {0}")]
  Unauthorized(String),

  #[error("Invalid request: {0}")]
  InvalidRequest(String),

  #[error("Timed out after {0} seconds")]
  Timeout(u64),

  #[error("Initialization error: {0}")]
  Initialization(String),
}

impl AppError {
  /// True for failures that mean "the caller could not prove wallet ownership",
  /// as opposed to a processing failure on our side.
  pub fn is_auth_rejection(&self) -> bool {
    matches!(
      self,
      AppError::MalformedSignature(_)
        | AppError::InvalidSignatureLength(_)
        | AppError::RecoveryFailed(_)
        | AppError::Unauthorized(_)
    )
  }
}

// ====== Error Conversions (From impls) ======

impl From<reqwest::Error> for AppError {
  fn from(err: reqwest::Error) -> Self {
    if err.is_connect() {
      AppError::NodeUnreachable(format!("Reqwest error: {}", err))
    } else {
      AppError::Client(format!("Reqwest error: {}", err))
    }
  }
}

impl From<sqlx::Error> for AppError {
  fn from(err: sqlx::Error) -> Self {
    AppError::Database(format!("SQLx error: {}", err))
  }
}

impl From<std::io::Error> for AppError {
  fn from(err: std::io::Error) -> Self {
    AppError::Initialization(format!("IO error: {}", err))
  }
}

impl From<serde_json::Error> for AppError {
  fn from(err: serde_json::Error) -> Self {
    AppError::Client(format!("JSON parse error: {}", err))
  }
}

impl From<config::ConfigError> for AppError {
  fn from(err: config::ConfigError) -> Self {
    AppError::Config(err.to_string())
  }
}
