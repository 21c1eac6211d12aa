use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Direction of a transaction relative to the scanned address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Incoming,
    Outgoing,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Incoming => write!(f, "incoming"),
            Direction::Outgoing => write!(f, "outgoing"),
        }
    }
}

/// A mined transaction touching the scanned address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub hash: String,
    pub block_number: u64,
    pub from: String,
    /// `None` for contract creation.
    pub to: Option<String>,
    /// Wei, base 10.
    pub value: String,
    pub gas: u64,
    /// Wei, base 10.
    pub gas_price: String,
    /// Call data without the `0x` prefix.
    pub input: String,
    pub timestamp: DateTime<Utc>,
    pub direction: Direction,
}
