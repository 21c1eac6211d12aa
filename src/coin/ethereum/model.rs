use serde::Deserialize;

/**
* filename : model
* date: 2025. 4. 7.
* description: wire shapes returned by an Ethereum JSON-RPC node
**/

#[derive(Deserialize, Debug)]
pub struct RpcResponse<T> {
  pub result: Option<T>,
  pub error: Option<EthereumError>,
}

#[derive(Deserialize, Debug)]
pub struct EthereumError {
  pub code: i64,
  pub message: String,
}

/// `eth_getTransactionByHash` result, also embedded in full blocks.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResult {
  pub block_hash: Option<String>,
  pub block_number: Option<String>,
  pub from: Option<String>,
  pub gas: Option<String>,
  pub gas_price: Option<String>,
  pub hash: Option<String>,
  pub input: Option<String>,
  pub nonce: Option<String>,
  pub to: Option<String>, // null for contract creation
  pub transaction_index: Option<String>,
  pub value: Option<String>,
}

/// `eth_getBlockByNumber(n, false)`: transactions are listed as hashes.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EthereumBlockHeader {
  pub number: Option<String>,
  pub hash: Option<String>,
  pub timestamp: String,
  #[serde(default)]
  pub transactions: Vec<String>,
}

/// `eth_getBlockByNumber(n, true)`: transactions carry their full bodies.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EthereumFullBlock {
  pub number: Option<String>,
  pub hash: Option<String>,
  pub timestamp: String,
  #[serde(default)]
  pub transactions: Vec<TransactionResult>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_transaction_response() {
    let body = r#"{"jsonrpc":"2.0","id":1,"result":{
      "blockHash":"0x1d59ff54b1eb26b013ce3cb5fc9dab3705b415a67127a003c3e61eb445bb8df2",
      "blockNumber":"0x5daf3b","from":"0xa7d9ddbe1f17865597fbd27ec712455208b6b76d",
      "gas":"0xc350","gasPrice":"0x4a817c800",
      "hash":"0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b",
      "input":"0x68656c6c6f21","nonce":"0x15","to":null,
      "transactionIndex":"0x41","value":"0xf3dbb76162000","v":"0x25","r":"0x1","s":"0x2"}}"#;

    let response: RpcResponse<TransactionResult> = serde_json::from_str(body).unwrap();
    let tx = response.result.unwrap();
    assert_eq!(tx.block_number.as_deref(), Some("0x5daf3b"));
    assert_eq!(tx.gas_price.as_deref(), Some("0x4a817c800"));
    assert!(tx.to.is_none());
  }

  #[test]
  fn decodes_both_block_shapes() {
    let hashes = r#"{"number":"0x1","timestamp":"0x5f5e1000","transactions":["0xaa","0xbb"]}"#;
    let header: EthereumBlockHeader = serde_json::from_str(hashes).unwrap();
    assert_eq!(header.transactions, vec!["0xaa", "0xbb"]);

    let full = r#"{"number":"0x1","timestamp":"0x5f5e1000","transactions":[{"hash":"0xaa","from":"0x01","to":"0x02","value":"0x0","gas":"0x5208","gasPrice":"0x1","input":"0x"}]}"#;
    let block: EthereumFullBlock = serde_json::from_str(full).unwrap();
    assert_eq!(block.transactions[0].hash.as_deref(), Some("0xaa"));
  }

  #[test]
  fn decodes_rpc_error() {
    let body = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"the method does not exist"}}"#;
    let response: RpcResponse<TransactionResult> = serde_json::from_str(body).unwrap();
    assert!(response.result.is_none());
    assert_eq!(response.error.unwrap().code, -32601);
  }
}
