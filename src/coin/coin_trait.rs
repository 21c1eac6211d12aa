/**
* filename : coin_trait
* date: 2025. 4. 7.
* description: JSON-RPC transport shared by node clients
**/

use crate::coin::ethereum::model::RpcResponse;
use crate::types::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;

#[async_trait]
pub trait BlockchainClient: Clone + Send + Sync {
  fn get_http_client(&self) -> &Client;
  fn get_api_url(&self) -> &str;

  async fn fetch_json<T>(&self, payload: &serde_json::Value) -> Result<T, reqwest::Error>
  where
    T: DeserializeOwned + Send,
  {
    let client = self.get_http_client();
    let url = self.get_api_url();

    let response = client
      .post(url)
      .header("Content-Type", "application/json")
      .json(payload)
      .send()
      .await?
      .error_for_status()?
      .json::<T>()
      .await?;

    Ok(response)
  }

  /// Issues one JSON-RPC 2.0 call and unwraps the `result` member.
  /// A JSON-RPC `error` member or a `null` result is reported as `AppError::Client`.
  async fn call<T>(&self, method: &str, params: serde_json::Value) -> Result<T, AppError>
  where
    T: DeserializeOwned + Send,
  {
    let payload = json!({
      "jsonrpc": "2.0",
      "method": method,
      "params": params,
      "id": 1
    });

    let response: RpcResponse<T> = self.fetch_json(&payload).await?;

    if let Some(error) = response.error {
      return Err(AppError::Client(format!(
        "{} returned error: code = {}, message = {}",
        method, error.code, error.message
      )));
    }

    response
      .result
      .ok_or_else(|| AppError::Client(format!("{} returned no result", method)))
  }
}
