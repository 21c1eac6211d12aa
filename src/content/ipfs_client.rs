/**
* filename : ipfs_client
* date: 2025. 4. 8.
* description: IPFS (kubo) HTTP API client
**/

use crate::content::store_trait::ContentStore;
use crate::types::AppError;
use async_trait::async_trait;
use log::info;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;

#[derive(Clone)]
pub struct IpfsClient {
  client: Client,
  api_url: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct AddResponse {
  hash: String,
  #[serde(default)]
  name: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct PinResponse {
  #[serde(default)]
  pins: Vec<String>,
}

impl IpfsClient {
  pub fn new(api_url: String) -> Self {
    Self {
      client: Client::new(),
      api_url: api_url.trim_end_matches('/').to_string(),
    }
  }
}

#[async_trait]
impl ContentStore for IpfsClient {
  async fn add(&self, filename: &str, bytes: Vec<u8>) -> Result<String, AppError> {
    let form = Form::new().part("file", Part::bytes(bytes).file_name(filename.to_string()));

    let response: AddResponse = self.client
      .post(format!("{}/api/v0/add", self.api_url))
      .multipart(form)
      .send()
      .await
      .and_then(|r| r.error_for_status())
      .map_err(|e| AppError::Storage(format!("add failed: {}", e)))?
      .json()
      .await
      .map_err(|e| AppError::Storage(format!("add returned unexpected body: {}", e)))?;

    info!("[IPFS] Added {} as {}", response.name.as_deref().unwrap_or(filename), response.hash);
    Ok(response.hash)
  }

  async fn pin(&self, cid: &str) -> Result<(), AppError> {
    let response: PinResponse = self.client
      .post(format!("{}/api/v0/pin/add", self.api_url))
      .query(&[("arg", cid)])
      .send()
      .await
      .and_then(|r| r.error_for_status())
      .map_err(|e| AppError::Storage(format!("pin {} failed: {}", cid, e)))?
      .json()
      .await
      .map_err(|e| AppError::Storage(format!("pin returned unexpected body: {}", e)))?;

    if response.pins.is_empty() {
      return Err(AppError::Storage(format!("node did not confirm pin of {}", cid)));
    }
    info!("[IPFS] Pinned {:?}", response.pins);
    Ok(())
  }
}
