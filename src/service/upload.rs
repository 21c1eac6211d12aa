use crate::auth::{matches_claimed_address, verify, UploadMessage};
use crate::content::{is_audio_file, ContentStore};
use crate::repository::{Music, MusicRepository, NewMusic};
use crate::types::AppError;
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::sync::Arc;

/// A signed upload as received from a wallet.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// The exact text the wallet signed; JSON with `"action": "audio_upload"`.
    pub message: String,
    pub signature: String,
    pub wallet_address: String,
    pub filename: String,
    pub bytes: Vec<u8>,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub cid: String,
    pub music_id: i64,
}

/// Authenticates uploads by wallet signature, then stores the file and its metadata.
pub struct UploadService<S: ContentStore, R: MusicRepository> {
    store: Arc<S>,
    repository: Arc<R>,
    gateway_url: String,
}

impl<S: ContentStore, R: MusicRepository> UploadService<S, R> {
    pub fn new(store: Arc<S>, repository: Arc<R>, gateway_url: impl Into<String>) -> Self {
        Self {
            store,
            repository,
            gateway_url: gateway_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Verification errors and address mismatches are returned before anything is stored;
    /// check [`AppError::is_auth_rejection`] to tell them apart from storage failures.
    pub async fn upload(&self, request: UploadRequest) -> Result<UploadReceipt, AppError> {
        let recovered = verify(&request.message, &request.signature)?;
        if !matches_claimed_address(&recovered, &request.wallet_address) {
            warn!("[Upload] Signature recovers to {}, request claims {}", recovered, request.wallet_address);
            return Err(AppError::Unauthorized(format!(
                "signature does not belong to {}",
                request.wallet_address
            )));
        }

        UploadMessage::parse(&request.message)?;

        if !is_audio_file(&request.filename, &request.bytes) {
            return Err(AppError::InvalidRequest(format!(
                "{} is not an audio file",
                request.filename
            )));
        }

        let cid = self.store.add(&request.filename, request.bytes).await?;
        self.store.pin(&cid).await?;

        let music_id = self.repository.create_music(NewMusic {
            title: request.filename,
            cid: cid.clone(),
            owner_addr: request.wallet_address,
            signature: request.signature,
            uploaded_at: request.uploaded_at,
        }).await?;

        info!("[Upload] Stored music #{} as {} for {}", music_id, cid, recovered);
        Ok(UploadReceipt { cid, music_id })
    }

    /// All stored records with their gateway link filled in.
    pub async fn list_music(&self) -> Result<Vec<Music>, AppError> {
        let mut music = self.repository.get_all_music().await?;
        for m in &mut music {
            m.link = Some(format!("{}/ipfs/{}", self.gateway_url, m.cid));
        }
        Ok(music)
    }
}
