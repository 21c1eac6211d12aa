use crate::repository::model::{Music, NewMusic};
use crate::repository::r#trait::MusicRepository;
use crate::types::AppError;
use async_trait::async_trait;
use log::info;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory repository, for tests and single-process runs without PostgreSQL.
#[derive(Clone)]
pub struct MemoryRepository {
    // music_id -> record, ordered so listing follows insertion
    music: Arc<RwLock<BTreeMap<i64, Music>>>,
    next_id: Arc<AtomicI64>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self {
            music: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl MusicRepository for MemoryRepository {
    async fn create_music(&self, music: NewMusic) -> Result<i64, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut records = self.music.write().await;
        info!("MemoryRepository: storing music #{} ({})", id, music.cid);
        records.insert(id, music.with_id(id));
        Ok(id)
    }

    async fn get_music_by_id(&self, id: i64) -> Result<Option<Music>, AppError> {
        let records = self.music.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn get_music_by_cid(&self, cid: &str) -> Result<Option<Music>, AppError> {
        let records = self.music.read().await;
        Ok(records.values().find(|m| m.cid == cid).cloned())
    }

    async fn get_all_music(&self) -> Result<Vec<Music>, AppError> {
        let records = self.music.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn update_music(&self, music: &Music) -> Result<(), AppError> {
        let mut records = self.music.write().await;
        match records.get_mut(&music.id) {
            Some(existing) => {
                *existing = Music { link: None, ..music.clone() };
                Ok(())
            }
            None => Err(AppError::Database(format!("Music not found: {}", music.id))),
        }
    }

    async fn delete_music(&self, id: i64) -> Result<(), AppError> {
        let mut records = self.music.write().await;
        records
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::Database(format!("Music not found: {}", id)))
    }
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}
