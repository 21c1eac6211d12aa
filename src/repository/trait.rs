use crate::repository::model::{Music, NewMusic};
use crate::types::AppError;
use async_trait::async_trait;

/// Storage for uploaded audio metadata.
#[async_trait]
pub trait MusicRepository: Send + Sync {
    /// Inserts a record and returns its id.
    async fn create_music(&self, music: NewMusic) -> Result<i64, AppError>;

    async fn get_music_by_id(&self, id: i64) -> Result<Option<Music>, AppError>;

    async fn get_music_by_cid(&self, cid: &str) -> Result<Option<Music>, AppError>;

    /// All records in insertion order.
    async fn get_all_music(&self) -> Result<Vec<Music>, AppError>;

    /// Overwrites every stored field of `music.id`.
    async fn update_music(&self, music: &Music) -> Result<(), AppError>;

    async fn delete_music(&self, id: i64) -> Result<(), AppError>;
}
