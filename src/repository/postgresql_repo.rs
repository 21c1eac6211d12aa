use crate::repository::model::{Music, NewMusic};
use crate::repository::postgresql;
use crate::repository::r#trait::MusicRepository;
use crate::types::AppError;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

/// PostgreSQL-backed repository.
#[derive(Clone)]
pub struct PostgreSQLRepository {
    pool: Arc<PgPool>,
}

impl PostgreSQLRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MusicRepository for PostgreSQLRepository {
    async fn create_music(&self, music: NewMusic) -> Result<i64, AppError> {
        postgresql::create_music(&self.pool, &music).await
    }

    async fn get_music_by_id(&self, id: i64) -> Result<Option<Music>, AppError> {
        postgresql::get_music_by_id(&self.pool, id).await
    }

    async fn get_music_by_cid(&self, cid: &str) -> Result<Option<Music>, AppError> {
        postgresql::get_music_by_cid(&self.pool, cid).await
    }

    async fn get_all_music(&self) -> Result<Vec<Music>, AppError> {
        postgresql::get_all_music(&self.pool).await
    }

    async fn update_music(&self, music: &Music) -> Result<(), AppError> {
        postgresql::update_music(&self.pool, music).await
    }

    async fn delete_music(&self, id: i64) -> Result<(), AppError> {
        postgresql::delete_music(&self.pool, id).await
    }
}
