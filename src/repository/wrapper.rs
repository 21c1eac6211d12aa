use crate::config::RepositorySettings;
use crate::repository::model::{Music, NewMusic};
use crate::repository::{connect_db, setup_db_schema, MemoryRepository, MusicRepository, PostgreSQLRepository};
use crate::types::AppError;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

/// Repository selected at startup from configuration.
pub enum RepositoryWrapper {
    Memory(Arc<MemoryRepository>),
    PostgreSQL(Arc<PostgreSQLRepository>),
}

impl RepositoryWrapper {
    pub async fn from_settings(settings: &RepositorySettings) -> Result<Self, AppError> {
        if settings.memory_db {
            info!("Using in-memory music repository");
            Ok(RepositoryWrapper::Memory(Arc::new(MemoryRepository::new())))
        } else {
            let db_connection_pool = connect_db(&settings.postgresql_url).await
                .map_err(|e| AppError::Database(format!("Failed to connect to PostgreSQL: {}", e)))?;
            setup_db_schema(&db_connection_pool).await
                .map_err(|e| AppError::Database(format!("Failed to setup database schema: {}", e)))?;
            info!("Connected to PostgreSQL music repository");
            Ok(RepositoryWrapper::PostgreSQL(Arc::new(PostgreSQLRepository::new(Arc::new(db_connection_pool)))))
        }
    }
}

#[async_trait]
impl MusicRepository for RepositoryWrapper {
    async fn create_music(&self, music: NewMusic) -> Result<i64, AppError> {
        match self {
            RepositoryWrapper::Memory(r) => r.create_music(music).await,
            RepositoryWrapper::PostgreSQL(r) => r.create_music(music).await,
        }
    }

    async fn get_music_by_id(&self, id: i64) -> Result<Option<Music>, AppError> {
        match self {
            RepositoryWrapper::Memory(r) => r.get_music_by_id(id).await,
            RepositoryWrapper::PostgreSQL(r) => r.get_music_by_id(id).await,
        }
    }

    async fn get_music_by_cid(&self, cid: &str) -> Result<Option<Music>, AppError> {
        match self {
            RepositoryWrapper::Memory(r) => r.get_music_by_cid(cid).await,
            RepositoryWrapper::PostgreSQL(r) => r.get_music_by_cid(cid).await,
        }
    }

    async fn get_all_music(&self) -> Result<Vec<Music>, AppError> {
        match self {
            RepositoryWrapper::Memory(r) => r.get_all_music().await,
            RepositoryWrapper::PostgreSQL(r) => r.get_all_music().await,
        }
    }

    async fn update_music(&self, music: &Music) -> Result<(), AppError> {
        match self {
            RepositoryWrapper::Memory(r) => r.update_music(music).await,
            RepositoryWrapper::PostgreSQL(r) => r.update_music(music).await,
        }
    }

    async fn delete_music(&self, id: i64) -> Result<(), AppError> {
        match self {
            RepositoryWrapper::Memory(r) => r.delete_music(id).await,
            RepositoryWrapper::PostgreSQL(r) => r.delete_music(id).await,
        }
    }
}
