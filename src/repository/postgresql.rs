use crate::repository::model::{Music, NewMusic};
use crate::types::AppError;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgPoolOptions, PgPool};

pub async fn connect_db(db_url: &str) -> Result<PgPool, sqlx::Error> {
  PgPoolOptions::new()
    .max_connections(5)
    .connect(db_url)
    .await
}

pub const MUSIC_TABLE_NAME: &str = "music";

type MusicRow = (i64, String, String, String, String, DateTime<Utc>);

fn music_from_row((id, title, cid, owner_addr, signature, uploaded_at): MusicRow) -> Music {
  Music { id, title, cid, link: None, owner_addr, signature, uploaded_at }
}

// Ensure the music table exists
pub async fn setup_db_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
  sqlx::query(&format!(
    r#"
        CREATE TABLE IF NOT EXISTS {} (
            music_id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            cid TEXT NOT NULL,
            owner_addr VARCHAR(42) NOT NULL,
            signature TEXT NOT NULL,
            uploaded_at TIMESTAMPTZ NOT NULL
        )
        "#,
    MUSIC_TABLE_NAME
  ))
    .execute(pool)
    .await?;
  Ok(())
}

pub async fn create_music(pool: &PgPool, music: &NewMusic) -> Result<i64, AppError> {
  let (id,): (i64,) = sqlx::query_as(&format!(
    "INSERT INTO {} (title, cid, owner_addr, signature, uploaded_at) VALUES ($1, $2, $3, $4, $5) RETURNING music_id",
    MUSIC_TABLE_NAME
  ))
    .bind(&music.title)
    .bind(&music.cid)
    .bind(&music.owner_addr)
    .bind(&music.signature)
    .bind(music.uploaded_at)
    .fetch_one(pool)
    .await
    .map_err(|e| AppError::Database(format!("Failed to insert music: {}", e)))?;
  Ok(id)
}

pub async fn get_music_by_id(pool: &PgPool, id: i64) -> Result<Option<Music>, AppError> {
  let row: Option<MusicRow> = sqlx::query_as(&format!(
    "SELECT music_id, title, cid, owner_addr, signature, uploaded_at FROM {} WHERE music_id = $1",
    MUSIC_TABLE_NAME
  ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| AppError::Database(format!("Failed to query music {}: {}", id, e)))?;
  Ok(row.map(music_from_row))
}

pub async fn get_music_by_cid(pool: &PgPool, cid: &str) -> Result<Option<Music>, AppError> {
  let row: Option<MusicRow> = sqlx::query_as(&format!(
    "SELECT music_id, title, cid, owner_addr, signature, uploaded_at FROM {} WHERE cid = $1 ORDER BY music_id LIMIT 1",
    MUSIC_TABLE_NAME
  ))
    .bind(cid)
    .fetch_optional(pool)
    .await
    .map_err(|e| AppError::Database(format!("Failed to query music by cid {}: {}", cid, e)))?;
  Ok(row.map(music_from_row))
}

pub async fn get_all_music(pool: &PgPool) -> Result<Vec<Music>, AppError> {
  let rows: Vec<MusicRow> = sqlx::query_as(&format!(
    "SELECT music_id, title, cid, owner_addr, signature, uploaded_at FROM {} ORDER BY music_id",
    MUSIC_TABLE_NAME
  ))
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::Database(format!("Failed to list music: {}", e)))?;
  Ok(rows.into_iter().map(music_from_row).collect())
}

pub async fn update_music(pool: &PgPool, music: &Music) -> Result<(), AppError> {
  let result = sqlx::query(&format!(
    "UPDATE {} SET title = $1, cid = $2, owner_addr = $3, signature = $4, uploaded_at = $5 WHERE music_id = $6",
    MUSIC_TABLE_NAME
  ))
    .bind(&music.title)
    .bind(&music.cid)
    .bind(&music.owner_addr)
    .bind(&music.signature)
    .bind(music.uploaded_at)
    .bind(music.id)
    .execute(pool)
    .await
    .map_err(|e| AppError::Database(format!("Failed to update music {}: {}", music.id, e)))?;

  if result.rows_affected() == 0 {
    return Err(AppError::Database(format!("Music not found: {}", music.id)));
  }
  Ok(())
}

pub async fn delete_music(pool: &PgPool, id: i64) -> Result<(), AppError> {
  let result = sqlx::query(&format!("DELETE FROM {} WHERE music_id = $1", MUSIC_TABLE_NAME))
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| AppError::Database(format!("Failed to delete music {}: {}", id, e)))?;

  if result.rows_affected() == 0 {
    return Err(AppError::Database(format!("Music not found: {}", id)));
  }
  Ok(())
}
