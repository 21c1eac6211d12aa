mod postgresql;
mod r#trait;
mod memory;
mod postgresql_repo;
mod wrapper;
pub mod model;

// Repository trait
pub use r#trait::MusicRepository;

// Repository implementations
pub use memory::MemoryRepository;
pub use postgresql_repo::PostgreSQLRepository;
pub use wrapper::RepositoryWrapper;

pub use model::{Music, NewMusic};
pub use postgresql::{connect_db, setup_db_schema, MUSIC_TABLE_NAME};
