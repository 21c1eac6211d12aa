mod store_trait;
pub mod audio;
pub mod ipfs_client;

pub use audio::is_audio_file;
pub use ipfs_client::IpfsClient;
pub use store_trait::ContentStore;
