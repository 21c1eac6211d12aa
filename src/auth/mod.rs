pub mod message;
pub mod recovery;
pub mod verifier;

pub use message::UploadMessage;
pub use recovery::recovery_id_from_v;
pub use verifier::{matches_claimed_address, verify};
