pub mod upload;

pub use upload::{UploadReceipt, UploadRequest, UploadService};
