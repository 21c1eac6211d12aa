use chrono::{DateTime, Utc};
use serde::Serialize;

/// Stored metadata for one uploaded audio file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Music {
    pub id: i64,
    pub title: String,
    pub cid: String,
    /// Gateway URL, filled in when listing; not stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub owner_addr: String,
    pub signature: String,
    pub uploaded_at: DateTime<Utc>,
}

/// A record about to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMusic {
    pub title: String,
    pub cid: String,
    pub owner_addr: String,
    pub signature: String,
    pub uploaded_at: DateTime<Utc>,
}

impl NewMusic {
    pub fn with_id(self, id: i64) -> Music {
        Music {
            id,
            title: self.title,
            cid: self.cid,
            link: None,
            owner_addr: self.owner_addr,
            signature: self.signature,
            uploaded_at: self.uploaded_at,
        }
    }
}
