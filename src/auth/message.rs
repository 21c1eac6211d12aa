use crate::types::AppError;
use serde::Deserialize;

pub const AUDIO_UPLOAD_ACTION: &str = "audio_upload";

/// JSON body of the message a wallet signs before uploading a file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UploadMessage {
    pub action: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub filesize: Option<i64>,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub wallet: Option<String>,
}

impl UploadMessage {
    /// Parses a signed upload message and checks that it authorises an audio upload.
    pub fn parse(message: &str) -> Result<Self, AppError> {
        let parsed: UploadMessage = serde_json::from_str(message)
            .map_err(|e| AppError::InvalidRequest(format!("message is not valid JSON: {}", e)))?;

        if parsed.action != AUDIO_UPLOAD_ACTION {
            return Err(AppError::InvalidRequest(format!(
                "unexpected action {:?}, expected {:?}",
                parsed.action, AUDIO_UPLOAD_ACTION
            )));
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_message() {
        let msg = r#"{"action":"audio_upload","title":"Song","artist":"Band","filename":"song.mp3","filesize":1024,"timestamp":1700000000,"wallet":"0xabc"}"#;
        let parsed = UploadMessage::parse(msg).unwrap();
        assert_eq!(parsed.title.as_deref(), Some("Song"));
        assert_eq!(parsed.filesize, Some(1024));
    }

    #[test]
    fn only_action_is_required() {
        assert!(UploadMessage::parse(r#"{"action":"audio_upload"}"#).is_ok());
    }

    #[test]
    fn rejects_other_actions_and_non_json() {
        assert!(matches!(UploadMessage::parse(r#"{"action":"delete"}"#), Err(AppError::InvalidRequest(_))));
        assert!(matches!(UploadMessage::parse("hello"), Err(AppError::InvalidRequest(_))));
    }
}
