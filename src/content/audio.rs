use std::path::Path;

/// Extensions accepted when the content itself is not recognised.
pub const AUDIO_EXTENSIONS: [&str; 10] = ["mp3", "wav", "ogg", "flac", "aac", "m4a", "wma", "opus", "webm", "mka"];

/// Guesses an audio MIME type from the leading bytes of a file.
pub fn sniff_audio_mime(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [b'I', b'D', b'3', ..] => Some("audio/mpeg"),
        [b'O', b'g', b'g', b'S', ..] => Some("audio/ogg"),
        [b'f', b'L', b'a', b'C', ..] => Some("audio/flac"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'A', b'V', b'E', ..] => Some("audio/wave"),
        [_, _, _, _, b'f', b't', b'y', b'p', ..] => Some("audio/mp4"),
        [0x1A, 0x45, 0xDF, 0xA3, ..] => Some("audio/webm"),
        // ADTS before MPEG: both start with an 11-bit frame sync
        [0xFF, b1, ..] if b1 & 0xF6 == 0xF0 => Some("audio/aac"),
        [0xFF, b1, ..] if b1 & 0xE0 == 0xE0 => Some("audio/mpeg"),
        _ => None,
    }
}

/// Content sniffing first, then the filename extension.
pub fn is_audio_file(filename: &str, bytes: &[u8]) -> bool {
    if sniff_audio_mime(bytes).is_some() {
        return true;
    }
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| AUDIO_EXTENSIONS.iter().any(|audio| ext.eq_ignore_ascii_case(audio)))
}
