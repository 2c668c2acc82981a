// Helpers to turn a local image into the data URL the photo endpoint
// expects. Mime detection is a pure function of the path string.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fs;
use std::path::Path;

use crate::error::SendError;

/// Used when the extension is missing or not in the table.
pub const DEFAULT_MIME: &str = "image/jpeg";

const MIME_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
];

/// Mime type for `path`, looked up by the text after its last `.`
/// (case-insensitive). A path without a dot is looked up as a whole.
pub fn mime_type_for(path: &str) -> &'static str {
    let lower = path.to_lowercase();
    let ext = lower.rsplit('.').next().unwrap_or("");
    MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or(DEFAULT_MIME)
}

/// `data:<mime>;base64,<payload>`
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Read the whole file and encode it as a data URL.
pub fn load_photo(path: &Path) -> Result<String, SendError> {
    let bytes = fs::read(path)?;
    let mime = mime_type_for(&path.to_string_lossy());
    tracing::debug!(path = %path.display(), bytes = bytes.len(), mime, "loaded image");
    Ok(data_url(mime, &bytes))
}
