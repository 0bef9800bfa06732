//! Content type detection
//!
//! Fixed extension table covering the media categories the store serves.

use serde::Serialize;
use std::path::Path;

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Broad grouping of a content type, used by clients to pick an icon or preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Image,
    Font,
    Document,
    Video,
    Other,
}

const CONTENT_TYPES: &[(&str, &str, MediaCategory)] = &[
    // Images
    ("jpg", "image/jpeg", MediaCategory::Image),
    ("jpeg", "image/jpeg", MediaCategory::Image),
    ("png", "image/png", MediaCategory::Image),
    ("gif", "image/gif", MediaCategory::Image),
    ("webp", "image/webp", MediaCategory::Image),
    ("svg", "image/svg+xml", MediaCategory::Image),
    ("ico", "image/x-icon", MediaCategory::Image),
    ("avif", "image/avif", MediaCategory::Image),
    // Fonts
    ("woff", "font/woff", MediaCategory::Font),
    ("woff2", "font/woff2", MediaCategory::Font),
    ("ttf", "font/ttf", MediaCategory::Font),
    ("otf", "font/otf", MediaCategory::Font),
    ("eot", "application/vnd.ms-fontobject", MediaCategory::Font),
    // Documents
    ("pdf", "application/pdf", MediaCategory::Document),
    ("doc", "application/msword", MediaCategory::Document),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        MediaCategory::Document,
    ),
    ("txt", "text/plain", MediaCategory::Document),
    // Video
    ("mp4", "video/mp4", MediaCategory::Video),
    ("webm", "video/webm", MediaCategory::Video),
    ("mov", "video/quicktime", MediaCategory::Video),
];

fn lookup(name: &str) -> Option<&'static (&'static str, &'static str, MediaCategory)> {
    let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
    CONTENT_TYPES.iter().find(|(known, _, _)| *known == ext)
}

/// Returns the MIME type for a file name based on its extension.
pub fn content_type_for(name: &str) -> &'static str {
    lookup(name)
        .map(|(_, mime, _)| *mime)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}

/// Returns the media category for a file name.
pub fn category_for(name: &str) -> MediaCategory {
    lookup(name)
        .map(|(_, _, category)| *category)
        .unwrap_or(MediaCategory::Other)
}
