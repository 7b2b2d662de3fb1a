/// Clipboard payload model handed to the paste policy
mod payload;

pub use payload::ClipboardPayload;

/// MIME type of the plain-text representation
pub const MIME_TEXT_PLAIN: &str = "text/plain";

/// Type tag hosts expose when the clipboard carries file entries
pub const TYPE_FILES: &str = "Files";

/// Prefix shared by all image media types
pub const IMAGE_PREFIX: &str = "image/";

/// Check if a clipboard type tag refers to files or image data
#[inline]
pub fn is_file_like_type(tag: &str) -> bool {
    tag == TYPE_FILES || tag.starts_with(IMAGE_PREFIX)
}
