/// Snapshot of the data carried by a paste event
use super::{is_file_like_type, MIME_TEXT_PLAIN};

/// Type tags, plain-text payload and file attachments of one paste
///
/// Lives only for the duration of a single evaluation. Missing text or an empty
/// type list is a valid payload, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardPayload {
    /// MIME-like type tags, in the order the host reported them
    pub types: Vec<String>,
    /// Plain-text representation, if the host provided one
    pub text: Option<String>,
    /// Number of file-like attachments
    pub file_count: usize,
}

impl ClipboardPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type tag
    pub fn with_type(mut self, tag: impl Into<String>) -> Self {
        self.types.push(tag.into());
        self
    }

    /// Set the plain-text payload and advertise `text/plain`
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        if !self.types.iter().any(|t| t == MIME_TEXT_PLAIN) {
            self.types.push(MIME_TEXT_PLAIN.to_string());
        }
        self.text = Some(text.into());
        self
    }

    /// Set the number of attached files
    pub fn with_files(mut self, count: usize) -> Self {
        self.file_count = count;
        self
    }

    /// Plain text payload, empty when absent
    pub fn text_plain(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// True if the paste carries files or image data
    pub fn has_files(&self) -> bool {
        self.file_count > 0 || self.types.iter().any(|t| is_file_like_type(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload() {
        let payload = ClipboardPayload::new();
        assert_eq!(payload.text_plain(), "");
        assert!(!payload.has_files());
    }

    #[test]
    fn test_file_detection() {
        assert!(ClipboardPayload::new().with_files(1).has_files());
        assert!(ClipboardPayload::new().with_type("Files").has_files());
        assert!(ClipboardPayload::new().with_type("image/png").has_files());
        assert!(!ClipboardPayload::new().with_type("text/html").has_files());
        // Tags are case-sensitive, like the host reports them
        assert!(!ClipboardPayload::new().with_type("files").has_files());
    }

    #[test]
    fn test_with_text_adds_plain_type_once() {
        let payload = ClipboardPayload::new()
            .with_type("text/plain")
            .with_text("hello");
        assert_eq!(payload.types, vec!["text/plain".to_string()]);
        assert_eq!(payload.text_plain(), "hello");
    }
}
