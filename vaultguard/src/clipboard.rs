/// System clipboard probe using arboard
///
/// For hosts whose paste events don't carry a clipboard descriptor, this reads the
/// current system clipboard into a [`ClipboardPayload`].
use anyhow::Result;
use log::debug;
use vaultguard_core::clipboard::{ClipboardPayload, MIME_TEXT_PLAIN};

/// Type tag reported for bitmap clipboard content
const IMAGE_TYPE: &str = "image/png";

/// Cross-platform clipboard reader
pub struct SystemClipboard {
    ctx: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let ctx = arboard::Clipboard::new()?;
        Ok(Self { ctx })
    }

    /// Read text and image availability from the system clipboard
    ///
    /// Unavailable content is reported as absent, not as an error.
    pub fn snapshot(&mut self) -> ClipboardPayload {
        let text = match self.ctx.get_text() {
            Ok(text) => Some(text),
            Err(e) => {
                debug!("No clipboard text: {}", e);
                None
            }
        };
        let has_image = match self.ctx.get_image() {
            Ok(_) => true,
            Err(e) => {
                debug!("No clipboard image: {}", e);
                false
            }
        };
        payload_from(text, has_image)
    }
}

fn payload_from(text: Option<String>, has_image: bool) -> ClipboardPayload {
    let mut payload = ClipboardPayload::new();
    if has_image {
        payload = payload.with_type(IMAGE_TYPE);
    }
    if let Some(text) = text {
        payload = payload.with_text(text);
    }
    payload
}
