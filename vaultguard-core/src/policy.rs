/// Interception policy: decides whether a copy, cut, paste or copy shortcut goes through
///
/// Every evaluation is a pure function of the config snapshot and the event context.
/// Suppressing the event and showing the notice is left to the caller.
use log::debug;
use std::fmt;

use crate::clipboard::ClipboardPayload;
use crate::config::PolicyConfig;
use crate::input::{KeyModifiers, Platform};
use crate::matchers::Matchers;

/// Key that triggers the copy shortcut together with the primary modifier
const COPY_KEY: &str = "c";

/// User-facing message attached to a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    CopyDisabled,
    CutDisabled,
    PasteDisabled,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::CopyDisabled => "Copying is disabled in this vault",
            Notice::CutDisabled => "Cutting is disabled in this vault",
            Notice::PasteDisabled => "Pasting text is disabled in this vault",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub block: bool,
    pub notice: Option<Notice>,
}

impl Decision {
    pub const fn allow() -> Self {
        Self {
            block: false,
            notice: None,
        }
    }

    pub const fn block(notice: Notice) -> Self {
        Self {
            block: true,
            notice: Some(notice),
        }
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.block
    }
}

/// One intercepted action
#[derive(Debug, Clone, Copy)]
pub enum EventContext<'a> {
    /// A key press, checked against the copy shortcut
    KeyCombo {
        platform: Platform,
        key: &'a str,
        modifiers: KeyModifiers,
        selected_text: &'a str,
    },
    /// Native copy action
    Copy { selected_text: &'a str },
    /// Native cut action
    Cut,
    /// Native paste action; `None` when the host exposed no clipboard data
    Paste {
        clipboard: Option<&'a ClipboardPayload>,
    },
}

/// Evaluates events against a [`PolicyConfig`] using a set of content predicates
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyEngine {
    matchers: Matchers,
}

impl PolicyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom URL / emoji classifiers
    pub fn with_matchers(matchers: Matchers) -> Self {
        Self { matchers }
    }

    pub fn matchers(&self) -> &Matchers {
        &self.matchers
    }

    /// Dispatch on the event kind
    pub fn evaluate(&self, config: &PolicyConfig, event: &EventContext<'_>) -> Decision {
        let decision = match *event {
            EventContext::KeyCombo {
                platform,
                key,
                modifiers,
                selected_text,
            } => self.evaluate_key_combo(config, platform, key, modifiers, selected_text),
            EventContext::Copy { selected_text } => self.evaluate_copy(config, selected_text),
            EventContext::Cut => self.evaluate_cut(config),
            EventContext::Paste { clipboard: None } => Decision::allow(),
            EventContext::Paste {
                clipboard: Some(payload),
            } => self.evaluate_paste(config, payload),
        };
        debug!("{:?} -> {:?}", event, decision);
        decision
    }

    /// Copy shortcut: primary modifier + `c`. Any other key press passes through.
    pub fn evaluate_key_combo(
        &self,
        config: &PolicyConfig,
        platform: Platform,
        key: &str,
        modifiers: KeyModifiers,
        selected_text: &str,
    ) -> Decision {
        if key != COPY_KEY || !modifiers.primary_held(platform) {
            return Decision::allow();
        }
        self.evaluate_copy(config, selected_text)
    }

    pub fn evaluate_copy(&self, config: &PolicyConfig, selected_text: &str) -> Decision {
        if !config.disable_copy {
            return Decision::allow();
        }
        if config.allow_copy_urls && (self.matchers.is_url)(selected_text) {
            return Decision::allow();
        }
        Decision::block(Notice::CopyDisabled)
    }

    /// Cut has no exceptions
    pub fn evaluate_cut(&self, config: &PolicyConfig) -> Decision {
        if !config.disable_cut {
            return Decision::allow();
        }
        Decision::block(Notice::CutDisabled)
    }

    /// First matching rule wins: files/images, then emoji-only text, then a URL
    pub fn evaluate_paste(&self, config: &PolicyConfig, clipboard: &ClipboardPayload) -> Decision {
        if !config.disable_paste {
            return Decision::allow();
        }

        // Files go first: a file paste may carry an empty or unrelated text payload
        if config.allow_images && clipboard.has_files() {
            return Decision::allow();
        }

        let text = clipboard.text_plain();
        if config.allow_emojis && !text.is_empty() && (self.matchers.is_only_emoji)(text) {
            return Decision::allow();
        }
        if config.allow_paste_urls && !text.is_empty() && (self.matchers.is_url)(text) {
            return Decision::allow();
        }

        Decision::block(Notice::PasteDisabled)
    }
}

/// [`PolicyEngine::evaluate_key_combo`] with the default predicates
pub fn evaluate_key_combo(
    config: &PolicyConfig,
    platform: Platform,
    key: &str,
    modifiers: KeyModifiers,
    selected_text: &str,
) -> Decision {
    PolicyEngine::new().evaluate_key_combo(config, platform, key, modifiers, selected_text)
}

/// [`PolicyEngine::evaluate_copy`] with the default predicates
pub fn evaluate_copy(config: &PolicyConfig, selected_text: &str) -> Decision {
    PolicyEngine::new().evaluate_copy(config, selected_text)
}

pub fn evaluate_cut(config: &PolicyConfig) -> Decision {
    PolicyEngine::new().evaluate_cut(config)
}

/// [`PolicyEngine::evaluate_paste`] with the default predicates
pub fn evaluate_paste(config: &PolicyConfig, clipboard: &ClipboardPayload) -> Decision {
    PolicyEngine::new().evaluate_paste(config, clipboard)
}
