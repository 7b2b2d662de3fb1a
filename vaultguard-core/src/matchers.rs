/// Content classifiers used by the exception rules
///
/// Both predicates trim their input first and must match the whole remaining string.
/// They sit behind plain `fn(&str) -> bool` pointers so the engine can be given a
/// stricter or broader classifier without changing the decision rules.
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://[^\s\x{FEFF}]+$").expect("URL pattern is valid"));

static EMOJI_ONLY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[\p{Emoji}\p{Emoji_Modifier}\p{Emoji_Component}\p{Emoji_Modifier_Base}\p{Emoji_Presentation}\s\x{FEFF}]+$",
    )
    .expect("emoji pattern is valid")
});

/// Trim whitespace, counting the byte order mark as whitespace too
#[inline]
fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Signature shared by all content predicates
pub type Predicate = fn(&str) -> bool;

/// Check if the trimmed text is exactly one http(s) URL
#[inline]
pub fn is_url(text: &str) -> bool {
    URL_PATTERN.is_match(trim_text(text))
}

/// Check if the trimmed text is non-empty and made only of emoji and whitespace
#[inline]
pub fn is_only_emoji(text: &str) -> bool {
    EMOJI_ONLY_PATTERN.is_match(trim_text(text))
}

/// Set of predicates the policy engine consults
#[derive(Clone, Copy)]
pub struct Matchers {
    pub is_url: Predicate,
    pub is_only_emoji: Predicate,
}

impl fmt::Debug for Matchers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matchers").finish_non_exhaustive()
    }
}

impl Default for Matchers {
    fn default() -> Self {
        Self {
            is_url,
            is_only_emoji,
        }
    }
}
