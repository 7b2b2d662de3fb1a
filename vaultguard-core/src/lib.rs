pub mod clipboard;
pub mod config;
pub mod input;
pub mod matchers;
pub mod policy;

pub use clipboard::ClipboardPayload;
pub use config::{ConfigError, FileSettingsStore, Flag, PolicyConfig, Section, SettingsStore, Toggle};
pub use input::{primary_modifier_held, KeyModifiers, Platform};
pub use matchers::{is_only_emoji, is_url, Matchers, Predicate};
pub use policy::{Decision, EventContext, Notice, PolicyEngine};
