pub mod clipboard;
pub mod interceptor;
pub mod notice;
pub mod settings;

pub use clipboard::SystemClipboard;
pub use interceptor::{EventKind, HostEvent, Interceptor};
pub use notice::{LogNotifier, NotificationSurface};
pub use settings::{SettingRow, SettingsPanel, SettingsSection};

pub use vaultguard_core::{
    ClipboardPayload, Decision, FileSettingsStore, Flag, KeyModifiers, Notice, Platform,
    PolicyConfig, PolicyEngine,
};
