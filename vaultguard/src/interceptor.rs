/// Host adapter: turns host events into policy decisions and applies them
///
/// The interceptor is the single owner of the live [`PolicyConfig`]. Handlers read the
/// current snapshot; only [`Interceptor::set_flag`] and [`Interceptor::reload`] replace it.
use log::{debug, info};
use vaultguard_core::{
    ClipboardPayload, Decision, EventContext, Flag, KeyModifiers, Platform, PolicyConfig,
    PolicyEngine, SettingsStore,
};

use crate::notice::NotificationSurface;

/// Kinds of host events the interceptor subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    KeyDown,
    Copy,
    Cut,
    Paste,
}

/// Host-native event, as seen during capture-phase dispatch
pub trait HostEvent {
    fn kind(&self) -> EventKind;

    /// Logical key of a key-down event
    fn key(&self) -> &str {
        ""
    }

    fn modifiers(&self) -> KeyModifiers {
        KeyModifiers::default()
    }

    /// Current text selection, empty when nothing is selected
    fn selected_text(&self) -> String;

    /// Clipboard data of a paste event, `None` if the host exposes none
    fn clipboard(&self) -> Option<ClipboardPayload> {
        None
    }

    fn prevent_default(&mut self);

    fn stop_propagation(&mut self);
}

pub struct Interceptor<S, N> {
    config: PolicyConfig,
    engine: PolicyEngine,
    platform: Platform,
    store: S,
    notifier: N,
}

impl<S: SettingsStore, N: NotificationSurface> Interceptor<S, N> {
    /// Load settings from `store` and start intercepting for the current platform
    pub fn new(store: S, notifier: N) -> Self {
        let config = store.load();
        info!("Loaded interception settings: {:?}", config);
        Self {
            config,
            engine: PolicyEngine::new(),
            platform: Platform::current(),
            store,
            notifier,
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_engine(mut self, engine: PolicyEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Change one setting and persist the new snapshot
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.config.set(flag, value);
        info!("Setting {:?} changed to {}", flag, value);
        self.store.save(&self.config);
    }

    /// Replace the snapshot with whatever the store holds now
    pub fn reload(&mut self) {
        self.config = self.store.load();
        debug!("Reloaded interception settings: {:?}", self.config);
    }

    /// Evaluate one event and, if blocked, suppress it and show the notice
    ///
    /// A blocked copy shortcut never reaches the native copy handler, since its
    /// default action is suppressed here; each user action yields at most one notice.
    pub fn handle(&self, event: &mut dyn HostEvent) -> Decision {
        let decision = match event.kind() {
            EventKind::KeyDown => {
                let selected_text = event.selected_text();
                self.engine.evaluate(
                    &self.config,
                    &EventContext::KeyCombo {
                        platform: self.platform,
                        key: event.key(),
                        modifiers: event.modifiers(),
                        selected_text: &selected_text,
                    },
                )
            }
            EventKind::Copy => {
                let selected_text = event.selected_text();
                self.engine.evaluate(
                    &self.config,
                    &EventContext::Copy {
                        selected_text: &selected_text,
                    },
                )
            }
            EventKind::Cut => self.engine.evaluate(&self.config, &EventContext::Cut),
            EventKind::Paste => {
                let clipboard = event.clipboard();
                self.engine.evaluate(
                    &self.config,
                    &EventContext::Paste {
                        clipboard: clipboard.as_ref(),
                    },
                )
            }
        };

        if decision.block {
            event.prevent_default();
            event.stop_propagation();
            if let Some(notice) = decision.notice {
                self.notifier.show(notice.message());
            }
        }
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use vaultguard_core::{FileSettingsStore, Notice};

    #[derive(Default)]
    struct MemoryStore {
        stored: RefCell<Option<PolicyConfig>>,
        saves: Cell<usize>,
    }

    impl SettingsStore for MemoryStore {
        fn load(&self) -> PolicyConfig {
            (*self.stored.borrow()).unwrap_or_default()
        }

        fn save(&self, config: &PolicyConfig) {
            *self.stored.borrow_mut() = Some(*config);
            self.saves.set(self.saves.get() + 1);
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        shown: RefCell<Vec<String>>,
    }

    impl NotificationSurface for RecordingNotifier {
        fn show(&self, message: &str) {
            self.shown.borrow_mut().push(message.to_string());
        }
    }

    struct FakeEvent {
        kind: EventKind,
        key: String,
        modifiers: KeyModifiers,
        selection: String,
        clipboard: Option<ClipboardPayload>,
        default_prevented: bool,
        propagation_stopped: bool,
    }

    impl FakeEvent {
        fn new(kind: EventKind) -> Self {
            Self {
                kind,
                key: String::new(),
                modifiers: KeyModifiers::default(),
                selection: String::new(),
                clipboard: None,
                default_prevented: false,
                propagation_stopped: false,
            }
        }

        fn key_down(key: &str, modifiers: KeyModifiers, selection: &str) -> Self {
            Self {
                key: key.to_string(),
                modifiers,
                selection: selection.to_string(),
                ..Self::new(EventKind::KeyDown)
            }
        }

        fn copy(selection: &str) -> Self {
            Self {
                selection: selection.to_string(),
                ..Self::new(EventKind::Copy)
            }
        }

        fn paste(clipboard: ClipboardPayload) -> Self {
            Self {
                clipboard: Some(clipboard),
                ..Self::new(EventKind::Paste)
            }
        }

        fn suppressed(&self) -> bool {
            self.default_prevented && self.propagation_stopped
        }
    }

    impl HostEvent for FakeEvent {
        fn kind(&self) -> EventKind {
            self.kind
        }

        fn key(&self) -> &str {
            &self.key
        }

        fn modifiers(&self) -> KeyModifiers {
            self.modifiers
        }

        fn selected_text(&self) -> String {
            self.selection.clone()
        }

        fn clipboard(&self) -> Option<ClipboardPayload> {
            self.clipboard.clone()
        }

        fn prevent_default(&mut self) {
            self.default_prevented = true;
        }

        fn stop_propagation(&mut self) {
            self.propagation_stopped = true;
        }
    }

    fn interceptor() -> Interceptor<MemoryStore, RecordingNotifier> {
        let _ = env_logger::builder().is_test(true).try_init();
        Interceptor::new(MemoryStore::default(), RecordingNotifier::default())
            .with_platform(Platform::Other)
    }

    #[test]
    fn test_blocked_copy_is_suppressed_and_notified() {
        let interceptor = interceptor();
        let mut event = FakeEvent::copy("private notes");

        let decision = interceptor.handle(&mut event);

        assert_eq!(decision, Decision::block(Notice::CopyDisabled));
        assert!(event.suppressed());
        assert_eq!(
            *interceptor.notifier().shown.borrow(),
            vec!["Copying is disabled in this vault".to_string()]
        );
    }

    #[test]
    fn test_allowed_event_is_untouched() {
        let interceptor = interceptor();
        let mut event = FakeEvent::copy("https://example.com");

        assert_eq!(interceptor.handle(&mut event), Decision::allow());
        assert!(!event.default_prevented);
        assert!(!event.propagation_stopped);
        assert!(interceptor.notifier().shown.borrow().is_empty());
    }

    #[test]
    fn test_copy_shortcut_uses_platform_modifier() {
        let interceptor = interceptor();

        let mut ctrl_c = FakeEvent::key_down("c", KeyModifiers::ctrl(), "text");
        assert!(interceptor.handle(&mut ctrl_c).is_blocked());
        assert!(ctrl_c.suppressed());

        let mut meta_c = FakeEvent::key_down("c", KeyModifiers::meta(), "text");
        assert!(!interceptor.handle(&mut meta_c).is_blocked());

        let mac = interceptor.with_platform(Platform::MacLike);
        let mut meta_c = FakeEvent::key_down("c", KeyModifiers::meta(), "text");
        assert!(mac.handle(&mut meta_c).is_blocked());
    }

    #[test]
    fn test_non_copy_shortcut_passes() {
        let interceptor = interceptor();
        let mut ctrl_v = FakeEvent::key_down("v", KeyModifiers::ctrl(), "");
        assert_eq!(interceptor.handle(&mut ctrl_v), Decision::allow());
        assert!(!ctrl_v.default_prevented);
    }

    #[test]
    fn test_cut_and_paste_notices() {
        let interceptor = interceptor();

        let mut cut = FakeEvent::new(EventKind::Cut);
        assert!(interceptor.handle(&mut cut).is_blocked());

        let mut paste = FakeEvent::paste(ClipboardPayload::new().with_text("hello"));
        assert!(interceptor.handle(&mut paste).is_blocked());

        assert_eq!(
            *interceptor.notifier().shown.borrow(),
            vec![
                "Cutting is disabled in this vault".to_string(),
                "Pasting text is disabled in this vault".to_string(),
            ]
        );
    }

    #[test]
    fn test_paste_image_and_missing_clipboard_allowed() {
        let interceptor = interceptor();

        let mut image = FakeEvent::paste(ClipboardPayload::new().with_files(1).with_text(""));
        assert_eq!(interceptor.handle(&mut image), Decision::allow());

        let mut no_data = FakeEvent::new(EventKind::Paste);
        assert_eq!(interceptor.handle(&mut no_data), Decision::allow());
        assert!(!no_data.default_prevented);
    }

    #[test]
    fn test_set_flag_persists_and_takes_effect() {
        let mut interceptor = interceptor();

        interceptor.set_flag(Flag::DisablePaste, false);

        assert!(!interceptor.config().disable_paste);
        assert_eq!(interceptor.store().saves.get(), 1);
        assert_eq!(interceptor.store().load(), *interceptor.config());

        let mut paste = FakeEvent::paste(ClipboardPayload::new().with_text("hello"));
        assert_eq!(interceptor.handle(&mut paste), Decision::allow());
    }

    #[test]
    fn test_reload_picks_up_store_changes() {
        let mut interceptor = interceptor();
        let mut changed = PolicyConfig::default();
        changed.set(Flag::DisableCut, false);
        *interceptor.store().stored.borrow_mut() = Some(changed);

        assert!(interceptor.config().disable_cut);
        interceptor.reload();
        assert!(!interceptor.config().disable_cut);
    }

    #[test]
    fn test_settings_survive_restart_with_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut first = Interceptor::new(FileSettingsStore::new(&path), RecordingNotifier::default());
        first.set_flag(Flag::AllowCopyUrls, false);

        let second = Interceptor::new(FileSettingsStore::new(&path), RecordingNotifier::default())
            .with_platform(Platform::Other);
        assert!(!second.config().allow_copy_urls);

        let mut event = FakeEvent::copy("https://example.com");
        assert!(second.handle(&mut event).is_blocked());
    }
}
