/// Settings panel model: one toggle per policy flag, grouped by section
use vaultguard_core::{Flag, PolicyConfig, Section, SettingsStore, Toggle};

use crate::interceptor::Interceptor;
use crate::notice::NotificationSurface;

/// Panel heading
pub const PANEL_TITLE: &str = "Disable Copy Paste Settings";

/// A toggle and its current value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingRow {
    pub toggle: Toggle,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsSection {
    pub section: Section,
    pub rows: Vec<SettingRow>,
}

impl SettingsSection {
    pub fn title(&self) -> &'static str {
        self.section.title()
    }
}

/// Toggle rows for `config`, grouped by section in display order
pub fn sections(config: &PolicyConfig) -> Vec<SettingsSection> {
    let mut sections: Vec<SettingsSection> = Vec::new();
    for toggle in PolicyConfig::toggles() {
        let row = SettingRow {
            toggle: *toggle,
            value: config.get(toggle.flag),
        };
        match sections.last_mut() {
            Some(last) if last.section == toggle.section => last.rows.push(row),
            _ => sections.push(SettingsSection {
                section: toggle.section,
                rows: vec![row],
            }),
        }
    }
    sections
}

/// Binds the panel's toggles to an interceptor's live settings
pub struct SettingsPanel<'a, S, N> {
    interceptor: &'a mut Interceptor<S, N>,
}

impl<'a, S: SettingsStore, N: NotificationSurface> SettingsPanel<'a, S, N> {
    pub fn new(interceptor: &'a mut Interceptor<S, N>) -> Self {
        Self { interceptor }
    }

    pub fn title(&self) -> &'static str {
        PANEL_TITLE
    }

    pub fn sections(&self) -> Vec<SettingsSection> {
        sections(self.interceptor.config())
    }

    /// Toggle changed in the UI: update the live settings and persist them
    pub fn on_toggle(&mut self, flag: Flag, value: bool) {
        self.interceptor.set_flag(flag, value);
    }
}
