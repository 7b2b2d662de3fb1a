use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Blocking switches and their exceptions
///
/// Flags are independent. The `allow_*` exceptions only relax a block that the
/// matching `disable_*` flag put in place; they never block anything by themselves.
///
/// Saved with the plugin's camelCase keys; snake_case keys are read as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredConfig")]
pub struct PolicyConfig {
    /// Block copying text out of the vault
    pub disable_copy: bool,
    /// Block cutting text out of the vault
    pub disable_cut: bool,
    /// Block pasting text into the vault
    pub disable_paste: bool,
    /// Let files and images through when paste is blocked
    pub allow_images: bool,
    /// Let emoji-only text through when paste is blocked
    pub allow_emojis: bool,
    /// Let a selected URL be copied when copy is blocked
    pub allow_copy_urls: bool,
    /// Let a URL be pasted when paste is blocked
    pub allow_paste_urls: bool,
}

/// On-disk settings as found; any key may be missing or spelled either way
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StoredConfig {
    #[serde(rename = "disableCopy")]
    disable_copy_camel: Option<bool>,
    disable_copy: Option<bool>,
    #[serde(rename = "disableCut")]
    disable_cut_camel: Option<bool>,
    disable_cut: Option<bool>,
    #[serde(rename = "disablePaste")]
    disable_paste_camel: Option<bool>,
    disable_paste: Option<bool>,
    #[serde(rename = "allowImages")]
    allow_images_camel: Option<bool>,
    allow_images: Option<bool>,
    #[serde(rename = "allowEmojis")]
    allow_emojis_camel: Option<bool>,
    allow_emojis: Option<bool>,
    #[serde(rename = "allowCopyUrls")]
    allow_copy_urls_camel: Option<bool>,
    allow_copy_urls: Option<bool>,
    #[serde(rename = "allowPasteUrls")]
    allow_paste_urls_camel: Option<bool>,
    allow_paste_urls: Option<bool>,
}

impl From<StoredConfig> for PolicyConfig {
    /// Merge over the defaults; the camelCase key wins when both are present
    fn from(stored: StoredConfig) -> Self {
        let defaults = PolicyConfig::default();
        let pick = |camel: Option<bool>, snake: Option<bool>, default: bool| {
            camel.or(snake).unwrap_or(default)
        };
        Self {
            disable_copy: pick(stored.disable_copy_camel, stored.disable_copy, defaults.disable_copy),
            disable_cut: pick(stored.disable_cut_camel, stored.disable_cut, defaults.disable_cut),
            disable_paste: pick(
                stored.disable_paste_camel,
                stored.disable_paste,
                defaults.disable_paste,
            ),
            allow_images: pick(stored.allow_images_camel, stored.allow_images, defaults.allow_images),
            allow_emojis: pick(stored.allow_emojis_camel, stored.allow_emojis, defaults.allow_emojis),
            allow_copy_urls: pick(
                stored.allow_copy_urls_camel,
                stored.allow_copy_urls,
                defaults.allow_copy_urls,
            ),
            allow_paste_urls: pick(
                stored.allow_paste_urls_camel,
                stored.allow_paste_urls,
                defaults.allow_paste_urls,
            ),
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            disable_copy: true,
            disable_cut: true,
            disable_paste: true,
            allow_images: true,
            allow_emojis: true,
            allow_copy_urls: true,
            allow_paste_urls: true,
        }
    }
}

/// Names a single switch of [`PolicyConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    DisableCopy,
    DisableCut,
    DisablePaste,
    AllowImages,
    AllowEmojis,
    AllowCopyUrls,
    AllowPasteUrls,
}

/// Settings panel section a toggle is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    General,
    CopyExceptions,
    PasteExceptions,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::General => "General",
            Section::CopyExceptions => "Exceptions (when copy is disabled)",
            Section::PasteExceptions => "Exceptions (when paste is disabled)",
        }
    }
}

/// Display metadata for one settings toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub flag: Flag,
    pub section: Section,
    pub name: &'static str,
    pub description: &'static str,
}

static TOGGLES: &[Toggle] = &[
    Toggle {
        flag: Flag::DisableCopy,
        section: Section::General,
        name: "Disable copy",
        description: "Block copying text from the vault",
    },
    Toggle {
        flag: Flag::DisableCut,
        section: Section::General,
        name: "Disable cut",
        description: "Block cutting text from the vault",
    },
    Toggle {
        flag: Flag::DisablePaste,
        section: Section::General,
        name: "Disable paste",
        description: "Block pasting text into the vault",
    },
    Toggle {
        flag: Flag::AllowCopyUrls,
        section: Section::CopyExceptions,
        name: "Allow copying URLs",
        description: "Allow copying URLs even when copy is disabled",
    },
    Toggle {
        flag: Flag::AllowImages,
        section: Section::PasteExceptions,
        name: "Allow images",
        description: "Allow pasting images and screenshots even when paste is disabled",
    },
    Toggle {
        flag: Flag::AllowEmojis,
        section: Section::PasteExceptions,
        name: "Allow emojis",
        description: "Allow pasting emoji-only content even when paste is disabled",
    },
    Toggle {
        flag: Flag::AllowPasteUrls,
        section: Section::PasteExceptions,
        name: "Allow pasting URLs",
        description: "Allow pasting URLs even when paste is disabled",
    },
];

impl PolicyConfig {
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::DisableCopy => self.disable_copy,
            Flag::DisableCut => self.disable_cut,
            Flag::DisablePaste => self.disable_paste,
            Flag::AllowImages => self.allow_images,
            Flag::AllowEmojis => self.allow_emojis,
            Flag::AllowCopyUrls => self.allow_copy_urls,
            Flag::AllowPasteUrls => self.allow_paste_urls,
        }
    }

    pub fn set(&mut self, flag: Flag, value: bool) {
        let slot = match flag {
            Flag::DisableCopy => &mut self.disable_copy,
            Flag::DisableCut => &mut self.disable_cut,
            Flag::DisablePaste => &mut self.disable_paste,
            Flag::AllowImages => &mut self.allow_images,
            Flag::AllowEmojis => &mut self.allow_emojis,
            Flag::AllowCopyUrls => &mut self.allow_copy_urls,
            Flag::AllowPasteUrls => &mut self.allow_paste_urls,
        };
        *slot = value;
    }

    /// Settings toggles in display order
    pub fn toggles() -> &'static [Toggle] {
        TOGGLES
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML settings: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("failed to serialize settings: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persistence collaborator for [`PolicyConfig`]
///
/// Neither operation reports failure to the caller: a broken load yields the
/// defaults and a failed save is only logged.
pub trait SettingsStore {
    fn load(&self) -> PolicyConfig;
    fn save(&self, config: &PolicyConfig);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
}

/// Settings stored in a TOML file, or JSON when the path ends in `.json`
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `vaultguard/config.toml` under the platform config directory
    pub fn default_location() -> Self {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vaultguard")
            .join("config.toml");
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format(&self) -> Format {
        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Toml,
        }
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Read persisted settings merged over the defaults; a missing file means defaults
    pub fn try_load(&self) -> Result<PolicyConfig, ConfigError> {
        if !self.path.exists() {
            return Ok(PolicyConfig::default());
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        if contents.trim().is_empty() {
            return Ok(PolicyConfig::default());
        }

        let config = match self.format() {
            Format::Toml => toml::from_str(&contents)?,
            Format::Json => serde_json::from_str(&contents)?,
        };
        Ok(config)
    }

    /// Write settings, creating parent directories as needed
    pub fn try_save(&self, config: &PolicyConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let contents = match self.format() {
            Format::Toml => toml::to_string_pretty(config)?,
            Format::Json => serde_json::to_string_pretty(config)?,
        };
        std::fs::write(&self.path, contents).map_err(|e| self.io_error(e))?;
        Ok(())
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> PolicyConfig {
        match self.try_load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Falling back to default settings: {}", e);
                PolicyConfig::default()
            }
        }
    }

    fn save(&self, config: &PolicyConfig) {
        match self.try_save(config) {
            Ok(()) => info!("Saved settings to {}", self.path.display()),
            Err(e) => warn!("Failed to save settings: {}", e),
        }
    }
}
