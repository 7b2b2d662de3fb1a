/// Platform detection and modifier-key mapping for shortcut matching
///
/// Copy shortcuts use the "command" key on Mac-like hosts and Ctrl everywhere else.

#[cfg(feature = "winit")]
use winit::keyboard::ModifiersState;

/// Host platform family, as far as shortcut handling cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS, iOS and friends: primary modifier is Meta/Cmd
    MacLike,
    /// Everything else: primary modifier is Ctrl
    Other,
}

impl Platform {
    /// Classify a host platform identifier (e.g. "MacIntel", "Win32", "Linux x86_64")
    pub fn from_identifier(identifier: &str) -> Self {
        if identifier.to_uppercase().contains("MAC") {
            Platform::MacLike
        } else {
            Platform::Other
        }
    }

    /// Platform of the compile target
    pub fn current() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            Platform::MacLike
        } else {
            Platform::Other
        }
    }

    #[inline]
    pub fn is_mac_like(self) -> bool {
        self == Platform::MacLike
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

/// Modifier key states at the time of a key press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyModifiers {
    #[cfg(feature = "winit")]
    pub fn from_winit(mods: ModifiersState) -> Self {
        Self {
            shift: mods.shift_key(),
            ctrl: mods.control_key(),
            alt: mods.alt_key(),
            meta: mods.super_key(),
        }
    }

    /// Only Ctrl held
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }

    /// Only Meta/Cmd held
    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Self::default()
        }
    }

    /// Check if the platform's primary modifier is held
    #[inline]
    pub fn primary_held(&self, platform: Platform) -> bool {
        primary_modifier_held(platform.is_mac_like(), *self)
    }
}

/// Meta state on Mac-like platforms, Ctrl state otherwise
#[inline]
pub fn primary_modifier_held(platform_is_mac_like: bool, mods: KeyModifiers) -> bool {
    if platform_is_mac_like {
        mods.meta
    } else {
        mods.ctrl
    }
}
