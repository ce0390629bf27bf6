//! Light/dark display mode and the state object that broadcasts it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two display modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Class applied to the document root.
    pub fn css_class(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Returned when a string is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode '{0}' (expected 'light' or 'dark')")]
pub struct ParseThemeError(String);

impl FromStr for ThemeMode {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Handle returned by [`ThemeState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(ThemeMode)>;

/// Session-wide theme flag.
///
/// Single writer (`toggle`), many readers. Listeners run synchronously
/// inside `toggle`, so every subscriber has seen the new mode before the
/// caller renders again.
pub struct ThemeState {
    mode: ThemeMode,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip the mode and notify every subscriber. Returns the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        tracing::debug!(mode = %self.mode, listeners = self.listeners.len(), "theme toggled");
        for (_, listener) in &mut self.listeners {
            listener(self.mode);
        }
        self.mode
    }

    /// Register a listener called with the new mode on every toggle.
    pub fn subscribe(&mut self, listener: impl FnMut(ThemeMode) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

impl fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeState")
            .field("mode", &self.mode)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
