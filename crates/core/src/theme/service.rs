//! Theme service - persisted preference applied to the document

use std::sync::Arc;

use bizhub_domain::constants::THEME_STORAGE_KEY;
use bizhub_domain::{Result, Theme};
use parking_lot::RwLock;
use tracing::{debug, warn};

use super::ports::ThemeSurface;
use crate::storage_ports::KeyValueStore;

/// Owns the local theme; the server-side preference never drives it
pub struct ThemeService {
    store: Arc<dyn KeyValueStore>,
    surface: Arc<dyn ThemeSurface>,
    current: RwLock<Theme>,
}

impl ThemeService {
    pub fn new(store: Arc<dyn KeyValueStore>, surface: Arc<dyn ThemeSurface>) -> Self {
        Self { store, surface, current: RwLock::new(Theme::default()) }
    }

    /// Read the stored preference (light when absent or unreadable) and apply it.
    pub fn mount(&self) -> Theme {
        let theme = match self.store.get(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|err| {
                warn!(error = %err, "ignoring unknown stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                warn!(error = %err, "failed to read stored theme");
                Theme::default()
            }
        };

        *self.current.write() = theme;
        self.surface.apply(theme);
        debug!(theme = %theme, "theme mounted");
        theme
    }

    /// Flip, persist and apply.
    pub fn toggle(&self) -> Result<Theme> {
        let next = self.current().toggled();
        self.store.set(THEME_STORAGE_KEY, next.as_str())?;
        *self.current.write() = next;
        self.surface.apply(next);
        debug!(theme = %next, "theme toggled");
        Ok(next)
    }

    pub fn current(&self) -> Theme {
        *self.current.read()
    }
}
