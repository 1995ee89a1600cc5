use bizhub_core::{Navigator, ThemeSurface};
use bizhub_domain::Theme;
use parking_lot::RwLock;
use tracing::{debug, info};

/// Stand-in for the document root the theme class is applied to
#[derive(Debug, Default)]
pub struct DocumentSurface {
    applied: RwLock<Option<Theme>>,
}

impl DocumentSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last theme applied, `None` before mount.
    pub fn applied(&self) -> Option<Theme> {
        *self.applied.read()
    }
}

impl ThemeSurface for DocumentSurface {
    fn apply(&self, theme: Theme) {
        debug!(%theme, "theme applied");
        *self.applied.write() = Some(theme);
    }
}

/// Page location; a navigation replaces it
#[derive(Debug, Default)]
pub struct LocationNavigator {
    location: RwLock<Option<String>>,
}

impl LocationNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> Option<String> {
        self.location.read().clone()
    }
}

impl Navigator for LocationNavigator {
    fn navigate(&self, url: &str) {
        info!(url, "navigating");
        *self.location.write() = Some(url.to_string());
    }
}
