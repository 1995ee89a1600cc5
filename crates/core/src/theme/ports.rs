use bizhub_domain::Theme;

/// Where the active theme is rendered (the document root class in a browser)
pub trait ThemeSurface: Send + Sync {
    fn apply(&self, theme: Theme);
}
