/// Light/dark display mode of the widget.
///
/// The preference is persisted as a single `localStorage` key which holds
/// `"dark"` or is absent.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

pub const THEME_STORAGE_KEY: &str = "theme";

impl ThemeMode {
    /// Startup mode: a stored `"dark"` wins, an absent key defers to the
    /// OS colour-scheme preference, anything else is light.
    pub fn initial(stored: Option<&str>, os_prefers_dark: bool) -> Self {
        match stored {
            Some("dark") => ThemeMode::Dark,
            Some(_) => ThemeMode::Light,
            None if os_prefers_dark => ThemeMode::Dark,
            None => ThemeMode::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Value to write under [`THEME_STORAGE_KEY`]; `None` means remove the key.
    pub fn storage_value(self) -> Option<&'static str> {
        match self {
            ThemeMode::Dark => Some("dark"),
            ThemeMode::Light => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Class set on `<html>`; the stylesheet keys its dark palette on `.dark`.
    pub fn css_class(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == ThemeMode::Dark
    }

    /// Label of the toggle button, i.e. the mode it switches to
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Dark mode",
            ThemeMode::Dark => "Light mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode() {
        assert_eq!(ThemeMode::initial(Some("dark"), false), ThemeMode::Dark);
        assert_eq!(ThemeMode::initial(Some("dark"), true), ThemeMode::Dark);
        assert_eq!(ThemeMode::initial(None, true), ThemeMode::Dark);
        assert_eq!(ThemeMode::initial(None, false), ThemeMode::Light);
        assert_eq!(ThemeMode::initial(Some("light"), true), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_from_light_os_without_preference() {
        let mode = ThemeMode::initial(None, false);
        assert_eq!(mode, ThemeMode::Light);

        let next = mode.toggled();
        assert_eq!(next, ThemeMode::Dark);
        assert_eq!(next.storage_value(), Some("dark"));
    }

    #[test]
    fn test_css_class_follows_mode() {
        assert_eq!(ThemeMode::Dark.css_class(), "dark");
        assert_eq!(ThemeMode::Light.css_class(), "light");
        assert_eq!(ThemeMode::Light.toggled().css_class(), "dark");
    }

    #[test]
    fn test_toggle_back_clears_preference() {
        let mode = ThemeMode::Dark.toggled();
        assert_eq!(mode, ThemeMode::Light);
        assert_eq!(mode.storage_value(), None);
    }
}
