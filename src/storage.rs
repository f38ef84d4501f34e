//! Browser local storage: the session token and the theme preference.

pub const TOKEN_KEY: &str = "token";
pub const THEME_KEY: &str = "theme";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

fn get_item(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

fn set_item(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("could not persist {key} to local storage");
        }
    }
}

fn remove_item(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

pub fn load_token() -> Option<String> {
    get_item(TOKEN_KEY).filter(|token| !token.is_empty())
}

pub fn save_token(token: &str) {
    set_item(TOKEN_KEY, token);
}

pub fn clear_token() {
    remove_item(TOKEN_KEY);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Any saved value wins, and only `dark` means dark; with nothing
    /// saved the system colour scheme decides.
    pub fn resolve(saved: Option<&str>, system_prefers_dark: bool) -> Self {
        match saved.filter(|v| !v.is_empty()) {
            Some(value) => Theme::parse(value).unwrap_or(Theme::Light),
            None if system_prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }
}

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn load_theme() -> Theme {
    Theme::resolve(get_item(THEME_KEY).as_deref(), system_prefers_dark())
}

pub fn save_theme(theme: Theme) {
    set_item(THEME_KEY, theme.as_str());
}

/// Toggles the `dark` class on the document root, which the stylesheet keys off.
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    if let Some(root) = root {
        let classes = root.class_list();
        let result = match theme {
            Theme::Dark => classes.add_1("dark"),
            Theme::Light => classes.remove_1("dark"),
        };
        if result.is_err() {
            log::warn!("could not apply {} theme", theme.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trip_names() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn test_saved_theme_wins_over_system() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn test_system_preference_used_without_saved_value() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        assert_eq!(Theme::resolve(Some(""), true), Theme::Dark);
        assert_eq!(Theme::resolve(Some("garbage"), true), Theme::Light);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
