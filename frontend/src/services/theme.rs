//! Theme preference persistence.
//!
//! The light/dark choice lives in localStorage under
//! [`THEME_STORAGE_KEY`]. Storage being unavailable (privacy modes,
//! embedded webviews) means "no stored preference"; it never surfaces
//! to the user.

use crate::config::THEME_STORAGE_KEY;
use crate::types::Theme;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Load the stored preference, defaulting to light.
pub fn load_theme() -> Theme {
    let Some(storage) = local_storage() else {
        log::debug!("localStorage unavailable, using default theme");
        return Theme::default();
    };

    match storage.get_item(THEME_STORAGE_KEY) {
        Ok(Some(value)) => Theme::parse(&value).unwrap_or_default(),
        _ => Theme::default(),
    }
}

/// Persist the preference for the next visit.
pub fn store_theme(theme: Theme) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme.storage_value()) {
        log::warn!("Failed to persist theme preference: {e:?}");
    }
}

/// Mirror the theme onto `<body>` as a class, the hook the stylesheet
/// keys off.
pub fn apply_theme(theme: Theme) {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    let Some(body) = body else { return };

    let classes = body.class_list();
    let result = match theme {
        Theme::Dark => classes.add_1("dark-theme"),
        Theme::Light => classes.remove_1("dark-theme"),
    };
    if let Err(e) = result {
        log::warn!("Failed to apply theme class: {e:?}");
    }
}
