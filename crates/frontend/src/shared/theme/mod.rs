//! Light/dark theme for the widget.
//!
//! The mode is seeded at startup from `localStorage` (falling back to the OS
//! colour-scheme preference) and written back or cleared on every toggle.

use contracts::enums::theme_mode::{ThemeMode, THEME_STORAGE_KEY};
use leptos::prelude::*;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Load the stored preference, `None` when the key is absent.
fn load_theme_from_storage() -> Option<String> {
    get_local_storage()?.get_item(THEME_STORAGE_KEY).ok()?
}

/// Persist the mode: dark is stored, light removes the key.
fn save_theme_to_storage(mode: ThemeMode) {
    if let Some(storage) = get_local_storage() {
        let _ = match mode.storage_value() {
            Some(value) => storage.set_item(THEME_STORAGE_KEY, value),
            None => storage.remove_item(THEME_STORAGE_KEY),
        };
    }
}

fn os_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Put the mode's class on `<html>` and mirror the mode in `data-theme`.
fn apply_theme(mode: ThemeMode) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    if let Some(root) = document.document_element() {
        let classes = root.class_list();
        let _ = classes.remove_2(
            ThemeMode::Light.css_class(),
            ThemeMode::Dark.css_class(),
        );
        let _ = classes.add_1(mode.css_class());
    }

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", mode.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        save_theme_to_storage(mode);
        apply_theme(mode);
    }

    pub fn toggle(&self) {
        let next = self.mode.get_untracked().toggled();
        log::debug!("Theme switched to {}", next.as_str());
        self.set_mode(next);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let stored = load_theme_from_storage();
    let initial = ThemeMode::initial(stored.as_deref(), os_prefers_dark());
    apply_theme(initial);

    provide_context(ThemeContext {
        mode: RwSignal::new(initial),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Header button flipping between light and dark mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="top-header__icon-btn theme-toggle"
            type="button"
            title=move || ctx.mode.get().toggle_label()
            on:click=move |_| ctx.toggle()
        >
            {move || {
                if ctx.mode.get().is_dark() {
                    crate::shared::icons::icon("sun")
                } else {
                    crate::shared::icons::icon("moon")
                }
            }}
        </button>
    }
}
