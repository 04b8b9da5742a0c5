//! Theme management.
//!
//! The selected theme is a persisted store (`theme` key). Applying a theme
//! sets `data-theme` on `<body>`; `system` leaves the choice to the
//! stylesheet's `prefers-color-scheme` rules.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use web_sys::window;

use crate::shared::state::StoreHandle;
use crate::shared::storage::{KeyValueStorage, PersistedState};

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Returns the theme name as a string (used for the `data-theme` attribute).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Returns the display name for the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }

    pub fn all() -> [Theme; 3] {
        [Theme::Light, Theme::Dark, Theme::System]
    }

    pub fn next(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    pub theme: Theme,
}

impl PersistedState for ThemeState {
    const STORAGE_KEY: &'static str = "theme";
}

fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    store: StoreHandle<ThemeState>,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        self.store.with(|s| s.theme)
    }

    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.store.update(|s| s.theme = theme);
        apply_theme(theme);
    }

    pub fn cycle_theme(&self) {
        self.set_theme(self.store.with_untracked(|s| s.theme).next());
    }
}

/// Load the stored theme, apply it and provide [`ThemeContext`].
pub fn provide_theme(storage: Rc<dyn KeyValueStorage>) -> ThemeContext {
    let store = StoreHandle::<ThemeState>::load(storage);
    apply_theme(store.with_untracked(|s| s.theme));
    let ctx = ThemeContext { store };
    provide_context(ctx);
    ctx
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not provided in context")
}

/// Theme selector dropdown component.
#[component]
pub fn ThemeSelector() -> impl IntoView {
    let ctx = use_theme();
    let (dropdown_open, set_dropdown_open) = signal(false);

    let select_theme = move |theme: Theme| {
        ctx.set_theme(theme);
        set_dropdown_open.set(false);
    };

    view! {
        <div class="theme-selector" style="position: relative;">
            <button
                class="top-header-icon-btn"
                on:click=move |_| set_dropdown_open.update(|open| *open = !*open)
                title="Theme"
            >
                {move || ctx.theme().display_name()}
            </button>

            <Show when=move || dropdown_open.get()>
                <div class="theme-dropdown">
                    {Theme::all().into_iter().map(|theme| {
                        let is_active = move || ctx.theme() == theme;
                        view! {
                            <button
                                class=move || if is_active() { "theme-dropdown-item active" } else { "theme-dropdown-item" }
                                on:click=move |_| select_theme(theme)
                            >
                                {theme.display_name()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_state_shape() {
        assert_eq!(
            serde_json::to_string(&ThemeState { theme: Theme::Dark }).unwrap(),
            r#"{"theme":"dark"}"#
        );
        assert_eq!(ThemeState::default().theme, Theme::System);
        assert_eq!(Theme::Light.next().next().next(), Theme::Light);
    }
}
