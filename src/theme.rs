//! Light/dark preference shared by the whole site.
//!
//! The preference is read once at startup (persisted value first, then the
//! OS `prefers-color-scheme` query) and changed only through
//! [`ThemeController::toggle`], which updates the root `dark` class and the
//! persisted slot together.

use dioxus::prelude::*;

use crate::storage::{LocalPreferenceStore, PreferenceStore};

pub const THEME_STORAGE_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

/// Where a theme is applied and where the OS preference comes from.
pub trait ThemeSurface {
    fn prefers_dark(&self) -> bool;
    fn apply(&mut self, theme: ThemePreference);
}

/// The document root element of the running page.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSurface;

impl ThemeSurface for DocumentSurface {
    #[cfg(target_arch = "wasm32")]
    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn prefers_dark(&self) -> bool {
        false
    }

    #[cfg(target_arch = "wasm32")]
    fn apply(&mut self, theme: ThemePreference) {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            tracing::warn!("theme: document root unavailable");
            return;
        };
        let classes = root.class_list();
        let result = if theme.is_dark() {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
        if result.is_err() {
            tracing::warn!("theme: failed to update root class");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn apply(&mut self, _theme: ThemePreference) {}
}

pub struct ThemeController {
    theme: ThemePreference,
    store: Box<dyn PreferenceStore>,
    surface: Box<dyn ThemeSurface>,
}

impl ThemeController {
    pub fn initialize(
        store: impl PreferenceStore + 'static,
        mut surface: impl ThemeSurface + 'static,
    ) -> Self {
        let stored = store
            .load(THEME_STORAGE_KEY)
            .and_then(|value| ThemePreference::parse(&value));
        let theme = match stored {
            Some(theme) => theme,
            None if surface.prefers_dark() => ThemePreference::Dark,
            None => ThemePreference::Light,
        };
        surface.apply(theme);
        tracing::debug!(
            "theme: initialized {} (persisted: {})",
            theme.as_str(),
            stored.is_some()
        );
        Self {
            theme,
            store: Box::new(store),
            surface: Box::new(surface),
        }
    }

    pub fn for_document() -> Self {
        Self::initialize(LocalPreferenceStore, DocumentSurface)
    }

    pub fn current(&self) -> ThemePreference {
        self.theme
    }

    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.theme.toggled();
        self.surface.apply(next);
        if let Err(err) = self.store.save(THEME_STORAGE_KEY, next.as_str()) {
            tracing::warn!("theme: {err}");
        }
        self.theme = next;
        tracing::info!("theme: switched to {}", next.as_str());
        next
    }
}

pub fn use_theme_provider() -> Signal<ThemeController> {
    use_context_provider(|| Signal::new(ThemeController::for_document()))
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut controller = use_context::<Signal<ThemeController>>();
    let dark = controller.read().current().is_dark();
    rsx! {
        div { class: "theme-toggle",
            span { class: "theme-icon", aria_hidden: "true", "☀" }
            button {
                r#type: "button",
                role: "switch",
                class: if dark { "theme-switch on" } else { "theme-switch" },
                aria_checked: if dark { "true" } else { "false" },
                aria_label: "Toggle dark mode",
                onclick: move |_| {
                    controller.write().toggle();
                },
                span { class: "theme-switch-thumb" }
            }
            span { class: "theme-icon", aria_hidden: "true", "☾" }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::storage::memory::MemoryStore;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default)]
    struct SurfaceState {
        os_dark: bool,
        dark_class: bool,
        os_queries: usize,
    }

    #[derive(Clone, Default)]
    struct FakeSurface(Rc<RefCell<SurfaceState>>);

    impl FakeSurface {
        fn os_dark(os_dark: bool) -> Self {
            let surface = Self::default();
            surface.0.borrow_mut().os_dark = os_dark;
            surface
        }

        fn dark_class(&self) -> bool {
            self.0.borrow().dark_class
        }

        fn os_queries(&self) -> usize {
            self.0.borrow().os_queries
        }
    }

    impl ThemeSurface for FakeSurface {
        fn prefers_dark(&self) -> bool {
            let mut state = self.0.borrow_mut();
            state.os_queries += 1;
            state.os_dark
        }

        fn apply(&mut self, theme: ThemePreference) {
            self.0.borrow_mut().dark_class = theme.is_dark();
        }
    }

    #[test]
    fn falls_back_to_os_preference_when_nothing_is_stored() {
        let surface = FakeSurface::os_dark(true);
        let controller = ThemeController::initialize(MemoryStore::default(), surface.clone());
        assert_eq!(controller.current(), ThemePreference::Dark);
        assert!(surface.dark_class());
        assert_eq!(surface.os_queries(), 1);
    }

    #[test]
    fn stored_value_wins_over_os_preference() {
        let surface = FakeSurface::os_dark(true);
        let controller = ThemeController::initialize(
            MemoryStore::with(THEME_STORAGE_KEY, "light"),
            surface.clone(),
        );
        assert_eq!(controller.current(), ThemePreference::Light);
        assert!(!surface.dark_class());
        assert_eq!(surface.os_queries(), 0);
    }

    #[test]
    fn unknown_stored_value_is_ignored() {
        let controller = ThemeController::initialize(
            MemoryStore::with(THEME_STORAGE_KEY, "sepia"),
            FakeSurface::os_dark(false),
        );
        assert_eq!(controller.current(), ThemePreference::Light);
    }

    #[test]
    fn initialization_does_not_persist() {
        let store = MemoryStore::default();
        ThemeController::initialize(store.clone(), FakeSurface::os_dark(true));
        assert_eq!(store.get(THEME_STORAGE_KEY), None);
    }

    #[test]
    fn toggle_to_dark_survives_reload_without_os_lookup() {
        let store = MemoryStore::default();
        let surface = FakeSurface::os_dark(false);
        let mut controller = ThemeController::initialize(store.clone(), surface.clone());
        assert_eq!(controller.current(), ThemePreference::Light);

        assert_eq!(controller.toggle(), ThemePreference::Dark);
        assert!(surface.dark_class());
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));

        let reloaded_surface = FakeSurface::os_dark(false);
        let reloaded = ThemeController::initialize(store.clone(), reloaded_surface.clone());
        assert_eq!(reloaded.current(), ThemePreference::Dark);
        assert!(reloaded_surface.dark_class());
        assert_eq!(reloaded_surface.os_queries(), 0);
    }

    #[test]
    fn double_toggle_restores_class_and_persisted_value() {
        let store = MemoryStore::with(THEME_STORAGE_KEY, "light");
        let surface = FakeSurface::default();
        let mut controller = ThemeController::initialize(store.clone(), surface.clone());
        let original_class = surface.dark_class();

        controller.toggle();
        controller.toggle();

        assert_eq!(controller.current(), ThemePreference::Light);
        assert_eq!(surface.dark_class(), original_class);
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn failed_write_still_switches_the_applied_theme() {
        let mut store = MemoryStore::default();
        store.fail_writes = true;
        let surface = FakeSurface::default();
        let mut controller = ThemeController::initialize(store, surface.clone());
        controller.toggle();
        assert_eq!(controller.current(), ThemePreference::Dark);
        assert!(surface.dark_class());
    }
}
