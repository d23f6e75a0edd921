use dioxus::prelude::*;
use dioxus_router::{use_navigator, use_route, Link};
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

use crate::routes::Route;
use crate::theme::ThemeToggle;

pub const SCROLLED_THRESHOLD_PX: f64 = 10.0;
/// Line across the viewport, as a fraction of its height, that picks the
/// active section.
pub const ACTIVE_LINE_FRACTION: f64 = 0.3;

pub const SECTIONS: &[NavLink] = &[
    NavLink { title: "Home", id: "hero" },
    NavLink { title: "About", id: "about" },
    NavLink { title: "Projects", id: "projects" },
    NavLink { title: "Contact", id: "contact" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub title: &'static str,
    pub id: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

/// First section, in document order, that straddles the activation line.
pub fn active_section<'a>(
    sections: &[(&'a str, Option<SectionBounds>)],
    viewport_height: f64,
) -> Option<&'a str> {
    let line = viewport_height * ACTIVE_LINE_FRACTION;
    sections.iter().find_map(|(id, bounds)| {
        let bounds = (*bounds)?;
        (bounds.top <= line && bounds.bottom >= line).then_some(*id)
    })
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    scrolled: bool,
    active: Option<String>,
    menu_open: bool,
    path: Option<String>,
    pending_section: Option<&'static str>,
}

impl NavState {
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// The page behind an open menu must not scroll.
    pub fn scroll_locked(&self) -> bool {
        self.menu_open
    }

    pub fn on_scroll(&mut self, scroll_y: f64, active: Option<&str>) {
        self.scrolled = is_scrolled(scroll_y);
        self.active = active.map(str::to_string);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Remembers a section to scroll to once the landing page is shown.
    pub fn request_section(&mut self, id: &'static str) {
        self.pending_section = Some(id);
    }

    /// Hands back the remembered section, but only on the landing page.
    pub fn take_pending_section(&mut self, on_home: bool) -> Option<&'static str> {
        if on_home {
            self.pending_section.take()
        } else {
            None
        }
    }

    /// Returns true when the path actually changed.
    pub fn on_route_change(&mut self, path: &str) -> bool {
        if self.path.as_deref() == Some(path) {
            return false;
        }
        let first = self.path.is_none();
        self.path = Some(path.to_string());
        self.close_menu();
        !first
    }
}

#[cfg(target_arch = "wasm32")]
struct ScrollListener {
    closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>>,
}

#[cfg(target_arch = "wasm32")]
fn read_scroll_state() -> (f64, Option<&'static str>) {
    let Some(window) = web_sys::window() else {
        return (0.0, None);
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let document = window.document();
    let bounds: Vec<(&'static str, Option<SectionBounds>)> = SECTIONS
        .iter()
        .map(|link| {
            let rect = document
                .as_ref()
                .and_then(|document| document.get_element_by_id(link.id))
                .map(|element| element.get_bounding_client_rect())
                .map(|rect| SectionBounds {
                    top: rect.top(),
                    bottom: rect.bottom(),
                });
            (link.id, rect)
        })
        .collect();
    (scroll_y, active_section(&bounds, viewport_height))
}

#[cfg(target_arch = "wasm32")]
fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let value = if locked { "hidden" } else { "auto" };
    if body.style().set_property("overflow", value).is_err() {
        tracing::warn!("navigation: failed to set body overflow");
    }
}

pub fn scroll_to_section(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
        else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[component]
pub fn Navigation() -> Element {
    let mut nav = use_signal(NavState::default);
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let on_home = matches!(route, Route::Index {});
    let path = route.to_string();

    use_effect(use_reactive((&path, &on_home), move |(path, on_home)| {
        let mut state = nav.write();
        if state.on_route_change(&path) {
            tracing::debug!("navigation: route changed to {path}, menu closed");
        }
        if let Some(id) = state.take_pending_section(on_home) {
            drop(state);
            scroll_to_section(id);
        }
    }));

    #[cfg(target_arch = "wasm32")]
    let mut scroll_listener = use_signal(|| None::<ScrollListener>);
    #[cfg(not(target_arch = "wasm32"))]
    let _scroll_listener = ();

    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            use wasm_bindgen::closure::Closure;
            use wasm_bindgen::JsCast;

            if scroll_listener.peek().is_some() {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            let mut on_scroll_nav = nav;
            let closure = Rc::new(Closure::wrap(Box::new(move |_event: web_sys::Event| {
                let (scroll_y, active) = read_scroll_state();
                on_scroll_nav.write().on_scroll(scroll_y, active);
            }) as Box<dyn FnMut(_)>));
            let _ = window.add_event_listener_with_callback(
                "scroll",
                closure.as_ref().as_ref().unchecked_ref(),
            );
            tracing::debug!("navigation: attach scroll listener");
            let (scroll_y, active) = read_scroll_state();
            nav.write().on_scroll(scroll_y, active);
            scroll_listener.set(Some(ScrollListener { closure }));
        });

        // Only open/close edges touch the body style, not every scroll update.
        let scroll_locked = use_memo(move || nav.read().scroll_locked());
        use_effect(move || {
            set_body_scroll_locked(scroll_locked());
        });

        use_drop(move || {
            if let Some(listener) = scroll_listener.read().as_ref() {
                if let Some(window) = web_sys::window() {
                    use wasm_bindgen::JsCast;
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        listener.closure.as_ref().as_ref().unchecked_ref(),
                    );
                }
            }
            set_body_scroll_locked(false);
        });
    }

    let state = nav.read().clone();
    let header_class = if state.scrolled() {
        "site-header scrolled"
    } else {
        "site-header"
    };
    let menu_class = if state.menu_open() {
        "mobile-menu open"
    } else {
        "mobile-menu"
    };
    let mut go_to = move |id: &'static str| {
        nav.write().close_menu();
        if on_home {
            scroll_to_section(id);
        } else {
            nav.write().request_section(id);
            navigator.push(Route::Index {});
        }
    };

    rsx! {
        header { class: "{header_class}",
            nav { class: "site-nav", aria_label: "Main navigation",
                a {
                    href: "#hero",
                    class: "brand",
                    onclick: move |event| {
                        event.prevent_default();
                        go_to("hero");
                    },
                    "Mr. RockeY"
                }
                ul { class: "nav-links",
                    for link in SECTIONS.iter().copied() {
                        li { key: "{link.id}",
                            a {
                                href: "#{link.id}",
                                class: if on_home && state.active() == Some(link.id) { "nav-link active" } else { "nav-link" },
                                onclick: move |event| {
                                    event.prevent_default();
                                    go_to(link.id);
                                },
                                "{link.title}"
                            }
                        }
                    }
                    li {
                        Link { to: Route::Order {}, class: "nav-cta", "Order" }
                    }
                }
                div { class: "nav-actions",
                    ThemeToggle {}
                    button {
                        r#type: "button",
                        class: "menu-button",
                        aria_label: if state.menu_open() { "Close menu" } else { "Open menu" },
                        onclick: move |_| nav.write().toggle_menu(),
                        if state.menu_open() { "✕" } else { "☰" }
                    }
                }
            }
            div { class: "{menu_class}", aria_hidden: if state.menu_open() { "false" } else { "true" },
                for link in SECTIONS.iter().copied() {
                    a {
                        key: "{link.id}",
                        href: "#{link.id}",
                        onclick: move |event| {
                            event.prevent_default();
                            go_to(link.id);
                        },
                        "{link.title}"
                    }
                }
                Link { to: Route::Order {}, class: "nav-cta", "Order services" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bounds(top: f64, bottom: f64) -> Option<SectionBounds> {
        Some(SectionBounds { top, bottom })
    }

    #[test]
    fn scrolled_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
    }

    #[test]
    fn active_section_takes_first_match_in_document_order() {
        let sections = [
            ("hero", bounds(-900.0, -100.0)),
            ("about", bounds(-100.0, 500.0)),
            ("projects", bounds(100.0, 1200.0)),
            ("contact", None),
        ];
        assert_eq!(active_section(&sections, 1000.0), Some("about"));
    }

    #[test]
    fn no_section_on_the_line_means_none() {
        let sections = [("hero", bounds(400.0, 900.0)), ("about", None)];
        assert_eq!(active_section(&sections, 1000.0), None);
    }

    #[test]
    fn menu_opening_locks_scroll_and_closing_restores_it() {
        let mut state = NavState::default();
        state.toggle_menu();
        assert!(state.menu_open());
        assert!(state.scroll_locked());
        state.toggle_menu();
        assert!(!state.scroll_locked());
    }

    #[test]
    fn route_change_closes_menu() {
        let mut state = NavState::default();
        assert!(!state.on_route_change("/"));
        state.toggle_menu();
        assert!(!state.on_route_change("/"));
        assert!(state.menu_open());
        assert!(state.on_route_change("/order"));
        assert!(!state.menu_open());
    }

    #[test]
    fn section_chosen_elsewhere_scrolls_after_reaching_home() {
        let mut state = NavState::default();
        state.on_route_change("/order");
        state.request_section("projects");
        assert_eq!(state.take_pending_section(false), None);
        state.on_route_change("/");
        assert_eq!(state.take_pending_section(true), Some("projects"));
        assert_eq!(state.take_pending_section(true), None);
    }

    #[test]
    fn scrolling_never_changes_the_lock() {
        let mut state = NavState::default();
        state.toggle_menu();
        for (scroll_y, active) in [(0.0, None), (300.0, Some("about")), (900.0, Some("projects"))] {
            state.on_scroll(scroll_y, active);
            assert!(state.scroll_locked());
        }
        state.close_menu();
        state.on_scroll(50.0, Some("hero"));
        assert!(!state.scroll_locked());
    }

    #[test]
    fn scroll_updates_header_and_active_section() {
        let mut state = NavState::default();
        state.on_scroll(120.0, Some("projects"));
        assert!(state.scrolled());
        assert_eq!(state.active(), Some("projects"));
        state.on_scroll(0.0, None);
        assert!(!state.scrolled());
        assert_eq!(state.active(), None);
    }
}
