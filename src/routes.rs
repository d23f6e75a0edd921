use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, Router};

use crate::config::{use_runtime_config, RuntimeConfig};
use crate::contact::ContactSection;
use crate::navigation::Navigation;
use crate::notifications::{use_toaster_provider, ToastViewport};
use crate::order::OrderPage;
use crate::sections::{AboutSection, Footer, HeroSection, ProjectsSection};
use crate::theme::use_theme_provider;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

const SITE_TITLE: &str = "Mr. RockeY | Full-Stack Developer";

#[component]
pub fn App() -> Element {
    use_theme_provider();
    use_toaster_provider();
    let config_resource = use_runtime_config();

    rsx! {
        document::Title { "{SITE_TITLE}" }
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        {match config_resource() {
            None => rsx! {
                div { class: "page loading",
                    span { class: "spinner", aria_label: "Loading" }
                }
            },
            Some(config) => rsx! { ConfiguredSite { config } },
        }}
    }
}

#[component]
fn ConfiguredSite(config: RuntimeConfig) -> Element {
    use_context_provider(|| config);
    rsx! {
        Router::<Route> {}
    }
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Index {},
        #[route("/order")]
        Order {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn SiteLayout() -> Element {
    rsx! {
        Navigation {}
        main { class: "site-main",
            Outlet::<Route> {}
        }
        Footer {}
        ToastViewport {}
    }
}

#[component]
fn Index() -> Element {
    rsx! {
        HeroSection {}
        AboutSection {}
        ProjectsSection {}
        ContactSection {}
    }
}

#[component]
fn Order() -> Element {
    rsx! {
        document::Title { "Order | {SITE_TITLE}" }
        OrderPage {}
    }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    use_effect(use_reactive((&path,), |(path,)| {
        tracing::error!("404: no route for {path}");
    }));
    rsx! {
        document::Title { "Not Found | {SITE_TITLE}" }
        div { class: "page not-found",
            h1 { class: "not-found-code", "404" }
            p { class: "not-found-title", "Oops! Page not found" }
            p { class: "muted",
                "The page you are looking for might have been removed, renamed, or is temporarily unavailable."
            }
            Link { to: Route::Index {}, class: "btn-primary", "← Return to Home" }
        }
    }
}
