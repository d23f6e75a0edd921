use dioxus::prelude::*;

use crate::navigation::scroll_to_section;
use crate::reveal::AnimatedText;

pub const HEADLINE_DELAY_MS: f64 = 200.0;
pub const TAGLINE_DELAY_MS: f64 = 600.0;

#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section { id: "hero", class: "hero",
            div { class: "hero-glow", aria_hidden: "true" }
            div { class: "section-container hero-content",
                p { class: "eyebrow", "Full-Stack Web Developer & SEO Expert" }
                h1 { class: "hero-title",
                    AnimatedText {
                        text: "Hi, I'm Mr. RockeY".to_string(),
                        once: true,
                        delay_ms: HEADLINE_DELAY_MS,
                    }
                    AnimatedText {
                        text: "I build exceptional digital experiences".to_string(),
                        once: true,
                        delay_ms: TAGLINE_DELAY_MS,
                        class: "hero-subtitle".to_string(),
                    }
                }
                p { class: "hero-copy fade-in", style: "animation-delay: 1000ms",
                    "I specialize in creating high-performance websites, interactive UI/UX, and SEO-optimized platforms to maximize user engagement."
                }
                div { class: "hero-actions fade-in", style: "animation-delay: 1200ms",
                    a {
                        href: "#projects",
                        class: "btn-primary",
                        onclick: move |event| {
                            event.prevent_default();
                            scroll_to_section("projects");
                        },
                        "View My Work"
                    }
                    a {
                        href: "#contact",
                        class: "btn-outline",
                        onclick: move |event| {
                            event.prevent_default();
                            scroll_to_section("contact");
                        },
                        "Contact Me"
                    }
                }
            }
            button {
                r#type: "button",
                class: "scroll-down fade-in",
                style: "animation-delay: 1800ms",
                aria_label: "Scroll to about",
                onclick: move |_| scroll_to_section("about"),
                "↓"
            }
        }
    }
}
