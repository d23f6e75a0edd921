use dioxus::prelude::*;

use crate::reveal::AnimatedText;
use crate::visibility::{reveal_class, use_visibility, VisibilityOptions};

const SKILL_STAGGER_MS: u32 = 100;

struct Skill {
    title: &'static str,
    description: &'static str,
}

const SKILLS: &[Skill] = &[
    Skill {
        title: "Web Development",
        description: "Building responsive, high-performance websites with modern frameworks and best practices.",
    },
    Skill {
        title: "SEO Expert",
        description: "Optimizing websites for search engines to increase visibility and drive organic traffic.",
    },
    Skill {
        title: "Full-Stack Development",
        description: "Creating comprehensive solutions from backend APIs to seamless frontend experiences.",
    },
    Skill {
        title: "UI/UX Design",
        description: "Designing intuitive interfaces that balance aesthetics with functionality.",
    },
];

const EXPERTISE: &[&str] = &[
    "HTML5", "CSS3", "JavaScript", "React", "Node.js", "SEO", "UI/UX", "API Design",
];

#[component]
pub fn AboutSection() -> Element {
    let visibility = use_visibility(VisibilityOptions::once());
    let visible = visibility.visible();

    rsx! {
        section { id: "about", class: "section about",
            onmounted: move |event| visibility.attach(event),
            div { class: "section-container about-grid",
                div {
                    span { class: "eyebrow", "About Me" }
                    AnimatedText {
                        text: "I create websites that people love to use".to_string(),
                        once: true,
                        class: "section-title".to_string(),
                    }
                    div { class: "{reveal_class(visible)} about-copy",
                        p { class: "muted",
                            "I'm Mr. RockeY, a passionate full-stack web developer with expertise in modern web technologies. I combine technical skills with creative problem-solving to build digital products that stand out."
                        }
                        p { class: "muted",
                            "With a focus on performance optimization and user experience, I create websites that not only look beautiful but also convert visitors into customers."
                        }
                        h3 { "Technical Expertise" }
                        div { class: "tag-list",
                            for tag in EXPERTISE {
                                span { key: "{tag}", class: "tag", "{tag}" }
                            }
                        }
                    }
                }
                div { class: "skill-grid",
                    for (index , skill) in SKILLS.iter().enumerate() {
                        div {
                            key: "{skill.title}",
                            class: "{reveal_class(visible)} glass skill-card",
                            style: "transition-delay: {index as u32 * SKILL_STAGGER_MS}ms",
                            h3 { "{skill.title}" }
                            p { class: "muted", "{skill.description}" }
                        }
                    }
                }
            }
        }
    }
}
