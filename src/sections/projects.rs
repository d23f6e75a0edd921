use dioxus::prelude::*;

use crate::reveal::AnimatedText;
use crate::visibility::{reveal_class, use_visibility, VisibilityOptions};

const CARD_STAGGER_MS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectCategory {
    Web,
    Seo,
    Game,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 4] = [
        ProjectFilter::All,
        ProjectFilter::Only(ProjectCategory::Web),
        ProjectFilter::Only(ProjectCategory::Seo),
        ProjectFilter::Only(ProjectCategory::Game),
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Only(ProjectCategory::Web) => "Web Apps",
            ProjectFilter::Only(ProjectCategory::Seo) => "SEO Tools",
            ProjectFilter::Only(ProjectCategory::Game) => "Games",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(category) => project.category == category,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub github_url: &'static str,
    pub category: ProjectCategory,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Multi-SEO Tool Website",
        description: "A comprehensive suite of SEO tools to analyze and optimize website performance.",
        image_url: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?q=80&w=2426&auto=format&fit=crop",
        technologies: &["HTML", "CSS", "JavaScript", "React"],
        live_url: "https://freeseotool.github.io",
        github_url: "https://github.com/username/seo-tool",
        category: ProjectCategory::Seo,
    },
    Project {
        title: "TopReview Blog",
        description: "A product review blog with an elegant layout and advanced filtering options.",
        image_url: "https://images.unsplash.com/photo-1499750310107-5fef28a66643?q=80&w=2670&auto=format&fit=crop",
        technologies: &["React", "Next.js", "Tailwind CSS"],
        live_url: "https://example.com/topreview",
        github_url: "https://github.com/username/topreview",
        category: ProjectCategory::Web,
    },
    Project {
        title: "Dragon Repeller RPG",
        description: "A text-based RPG game built with HTML5, CSS, and JavaScript.",
        image_url: "https://images.unsplash.com/photo-1550745165-9bc0b252726f?q=80&w=2670&auto=format&fit=crop",
        technologies: &["HTML5", "CSS3", "JavaScript"],
        live_url: "https://example.com/dragon-rpg",
        github_url: "https://github.com/username/dragon-rpg",
        category: ProjectCategory::Game,
    },
    Project {
        title: "Portfolio Website",
        description: "A modern portfolio website with smooth animations and intuitive interface.",
        image_url: "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?q=80&w=2670&auto=format&fit=crop",
        technologies: &["React", "Tailwind CSS", "Framer Motion"],
        live_url: "https://example.com/portfolio",
        github_url: "https://github.com/username/portfolio",
        category: ProjectCategory::Web,
    },
];

/// Catalog order is kept; the filter only hides entries.
pub fn filter_projects(filter: ProjectFilter) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|project| filter.matches(project)).collect()
}

pub fn card_delay_ms(index: usize) -> usize {
    index * CARD_STAGGER_MS
}

#[component]
pub fn ProjectsSection() -> Element {
    let visibility = use_visibility(VisibilityOptions::once());
    let mut filter = use_signal(ProjectFilter::default);
    let visible = visibility.visible();
    let projects = filter_projects(filter());

    rsx! {
        section { id: "projects", class: "section projects",
            onmounted: move |event| visibility.attach(event),
            div { class: "section-container",
                div { class: "section-heading centered",
                    span { class: "eyebrow", "My Projects" }
                    AnimatedText {
                        text: "Selected work I've crafted".to_string(),
                        once: true,
                        class: "section-title".to_string(),
                    }
                    p { class: "{reveal_class(visible)} muted",
                        "Browse through my recent projects showcasing my expertise in web development, SEO optimization, and interactive experiences."
                    }
                }
                div { class: "{reveal_class(visible)} filter-bar", style: "transition-delay: 200ms",
                    for option in ProjectFilter::ALL {
                        button {
                            key: "{option.label()}",
                            r#type: "button",
                            class: if option == filter() { "filter-button active" } else { "filter-button" },
                            aria_pressed: "{option == filter()}",
                            onclick: move |_| {
                                tracing::debug!("projects: filter {}", option.label());
                                filter.set(option);
                            },
                            "{option.label()}"
                        }
                    }
                }
                div { class: "project-grid",
                    for (index , project) in projects.into_iter().enumerate() {
                        ProjectCard { key: "{project.title}", project: project.clone(), index }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> Element {
    let visibility = use_visibility(VisibilityOptions::early_once());
    let visible = visibility.visible();
    rsx! {
        article {
            class: "{reveal_class(visible)} glass project-card",
            style: "transition-delay: {card_delay_ms(index)}ms",
            onmounted: move |event| visibility.attach(event),
            div { class: "project-image",
                img { src: project.image_url, alt: project.title, loading: "lazy" }
            }
            div { class: "project-body",
                h3 { "{project.title}" }
                p { class: "muted", "{project.description}" }
                div { class: "tag-list",
                    for tech in project.technologies {
                        span { key: "{tech}", class: "tag", "{tech}" }
                    }
                }
                div { class: "project-links",
                    a { href: project.live_url, target: "_blank", rel: "noopener noreferrer", class: "link-underline", "Live Demo" }
                    a { href: project.github_url, target: "_blank", rel: "noopener noreferrer", class: "link-underline", "Source Code" }
                }
            }
        }
    }
}
