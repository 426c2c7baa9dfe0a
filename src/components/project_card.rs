//! Project Card Component
//!
//! One repository: title, description, topics, language, stars and forks,
//! with links to the code and the live site.

use chrono::Utc;
use dioxus::prelude::*;
use folio_core::Repository;
use folio_ui::{ButtonSize, ButtonVariant, LinkButton};

use crate::context::use_site_config;

/// Topics shown before the rest are cut off
const MAX_TOPICS: usize = 4;

/// Repository card
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ProjectCard { project: repo, featured: true, index: 0 }
/// }
/// ```
#[component]
pub fn ProjectCard(
    project: Repository,
    /// Larger card used on the home page
    #[props(default = false)]
    featured: bool,
    /// Position in the grid, used to stagger the entry animation
    #[props(default = 0)]
    index: usize,
) -> Element {
    let site = use_site_config();
    let language_color = project
        .language
        .as_deref()
        .map(|lang| site.skills.palette.color_for(lang).to_string());
    let description = project
        .description
        .clone()
        .unwrap_or_else(|| "No description provided.".to_string());
    let updated = project.updated_ago(Utc::now());
    let card_class = if featured { "project-card featured" } else { "project-card" };

    rsx! {
        article {
            class: "{card_class}",
            style: "--item-index: {index}",

            h3 { class: "project-title", "{project.name}" }
            p { class: "project-description", "{description}" }

            if !project.topics.is_empty() {
                div { class: "project-topics",
                    for topic in project.topics.iter().take(MAX_TOPICS) {
                        span { key: "{topic}", class: "project-topic", "{topic}" }
                    }
                }
            }

            div { class: "project-meta",
                if let (Some(lang), Some(color)) = (project.language.as_ref(), language_color) {
                    span { class: "skill-badge measured", style: "--skill-color: {color}",
                        span { class: "skill-dot" }
                        "{lang}"
                    }
                }
                span { title: "Stars", "★ {project.stargazers_count}" }
                span { title: "Forks", "⑂ {project.forks_count}" }
                span { class: "muted", "{updated}" }
            }

            div { class: "project-links",
                LinkButton {
                    href: project.html_url.clone(),
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Default,
                    external: true,
                    "Code ↗"
                }
                if let Some(live) = project.live_url() {
                    LinkButton {
                        href: live.to_string(),
                        variant: ButtonVariant::Primary,
                        external: true,
                        "Live ↗"
                    }
                }
            }
        }
    }
}
