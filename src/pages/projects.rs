//! Projects page - every public repository, most recently updated first.

use dioxus::prelude::*;
use folio_ui::{ButtonVariant, LinkButton, SectionHeading, SkeletonShape, Skeletons};

use crate::app::Route;
use crate::components::ProjectCard;
use crate::context::{use_portfolio, use_site_config, LoadState};

/// Placeholder cards shown while repositories load
const PLACEHOLDER_CARDS: usize = 6;

#[component]
pub fn Projects() -> Element {
    let site = use_site_config();
    let data = use_portfolio();
    let repos = data.read().repos.clone();

    rsx! {
        main { class: "page section",
            div { class: "container",
                div { class: "section-footer",
                    Link { class: "btn-ghost", to: Route::Home {}, "← Home" }
                }

                SectionHeading {
                    heading: "Projects".to_string(),
                    subheading: "Everything on GitHub".to_string(),
                }

                {match repos {
                    LoadState::Loading => rsx! {
                        div { class: "project-grid",
                            Skeletons { shape: SkeletonShape::Card, count: PLACEHOLDER_CARDS }
                        }
                    },
                    LoadState::Ready(list) if list.is_empty() => rsx! {
                        p { class: "load-error", "No public repositories yet." }
                    },
                    LoadState::Ready(list) => rsx! {
                        div { class: "project-grid",
                            for (index, project) in list.into_iter().enumerate() {
                                ProjectCard { key: "{project.id}", project: project, index: index }
                            }
                        }
                    },
                    LoadState::Failed(reason) => rsx! {
                        div { class: "load-error",
                            p { "Projects could not be loaded: {reason}" }
                            LinkButton {
                                href: site.profile_url(),
                                variant: ButtonVariant::Outline,
                                external: true,
                                "Browse on GitHub ↗"
                            }
                        }
                    },
                }}
            }
        }
    }
}
