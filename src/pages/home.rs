//! Home page - hero, skills and featured projects.

use dioxus::prelude::*;
use folio_ui::{SectionHeading, SkeletonShape, Skeletons, SkillCloud};

use crate::app::Route;
use crate::components::{Hero, ProjectCard};
use crate::context::{use_portfolio, use_site_config, LoadState};

/// Home page component.
#[component]
pub fn Home() -> Element {
    let site = use_site_config();
    let data = use_portfolio();

    let loading = data.read().is_loading();
    let skills = data.read().skills(&site);
    let featured = data.read().featured(&site);
    let repos_failed = matches!(data.read().repos, LoadState::Failed(_));

    rsx! {
        main { class: "page",
            Hero {}

            section { id: "skills", class: "section alt",
                div { class: "container",
                    SectionHeading {
                        heading: "Skills & Technologies".to_string(),
                        subheading: "What I work with".to_string(),
                    }
                    SkillCloud { skills: skills, loading: loading }
                }
            }

            section { class: "section",
                div { class: "container",
                    SectionHeading {
                        heading: "Featured Projects".to_string(),
                        subheading: "My recent work".to_string(),
                        description: "Here are a few of my recent projects. Want to see more? Check out my projects page.".to_string(),
                    }

                    div { class: "project-grid",
                        if loading {
                            Skeletons { shape: SkeletonShape::Card, count: site.featured_count }
                        } else {
                            for (index, project) in featured.into_iter().enumerate() {
                                ProjectCard { key: "{project.id}", project: project, featured: true, index: index }
                            }
                        }
                    }

                    if repos_failed {
                        p { class: "load-error", "Projects could not be loaded from GitHub right now." }
                    }

                    div { class: "section-footer",
                        Link { class: "btn-primary btn-lg", to: Route::Projects {}, "View All Projects →" }
                    }
                }
            }
        }
    }
}
