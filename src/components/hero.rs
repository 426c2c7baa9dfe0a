//! Hero Section
//!
//! Greeting, typed name, headline, typed bio line, action links and the
//! avatar. The name starts from the configured fallback and restarts its
//! animation once the GitHub profile name arrives.

use dioxus::prelude::*;
use folio_ui::{Button, ButtonSize, ButtonVariant, LinkButton, TypingText};

use crate::app::Route;
use crate::context::{use_portfolio, use_site_config};

const SCROLL_TO_SKILLS: &str =
    "document.getElementById('skills')?.scrollIntoView({ behavior: 'smooth' });";

#[component]
pub fn Hero() -> Element {
    let site = use_site_config();
    let data = use_portfolio();

    let name = data.read().display_name(&site);
    let avatar = data.read().avatar_url(&site);
    let bio = site.bio_line();
    let profile_url = site.profile_url();

    rsx! {
        section { class: "hero",
            div { class: "container hero-inner",
                div { class: "hero-text",
                    p { class: "hero-greeting", "> Hello, my name is" }

                    h1 { class: "hero-name",
                        TypingText { text: name.clone(), config: site.typing.name }
                    }

                    h2 { class: "hero-headline", "{site.headline}" }

                    div { class: "hero-bio glass",
                        TypingText { text: bio, config: site.typing.bio }
                    }

                    div { class: "hero-actions",
                        Link { class: "btn-primary btn-lg", to: Route::Projects {}, "View Projects →" }
                        LinkButton {
                            href: profile_url,
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Large,
                            external: true,
                            "GitHub Profile ↗"
                        }
                        if let Some(linkedin) = site.linkedin_url.clone() {
                            LinkButton {
                                href: linkedin,
                                variant: ButtonVariant::Outline,
                                size: ButtonSize::Large,
                                external: true,
                                "LinkedIn ↗"
                            }
                        }
                    }
                }

                div { class: "hero-avatar",
                    img { src: "{avatar}", alt: "{name}" }
                }
            }

            div { class: "scroll-hint",
                Button {
                    variant: ButtonVariant::Ghost,
                    aria_label: "Scroll down".to_string(),
                    onclick: move |_| {
                        let _ = document::eval(SCROLL_TO_SKILLS);
                    },
                    "↓"
                }
            }
        }
    }
}
