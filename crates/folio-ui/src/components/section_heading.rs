//! Section Heading Component

use dioxus::prelude::*;

/// Centered heading with a small subheading above it and an optional
/// description paragraph below.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SectionHeading {
///         heading: "Featured Projects".to_string(),
///         subheading: "My recent work".to_string(),
///         description: "Here are a few of my recent projects.".to_string(),
///     }
/// }
/// ```
#[component]
pub fn SectionHeading(
    heading: String,
    #[props(default)] subheading: Option<String>,
    #[props(default)] description: Option<String>,
) -> Element {
    rsx! {
        div { class: "section-heading",
            if let Some(sub) = subheading {
                p { class: "section-subheading", "{sub}" }
            }
            h2 { class: "section-title", "{heading}" }
            if let Some(text) = description {
                p { class: "section-description", "{text}" }
            }
        }
    }
}
