//! Skill Badge Components
//!
//! Colored pills for the skills section. Languages measured from GitHub
//! and skills listed in configuration render the same way, except that
//! listed skills carry a small marker.

use dioxus::prelude::*;
use folio_core::MergedSkill;

use crate::components::{SkeletonShape, Skeletons};

/// Number of placeholder pills shown while skills load
pub const SKILL_PLACEHOLDERS: usize = 8;

/// Properties for the SkillBadge component
#[derive(Clone, PartialEq, Props)]
pub struct SkillBadgeProps {
    pub name: String,
    /// Hex color for the dot and border
    pub color: String,
    /// Listed in configuration rather than measured from repositories
    #[props(default = false)]
    pub is_new: bool,
    #[props(default)]
    pub class: Option<String>,
}

/// A single skill pill
///
/// # Design Notes
///
/// - The dot takes the skill color; the border takes it at low alpha
/// - Listed skills get a `+` marker and the `listed` class
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SkillBadge { name: "Rust".to_string(), color: "#dea584".to_string() }
/// }
/// ```
#[component]
pub fn SkillBadge(props: SkillBadgeProps) -> Element {
    let extra = props.class.as_deref().unwrap_or("");
    let origin = if props.is_new { "listed" } else { "measured" };
    let title = if props.is_new {
        format!("{} (listed)", props.name)
    } else {
        format!("{} (from GitHub)", props.name)
    };

    rsx! {
        span {
            class: "skill-badge {origin} {extra}",
            style: "--skill-color: {props.color}",
            title: "{title}",
            span { class: "skill-dot" }
            "{props.name}"
            if props.is_new {
                span { class: "skill-marker", "+" }
            }
        }
    }
}

/// The wrapping list of skill badges, or placeholders while loading.
///
/// Keys combine name and position, so a name that legitimately appears
/// twice (for example with a different case) still renders twice.
#[component]
pub fn SkillCloud(skills: Vec<MergedSkill>, #[props(default = false)] loading: bool) -> Element {
    rsx! {
        div { class: "skill-cloud",
            if loading {
                Skeletons { shape: SkeletonShape::Pill, count: SKILL_PLACEHOLDERS }
            } else if skills.is_empty() {
                p { class: "muted", "No skills to show yet." }
            } else {
                for (index, skill) in skills.iter().enumerate() {
                    div {
                        key: "{skill.name}-{index}",
                        class: "skill-cloud-item",
                        style: "--item-index: {index}",
                        SkillBadge {
                            name: skill.name.clone(),
                            color: skill.color.clone(),
                            is_new: !skill.is_from_dynamic_source(),
                        }
                    }
                }
            }
        }
    }
}
