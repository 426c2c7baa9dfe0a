//! Loading Placeholders
//!
//! Pulsing blocks shown while GitHub data is in flight.

use dioxus::prelude::*;

/// Placeholder shapes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SkeletonShape {
    /// Rounded pill the size of a skill badge
    #[default]
    Pill,
    /// Tall block the size of a project card
    Card,
}

impl SkeletonShape {
    pub fn class(&self) -> &'static str {
        match self {
            SkeletonShape::Pill => "skeleton skeleton-pill",
            SkeletonShape::Card => "skeleton skeleton-card",
        }
    }
}

/// Renders `count` placeholders of one shape.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Skeletons { shape: SkeletonShape::Card, count: 3 }
/// }
/// ```
#[component]
pub fn Skeletons(#[props(default)] shape: SkeletonShape, count: usize) -> Element {
    rsx! {
        for index in 0..count {
            div {
                key: "{index}",
                class: shape.class(),
                "aria-hidden": "true",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_share_base_class() {
        assert!(SkeletonShape::Pill.class().starts_with("skeleton "));
        assert!(SkeletonShape::Card.class().starts_with("skeleton "));
        assert_ne!(SkeletonShape::Pill.class(), SkeletonShape::Card.class());
    }
}
