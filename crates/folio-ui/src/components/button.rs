//! Button Components
//!
//! Two shapes share the same variants:
//! - `Button`: an in-app action
//! - `LinkButton`: an anchor styled as a button (external profiles, routes
//!   rendered by the host)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled accent gradient
    #[default]
    Primary,
    /// Transparent with accent border
    Outline,
    /// No border, text only
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Button sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Large,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    [variant.class(), size.class(), extra.unwrap_or("")]
        .iter()
        .filter(|c| !c.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// Accessible label when the content is only an icon
    #[props(default)]
    pub aria_label: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Ghost,
///         aria_label: "Scroll down".to_string(),
///         onclick: move |_| scroll_to_skills(),
///         "↓"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = button_class(props.variant, props.size, props.class.as_deref());

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            "aria-label": props.aria_label.clone(),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Properties for the LinkButton component
#[derive(Clone, PartialEq, Props)]
pub struct LinkButtonProps {
    pub href: String,
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Open in a new tab with `noopener noreferrer`
    #[props(default = false)]
    pub external: bool,
    pub children: Element,
    #[props(default)]
    pub class: Option<String>,
}

/// Anchor rendered as a button.
#[component]
pub fn LinkButton(props: LinkButtonProps) -> Element {
    let class = button_class(props.variant, props.size, props.class.as_deref());
    let (target, rel) = if props.external {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };

    rsx! {
        a {
            class: "{class}",
            href: "{props.href}",
            target: target,
            rel: rel,
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn class_list_skips_empty_parts() {
        assert_eq!(
            button_class(ButtonVariant::Outline, ButtonSize::Default, None),
            "btn-outline"
        );
        assert_eq!(
            button_class(ButtonVariant::Primary, ButtonSize::Large, Some("group")),
            "btn-primary btn-lg group"
        );
    }
}
