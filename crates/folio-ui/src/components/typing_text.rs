//! Typewriter Text Component
//!
//! Reveals text one character at a time with a blinking cursor.

use dioxus::prelude::*;
use folio_core::TypingConfig;

use crate::hooks::use_typing_effect;

/// Text typed out character by character.
///
/// When `text` changes (for example once the GitHub profile name arrives),
/// the animation restarts from an empty prefix.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     h1 {
///         TypingText { text: name, config: config.typing.name }
///     }
/// }
/// ```
#[component]
pub fn TypingText(
    text: ReadOnlySignal<String>,
    config: TypingConfig,
    #[props(default)] class: Option<String>,
) -> Element {
    let frame = use_typing_effect(text, config);
    let current = frame();
    let extra = class.unwrap_or_default();
    let cursor_class = if current.cursor_visible {
        "typing-cursor"
    } else {
        "typing-cursor hidden"
    };

    rsx! {
        span {
            class: "typing-text {extra}",
            "aria-label": "{current.target}",
            "{current.displayed}"
            span { class: "{cursor_class}", "aria-hidden": "true", "|" }
        }
    }
}
