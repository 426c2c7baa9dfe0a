//! Folio UI Components
//!
//! Dioxus components for the portfolio page: buttons, section headings,
//! skill badges, loading skeletons and the typewriter text.
//!
//! ## Design Language
//!
//! Dark glass panels with a single accent:
//! - **Accent (#5b8cff)**: primary actions, headings, the typing cursor
//! - **Muted (#1c2230)**: skeletons and secondary surfaces
//! - Skill badges take their color from the language palette
//!
//! Class names used here are styled by the host application's stylesheet.

pub mod components;
pub mod hooks;

pub use components::*;
pub use hooks::use_typing_effect;
