//! Reusable UI components
//!
//! All components render plain class names; the host app provides the CSS.

mod button;
mod section_heading;
mod skeleton;
mod skill_badge;
mod typing_text;

pub use button::*;
pub use section_heading::*;
pub use skeleton::*;
pub use skill_badge::*;
pub use typing_text::*;
