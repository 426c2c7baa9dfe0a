//! Page-level components for the portfolio.

mod hero;
mod project_card;

pub use hero::Hero;
pub use project_card::ProjectCard;
