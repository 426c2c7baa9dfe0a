//! Page components for the portfolio.

mod home;
mod projects;

pub use home::Home;
pub use projects::Projects;
