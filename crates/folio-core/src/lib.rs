//! Folio Core Library
//!
//! Data and timing logic behind a personal portfolio page.
//!
//! ## Overview
//!
//! - [`typing`]: the hero section's typewriter effect, a pure schedule plus
//!   a cancellable tokio driver that publishes frames through a `watch`
//!   channel.
//! - [`skills`]: merges languages measured from GitHub with a static skill
//!   list, dynamic entries first and duplicates dropped.
//! - [`github`]: a small GitHub REST client for the profile, repositories and
//!   language breakdowns.
//! - [`config`]: the immutable [`SiteConfig`] every other piece is built from.
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{skills, GitHubClient, SiteConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SiteConfig::load_or_default(None)?;
//!     let client = GitHubClient::new(&config.github)?;
//!
//!     let repos = client.fetch_repos(&config.github.username).await?;
//!     let stats = skills::language_stats(&repos, &config.skills.palette);
//!     let merged = skills::merge(&skills::dynamic_skills(&stats), &config.skills.static_skills);
//!
//!     for skill in merged {
//!         println!("{} {}", skill.name, skill.color);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod github;
pub mod skills;
pub mod typing;

// Re-exports
pub use config::{GitHubConfig, SiteConfig, SkillsConfig, TypingSettings};
pub use error::{FolioError, FolioResult};
pub use github::{featured_projects, GitHubClient, GitHubUser, Repository};
pub use skills::{
    merge, merge_with, LanguagePalette, LanguageStat, MergedSkill, NameMatch, Skill, SkillOrigin,
};
pub use typing::{TypingConfig, TypingFrame, TypingHandle, TypingSchedule, TypingTimer};
