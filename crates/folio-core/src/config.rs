//! Site configuration.
//!
//! Everything that identifies the portfolio owner (GitHub login, fallback
//! name, bio line, links, static skills, colors, animation timings) lives in
//! one immutable [`SiteConfig`] value. Binaries load it once and hand it to
//! the components that need it.
//!
//! ```toml
//! display_name = "Ada Lovelace"
//! bio_parts = ["Analyst", "Engine enthusiast"]
//!
//! [github]
//! username = "ada"
//!
//! [[skills.static_skills]]
//! name = "Rust"
//! color = "#dea584"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::FolioResult;
use crate::skills::{LanguagePalette, NameMatch, Skill};
use crate::typing::TypingConfig;

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE: &str = "folio.toml";

/// Immutable configuration for one portfolio site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Shown when the GitHub profile has no name or cannot be fetched
    pub display_name: String,
    /// Subtitle under the name
    pub headline: String,
    /// Joined with " | " and typed out under the name
    pub bio_parts: Vec<String>,
    pub linkedin_url: Option<String>,
    /// Avatar used while the profile is loading or unavailable
    pub placeholder_avatar: String,
    /// Number of repositories in the featured grid
    pub featured_count: usize,
    pub github: GitHubConfig,
    pub skills: SkillsConfig,
    pub typing: TypingSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            display_name: "Tousif Dewan".to_string(),
            headline: "KTH THE ROYAL INSTITUTE OF TECHNOLOGY".to_string(),
            bio_parts: vec![
                "CSE Major @ KTH".to_string(),
                "Building AI-driven solutions".to_string(),
                "Passionate about innovation & telecom R&D".to_string(),
            ],
            linkedin_url: Some("https://www.linkedin.com/in/tousifdewan".to_string()),
            placeholder_avatar: "https://via.placeholder.com/300?text=Profile".to_string(),
            featured_count: 3,
            github: GitHubConfig::default(),
            skills: SkillsConfig::default(),
            typing: TypingSettings::default(),
        }
    }
}

impl SiteConfig {
    /// Default location: `<config dir>/folio/folio.toml`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
            .join(CONFIG_FILE)
    }

    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml(text: &str) -> FolioResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml(&self) -> FolioResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> FolioResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        tracing::info!("Loaded site config from {:?}", path);
        Ok(config)
    }

    /// Load `path` if given, else the default location if it exists, else
    /// built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> FolioResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let default_path = Self::default_path();
        if default_path.exists() {
            Self::load(&default_path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", default_path);
            Ok(Self::default())
        }
    }

    /// Same configuration for a different GitHub account.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.github.username = username.into();
        self
    }

    /// The bio line as typed out on the page.
    pub fn bio_line(&self) -> String {
        self.bio_parts.join(" | ")
    }

    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.github.username)
    }
}

/// GitHub API access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    pub username: String,
    pub api_base_url: String,
    /// Personal access token; raises the rate limit when set
    pub token: Option<String>,
    pub timeout_secs: u64,
    /// Rank languages by bytes (one request per repository) instead of by
    /// primary-language repository count
    pub detailed_languages: bool,
}

impl GitHubConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            username: "tousifdewan".to_string(),
            api_base_url: "https://api.github.com".to_string(),
            token: None,
            timeout_secs: 10,
            detailed_languages: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    /// Treat "javascript" and "JavaScript" as the same skill
    pub ignore_case: bool,
    /// Skills shown after the GitHub languages
    pub static_skills: Vec<Skill>,
    pub palette: LanguagePalette,
}

impl SkillsConfig {
    pub fn name_match(&self) -> NameMatch {
        if self.ignore_case {
            NameMatch::IgnoreAsciiCase
        } else {
            NameMatch::Exact
        }
    }
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            ignore_case: false,
            static_skills: vec![
                Skill::new("React", "#61DAFB"),
                Skill::new("Tailwind CSS", "#38B2AC"),
                Skill::new("Node.js", "#68A063"),
                Skill::new("Next.js", "#000000"),
                Skill::new("RISC-V", "#A6A6A6"),
                Skill::new("Cisco", "#1BA0D7"),
            ],
            palette: LanguagePalette::default(),
        }
    }
}

/// Animation timings for the two typed lines of the hero section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingSettings {
    pub name: TypingConfig,
    pub bio: TypingConfig,
}

impl Default for TypingSettings {
    fn default() -> Self {
        Self {
            name: TypingConfig::NAME_DEFAULT,
            bio: TypingConfig::BIO_DEFAULT,
        }
    }
}
