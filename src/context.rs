//! Portfolio data context.
//!
//! The App component fetches the GitHub profile and repositories once and
//! shares them with every page through a [`PortfolioData`] signal.
//!
//! ## Usage
//!
//! ```ignore
//! let site = use_site_config();
//! let data = use_portfolio();
//!
//! let skills = data.read().skills(&site);
//! ```

use dioxus::prelude::*;
use folio_core::skills::{dynamic_skills, merge_with};
use folio_core::{
    featured_projects, GitHubClient, GitHubUser, LanguageStat, MergedSkill, Repository,
    SiteConfig,
};

/// Progress of one asynchronous fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    fn from_result<E: std::fmt::Display>(result: Result<T, E>, what: &str) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", what, e);
                LoadState::Failed(e.to_string())
            }
        }
    }
}

/// Everything fetched from GitHub for the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PortfolioData {
    pub user: LoadState<GitHubUser>,
    pub repos: LoadState<Vec<Repository>>,
    pub languages: LoadState<Vec<LanguageStat>>,
}

impl PortfolioData {
    /// Placeholders stay up until both the profile and repositories settle.
    pub fn is_loading(&self) -> bool {
        self.user.is_loading() || self.repos.is_loading() || self.languages.is_loading()
    }

    /// Name to type out in the hero.
    pub fn display_name(&self, site: &SiteConfig) -> String {
        self.user
            .ready()
            .and_then(|u| u.name.as_deref())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&site.display_name)
            .to_string()
    }

    pub fn avatar_url(&self, site: &SiteConfig) -> String {
        self.user
            .ready()
            .map(|u| u.avatar_url.clone())
            .unwrap_or_else(|| site.placeholder_avatar.clone())
    }

    /// Measured languages followed by configured skills.
    ///
    /// If languages could not be loaded the configured skills are shown on
    /// their own.
    pub fn skills(&self, site: &SiteConfig) -> Vec<MergedSkill> {
        let measured = self
            .languages
            .ready()
            .map(|stats| dynamic_skills(stats))
            .unwrap_or_default();
        merge_with(&measured, &site.skills.static_skills, site.skills.name_match())
    }

    pub fn featured(&self, site: &SiteConfig) -> Vec<Repository> {
        self.repos
            .ready()
            .map(|repos| featured_projects(repos, site.featured_count).to_vec())
            .unwrap_or_default()
    }
}

/// Fetch profile, repositories and language statistics into `data`.
pub async fn load_portfolio(site: SiteConfig, mut data: Signal<PortfolioData>) {
    let client = match GitHubClient::new(&site.github) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create GitHub client: {}", e);
            let reason = e.to_string();
            data.set(PortfolioData {
                user: LoadState::Failed(reason.clone()),
                repos: LoadState::Failed(reason.clone()),
                languages: LoadState::Failed(reason),
            });
            return;
        }
    };
    let login = site.github.username.as_str();

    let (user, repos) = tokio::join!(client.fetch_user(login), client.fetch_repos(login));
    data.write().user = LoadState::from_result(user, "profile");

    let repos = match repos {
        Ok(repos) => repos,
        Err(e) => {
            tracing::warn!("Failed to load repositories: {}", e);
            let mut current = data.write();
            current.repos = LoadState::Failed(e.to_string());
            current.languages = LoadState::Failed(e.to_string());
            return;
        }
    };

    let languages = client
        .fetch_language_stats(&repos, &site.skills.palette, site.github.detailed_languages)
        .await;
    tracing::info!(repos = repos.len(), "Portfolio data loaded");

    let mut current = data.write();
    current.repos = LoadState::Ready(repos);
    current.languages = LoadState::from_result(languages, "language statistics");
}

/// Hook to access the site configuration from context.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Hook to access the fetched portfolio data.
pub fn use_portfolio() -> Signal<PortfolioData> {
    use_context::<Signal<PortfolioData>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use folio_core::{Skill, SkillOrigin};

    fn user(name: Option<&str>) -> GitHubUser {
        GitHubUser {
            login: "octocat".to_string(),
            name: name.map(str::to_string),
            avatar_url: "https://avatars.example/octocat.png".to_string(),
            html_url: "https://github.com/octocat".to_string(),
            bio: None,
            location: None,
            public_repos: 2,
            followers: 0,
        }
    }

    fn repo(name: &str) -> Repository {
        Repository {
            id: 1,
            name: name.to_string(),
            full_name: format!("octocat/{name}"),
            description: None,
            html_url: String::new(),
            homepage: None,
            language: Some("Rust".to_string()),
            stargazers_count: 0,
            forks_count: 0,
            topics: vec![],
            fork: false,
            updated_at: Utc::now(),
        }
    }

    fn stat(name: &str) -> LanguageStat {
        LanguageStat {
            name: name.to_string(),
            color: "#123456".to_string(),
            weight: 1,
        }
    }

    #[test]
    fn default_is_loading() {
        assert!(PortfolioData::default().is_loading());
    }

    #[test]
    fn name_and_avatar_fall_back_to_config() {
        let site = SiteConfig::default();
        let mut data = PortfolioData::default();
        assert_eq!(data.display_name(&site), site.display_name);
        assert_eq!(data.avatar_url(&site), site.placeholder_avatar);

        data.user = LoadState::Ready(user(None));
        assert_eq!(data.display_name(&site), site.display_name);

        data.user = LoadState::Ready(user(Some("The Octocat")));
        assert_eq!(data.display_name(&site), "The Octocat");
        assert_eq!(data.avatar_url(&site), "https://avatars.example/octocat.png");
    }

    #[test]
    fn failed_languages_degrade_to_static_skills() {
        let site = SiteConfig::default();
        let data = PortfolioData {
            user: LoadState::Failed("offline".to_string()),
            repos: LoadState::Failed("offline".to_string()),
            languages: LoadState::Failed("offline".to_string()),
        };

        let skills = data.skills(&site);
        assert!(!data.is_loading());
        assert_eq!(skills.len(), site.skills.static_skills.len());
        assert!(skills.iter().all(|s| s.origin == SkillOrigin::Static));
    }

    #[test]
    fn measured_languages_come_first() {
        let mut site = SiteConfig::default();
        site.skills.static_skills = vec![Skill::new("Rust", "#ffffff"), Skill::new("Cisco", "#1BA0D7")];
        let data = PortfolioData {
            languages: LoadState::Ready(vec![stat("Rust"), stat("Python")]),
            ..PortfolioData::default()
        };

        let names: Vec<_> = data.skills(&site).into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Rust", "Python", "Cisco"]);
    }

    #[test]
    fn featured_uses_configured_count() {
        let mut site = SiteConfig::default();
        site.featured_count = 2;
        let data = PortfolioData {
            repos: LoadState::Ready(vec![repo("a"), repo("b"), repo("c")]),
            ..PortfolioData::default()
        };
        let names: Vec<_> = data.featured(&site).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
