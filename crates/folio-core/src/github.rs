//! GitHub REST client and response models.
//!
//! Only the handful of endpoints the portfolio needs: the user profile,
//! the user's public repositories and per-repository language bytes.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::GitHubConfig;
use crate::error::{FolioError, FolioResult};
use crate::skills::{language_stats, language_stats_from_bytes, LanguagePalette, LanguageStat};

/// Public profile of a GitHub user (only the fields we render).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
}

impl GitHubUser {
    /// Display name, falling back to the login when the profile has none.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.login)
    }
}

/// A public repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub fork: bool,
    pub updated_at: DateTime<Utc>,
}

impl Repository {
    /// Homepage link, if one is set and non-empty.
    pub fn live_url(&self) -> Option<&str> {
        self.homepage.as_deref().filter(|h| !h.trim().is_empty())
    }

    /// Coarse "updated ... ago" label relative to `now`.
    pub fn updated_ago(&self, now: DateTime<Utc>) -> String {
        let age = now.signed_duration_since(self.updated_at);
        let (n, unit) = if age.num_days() >= 365 {
            (age.num_days() / 365, "year")
        } else if age.num_days() >= 30 {
            (age.num_days() / 30, "month")
        } else if age.num_days() >= 1 {
            (age.num_days(), "day")
        } else if age.num_hours() >= 1 {
            (age.num_hours(), "hour")
        } else {
            return "Updated just now".to_string();
        };
        let plural = if n == 1 { "" } else { "s" };
        format!("Updated {n} {unit}{plural} ago")
    }
}

/// The first `count` repositories, in the order the API returned them.
pub fn featured_projects(repos: &[Repository], count: usize) -> &[Repository] {
    &repos[..count.min(repos.len())]
}

/// Error body returned by the GitHub API.
#[derive(Deserialize)]
struct ApiMessage {
    message: String,
}

/// Client for the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> FolioResult<Self> {
        let http = Client::builder()
            .user_agent(format!("folio/{}", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.token.clone().filter(|t| !t.is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /users/{login}`
    pub async fn fetch_user(&self, login: &str) -> FolioResult<GitHubUser> {
        self.get_json(&format!("/users/{login}"), &[], &format!("user {login}"))
            .await
    }

    /// `GET /users/{login}/repos`, most recently updated first.
    pub async fn fetch_repos(&self, login: &str) -> FolioResult<Vec<Repository>> {
        let repos: Vec<Repository> = self
            .get_json(
                &format!("/users/{login}/repos"),
                &[("sort", "updated"), ("per_page", "100")],
                &format!("repositories of {login}"),
            )
            .await?;
        tracing::debug!(login, count = repos.len(), "Fetched repositories");
        Ok(repos)
    }

    /// `GET /repos/{owner}/{repo}/languages`: language name to byte count.
    pub async fn fetch_languages(&self, full_name: &str) -> FolioResult<BTreeMap<String, u64>> {
        self.get_json(
            &format!("/repos/{full_name}/languages"),
            &[],
            &format!("languages of {full_name}"),
        )
        .await
    }

    /// Language statistics for `repos`.
    ///
    /// With `detailed`, byte counts are fetched per repository; a repository
    /// whose languages cannot be fetched is skipped with a warning. Otherwise
    /// each repository's primary language counts once and no request is made.
    pub async fn fetch_language_stats(
        &self,
        repos: &[Repository],
        palette: &LanguagePalette,
        detailed: bool,
    ) -> FolioResult<Vec<LanguageStat>> {
        if !detailed {
            return Ok(language_stats(repos, palette));
        }

        let results = join_all(repos.iter().map(|r| self.fetch_languages(&r.full_name))).await;
        let mut per_repo = Vec::with_capacity(results.len());
        for (repo, result) in repos.iter().zip(results) {
            match result {
                Ok(bytes) => per_repo.push(bytes),
                Err(e @ FolioError::RateLimited { .. }) => return Err(e),
                Err(e) => {
                    tracing::warn!(repo = %repo.full_name, "Skipping language breakdown: {}", e);
                }
            }
        }
        Ok(language_stats_from_bytes(&per_repo, palette))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        what: &str,
    ) -> FolioResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json")
            .query(query);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let headers = resp.headers().clone();
            let body = resp.text().await.unwrap_or_default();
            return Err(status_error(status, &headers, &body, what));
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn status_error(status: StatusCode, headers: &HeaderMap, body: &str, what: &str) -> FolioError {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

    if status == StatusCode::NOT_FOUND {
        return FolioError::NotFound(what.to_string());
    }
    if matches!(status, StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS)
        && header("x-ratelimit-remaining") == Some("0")
    {
        let reset_at = header("x-ratelimit-reset").and_then(|v| v.parse().ok());
        tracing::warn!(?reset_at, "GitHub rate limit exhausted");
        return FolioError::RateLimited { reset_at };
    }

    let message = serde_json::from_str::<ApiMessage>(body)
        .map(|m| m.message)
        .unwrap_or_else(|_| body.to_string());
    FolioError::Api {
        status: status.as_u16(),
        message,
    }
}
