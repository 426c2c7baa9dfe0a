//! Folio CLI
//!
//! Thin wrapper around folio-core for checking portfolio data and
//! previewing the typing animation from a terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Skills as the page would show them
//! folio skills
//!
//! # Only the configured skills, no network
//! folio skills --offline
//!
//! # Featured repositories (or all of them)
//! folio projects
//! folio projects --all --json
//!
//! # GitHub profile summary
//! folio profile
//!
//! # Preview the typewriter effect
//! folio type "Hello, world" --speed 60 --delay 300
//!
//! # Print the effective configuration
//! folio config
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use folio_core::skills::{dynamic_skills, merge_with};
use folio_core::{
    featured_projects, GitHubClient, MergedSkill, Repository, SiteConfig, TypingConfig,
    TypingTimer,
};
use tokio::time::Instant;

/// Folio - personal portfolio data
#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Folio - inspect portfolio data from the terminal")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Site configuration file (default: <config dir>/folio/folio.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// GitHub account to use instead of the configured one
    #[arg(short, long, global = true)]
    username: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List skills: GitHub languages first, then configured skills
    Skills {
        /// Skip GitHub and show configured skills only
        #[arg(long)]
        offline: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List featured repositories
    Projects {
        /// List every repository instead of the featured ones
        #[arg(long)]
        all: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the GitHub profile
    Profile,

    /// Preview the typing animation in the terminal
    Type {
        /// Text to type out
        text: String,
        /// Milliseconds per character
        #[arg(long, default_value_t = 90)]
        speed: u64,
        /// Milliseconds before the first character
        #[arg(long, default_value_t = 0)]
        delay: u64,
        /// Cursor blink interval in milliseconds
        #[arg(long, default_value_t = 500)]
        blink: u64,
        /// Keep blinking this many milliseconds after the text is complete
        #[arg(long, default_value_t = 0)]
        linger: u64,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let mut site = SiteConfig::load_or_default(cli.config.as_deref())
        .context("failed to load site configuration")?;
    if let Some(username) = &cli.username {
        site = site.with_username(username.clone());
    }
    tracing::debug!(
        path = ?cli.config,
        username = %site.github.username,
        "Loaded site configuration"
    );
    Ok(site)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let site = load_config(&cli)?;

    match cli.command {
        Commands::Skills { offline, json } => {
            let skills = if offline {
                tracing::debug!("Skipping GitHub, listing configured skills");
                merge_with(&[], &site.skills.static_skills, site.skills.name_match())
            } else {
                let client = GitHubClient::new(&site.github)?;
                let repos = client.fetch_repos(&site.github.username).await?;
                let stats = client
                    .fetch_language_stats(&repos, &site.skills.palette, site.github.detailed_languages)
                    .await?;
                tracing::debug!(
                    repos = repos.len(),
                    languages = stats.len(),
                    "Measured languages"
                );
                merge_with(
                    &dynamic_skills(&stats),
                    &site.skills.static_skills,
                    site.skills.name_match(),
                )
            };
            tracing::info!(count = skills.len(), "Merged skills");
            print_skills(&skills, json)?;
        }

        Commands::Projects { all, json } => {
            let client = GitHubClient::new(&site.github)?;
            let repos = client.fetch_repos(&site.github.username).await?;
            let shown = if all {
                &repos[..]
            } else {
                featured_projects(&repos, site.featured_count)
            };
            tracing::debug!(total = repos.len(), shown = shown.len(), "Listing repositories");
            print_projects(shown, json)?;
        }

        Commands::Profile => {
            let client = GitHubClient::new(&site.github)?;
            let user = client.fetch_user(&site.github.username).await?;
            println!("{}", user.display_name());
            println!("  Login: {}", user.login);
            if let Some(bio) = &user.bio {
                println!("  Bio: {}", bio);
            }
            if let Some(location) = &user.location {
                println!("  Location: {}", location);
            }
            println!("  Public repositories: {}", user.public_repos);
            println!("  Followers: {}", user.followers);
            println!("  Profile: {}", user.html_url);
        }

        Commands::Type {
            text,
            speed,
            delay,
            blink,
            linger,
        } => {
            let config = TypingConfig::from_millis(speed, delay, blink)?;
            preview_typing(text, config, Duration::from_millis(linger)).await?;
        }

        Commands::Config => {
            print!("{}", site.to_toml()?);
        }
    }

    Ok(())
}

fn print_skills(skills: &[MergedSkill], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(skills)?);
        return Ok(());
    }
    if skills.is_empty() {
        println!("No skills.");
        return Ok(());
    }
    println!("Skills ({}):", skills.len());
    for skill in skills {
        let source = if skill.is_from_dynamic_source() {
            "github"
        } else {
            "listed"
        };
        println!("  {:<20} {:<8} {}", skill.name, skill.color, source);
    }
    Ok(())
}

fn print_projects(repos: &[Repository], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(repos)?);
        return Ok(());
    }
    if repos.is_empty() {
        println!("No repositories.");
        return Ok(());
    }
    let now = Utc::now();
    for repo in repos {
        println!("{}", repo.name);
        if let Some(description) = &repo.description {
            println!("  {}", description);
        }
        println!(
            "  {} | ★ {} | forks {} | {}",
            repo.language.as_deref().unwrap_or("-"),
            repo.stargazers_count,
            repo.forks_count,
            repo.updated_ago(now)
        );
        println!("  {}", repo.html_url);
    }
    Ok(())
}

/// Redraw the current line for every frame until the text is complete and
/// `linger` has passed, then print the full text.
async fn preview_typing(text: String, config: TypingConfig, linger: Duration) -> Result<()> {
    let mut timer = TypingTimer::new(config);
    let mut frames = timer.subscribe();
    let handle = timer.start(text)?;
    let mut out = std::io::stdout();
    let mut completed_at: Option<Instant> = None;

    loop {
        let frame = frames.borrow_and_update().clone();
        write!(out, "\r{}{}", frame.displayed, frame.cursor())?;
        out.flush()?;

        if frame.is_complete() {
            let done = *completed_at.get_or_insert_with(Instant::now);
            let Some(remaining) = linger.checked_sub(done.elapsed()) else {
                break;
            };
            if remaining.is_zero() {
                break;
            }
            match tokio::time::timeout(remaining, frames.changed()).await {
                Ok(Ok(())) => continue,
                _ => break,
            }
        }

        frames.changed().await.context("typing timer stopped")?;
    }

    handle.cancel();
    // trailing space overwrites the cursor column
    writeln!(out, "\r{} ", timer.frame().target)?;
    Ok(())
}
