#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::SiteConfig;
use tracing_subscriber::EnvFilter;

/// Folio - personal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - a personal portfolio page backed by GitHub")]
struct Args {
    /// Site configuration file (default: <config dir>/folio/folio.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show this GitHub account instead of the configured one
    #[arg(short, long)]
    username: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut site = SiteConfig::load_or_default(args.config.as_deref())
        .context("failed to load site configuration")?;
    if let Some(username) = args.username {
        site = site.with_username(username);
    }

    let title = format!("{} - Portfolio", site.display_name);
    tracing::info!("Starting portfolio for GitHub user '{}'", site.github.username);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(site)
        .launch(app::App);

    Ok(())
}
