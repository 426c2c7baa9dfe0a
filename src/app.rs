use dioxus::prelude::*;

use crate::context::{load_portfolio, use_site_config, PortfolioData};
use crate::pages::{Home, Projects};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Hero, skills and featured projects
/// - `/projects` - Every public repository
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/projects")]
    Projects {},
}

/// Root application component.
///
/// Provides global styles, the shared portfolio data, and routing.
#[component]
pub fn App() -> Element {
    let site = use_site_config();
    let data: Signal<PortfolioData> = use_signal(PortfolioData::default);

    // Provide fetched data to all pages
    use_context_provider(|| data);

    // Fetch GitHub data once on mount
    use_effect(move || {
        let site = site.clone();
        spawn(async move {
            load_portfolio(site, data).await;
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
