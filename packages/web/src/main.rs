use api::{FriendsClient, FrontendConfig};
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use views::{Dashboard, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/register")]
    Register {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

const FRONTEND_TOML: &str = include_str!("../frontend.toml");

/// Page-wide values shared with the views.
#[derive(Clone, Debug)]
pub(crate) struct PageContext {
    pub config: FrontendConfig,
    pub csrf_token: Option<String>,
}

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

fn load_config(text: &str) -> FrontendConfig {
    FrontendConfig::from_toml(text).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}, using defaults: {}", FrontendConfig::filename(), e);
        FrontendConfig::default()
    })
}

fn make_client(config: &FrontendConfig, csrf_token: Option<String>) -> FriendsClient {
    let token = csrf_token.unwrap_or_else(|| {
        tracing::warn!(
            "No <meta name=\"{}\"> on this page; requests go out without a CSRF token",
            config.friends.csrf_meta_name
        );
        String::new()
    });

    match FriendsClient::new(&ui::page::origin(), token.clone(), config.friends.clone()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Falling back to {}: {}", ui::page::FALLBACK_ORIGIN, e);
            FriendsClient::new(ui::page::FALLBACK_ORIGIN, token, config.friends.clone())
                .expect("fallback origin is a valid URL")
        }
    }
}

#[component]
fn App() -> Element {
    // The CSRF token is read once per page load.
    let page = use_context_provider(|| {
        let config = load_config(FRONTEND_TOML);
        let csrf_token = ui::page::csrf_token(&config.friends.csrf_meta_name);
        PageContext { config, csrf_token }
    });
    use_context_provider(|| make_client(&page.config, page.csrf_token.clone()));

    rsx! {
        document::Link { rel: "stylesheet", href: BOOTSTRAP_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_matches_defaults() {
        assert_eq!(load_config(FRONTEND_TOML), FrontendConfig::default());
    }

    #[test]
    fn test_broken_config_falls_back() {
        assert_eq!(load_config("[friends"), FrontendConfig::default());
    }

    #[test]
    fn test_client_builds_without_token() {
        let client = make_client(&FrontendConfig::default(), None);
        assert_eq!(client.config().endpoint, "/api/friends/");
    }
}
