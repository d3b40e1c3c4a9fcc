use dioxus::prelude::*;

use api::{ApiClient, ClientConfig, HttpTransport};
use ui::{NavLink, Navbar};
use views::{Home, Login, Register, Reset, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/reset")]
        Reset {},
        #[route("/users")]
        Users {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../formbridge.toml");

const NAV_LINKS: [NavLink; 4] = [
    NavLink::new("/register", "Register"),
    NavLink::new("/login", "Login"),
    NavLink::new("/reset", "Reset password"),
    NavLink::new("/users", "Users"),
];

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialise logger: {e}");
    }
    dioxus::launch(App);
}

/// Embedded `formbridge.toml`, with an empty base URL resolved to the page origin.
fn load_config() -> ClientConfig {
    let config = ClientConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}: {e}; using defaults", ClientConfig::filename());
        ClientConfig::default()
    });

    if !config.api.base_url.is_empty() {
        return config;
    }
    match page_origin() {
        Some(origin) => config.with_base_url(origin),
        None => config,
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let config = load_config();
        tracing::info!("API base URL: {:?}", config.api.base_url);
        ApiClient::new(HttpTransport::new(), config)
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: "https://cdn.tailwindcss.com" }

        Router::<Route> {}
    }
}

/// Navbar above every page.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar { brand: "FormBridge", links: NAV_LINKS.to_vec() }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
