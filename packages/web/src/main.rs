use std::str::FromStr;

use dioxus::prelude::*;

use store::AdminConfig;
use ui::{NotificationProvider, RosterProvider};
use views::Students;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/students")]
    Students {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Embedded at build time; `STUDENTS_API_URL` overrides the backend address.
const STUDENTS_TOML: &str = include_str!("../students.toml");

fn init_logging(level: &str) {
    let level = tracing::Level::from_str(level).unwrap_or(tracing::Level::INFO);
    if dioxus::logger::init(level).is_err() {
        tracing::debug!("Logger already initialized");
    }
}

fn main() {
    let (config, config_error) = AdminConfig::from_toml_or_default(STUDENTS_TOML);
    let config = config.with_base_url_override(option_env!("STUDENTS_API_URL"));

    init_logging(&config.log.level);
    if let Some(e) = config_error {
        tracing::warn!("Invalid {}, using defaults: {}", AdminConfig::filename(), e);
    }

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<AdminConfig>();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        RosterProvider {
            config,
            NotificationProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to `/students`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Students {});
    rsx! {}
}
