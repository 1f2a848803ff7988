//! Backend wiring for the student views.
//!
//! [`RosterProvider`] builds the HTTP-backed [`AppRoster`] from an
//! [`AdminConfig`] and puts both into context, so any view below it can call
//! [`use_roster`] and [`use_admin_config`].

use api::StudentClient;
use dioxus::prelude::*;
use store::{AdminConfig, Roster};

/// The roster the app runs against.
pub type AppRoster = Roster<StudentClient>;

pub fn use_roster() -> AppRoster {
    use_context::<AppRoster>()
}

pub fn use_admin_config() -> AdminConfig {
    use_context::<AdminConfig>()
}

#[component]
pub fn RosterProvider(config: AdminConfig, children: Element) -> Element {
    use_context_provider(|| {
        tracing::info!("Student backend at {}", config.api.collection_url());
        Roster::new(StudentClient::new(&config.api))
    });
    use_context_provider(|| config.clone());

    rsx! {
        {children}
    }
}
