use dioxus::prelude::*;

use crate::icons::{FaInbox, FaSpinner};
use crate::{AddStudentButton, Icon};

/// Shown instead of the table when the backend returned no students.
#[component]
pub fn EmptyState(on_add: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "empty-state",
            AddStudentButton { onclick: on_add }
            div {
                class: "empty-state-placeholder",
                Icon { icon: FaInbox, width: 48, height: 48 }
                p { "No Data" }
            }
        }
    }
}

/// Spinner shown while the first fetch is in flight.
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "loading-indicator",
            role: "status",
            Icon { icon: FaSpinner, width: 24, height: 24, class: "spin" }
        }
    }
}
