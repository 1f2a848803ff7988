use dioxus::prelude::*;
use store::{RenderMode, StudentRecord, ViewState};

use crate::notifications::NotificationCenter;
use crate::views::{EmptyState, LoadingIndicator};
use crate::{notify, use_admin_config, use_notifications, use_roster, AppRoster};
use crate::{StudentDrawerForm, StudentTable, STUDENTS_CSS};

/// Fetch the collection and fold the result into the view state.
async fn reload(
    roster: AppRoster,
    mut state: Signal<ViewState>,
    notes: Signal<NotificationCenter>,
) {
    let outcome = roster.load().await;
    let issue = state.write().apply_load(outcome);
    if let Some(note) = issue {
        notify(notes, note);
    }
}

/// The student list: loads on mount, re-fetches after every mutation.
#[component]
pub fn StudentsView() -> Element {
    let roster = use_roster();
    let config = use_admin_config();
    let notes = use_notifications();
    let mut state = use_signal(|| ViewState::new(config.table.page_size));

    // Load students on mount
    let _loader = use_resource({
        let roster = roster.clone();
        move || reload(roster.clone(), state, notes)
    });

    let on_delete = {
        let roster = roster.clone();
        move |student: StudentRecord| {
            let roster = roster.clone();
            spawn(async move {
                let again = roster.clone();
                roster
                    .remove(
                        &student,
                        |note| notify(notes, note),
                        move || reload(again, state, notes),
                    )
                    .await;
            });
        }
    };

    let on_added = {
        let roster = roster.clone();
        move |_: ()| {
            spawn(reload(roster.clone(), state, notes));
        }
    };

    let view = state();
    let body = match view.render_mode() {
        RenderMode::Loading => rsx! { LoadingIndicator {} },
        RenderMode::Empty => rsx! {
            EmptyState { on_add: move |_| state.write().toggle_drawer() }
        },
        RenderMode::Table => rsx! {
            StudentTable {
                rows: view.page_rows(),
                total: view.students().len(),
                page: view.page(),
                page_count: view.page_count(),
                scroll_height_px: config.table.scroll_height_px,
                on_delete: on_delete,
                on_add: move |_| state.write().toggle_drawer(),
                on_page: move |page| state.write().set_page(page),
            }
        },
    };

    rsx! {
        document::Stylesheet { href: STUDENTS_CSS }

        div {
            class: "students-view",
            StudentDrawerForm {
                open: view.is_drawer_open(),
                on_close: move |_| state.write().close_drawer(),
                on_added: on_added,
            }
            {body}
        }
    }
}
