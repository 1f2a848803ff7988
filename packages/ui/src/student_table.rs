use dioxus::prelude::*;
use store::{StudentRecord, StudentRow};

use crate::icons::FaPlus;
use crate::{ConfirmButton, Icon, StudentAvatar};

/// The round "Add New Student" button shown above the table and in the empty state.
#[component]
pub fn AddStudentButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "btn btn-primary btn-round btn-small",
            onclick: move |_| onclick.call(()),
            Icon { icon: FaPlus, width: 10, height: 10 }
            span { "Add New Student" }
        }
    }
}

/// Bordered table of students with a count header and a pager.
#[component]
pub fn StudentTable(
    rows: Vec<StudentRow>,
    total: usize,
    page: usize,
    page_count: usize,
    #[props(default = 500)] scroll_height_px: u32,
    on_delete: EventHandler<StudentRecord>,
    on_add: EventHandler<()>,
    on_page: EventHandler<usize>,
) -> Element {
    rsx! {
        div {
            class: "student-table",
            div {
                class: "student-table-title",
                span { class: "tag", "Number of students" }
                span { class: "badge", "{total}" }
                div {
                    class: "student-table-toolbar",
                    AddStudentButton { onclick: on_add }
                }
            }
            div {
                class: "student-table-body",
                style: "max-height: {scroll_height_px}px",
                table {
                    thead {
                        tr {
                            th { class: "col-avatar" }
                            th { "Id" }
                            th { "Name" }
                            th { "Email" }
                            th { "Gender" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for row in rows {
                            StudentRowView { key: "{row.key}", row: row.clone(), on_delete }
                        }
                    }
                }
            }
            if page_count > 1 {
                Pager { page, page_count, on_page }
            }
        }
    }
}

#[component]
fn StudentRowView(row: StudentRow, on_delete: EventHandler<StudentRecord>) -> Element {
    let record = row.record.clone();
    let name = &row.record.name;

    rsx! {
        tr {
            td { StudentAvatar { initials: row.initials.clone() } }
            td { "{row.record.id}" }
            td { "{row.record.name}" }
            td { "{row.record.email}" }
            td { "{row.record.gender}" }
            td {
                class: "student-actions",
                ConfirmButton {
                    label: "Delete",
                    title: format!("Are you sure you wanna delete this student {name} ?"),
                    primary: true,
                    on_confirm: move |_| on_delete.call(record.clone()),
                }
                // Editing has no backend operation yet.
                ConfirmButton {
                    label: "Edit",
                    title: format!("Are you sure you wanna edit this student {name} ?"),
                }
            }
        }
    }
}

#[component]
fn Pager(page: usize, page_count: usize, on_page: EventHandler<usize>) -> Element {
    rsx! {
        nav {
            class: "pager",
            button {
                class: "btn btn-small",
                disabled: page == 0,
                onclick: move |_| on_page.call(page.saturating_sub(1)),
                "‹"
            }
            for n in 0..page_count {
                button {
                    key: "{n}",
                    class: if n == page { "btn btn-small active" } else { "btn btn-small" },
                    onclick: move |_| on_page.call(n),
                    "{n + 1}"
                }
            }
            button {
                class: "btn btn-small",
                disabled: page + 1 >= page_count,
                onclick: move |_| on_page.call(page + 1),
                "›"
            }
        }
    }
}
