use dioxus::prelude::*;
use store::{AddOutcome, Gender, StudentForm};

use crate::icons::{FaSpinner, FaXmark};
use crate::{notify, use_notifications, use_roster, Icon};

/// Right-hand drawer with the form for creating a student.
///
/// `on_added` fires once the backend accepted the new record; the drawer
/// then resets and asks to be closed through `on_close`.
#[component]
pub fn StudentDrawerForm(
    open: bool,
    on_close: EventHandler<()>,
    on_added: EventHandler<()>,
) -> Element {
    let roster = use_roster();
    let notes = use_notifications();
    let mut form = use_signal(StudentForm::default);
    let mut submitting = use_signal(|| false);

    let close = move || {
        let mut form = form;
        form.write().close();
        on_close.call(());
    };

    let handle_submit = move |_: MouseEvent| {
        if submitting() {
            return;
        }
        let Some(student) = form.write().submit() else {
            return;
        };
        submitting.set(true);
        let roster = roster.clone();
        spawn(async move {
            let outcome = roster
                .add(
                    student,
                    |note| notify(notes, note),
                    move || async move { on_added.call(()) },
                )
                .await;
            submitting.set(false);
            match outcome {
                AddOutcome::Added => {
                    form.write().reset();
                    on_close.call(());
                }
                AddOutcome::Failed => {}
                AddOutcome::Invalid(field_errors) => form.write().set_errors(field_errors),
            }
        });
    };

    if !open {
        return rsx! {};
    }

    let current = form();

    rsx! {
        div {
            class: "drawer-mask",
            onclick: move |_| close(),
        }
        aside {
            class: "drawer",
            role: "dialog",
            div {
                class: "drawer-header",
                h2 { "Create new student" }
                button {
                    class: "drawer-close",
                    title: "Close",
                    onclick: move |_| close(),
                    Icon { icon: FaXmark, width: 14, height: 14 }
                }
            }

            div {
                class: "drawer-body",
                div {
                    class: "form-field",
                    label { r#for: "student-name", "Name" }
                    input {
                        id: "student-name",
                        r#type: "text",
                        placeholder: "Please enter student name",
                        value: current.name.clone(),
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                    if let Some(message) = current.error("name") {
                        span { class: "form-error", "{message}" }
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "student-email", "Email" }
                    input {
                        id: "student-email",
                        r#type: "email",
                        placeholder: "Please enter student email",
                        value: current.email.clone(),
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                    if let Some(message) = current.error("email") {
                        span { class: "form-error", "{message}" }
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "student-gender", "Gender" }
                    select {
                        id: "student-gender",
                        value: current.gender.clone(),
                        onchange: move |evt: FormEvent| form.write().gender = evt.value(),
                        option { value: "", "Please select a gender" }
                        for g in Gender::ALL {
                            option {
                                key: "{g}",
                                value: g.as_str(),
                                "{g.label()}"
                            }
                        }
                    }
                    if let Some(message) = current.error("gender") {
                        span { class: "form-error", "{message}" }
                    }
                }
            }

            div {
                class: "drawer-footer",
                button {
                    class: "btn",
                    onclick: move |_| close(),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    disabled: submitting(),
                    onclick: handle_submit,
                    if submitting() {
                        Icon { icon: FaSpinner, width: 12, height: 12, class: "spin" }
                    }
                    "Submit"
                }
            }
        }
    }
}
