use dioxus::prelude::*;

/// A button that asks for confirmation in a small popover before acting.
///
/// Without `on_confirm` the button renders disabled.
#[component]
pub fn ConfirmButton(
    label: String,
    title: String,
    #[props(default)] primary: bool,
    on_confirm: Option<EventHandler<()>>,
) -> Element {
    let mut open = use_signal(|| false);
    let enabled = on_confirm.is_some();

    rsx! {
        span {
            class: "confirm",
            button {
                class: if primary { "btn btn-primary" } else { "btn" },
                disabled: !enabled,
                title: if enabled { "" } else { "Not available" },
                onclick: move |_| open.set(!open()),
                "{label}"
            }
            if open() {
                div {
                    class: "confirm-popover",
                    role: "dialog",
                    p { class: "confirm-title", "{title}" }
                    div {
                        class: "confirm-actions",
                        button {
                            class: "btn btn-small",
                            onclick: move |_| open.set(false),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-small btn-primary",
                            onclick: move |_| {
                                open.set(false);
                                if let Some(handler) = on_confirm {
                                    handler.call(());
                                }
                            },
                            "OK"
                        }
                    }
                }
            }
        }
    }
}
