//! Transient notifications in the top-right corner.
//!
//! Roster operations return a [`Notification`]; views hand it to [`notify`],
//! which shows it and dismisses it again after [`DISMISS_AFTER`].

use std::time::Duration;

use dioxus::prelude::*;
use store::{Notification, NotificationKind};

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaXmark};
use crate::Icon;

pub const DISMISS_AFTER: Duration = Duration::from_millis(4500);

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

#[derive(Clone, Debug, Default)]
pub struct NotificationCenter {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn push(&mut self, notification: Notification) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, notification });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

pub fn use_notifications() -> Signal<NotificationCenter> {
    use_context::<Signal<NotificationCenter>>()
}

/// Show `notification` and schedule its dismissal.
pub fn notify(mut center: Signal<NotificationCenter>, notification: Notification) {
    tracing::debug!("Notify {:?}: {}", notification.kind, notification.body);
    let id = center.write().push(notification);
    spawn(async move {
        sleep(DISMISS_AFTER).await;
        center.write().dismiss(id);
    });
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[component]
pub fn NotificationProvider(children: Element) -> Element {
    let center = use_signal(NotificationCenter::default);
    use_context_provider(|| center);

    rsx! {
        {children}
        NotificationHost {}
    }
}

#[component]
pub fn NotificationHost() -> Element {
    let mut center = use_notifications();
    let toasts = center().toasts.clone();

    rsx! {
        div {
            class: "notifications",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: match toast.notification.kind {
                        NotificationKind::Error => "notification error",
                        NotificationKind::Success => "notification success",
                    },
                    role: "alert",
                    span {
                        class: "notification-icon",
                        {match toast.notification.kind {
                            NotificationKind::Error => rsx! {
                                Icon { icon: FaCircleExclamation, width: 16, height: 16 }
                            },
                            NotificationKind::Success => rsx! {
                                Icon { icon: FaCircleCheck, width: 16, height: 16 }
                            },
                        }}
                    }
                    div {
                        class: "notification-content",
                        div { class: "notification-title", "{toast.notification.title}" }
                        div { class: "notification-body", "{toast.notification.body}" }
                    }
                    button {
                        class: "notification-close",
                        title: "Close",
                        onclick: move |_| center.write().dismiss(toast.id),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}
