use dioxus::prelude::*;
use store::Initials;

use crate::icons::FaUser;
use crate::Icon;

/// Round avatar with a student's initials, or a user icon for blank names.
#[component]
pub fn StudentAvatar(initials: Initials) -> Element {
    match initials {
        Initials::Placeholder => rsx! {
            span {
                class: "avatar avatar-placeholder",
                Icon { icon: FaUser, width: 14, height: 14 }
            }
        },
        Initials::Text(text) => rsx! {
            span { class: "avatar", "{text}" }
        },
    }
}
