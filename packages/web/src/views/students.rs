use dioxus::prelude::*;

use ui::views::StudentsView;
use ui::Navbar;

#[component]
pub fn Students() -> Element {
    rsx! {
        Navbar {
            h1 { "Students" }
        }
        main {
            class: "app-content",
            StudentsView {}
        }
        footer {
            class: "app-footer",
            "Student Admin"
        }
    }
}
