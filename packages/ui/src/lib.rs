//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const STUDENTS_CSS: Asset = asset!("/assets/students.css");

mod navbar;
pub use navbar::Navbar;

mod roster;
pub use roster::{use_admin_config, use_roster, AppRoster, RosterProvider};

pub mod notifications;
pub use notifications::{
    notify, use_notifications, NotificationCenter, NotificationHost, NotificationProvider,
};

mod avatar;
pub use avatar::StudentAvatar;

mod confirm;
pub use confirm::ConfirmButton;

mod student_table;
pub use student_table::{AddStudentButton, StudentTable};

mod drawer_form;
pub use drawer_form::StudentDrawerForm;
