//! User-facing notifications produced by roster operations.

use crate::error::BackendError;
use crate::models::StudentRecord;

pub const ISSUE_TITLE: &str = "There was an issue";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            body: body.into(),
        }
    }

    /// The uniform error notification for any backend failure.
    pub fn issue(err: &BackendError) -> Self {
        let payload = err.payload();
        Self {
            kind: NotificationKind::Error,
            title: ISSUE_TITLE.to_string(),
            body: format!("{} [{}] [{}]", payload.message, payload.status, payload.error),
        }
    }

    pub fn deleted(student: &StudentRecord) -> Self {
        Self::success(
            "Student deleted",
            format!(
                "Student with {} and name {} was deleted",
                student.id, student.name
            ),
        )
    }

    pub fn added(name: &str) -> Self {
        Self::success(
            "Student successfully added",
            format!("{name} was added to the system"),
        )
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}
