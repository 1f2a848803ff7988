//! # View state for the student list
//!
//! [`ViewState`] is the view's local copy of the last successful fetch plus its
//! UI flags. It is never authoritative: the record list only changes through
//! [`ViewState::apply_load`], so a failed mutation leaves the displayed rows
//! exactly as they were.
//!
//! | Transition | Effect |
//! |------------|--------|
//! | [`apply_load`](ViewState::apply_load) | Replace records on success, keep them on failure, clear `fetching` either way. |
//! | [`toggle_drawer`](ViewState::toggle_drawer) | Flip the creation drawer. No backend side effects. |
//! | [`set_page`](ViewState::set_page) | Move the pager, clamped to the available pages. |

use crate::avatar::{initials, Initials};
use crate::models::StudentRecord;
use crate::notification::Notification;
use crate::roster::LoadOutcome;

/// What the view should show right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    Loading,
    Empty,
    Table,
}

/// One rendered table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentRow {
    pub key: String,
    pub initials: Initials,
    pub record: StudentRecord,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    students: Vec<StudentRecord>,
    fetching: bool,
    drawer_open: bool,
    page: usize,
    page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(50)
    }
}

impl ViewState {
    /// Fresh state for a view that is about to issue its first fetch.
    pub fn new(page_size: usize) -> Self {
        Self {
            students: Vec::new(),
            fetching: true,
            drawer_open: false,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn students(&self) -> &[StudentRecord] {
        &self.students
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Apply the result of a collection fetch.
    ///
    /// Returns the error notification to surface when the fetch failed.
    pub fn apply_load(&mut self, outcome: LoadOutcome) -> Option<Notification> {
        self.fetching = false;
        match outcome {
            Ok(students) => {
                self.students = students;
                self.page = self.page.min(self.last_page());
                None
            }
            Err(err) => Some(Notification::issue(&err)),
        }
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn render_mode(&self) -> RenderMode {
        if self.fetching {
            RenderMode::Loading
        } else if self.students.is_empty() {
            RenderMode::Empty
        } else {
            RenderMode::Table
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages; an empty list still has one (empty) page.
    pub fn page_count(&self) -> usize {
        self.students.len().div_ceil(self.page_size).max(1)
    }

    fn last_page(&self) -> usize {
        self.page_count() - 1
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.last_page());
    }

    /// Records on the current page.
    pub fn page_records(&self) -> &[StudentRecord] {
        let start = (self.page * self.page_size).min(self.students.len());
        let end = (start + self.page_size).min(self.students.len());
        &self.students[start..end]
    }

    /// Table rows for the current page, in backend order.
    pub fn page_rows(&self) -> Vec<StudentRow> {
        self.page_records()
            .iter()
            .map(|record| StudentRow {
                key: record.id.to_string(),
                initials: initials(&record.name),
                record: record.clone(),
            })
            .collect()
    }
}
