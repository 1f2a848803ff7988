//! # Roster — student operations on an abstract backend
//!
//! [`Roster`] is the operation layer behind the student list. It talks to the
//! REST collaborator only through the [`StudentBackend`] trait, so the same
//! flows run against the HTTP client in the app and the in-memory backend in
//! tests ([`crate::MemoryBackend`]).
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`load`](Roster::load) | Fetch the full collection. The caller applies the outcome with [`ViewState::apply_load`]. |
//! | [`refresh`](Roster::refresh) | `load` followed by `apply_load`, for callers that own the state outright. |
//! | [`remove`](Roster::remove) | Delete one record; on success emit the notification, then await `on_done` (the re-fetch). |
//! | [`add`](Roster::add) | Validate and create a record; on success emit the notification, then await `on_done`. |
//!
//! Every operation is a single best-effort request. Failures are logged and
//! turned into a [`Notification`]; nothing is retried. Mutations hand their
//! notification to `emit` before `on_done` runs, so a failing re-fetch is
//! always reported after the mutation's own outcome.

use std::future::Future;

use crate::error::BackendError;
use crate::models::{FieldError, NewStudent, StudentRecord};
use crate::notification::Notification;
use crate::view_state::ViewState;

/// Async interface to the student REST backend.
pub trait StudentBackend {
    fn list_students(&self) -> impl Future<Output = Result<Vec<StudentRecord>, BackendError>>;
    fn add_student(&self, student: &NewStudent) -> impl Future<Output = Result<(), BackendError>>;
    fn delete_student(&self, id: i64) -> impl Future<Output = Result<(), BackendError>>;
}

/// Result of a collection fetch.
pub type LoadOutcome = Result<Vec<StudentRecord>, BackendError>;

/// Result of a creation attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum AddOutcome {
    Added,
    /// Rejected locally; the backend was never called.
    Invalid(Vec<FieldError>),
    Failed,
}

#[derive(Clone, Debug, Default)]
pub struct Roster<B> {
    backend: B,
}

impl<B: StudentBackend> Roster<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn load(&self) -> LoadOutcome {
        let outcome = self.backend.list_students().await;
        match &outcome {
            Ok(students) => tracing::info!("Loaded {} students", students.len()),
            Err(e) => tracing::error!("Failed to load students: {:?}", e.payload()),
        }
        outcome
    }

    pub async fn refresh(&self, state: &mut ViewState) -> Option<Notification> {
        let outcome = self.load().await;
        state.apply_load(outcome)
    }

    /// Delete `student`. `on_done` runs only after the backend confirmed.
    pub async fn remove<E, F, Fut>(&self, student: &StudentRecord, emit: E, on_done: F) -> bool
    where
        E: FnOnce(Notification),
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        match self.backend.delete_student(student.id).await {
            Ok(()) => {
                tracing::info!("Deleted student {} ({})", student.id, student.name);
                emit(Notification::deleted(student));
                on_done().await;
                true
            }
            Err(e) => {
                tracing::error!("Failed to delete student {}: {:?}", student.id, e.payload());
                emit(Notification::issue(&e));
                false
            }
        }
    }

    /// Create `student`. `on_done` runs only after the backend accepted it.
    pub async fn add<E, F, Fut>(&self, student: NewStudent, emit: E, on_done: F) -> AddOutcome
    where
        E: FnOnce(Notification),
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Err(errors) = student.validate() {
            return AddOutcome::Invalid(errors);
        }
        match self.backend.add_student(&student).await {
            Ok(()) => {
                tracing::info!("Added student {}", student.name);
                emit(Notification::added(&student.name));
                on_done().await;
                AddOutcome::Added
            }
            Err(e) => {
                tracing::error!("Failed to add student {}: {:?}", student.name, e.payload());
                emit(Notification::issue(&e));
                AddOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::ErrorPayload;
    use crate::memory::MemoryBackend;
    use crate::models::Gender;
    use crate::notification::NotificationKind;
    use crate::view_state::RenderMode;

    fn new_student(name: &str) -> NewStudent {
        NewStudent {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            gender: Gender::Female,
        }
    }

    async fn seeded(names: &[&str]) -> Roster<MemoryBackend> {
        let backend = MemoryBackend::new();
        for name in names {
            backend.add_student(&new_student(name)).await.unwrap();
        }
        Roster::new(backend)
    }

    #[tokio::test]
    async fn test_refresh_populates_state() {
        let roster = seeded(&["Ada", "Grace"]).await;
        let mut state = ViewState::default();

        assert!(roster.refresh(&mut state).await.is_none());
        assert_eq!(state.page_rows().len(), 2);
        assert_eq!(state.students()[0].name, "Ada");
        assert!(!state.is_fetching());
    }

    #[tokio::test]
    async fn test_remove_then_reload_drops_record() {
        let roster = seeded(&["Ada", "Grace", "Linus"]).await;
        let mut state = ViewState::default();
        roster.refresh(&mut state).await;
        let target = state.students()[1].clone();

        let mut emitted = Vec::new();
        let reload = roster.clone();
        let state_ref = &mut state;
        let removed = roster
            .remove(
                &target,
                |note| emitted.push(note),
                move || async move {
                    reload.refresh(state_ref).await;
                },
            )
            .await;

        assert!(removed);
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].kind, NotificationKind::Success);
        assert_eq!(
            emitted[0].body,
            format!("Student with {} and name Grace was deleted", target.id)
        );
        let rows = state.page_rows();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.record.id != target.id));
    }

    #[tokio::test]
    async fn test_delete_notice_precedes_failed_reload() {
        let roster = seeded(&["Ada", "Grace"]).await;
        let mut state = ViewState::default();
        roster.refresh(&mut state).await;
        let target = state.students()[0].clone();

        let titles = RefCell::new(Vec::new());
        let reload = roster.clone();
        let state_ref = &mut state;
        let titles_ref = &titles;
        roster
            .remove(
                &target,
                |note| titles_ref.borrow_mut().push(note.title),
                move || async move {
                    reload
                        .backend()
                        .fail_next(ErrorPayload::new("down", 503, "Service Unavailable"));
                    if let Some(note) = reload.refresh(state_ref).await {
                        titles_ref.borrow_mut().push(note.title);
                    }
                },
            )
            .await;

        assert_eq!(
            titles.into_inner(),
            vec!["Student deleted".to_string(), "There was an issue".to_string()]
        );
    }

    #[tokio::test]
    async fn test_failed_remove_keeps_rows_and_skips_reload() {
        let roster = seeded(&["Ada", "Grace"]).await;
        let mut state = ViewState::default();
        roster.refresh(&mut state).await;
        let before = state.clone();

        roster
            .backend()
            .fail_next(ErrorPayload::new("Student not found", 404, "Not Found"));
        let mut reloaded = false;
        let mut emitted = Vec::new();
        let flag = &mut reloaded;
        let removed = roster
            .remove(
                &before.students()[0],
                |note| emitted.push(note),
                move || async move {
                    *flag = true;
                },
            )
            .await;

        assert!(!removed);
        assert!(!reloaded);
        assert_eq!(emitted.len(), 1);
        assert!(emitted[0].is_error());
        assert_eq!(emitted[0].title, "There was an issue");
        assert_eq!(emitted[0].body, "Student not found [404] [Not Found]");
        assert_eq!(state, before);
    }

    #[tokio::test]
    async fn test_remove_missing_record_is_an_issue() {
        let roster = seeded(&[]).await;
        let ghost = StudentRecord {
            id: 42,
            name: "Ghost".into(),
            email: "ghost@example.com".into(),
            gender: "OTHER".into(),
        };
        let mut emitted = None;
        let removed = roster
            .remove(&ghost, |note| emitted = Some(note), || async {})
            .await;
        assert!(!removed);
        let note = emitted.unwrap();
        assert!(note.is_error());
        assert!(note.body.contains("[404]"));
    }

    #[tokio::test]
    async fn test_add_validates_before_calling_backend() {
        let roster = seeded(&[]).await;
        let mut emitted = Vec::new();
        let outcome = roster
            .add(new_student(" "), |note| emitted.push(note), || async {})
            .await;
        assert!(matches!(outcome, AddOutcome::Invalid(ref errs) if errs[0].field == "name"));
        assert!(emitted.is_empty());
        assert!(roster.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_notifies_then_reloads() {
        let roster = seeded(&[]).await;
        let mut state = ViewState::default();
        roster.refresh(&mut state).await;
        assert_eq!(state.render_mode(), RenderMode::Empty);

        let events = RefCell::new(Vec::new());
        let events_ref = &events;
        let reload = roster.clone();
        let state_ref = &mut state;
        let outcome = roster
            .add(
                new_student("Ada"),
                |note| events_ref.borrow_mut().push(note.title),
                move || async move {
                    reload.refresh(state_ref).await;
                    events_ref.borrow_mut().push("reloaded".to_string());
                },
            )
            .await;

        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(
            events.into_inner(),
            vec!["Student successfully added".to_string(), "reloaded".to_string()]
        );
        assert_eq!(state.render_mode(), RenderMode::Table);
        assert_eq!(state.students()[0].email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_add_failure_reports_issue() {
        let roster = seeded(&["Ada"]).await;
        let mut emitted = Vec::new();
        let outcome = roster
            .add(new_student("Ada"), |note| emitted.push(note), || async {})
            .await;
        assert_eq!(outcome, AddOutcome::Failed);
        assert_eq!(
            emitted[0].body,
            "Email ada@example.com taken [400] [Bad Request]"
        );
    }

    #[tokio::test]
    async fn test_failed_load_surfaces_issue() {
        let roster = seeded(&["Ada"]).await;
        roster
            .backend()
            .fail_next_with(BackendError::Malformed { status: 500 });
        let mut state = ViewState::default();
        let note = roster.refresh(&mut state).await.unwrap();
        assert_eq!(
            note.body,
            "Unexpected response from server [500] [Internal Server Error]"
        );
        assert!(!state.is_fetching());
        assert!(state.students().is_empty());
    }
}
