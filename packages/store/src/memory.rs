use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::{BackendError, ErrorPayload};
use crate::models::{NewStudent, StudentRecord};
use crate::roster::StudentBackend;

#[derive(Debug, Default)]
struct Inner {
    students: Vec<StudentRecord>,
    next_id: i64,
    failures: VecDeque<BackendError>,
}

/// In-memory StudentBackend for testing and offline demos.
///
/// Mirrors the REST backend's rules: ids are assigned on insert, emails are
/// unique, and deleting an unknown id is a 404.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next call fail with a conforming error body.
    pub fn fail_next(&self, payload: ErrorPayload) {
        self.fail_next_with(BackendError::Rejected(payload));
    }

    /// Make the next call fail with `err`. Queued failures are consumed in order.
    pub fn fail_next_with(&self, err: BackendError) {
        self.inner.lock().unwrap().failures.push_back(err);
    }

    fn take_failure(inner: &mut Inner) -> Result<(), BackendError> {
        match inner.failures.pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl StudentBackend for MemoryBackend {
    async fn list_students(&self) -> Result<Vec<StudentRecord>, BackendError> {
        let mut inner = self.inner.lock().unwrap();
        Self::take_failure(&mut inner)?;
        Ok(inner.students.clone())
    }

    async fn add_student(&self, student: &NewStudent) -> Result<(), BackendError> {
        let mut inner = self.inner.lock().unwrap();
        Self::take_failure(&mut inner)?;
        if inner.students.iter().any(|s| s.email == student.email) {
            return Err(BackendError::Rejected(ErrorPayload::new(
                format!("Email {} taken", student.email),
                400,
                "Bad Request",
            )));
        }
        inner.next_id += 1;
        let id = inner.next_id;
        inner.students.push(StudentRecord {
            id,
            name: student.name.clone(),
            email: student.email.clone(),
            gender: student.gender.as_str().to_string(),
        });
        Ok(())
    }

    async fn delete_student(&self, id: i64) -> Result<(), BackendError> {
        let mut inner = self.inner.lock().unwrap();
        Self::take_failure(&mut inner)?;
        let before = inner.students.len();
        inner.students.retain(|s| s.id != id);
        if inner.students.len() == before {
            return Err(BackendError::Rejected(ErrorPayload::new(
                format!("Student with id {id} does not exists"),
                404,
                "Not Found",
            )));
        }
        Ok(())
    }
}
