//! Input state of the student creation form.

use crate::models::{FieldError, NewStudent};

/// Raw field values plus the validation messages currently shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub gender: String,
    errors: Vec<FieldError>,
}

impl StudentForm {
    /// Validate the fields. On failure the messages are kept for display.
    pub fn submit(&mut self) -> Option<NewStudent> {
        match NewStudent::from_form(&self.name, &self.email, &self.gender) {
            Ok(student) => {
                self.errors.clear();
                Some(student)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn set_errors(&mut self, errors: Vec<FieldError>) {
        self.errors = errors;
    }

    /// Message for `field`, if it failed validation.
    pub fn error(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Closing keeps what was typed but drops stale messages.
    pub fn close(&mut self) {
        self.errors.clear();
    }

    /// Clear everything after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    #[test]
    fn test_submit_keeps_messages_per_field() {
        let mut form = StudentForm {
            email: "a@b.c".into(),
            ..Default::default()
        };
        assert!(form.submit().is_none());
        assert_eq!(form.error("name"), Some("Please enter student name"));
        assert_eq!(form.error("email"), None);
        assert_eq!(form.error("gender"), Some("Please select a gender"));
    }

    #[test]
    fn test_close_clears_stale_messages() {
        let mut form = StudentForm::default();
        form.submit();
        assert!(form.has_errors());

        form.name = "Ada".into();
        form.close();
        assert!(!form.has_errors());
        assert_eq!(form.error("name"), None);
        assert_eq!(form.name, "Ada");
    }

    #[test]
    fn test_valid_submit_clears_messages() {
        let mut form = StudentForm::default();
        form.submit();

        form.name = "Ada".into();
        form.email = "ada@example.com".into();
        form.gender = "FEMALE".into();
        let student = form.submit().unwrap();
        assert_eq!(student.gender, Gender::Female);
        assert!(!form.has_errors());

        form.reset();
        assert_eq!(form, StudentForm::default());
    }
}
