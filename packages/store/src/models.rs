//! # Domain models for student records
//!
//! The types exchanged with the REST backend. They are `Serialize + Deserialize`
//! so the same structs describe the JSON on both sides of the wire.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`StudentRecord`] | A stored student as returned by the collection endpoint. The `id` is server-assigned; `gender` stays free text on read so unexpected values never break a load. |
//! | [`NewStudent`] | The body of a creation request, built by the drawer form. |
//! | [`Gender`] | The closed set of genders the form offers (`MALE`, `FEMALE`, `OTHER` on the wire). |
//! | [`FieldError`] | A validation failure attached to one form field. |

use std::fmt;

use serde::{Deserialize, Serialize};

/// A student as stored by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Server-assigned identifier.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub gender: String,
}

/// Gender choices offered when creating a student.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Wire value, as the backend expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }

    /// Human label for select boxes.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Parse a wire value, case-insensitively.
    pub fn parse(value: &str) -> Option<Gender> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for `POST` on the collection endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub gender: Gender,
}

/// A validation failure on one form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl NewStudent {
    /// Build a creation request from raw form input.
    ///
    /// Returns every field error at once so the form can mark all of them.
    pub fn from_form(name: &str, email: &str, gender: &str) -> Result<Self, Vec<FieldError>> {
        let name = name.trim();
        let email = email.trim();
        let gender = Gender::parse(gender);

        let mut errors = Vec::new();
        if name.is_empty() {
            errors.push(FieldError {
                field: "name",
                message: "Please enter student name",
            });
        }
        if email.is_empty() || !email.contains('@') {
            errors.push(FieldError {
                field: "email",
                message: "Please enter student email",
            });
        }
        if gender.is_none() {
            errors.push(FieldError {
                field: "gender",
                message: "Please select a gender",
            });
        }

        match gender {
            Some(gender) if errors.is_empty() => Ok(Self {
                name: name.to_string(),
                email: email.to_string(),
                gender,
            }),
            _ => Err(errors),
        }
    }

    /// Re-check an already built request (fields may have been set directly).
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        Self::from_form(&self.name, &self.email, self.gender.as_str()).map(|_| ())
    }
}
