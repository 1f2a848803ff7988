mod students;
pub use students::Students;
