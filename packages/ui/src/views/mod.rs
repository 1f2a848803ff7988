mod empty_state;
pub use empty_state::{EmptyState, LoadingIndicator};

mod students;
pub use students::StudentsView;
