pub mod avatar;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod notification;
pub mod roster;
pub mod view_state;

mod memory;
pub use memory::MemoryBackend;

pub use avatar::{initials, Initials};
pub use config::AdminConfig;
pub use error::{BackendError, ErrorPayload};
pub use form::StudentForm;
pub use models::{FieldError, Gender, NewStudent, StudentRecord};
pub use notification::{Notification, NotificationKind};
pub use roster::{AddOutcome, LoadOutcome, Roster, StudentBackend};
pub use view_state::{RenderMode, StudentRow, ViewState};
