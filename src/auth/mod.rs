pub mod forms;
pub mod sessions;
pub mod token;

pub use sessions::{load_user_from_request, SessionUser, UserKind};
