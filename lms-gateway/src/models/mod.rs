pub mod community;
pub mod session;
pub mod user;

pub use session::{CurrentUser, MaybeUser, Role, SESSION_USER_KEY};
