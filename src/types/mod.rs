// ABOUTME: Validated domain types shared by every request builder.
// ABOUTME: Values that exist have already passed validation.

mod password;
mod username;

pub use password::Password;
pub use username::{MAX_USERNAME_LEN, Username, UsernameError};
