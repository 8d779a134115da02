//! Commands for the admin session.

use furnistore_core::command::Command;
use serde::Deserialize;

/// Command to sign in.
#[derive(Clone, Deserialize)]
pub struct Login {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl std::fmt::Debug for Login {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Login")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Command for Login {
    fn command_type(&self) -> &'static str {
        "session.login"
    }
}
