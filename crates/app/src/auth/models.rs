//! Auth data models.

use std::fmt;

/// Self-service sign-up payload. The password is plaintext until the
/// service hashes it.
#[derive(Clone)]
pub struct NewRegistration {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: Option<String>,
}

impl fmt::Debug for NewRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewRegistration")
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .field("full_name", &self.full_name)
            .field("phone", &self.phone)
            .finish()
    }
}
