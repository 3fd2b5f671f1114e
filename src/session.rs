use serde::{Deserialize, Serialize};
use tracing::debug;

/// A signed-in demo user. Any non-blank email and password are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Session {
    email: String,
}

/// Error type for the sign-in gate.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Email is required")]
    MissingEmail,

    #[error("Password is required")]
    MissingPassword,

    /// A stored session could not be read back.
    #[error("Invalid stored session: {0}")]
    Stored(#[from] serde_json::Error),
}

impl Session {
    /// Signs in with the values typed into the login form.
    ///
    /// # Errors
    /// Returns `SessionError::MissingEmail` or `SessionError::MissingPassword`
    /// if the corresponding value is blank after trimming.
    pub fn sign_in(email: &str, password: &str) -> Result<Self, SessionError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(SessionError::MissingEmail);
        }
        if password.trim().is_empty() {
            return Err(SessionError::MissingPassword);
        }

        debug!("signed in");
        Ok(Self {
            email: email.to_owned(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Stored form of the session, `{"email":"..."}`
    ///
    /// # Errors
    /// Returns `SessionError::Stored` if serialization fails.
    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restores a session from its stored form, holding it to the same rule as [`Session::sign_in`].
    ///
    /// # Errors
    /// Returns `SessionError::Stored` if `raw` is not a stored session, or
    /// `SessionError::MissingEmail` if the stored email is blank.
    pub fn from_json(raw: &str) -> Result<Self, SessionError> {
        let stored: Self = serde_json::from_str(raw)?;
        let email = stored.email.trim();
        if email.is_empty() {
            return Err(SessionError::MissingEmail);
        }

        Ok(Self {
            email: email.to_owned(),
        })
    }
}

/// Whether a page behind the gate must send the visitor to sign in first
pub const fn requires_sign_in(session: Option<&Session>) -> bool {
    session.is_none()
}
