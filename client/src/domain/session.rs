//! Session primitives for the resolved caller.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a service caches the session.

use std::fmt;

use crate::domain::record::UserHandle;

/// Domain error returned when session payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
}

impl fmt::Display for SessionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "session username must not be empty"),
        }
    }
}

impl std::error::Error for SessionValidationError {}

/// Identity resolved once at startup from the hosted auth service.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `login_id` is normalised: blank values collapse to `None`.
///
/// # Examples
/// ```
/// use client::domain::Session;
///
/// let session = Session::try_from_parts("ada", Some("ada@example.test")).unwrap();
/// assert_eq!(session.display_label(), "ada@example.test");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: UserHandle,
    login_id: Option<String>,
}

impl Session {
    /// Build a session from validated components.
    pub fn new(username: UserHandle, login_id: Option<String>) -> Self {
        let login_id = login_id.filter(|value| !value.trim().is_empty());
        Self { username, login_id }
    }

    /// Construct a session from raw username/login-id inputs.
    pub fn try_from_parts(
        username: &str,
        login_id: Option<&str>,
    ) -> Result<Self, SessionValidationError> {
        let username =
            UserHandle::new(username).map_err(|_| SessionValidationError::EmptyUsername)?;
        Ok(Self::new(username, login_id.map(str::to_owned)))
    }

    /// Identity handle used for owner stamping.
    pub fn username(&self) -> &UserHandle {
        &self.username
    }

    /// Sign-in label when the auth service supplied one.
    pub fn login_id(&self) -> Option<&str> {
        self.login_id.as_deref()
    }

    /// Friendly label for greetings: the login id when present, else the
    /// username.
    pub fn display_label(&self) -> &str {
        self.login_id
            .as_deref()
            .unwrap_or_else(|| self.username.as_ref())
    }
}
