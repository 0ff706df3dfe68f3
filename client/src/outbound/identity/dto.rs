//! Wire types for the session endpoint.

use serde::Deserialize;

use crate::domain::session::Session;

/// Session payload returned by the identity service.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SessionDto {
    pub(super) username: String,
    #[serde(default)]
    pub(super) login_id: Option<String>,
}

impl SessionDto {
    /// Convert the wire payload into a domain session.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub(super) fn into_domain_session(self) -> Result<Session, String> {
        Session::try_from_parts(&self.username, self.login_id.as_deref())
            .map_err(|err| err.to_string())
    }
}
