//! Driven port for resolving and revoking the hosted session.
//!
//! The domain owns the session contract so the gate can stay
//! adapter-agnostic: the same service runs against the hosted auth service,
//! a fixture, or a mock.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::session::Session;

define_port_error! {
    /// Errors surfaced while talking to the identity service.
    pub enum IdentityProviderError {
        /// No usable session: the token is missing, expired, or revoked.
        Unauthenticated =>
            "no authenticated session is available",
        /// Network transport failed before receiving a response.
        Transport { message: String } =>
            "identity transport failed: {message}",
        /// Identity call exceeded timeout.
        Timeout { message: String } =>
            "identity request timed out: {message}",
        /// Identity response could not be decoded.
        Decode { message: String } =>
            "identity response decode failed: {message}",
    }
}

/// Port for resolving the caller's identity once at startup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the currently signed-in session.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use client::domain::ports::{FixtureIdentityProvider, IdentityProvider};
    ///
    /// let provider = FixtureIdentityProvider;
    /// let session = provider.current_session().await?;
    /// assert_eq!(session.username().as_ref(), "fixture-user");
    /// # Ok::<(), client::domain::ports::IdentityProviderError>(())
    /// ```
    async fn current_session(&self) -> Result<Session, IdentityProviderError>;

    /// Revoke the remote session.
    async fn sign_out(&self) -> Result<(), IdentityProviderError>;
}

/// Fixture implementation resolving a stable development identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureIdentityProvider;

#[async_trait]
impl IdentityProvider for FixtureIdentityProvider {
    async fn current_session(&self) -> Result<Session, IdentityProviderError> {
        Session::try_from_parts("fixture-user", Some("fixture-user@example.test")).map_err(|err| {
            IdentityProviderError::decode(format!("invalid fixture session: {err}"))
        })
    }

    async fn sign_out(&self) -> Result<(), IdentityProviderError> {
        Ok(())
    }
}
