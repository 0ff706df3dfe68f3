//! Session gate service.
//!
//! Resolves the caller's session once at startup and caches the outcome for
//! the rest of the run. An absent session is an ordinary state, not an
//! error: resolution failures downgrade to signed-out so the board still
//! renders read-only.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::ports::{IdentityProvider, IdentityProviderError};
use crate::domain::session::Session;

/// Gate owning the once-resolved session.
pub struct SessionGate<P> {
    provider: Arc<P>,
    session: Option<Session>,
}

impl<P> SessionGate<P> {
    /// Create a gate with no resolved session yet.
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            session: None,
        }
    }

    /// Cached session from the last resolution attempt.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Whether the last resolution produced a session.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

impl<P> SessionGate<P>
where
    P: IdentityProvider,
{
    /// Resolve the session from the provider and cache the outcome.
    ///
    /// Every provider failure caches an absent session. Missing or expired
    /// credentials are an expected state; anything else gets a warning.
    /// Calling again repeats the attempt and replaces the cache.
    pub async fn resolve(&mut self) {
        match self.provider.current_session().await {
            Ok(session) => {
                debug!(username = %session.username(), "session resolved");
                self.session = Some(session);
            }
            Err(IdentityProviderError::Unauthenticated) => {
                debug!("no authenticated session; continuing signed out");
                self.session = None;
            }
            Err(err) => {
                warn!(error = %err, "session resolution failed; continuing signed out");
                self.session = None;
            }
        }
    }

    /// Clear the cached session, then revoke it with the provider.
    ///
    /// The cache clears before the provider call so the identity is unusable
    /// from the moment the user asks to leave. A failed revocation is logged
    /// and never restores the cache.
    pub async fn sign_out(&mut self) {
        self.session = None;
        match self.provider.sign_out().await {
            Ok(()) => debug!("remote session revoked"),
            Err(err) => {
                warn!(error = %err, "remote sign-out failed; local session already cleared");
            }
        }
    }
}

#[cfg(test)]
#[path = "session_gate_tests.rs"]
mod tests;
