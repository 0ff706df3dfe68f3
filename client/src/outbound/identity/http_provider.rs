//! Reqwest-backed identity provider adapter.
//!
//! The shell drops an access token on disk when it signs the user in;
//! this adapter exchanges that token for a session over HTTP. Session
//! resolution and revocation both talk to the same endpoint, with the
//! HTTP verb carrying the intent.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;
use zeroize::Zeroizing;

use super::dto::SessionDto;
use crate::domain::ports::{IdentityProvider, IdentityProviderError};
use crate::domain::session::Session;
use crate::outbound::http::status_message;
use crate::outbound::token::AccessTokenFile;

/// Identity adapter resolving sessions from a shell-issued access token.
pub struct HttpIdentityProvider {
    client: Client,
    endpoint: Url,
    token_file: AccessTokenFile,
}

impl HttpIdentityProvider {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        endpoint: Url,
        token_file: AccessTokenFile,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            token_file,
        })
    }

    /// Current access token, when the shell has issued one.
    ///
    /// An unreadable token file is a transport failure: the caller cannot
    /// tell whether a token exists, so it must not assume either way.
    fn access_token(&self) -> Result<Option<Zeroizing<String>>, IdentityProviderError> {
        self.token_file
            .read()
            .map_err(|err| IdentityProviderError::transport(format!("access token unreadable: {err}")))
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn current_session(&self) -> Result<Session, IdentityProviderError> {
        let Some(token) = self.access_token()? else {
            debug!("no access token on disk; resolving as unauthenticated");
            return Err(IdentityProviderError::unauthenticated());
        };

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_session(body.as_ref())
    }

    async fn sign_out(&self) -> Result<(), IdentityProviderError> {
        let Some(token) = self.access_token()? else {
            debug!("no access token on disk; nothing to revoke");
            return Ok(());
        };

        let response = self
            .client
            .delete(self.endpoint.clone())
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        // An expired token reports 401; the session is gone either way.
        if status.is_success() || status == StatusCode::UNAUTHORIZED {
            return Ok(());
        }
        let body = response.bytes().await.map_err(map_transport_error)?;
        Err(map_status_error(status, body.as_ref()))
    }
}

fn parse_session(body: &[u8]) -> Result<Session, IdentityProviderError> {
    let decoded: SessionDto = serde_json::from_slice(body).map_err(|error| {
        IdentityProviderError::decode(format!("invalid session payload: {error}"))
    })?;
    decoded
        .into_domain_session()
        .map_err(IdentityProviderError::decode)
}

fn map_transport_error(error: reqwest::Error) -> IdentityProviderError {
    if error.is_timeout() {
        IdentityProviderError::timeout(error.to_string())
    } else {
        IdentityProviderError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> IdentityProviderError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            IdentityProviderError::unauthenticated()
        }
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            IdentityProviderError::timeout(status_message(status, body))
        }
        _ => IdentityProviderError::transport(status_message(status, body)),
    }
}
