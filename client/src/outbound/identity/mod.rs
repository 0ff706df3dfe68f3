//! HTTP identity-provider outbound adapter.
//!
//! This module implements the `IdentityProvider` port against the board's
//! session endpoint, using the shell-issued access token as proof.

mod dto;
mod http_provider;

pub use http_provider::HttpIdentityProvider;
