//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! This module follows the hexagonal architecture pattern, providing concrete
//! implementations of domain port traits for the board's infrastructure:
//!
//! - **graphql**: GraphQL-over-HTTP record store
//! - **identity**: HTTP session resolution and revocation
//! - **token**: shell-issued access token file handling
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod graphql;
mod http;
pub mod identity;
pub mod token;
