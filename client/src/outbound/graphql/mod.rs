//! GraphQL record-store outbound adapter.
//!
//! This module provides a thin HTTP implementation of the `RecordStore`
//! port against the board's managed GraphQL API.

mod dto;
mod http_store;

pub use http_store::GraphQlHttpStore;
