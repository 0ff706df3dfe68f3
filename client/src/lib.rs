//! Restaurant board client library modules.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

/// Runtime settings loaded at bootstrap.
pub use config::ClientSettings;
