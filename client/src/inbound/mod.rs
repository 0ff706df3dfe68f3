//! Inbound surfaces that translate user intent into domain service calls
//! while keeping presentation details at the edge.
//!
//! The interactive console lives under [`console`]; future surfaces are
//! expected to sit alongside it.

pub mod console;
