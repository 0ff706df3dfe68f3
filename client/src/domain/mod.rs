//! Domain primitives, services, and ports.
//!
//! Purpose: Define strongly typed board entities and the two stateful
//! services that keep them consistent with the remote store. Keep types
//! immutable where possible and document invariants and serialisation
//! contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Record, RecordId, RecordName, RecordDescription, UserHandle — the
//!   validated record model.
//! - Session — the once-resolved caller identity.
//! - RecordDraft, CreateRecordInput — submission buffer and its validated
//!   form.
//! - SessionGate, RecordSyncController — the services driving the board.
//! - Error, ErrorCode — the surface-agnostic error payload.
//! - ports — driven-port traits with fixtures and mocks.

pub mod draft;
pub mod error;
pub mod ports;
pub mod record;
pub mod record_sync;
pub mod session;
pub mod session_gate;

pub use self::draft::{CreateRecordInput, DraftValidationError, RecordDraft};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::record::{
    Record, RecordDescription, RecordId, RecordName, RecordValidationError, UserHandle,
};
pub use self::record_sync::RecordSyncController;
pub use self::session::{Session, SessionValidationError};
pub use self::session_gate::SessionGate;
