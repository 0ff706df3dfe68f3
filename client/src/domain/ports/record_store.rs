//! Driven port for the remote restaurant record store.
//!
//! The domain owns the operation shapes and error contract so the sync
//! controller never sees transport detail. One variant is deliberately
//! structured: `Rejected` carries the store's own error payload verbatim so
//! the operation boundary can log full detail without parsing it.

use async_trait::async_trait;
use uuid::Uuid;

use super::define_port_error;
use crate::domain::draft::CreateRecordInput;
use crate::domain::record::{Record, RecordId};

define_port_error! {
    /// Errors surfaced while calling the record store.
    pub enum RecordStoreError {
        /// Network transport failed before receiving a response.
        Transport { message: String } =>
            "record store transport failed: {message}",
        /// Store call exceeded timeout.
        Timeout { message: String } =>
            "record store timeout: {message}",
        /// Store denied the call outright.
        Denied { message: String } =>
            "record store denied the request: {message}",
        /// Store rejected the request shape before execution.
        InvalidRequest { message: String } =>
            "record store request invalid: {message}",
        /// Store response could not be decoded.
        Decode { message: String } =>
            "record store response decode failed: {message}",
        /// Store executed the call and answered with structured errors.
        Rejected { errors: serde_json::Value } =>
            "record store rejected the operation: {errors}",
    }
}

/// Port for listing and mutating records in the remote store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch the records the store returns in its first page.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use client::domain::ports::{FixtureRecordStore, RecordStore};
    ///
    /// let store = FixtureRecordStore;
    /// let records = store.list_records().await?;
    /// assert!(records.is_empty());
    /// # Ok::<(), client::domain::ports::RecordStoreError>(())
    /// ```
    async fn list_records(&self) -> Result<Vec<Record>, RecordStoreError>;

    /// Create one record and return it with its store-assigned id.
    async fn create_record(&self, input: &CreateRecordInput) -> Result<Record, RecordStoreError>;

    /// Delete one record and return the acknowledged id.
    async fn delete_record(&self, id: &RecordId) -> Result<RecordId, RecordStoreError>;
}

/// Fixture implementation backing demos without a remote store.
///
/// Listing is always empty; creates echo the input under a fresh id; deletes
/// acknowledge whatever id they are given.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureRecordStore;

#[async_trait]
impl RecordStore for FixtureRecordStore {
    async fn list_records(&self) -> Result<Vec<Record>, RecordStoreError> {
        Ok(Vec::new())
    }

    async fn create_record(&self, input: &CreateRecordInput) -> Result<Record, RecordStoreError> {
        let id = RecordId::new(Uuid::new_v4().to_string())
            .map_err(|err| RecordStoreError::decode(format!("invalid fixture id: {err}")))?;
        Ok(input.to_record(id))
    }

    async fn delete_record(&self, id: &RecordId) -> Result<RecordId, RecordStoreError> {
        Ok(id.clone())
    }
}
