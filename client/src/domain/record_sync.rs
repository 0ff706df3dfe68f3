//! Record synchronisation controller.
//!
//! Owns the board's local state: the cached record list plus the draft for
//! the next submission. Operations follow one policy throughout: fail
//! closed, stay silent, let the user retry. Failures are logged here at the
//! operation boundary and returned as domain errors; local state changes
//! only on the paths spelled out per operation.
//!
//! Two reconciliation strategies are deliberately distinct:
//! - after a create, the whole list resyncs from the store so concurrent
//!   writers become visible;
//! - after a delete, the matching id is patched out locally with no refetch.
//!
//! Unifying them would change what the board shows under concurrent remote
//! mutation, so they stay named and separate.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::domain::draft::{CreateRecordInput, DraftValidationError, RecordDraft};
use crate::domain::error::Error;
use crate::domain::ports::{RecordStore, RecordStoreError};
use crate::domain::record::{Record, RecordId};
use crate::domain::session::Session;

fn map_store_error(error: RecordStoreError) -> Error {
    match error {
        RecordStoreError::Rejected { errors } => {
            Error::transport("record store rejected the operation").with_details(errors)
        }
        other => Error::transport(other.to_string()),
    }
}

fn map_draft_error(error: DraftValidationError) -> Error {
    match error {
        DraftValidationError::EmptyName => {
            Error::invalid_request(error.to_string()).with_details(json!({ "field": "name" }))
        }
        DraftValidationError::EmptyDescription => Error::invalid_request(error.to_string())
            .with_details(json!({ "field": "description" })),
        DraftValidationError::MissingSession => Error::unauthorized(error.to_string()),
    }
}

/// Controller owning the cached record list and the submission draft.
pub struct RecordSyncController<S> {
    store: Arc<S>,
    records: Vec<Record>,
    draft: RecordDraft,
}

impl<S> RecordSyncController<S> {
    /// Create a controller with an empty list and draft.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            records: Vec::new(),
            draft: RecordDraft::default(),
        }
    }

    /// Cached records, in server-returned order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Draft for the next submission.
    pub fn draft(&self) -> &RecordDraft {
        &self.draft
    }

    /// Mutable draft for form editing.
    pub fn draft_mut(&mut self) -> &mut RecordDraft {
        &mut self.draft
    }
}

impl<S> RecordSyncController<S>
where
    S: RecordStore,
{
    /// Replace the cached list with the store's current first page.
    ///
    /// The server-returned order is kept as is. On failure the cache stays
    /// untouched and the error is logged and returned.
    pub async fn refresh(&mut self) -> Result<(), Error> {
        match self.store.list_records().await {
            Ok(records) => {
                debug!(count = records.len(), "record list refreshed");
                self.records = records;
                Ok(())
            }
            Err(err) => {
                let mapped = map_store_error(err);
                error!(error = %mapped, "record list fetch failed; keeping cached records");
                Err(mapped)
            }
        }
    }

    /// Validate the draft against the session and submit it as a new record.
    ///
    /// Ordering is load-bearing:
    /// 1. a validation failure stops before any remote call and changes
    ///    nothing;
    /// 2. a store failure changes nothing, so the user can retry the same
    ///    draft;
    /// 3. on success the draft clears first, then the list resyncs from the
    ///    store. A failed resync keeps the pre-create snapshot; the create
    ///    itself still succeeded and the draft stays cleared.
    ///
    /// Returns the created record with its store-assigned id and the
    /// session's identity as owner.
    pub async fn submit_draft(&mut self, session: Option<&Session>) -> Result<Record, Error> {
        let input = CreateRecordInput::try_from_draft(&self.draft, session).map_err(|err| {
            let mapped = map_draft_error(err);
            warn!(error = %mapped, "draft rejected before submission");
            mapped
        })?;

        let record = self.store.create_record(&input).await.map_err(|err| {
            let mapped = map_store_error(err);
            error!(error = %mapped, details = ?mapped.details(), "record creation failed");
            mapped
        })?;

        info!(id = %record.id(), "record created");
        self.draft.clear();
        self.resync_after_write().await;
        Ok(record)
    }

    /// Delete one record remotely, then patch it out of the cached list.
    ///
    /// The remote call is attempted whether or not the id is in the cache;
    /// on failure the cache stays untouched.
    pub async fn remove(&mut self, id: &RecordId) -> Result<(), Error> {
        let deleted = self.store.delete_record(id).await.map_err(|err| {
            let mapped = map_store_error(err);
            error!(
                error = %mapped,
                details = ?mapped.details(),
                id = %id,
                "record deletion failed"
            );
            mapped
        })?;

        info!(id = %deleted, "record deleted");
        self.local_patch_after_write(&deleted);
        Ok(())
    }

    /// Reconciliation after a create: trust the store, refetch everything.
    async fn resync_after_write(&mut self) {
        if self.refresh().await.is_err() {
            debug!("post-create refresh failed; pre-create snapshot retained");
        }
    }

    /// Reconciliation after a delete: drop the id locally, no refetch.
    fn local_patch_after_write(&mut self, id: &RecordId) {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        if self.records.len() == before {
            debug!(id = %id, "deleted record was not in the cached list");
        }
    }
}

#[cfg(test)]
#[path = "record_sync_tests.rs"]
mod tests;
