//! Test doubles for the driven ports used by the record flow suite.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use client::domain::ports::{
    IdentityProvider, IdentityProviderError, RecordStore, RecordStoreError,
};
use client::domain::{CreateRecordInput, Record, RecordId, Session};

/// Identity double answering every resolution with one configured outcome.
pub(crate) struct RecordingIdentityProvider {
    outcome: Result<Session, IdentityProviderError>,
    resolutions: AtomicUsize,
    sign_outs: AtomicUsize,
}

impl RecordingIdentityProvider {
    pub(crate) fn new(outcome: Result<Session, IdentityProviderError>) -> Self {
        Self {
            outcome,
            resolutions: AtomicUsize::new(0),
            sign_outs: AtomicUsize::new(0),
        }
    }

    pub(crate) fn resolution_count(&self) -> usize {
        self.resolutions.load(Ordering::SeqCst)
    }

    pub(crate) fn sign_out_count(&self) -> usize {
        self.sign_outs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for RecordingIdentityProvider {
    async fn current_session(&self) -> Result<Session, IdentityProviderError> {
        self.resolutions.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }

    async fn sign_out(&self) -> Result<(), IdentityProviderError> {
        self.sign_outs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Record-store double replaying scripted outcomes and recording calls.
#[derive(Default)]
pub(crate) struct ScriptedRecordStore {
    listings: Mutex<VecDeque<Result<Vec<Record>, RecordStoreError>>>,
    creations: Mutex<VecDeque<Result<Record, RecordStoreError>>>,
    deletions: Mutex<VecDeque<Result<(), RecordStoreError>>>,
    list_calls: AtomicUsize,
    created_inputs: Mutex<Vec<CreateRecordInput>>,
    deleted_ids: Mutex<Vec<RecordId>>,
}

impl ScriptedRecordStore {
    pub(crate) fn script_listing(&self, outcome: Result<Vec<Record>, RecordStoreError>) {
        self.listings
            .lock()
            .expect("listing script mutex")
            .push_back(outcome);
    }

    pub(crate) fn script_creation(&self, outcome: Result<Record, RecordStoreError>) {
        self.creations
            .lock()
            .expect("creation script mutex")
            .push_back(outcome);
    }

    pub(crate) fn script_deletion(&self, outcome: Result<(), RecordStoreError>) {
        self.deletions
            .lock()
            .expect("deletion script mutex")
            .push_back(outcome);
    }

    pub(crate) fn list_call_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn created_inputs(&self) -> Vec<CreateRecordInput> {
        self.created_inputs
            .lock()
            .expect("created inputs mutex")
            .clone()
    }

    pub(crate) fn deleted_ids(&self) -> Vec<RecordId> {
        self.deleted_ids.lock().expect("deleted ids mutex").clone()
    }
}

#[async_trait]
impl RecordStore for ScriptedRecordStore {
    async fn list_records(&self) -> Result<Vec<Record>, RecordStoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.listings
            .lock()
            .expect("listing script mutex")
            .pop_front()
            .unwrap_or_else(|| Err(RecordStoreError::decode("listing script exhausted unexpectedly")))
    }

    async fn create_record(&self, input: &CreateRecordInput) -> Result<Record, RecordStoreError> {
        self.created_inputs
            .lock()
            .expect("created inputs mutex")
            .push(input.clone());
        self.creations
            .lock()
            .expect("creation script mutex")
            .pop_front()
            .unwrap_or_else(|| {
                Err(RecordStoreError::decode("creation script exhausted unexpectedly"))
            })
    }

    async fn delete_record(&self, id: &RecordId) -> Result<RecordId, RecordStoreError> {
        self.deleted_ids
            .lock()
            .expect("deleted ids mutex")
            .push(id.clone());
        match self
            .deletions
            .lock()
            .expect("deletion script mutex")
            .pop_front()
        {
            Some(Ok(())) => Ok(id.clone()),
            Some(Err(err)) => Err(err),
            None => Err(RecordStoreError::decode("deletion script exhausted unexpectedly")),
        }
    }
}
