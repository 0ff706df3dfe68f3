//! Scenario-world methods for the record flow BDD tests.
//!
//! Givens stage intent in slots; `start_client` turns the staged intent into
//! scripted doubles and runs the startup sequence exactly as the console
//! does: resolve the session once, fetch the list once.

use std::sync::{Arc, Mutex};

use client::domain::ports::RecordStoreError;
use client::domain::{Record, RecordSyncController, SessionGate};
use tokio::runtime::Runtime;

use crate::doubles::{RecordingIdentityProvider, ScriptedRecordStore};
use crate::{RecordFlowWorld, RuntimeHandle, Services};

impl RecordFlowWorld {
    /// Deterministic record fixture owned by `ada`.
    pub(crate) fn record(id: &str, name: &str, description: &str) -> Record {
        Record::try_from_strings(id, name, description, "ada").expect("valid fixture record")
    }

    /// Wire gate and controller to the staged doubles and run the startup
    /// sequence. Listing scripts cover the initial fetch plus, when a
    /// creation is staged, the post-create resync (or its staged failure).
    pub(crate) fn start_client(&self) {
        let runtime = Runtime::new().expect("create runtime");

        let outcome = self
            .session_outcome
            .get()
            .expect("session outcome should be staged");
        let provider = Arc::new(RecordingIdentityProvider::new(outcome));

        let seeded = self.seeded.get().expect("seeded records should be staged");
        let store = Arc::new(ScriptedRecordStore::default());
        store.script_listing(Ok(seeded.clone()));
        if let Some(created) = self.accepted_creation.get() {
            store.script_creation(Ok(created.clone()));
            if self.failing_resync.get().is_some() {
                store.script_listing(Err(RecordStoreError::timeout("deadline exceeded")));
            } else {
                let mut refreshed = seeded;
                refreshed.push(created);
                store.script_listing(Ok(refreshed));
            }
        }
        if let Some(errors) = self.rejected_creation.get() {
            store.script_creation(Err(RecordStoreError::rejected(errors)));
        }

        let mut services = Services {
            gate: SessionGate::new(Arc::clone(&provider)),
            controller: RecordSyncController::new(Arc::clone(&store)),
        };
        runtime.block_on(async {
            services.gate.resolve().await;
            let _ = services.controller.refresh().await;
        });

        self.runtime.set(RuntimeHandle(Arc::new(runtime)));
        self.services.set(Arc::new(Mutex::new(services)));
        self.store.set(store);
        self.provider.set(provider);
    }

    /// Fill the draft with valid fields and submit it under the resolved
    /// session, recording the outcome.
    pub(crate) fn submit_valid_draft(&self) {
        let result = self.with_services(|runtime, services| {
            services.controller.draft_mut().set_name("Mesob");
            services
                .controller
                .draft_mut()
                .set_description("Ethiopian sharing plates");
            runtime.block_on(async {
                let Services { gate, controller } = services;
                controller.submit_draft(gate.session()).await
            })
        });
        self.last_creation.set(result);
    }

    /// Remove the first seeded record, recording the outcome. The store
    /// accepts the deletion.
    pub(crate) fn remove_first_seeded(&self) {
        let id = self
            .seeded
            .get()
            .expect("seeded records should be staged")
            .first()
            .expect("at least one seeded record")
            .id()
            .clone();
        self.store
            .get()
            .expect("store should be wired")
            .script_deletion(Ok(()));

        let result = self
            .with_services(|runtime, services| runtime.block_on(services.controller.remove(&id)));
        self.last_removal.set(result);
    }

    /// Record names currently on the board, in cached order.
    pub(crate) fn board_names(&self) -> Vec<String> {
        self.with_services(|_runtime, services| {
            services
                .controller
                .records()
                .iter()
                .map(|record| record.name().as_ref().to_owned())
                .collect()
        })
    }

    /// Current draft fields as owned strings.
    pub(crate) fn draft_fields(&self) -> (String, String) {
        self.with_services(|_runtime, services| {
            let draft = services.controller.draft();
            (draft.name().to_owned(), draft.description().to_owned())
        })
    }

    /// Whether the gate currently holds a session.
    pub(crate) fn is_authenticated(&self) -> bool {
        self.with_services(|_runtime, services| services.gate.is_authenticated())
    }

    fn with_services<T>(&self, operation: impl FnOnce(&Runtime, &mut Services) -> T) -> T {
        let runtime = self.runtime.get().expect("runtime should be set");
        let services = self.services.get().expect("services should be wired");
        let mut guard = services.lock().expect("services mutex should be unpoisoned");
        operation(&runtime.0, &mut guard)
    }
}
