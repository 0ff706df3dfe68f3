//! Scenario bindings for the record flow BDD tests.

use super::*;
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/record_flow.feature",
    name = "An unauthenticated start still shows the board"
)]
fn an_unauthenticated_start_still_shows_the_board(world: RecordFlowWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/record_flow.feature",
    name = "A successful creation resyncs the board from the store"
)]
fn a_successful_creation_resyncs_the_board_from_the_store(world: RecordFlowWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/record_flow.feature",
    name = "A deletion patches the board without refetching"
)]
fn a_deletion_patches_the_board_without_refetching(world: RecordFlowWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/record_flow.feature",
    name = "A rejected creation leaves the draft and the board untouched"
)]
fn a_rejected_creation_leaves_the_draft_and_the_board_untouched(world: RecordFlowWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/record_flow.feature",
    name = "A failed resync keeps the snapshot but the creation stands"
)]
fn a_failed_resync_keeps_the_snapshot_but_the_creation_stands(world: RecordFlowWorld) {
    drop(world);
}
