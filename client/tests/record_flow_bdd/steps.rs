//! Step definitions for the record flow BDD tests.

use super::*;
use client::domain::ErrorCode;
use rstest_bdd_macros::{given, then, when};
use serde_json::json;

#[given("an identity service with no signed-in user")]
fn an_identity_service_with_no_signed_in_user(world: &RecordFlowWorld) {
    world
        .session_outcome
        .set(Err(IdentityProviderError::unauthenticated()));
}

#[given("an identity service signed in as ada")]
fn an_identity_service_signed_in_as_ada(world: &RecordFlowWorld) {
    world.session_outcome.set(Ok(Session::try_from_parts(
        "ada",
        Some("ada@example.test"),
    )
    .expect("valid session fixture")));
}

#[given("a record store seeded with one record")]
fn a_record_store_seeded_with_one_record(world: &RecordFlowWorld) {
    world.seeded.set(vec![RecordFlowWorld::record(
        "r1",
        "Aroma",
        "Levantine street food",
    )]);
}

#[given("a record store seeded with two records")]
fn a_record_store_seeded_with_two_records(world: &RecordFlowWorld) {
    world.seeded.set(vec![
        RecordFlowWorld::record("r1", "Aroma", "Levantine street food"),
        RecordFlowWorld::record("r2", "Zjawa", "Pierogi and stews"),
    ]);
}

#[given("the store will accept the next creation")]
fn the_store_will_accept_the_next_creation(world: &RecordFlowWorld) {
    world.accepted_creation.set(RecordFlowWorld::record(
        "server-9",
        "Mesob",
        "Ethiopian sharing plates",
    ));
}

#[given("the store will reject the next creation")]
fn the_store_will_reject_the_next_creation(world: &RecordFlowWorld) {
    world.rejected_creation.set(json!([
        {
            "errorType": "Unauthorized",
            "message": "Not Authorized to access createRestaurant"
        }
    ]));
}

#[given("the next listing will fail")]
fn the_next_listing_will_fail(world: &RecordFlowWorld) {
    world.failing_resync.set(true);
}

#[when("the client starts")]
fn the_client_starts(world: &RecordFlowWorld) {
    world.start_client();
}

#[when("the user submits a valid draft")]
fn the_user_submits_a_valid_draft(world: &RecordFlowWorld) {
    world.submit_valid_draft();
}

#[when("the user removes the first seeded record")]
fn the_user_removes_the_first_seeded_record(world: &RecordFlowWorld) {
    world.remove_first_seeded();
}

#[then("the board is signed out")]
fn the_board_is_signed_out(world: &RecordFlowWorld) {
    assert!(!world.is_authenticated());
    let provider = world.provider.get().expect("provider should be wired");
    assert_eq!(
        provider.resolution_count(),
        1,
        "the session resolves exactly once at startup"
    );
}

#[then("the board lists the seeded record")]
fn the_board_lists_the_seeded_record(world: &RecordFlowWorld) {
    assert_eq!(world.board_names(), vec!["Aroma".to_owned()]);
}

#[then("the creation returns the store-assigned record stamped with the session owner")]
fn the_creation_returns_the_store_assigned_record_stamped_with_the_session_owner(
    world: &RecordFlowWorld,
) {
    let result = world
        .last_creation
        .get()
        .expect("creation result should be recorded");
    let created = result.as_ref().expect("creation should succeed");
    assert_eq!(created.id().as_ref(), "server-9");
    assert_eq!(created.owner().as_ref(), "ada");

    let store = world.store.get().expect("store should be wired");
    let inputs = store.created_inputs();
    assert_eq!(inputs.len(), 1);
    assert_eq!(inputs[0].owner().as_ref(), "ada");
}

#[then("the draft is cleared")]
fn the_draft_is_cleared(world: &RecordFlowWorld) {
    let (name, description) = world.draft_fields();
    assert_eq!(name, "");
    assert_eq!(description, "");
}

#[then("the board shows the refreshed listing including the new record")]
fn the_board_shows_the_refreshed_listing_including_the_new_record(world: &RecordFlowWorld) {
    assert_eq!(
        world.board_names(),
        vec!["Aroma".to_owned(), "Mesob".to_owned()]
    );
}

#[then("the store listing was fetched twice")]
fn the_store_listing_was_fetched_twice(world: &RecordFlowWorld) {
    let store = world.store.get().expect("store should be wired");
    assert_eq!(store.list_call_count(), 2);
}

#[then("the board lists only the remaining record")]
fn the_board_lists_only_the_remaining_record(world: &RecordFlowWorld) {
    let removal = world
        .last_removal
        .get()
        .expect("removal result should be recorded");
    removal.expect("removal should succeed");

    assert_eq!(world.board_names(), vec!["Zjawa".to_owned()]);
    let store = world.store.get().expect("store should be wired");
    let deleted = store.deleted_ids();
    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0].as_ref(), "r1");
}

#[then("the store listing was fetched only once")]
fn the_store_listing_was_fetched_only_once(world: &RecordFlowWorld) {
    let store = world.store.get().expect("store should be wired");
    assert_eq!(store.list_call_count(), 1, "a deletion must not refetch");
}

#[then("the creation fails as a transport error carrying the store's detail")]
fn the_creation_fails_as_a_transport_error_carrying_the_stores_detail(world: &RecordFlowWorld) {
    let result = world
        .last_creation
        .get()
        .expect("creation result should be recorded");
    let error = result.as_ref().expect_err("creation should fail");
    assert_eq!(error.code(), ErrorCode::Transport);

    let expected = world
        .rejected_creation
        .get()
        .expect("rejection payload should be staged");
    assert_eq!(error.details(), Some(&expected));
}

#[then("the draft still holds the submitted fields")]
fn the_draft_still_holds_the_submitted_fields(world: &RecordFlowWorld) {
    let (name, description) = world.draft_fields();
    assert_eq!(name, "Mesob");
    assert_eq!(description, "Ethiopian sharing plates");
}
