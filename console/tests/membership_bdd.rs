//! Behaviour tests for membership reconciliation on the board screens.
//!
//! These scenarios drive the reconciliation engine through the creation and
//! edit flows, including loads that finish in either order and universes that
//! change between visits.

use std::cell::RefCell;
use std::collections::HashSet;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use schedule_console::domain::membership::{MembershipError, ReconciliationEngine};
use schedule_console::domain::{Member, MemberId};

struct MembershipWorld {
    engine: RefCell<ReconciliationEngine>,
    last_rejection: RefCell<Option<MembershipError>>,
}

impl MembershipWorld {
    fn new() -> Self {
        Self {
            engine: RefCell::new(ReconciliationEngine::new()),
            last_rejection: RefCell::new(None),
        }
    }

    fn record(&self, result: Result<(), MembershipError>) {
        *self.last_rejection.borrow_mut() = result.err();
    }

    fn with_rejection<F>(&self, f: F)
    where
        F: FnOnce(&MembershipError),
    {
        let rejection = self.last_rejection.borrow();
        let error = rejection.as_ref().expect("expected the change to be rejected");
        f(error);
    }
}

fn parse_members(list: &str) -> Vec<Member> {
    parse_ids(list)
        .into_iter()
        .map(|id| Member::from_strings(&id, format!("user {id}"), format!("{id}@example.com")))
        .collect()
}

fn parse_ids(list: &str) -> Vec<String> {
    if list.trim() == "none" {
        return Vec::new();
    }
    list.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .collect()
}

fn ids_of(members: &[Member]) -> Vec<String> {
    members
        .iter()
        .map(|member| member.user_id().to_string())
        .collect()
}

fn member_id(raw: &str) -> MemberId {
    MemberId::new(raw).expect("step ids should be valid")
}

#[fixture]
fn world() -> MembershipWorld {
    MembershipWorld::new()
}

#[given("a new board")]
fn a_new_board(world: &MembershipWorld) {
    *world.engine.borrow_mut() = ReconciliationEngine::for_new_entity();
}

#[given("an existing board with members {ids}")]
fn an_existing_board_with_members(world: &MembershipWorld, ids: String) {
    let mut engine = ReconciliationEngine::new();
    engine.seed_members(parse_members(&ids));
    *world.engine.borrow_mut() = engine;
}

#[given("an existing board whose members are not loaded")]
fn an_existing_board_whose_members_are_not_loaded(world: &MembershipWorld) {
    *world.engine.borrow_mut() = ReconciliationEngine::new();
}

#[given("the universe holds {ids}")]
fn the_universe_holds(world: &MembershipWorld, ids: String) {
    world.engine.borrow_mut().load_universe(parse_members(&ids));
}

#[when("the universe refreshes to {ids}")]
fn the_universe_refreshes_to(world: &MembershipWorld, ids: String) {
    world.engine.borrow_mut().load_universe(parse_members(&ids));
}

#[when("the board members load as {ids}")]
fn the_board_members_load_as(world: &MembershipWorld, ids: String) {
    world.engine.borrow_mut().seed_members(parse_members(&ids));
}

#[when("member {id} is added")]
fn member_is_added(world: &MembershipWorld, id: String) {
    let result = world.engine.borrow_mut().add(&member_id(&id));
    world.record(result);
}

#[when("member {id} is removed")]
fn member_is_removed(world: &MembershipWorld, id: String) {
    let result = world.engine.borrow_mut().remove(&member_id(&id));
    world.record(result);
}

#[then("the available members are {ids}")]
fn the_available_members_are(world: &MembershipWorld, ids: String) {
    assert_eq!(ids_of(world.engine.borrow().available()), parse_ids(&ids));
}

#[then("the current members are {ids}")]
fn the_current_members_are(world: &MembershipWorld, ids: String) {
    assert_eq!(ids_of(world.engine.borrow().current()), parse_ids(&ids));
}

#[then("the lists partition the universe")]
fn the_lists_partition_the_universe(world: &MembershipWorld) {
    let engine = world.engine.borrow();
    let available: HashSet<String> = ids_of(engine.available()).into_iter().collect();
    let current: HashSet<String> = ids_of(engine.current()).into_iter().collect();
    let universe: HashSet<String> = ids_of(engine.universe()).into_iter().collect();

    assert!(available.is_disjoint(&current));
    let covered: HashSet<String> = available.union(&current).cloned().collect();
    assert!(universe.is_subset(&covered));
    assert!(available.is_subset(&universe));
}

#[then("the change is rejected because the user is already a member")]
fn rejected_as_already_a_member(world: &MembershipWorld) {
    world.with_rejection(|error| {
        assert!(matches!(error, MembershipError::AlreadyMember { .. }));
    });
}

#[then("the change is rejected because membership is still loading")]
fn rejected_while_loading(world: &MembershipWorld) {
    world.with_rejection(|error| {
        assert!(matches!(error, MembershipError::NotReady));
    });
}

#[scenario(
    path = "tests/features/membership_reconciliation.feature",
    name = "Creating a board moves members between the lists"
)]
fn creating_a_board_moves_members_between_the_lists(world: MembershipWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/membership_reconciliation.feature",
    name = "Editing a board derives the available members"
)]
fn editing_a_board_derives_the_available_members(world: MembershipWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/membership_reconciliation.feature",
    name = "Loading the universe before the board members"
)]
fn loading_the_universe_before_the_board_members(world: MembershipWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/membership_reconciliation.feature",
    name = "A refreshed universe keeps members that left the pool"
)]
fn a_refreshed_universe_keeps_members_that_left_the_pool(world: MembershipWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/membership_reconciliation.feature",
    name = "Adding a current member again is rejected"
)]
fn adding_a_current_member_again_is_rejected(world: MembershipWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/membership_reconciliation.feature",
    name = "Changes before the members load are rejected"
)]
fn changes_before_the_members_load_are_rejected(world: MembershipWorld) {
    drop(world);
}
