//! Reconciliation of current and available members.

use std::collections::HashSet;

use crate::domain::{Member, MemberId};

use super::MembershipStore;

/// Lifecycle of a [`ReconciliationEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// The universe, the current members, or both have not loaded yet.
    Uninitialized,
    /// Both inputs are present and the available members are derived.
    Ready,
}

/// Rejected membership transitions.
///
/// A rejected call leaves both collections exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MembershipError {
    /// Add or remove was attempted before both inputs loaded.
    #[error("membership is still loading")]
    NotReady,
    /// The user is already a current member.
    #[error("user {user_id} is already a current member")]
    AlreadyMember {
        /// Offending user id.
        user_id: MemberId,
    },
    /// The user is not part of the available members.
    #[error("user {user_id} is not available for assignment")]
    NotAvailable {
        /// Offending user id.
        user_id: MemberId,
    },
    /// The user is not a current member.
    #[error("user {user_id} is not a current member")]
    NotAMember {
        /// Offending user id.
        user_id: MemberId,
    },
}

/// Keeps `available = universe \ current` across loads and mutations.
///
/// The available members are a memo of that difference. Loading either input
/// recomputes it from scratch; [`add`](Self::add) and
/// [`remove`](Self::remove) patch it in place and always agree with
/// [`rederive`](Self::rederive) on the set of user ids.
///
/// # Examples
/// ```
/// use schedule_console::domain::{Member, MemberId};
/// use schedule_console::domain::membership::ReconciliationEngine;
///
/// let mut engine = ReconciliationEngine::for_new_entity();
/// engine.load_universe(vec![
///     Member::from_strings("1", "A", "a@example.com"),
///     Member::from_strings("2", "B", "b@example.com"),
/// ]);
/// engine.add(&MemberId::new("2")?)?;
/// assert_eq!(engine.current().len(), 1);
/// assert_eq!(engine.available().len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReconciliationEngine {
    universe: Option<Vec<Member>>,
    store: Option<MembershipStore>,
    available: Vec<Member>,
}

impl ReconciliationEngine {
    /// Engine for the edit flow: both inputs still have to load.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine for the creation flow: the current members start empty.
    pub fn for_new_entity() -> Self {
        Self {
            store: Some(MembershipStore::new()),
            ..Self::default()
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        if self.universe.is_some() && self.store.is_some() {
            EngineState::Ready
        } else {
            EngineState::Uninitialized
        }
    }

    /// Whether the current members are known, either seeded by the server
    /// or started empty by the creation flow.
    pub fn members_loaded(&self) -> bool {
        self.store.is_some()
    }

    /// Install a freshly loaded universe.
    ///
    /// Current members are kept even when they are missing from the new
    /// universe; they simply never become available again.
    pub fn load_universe(&mut self, universe: Vec<Member>) {
        self.universe = Some(universe);
        self.refresh_available();
    }

    /// Replace the current members with a server-supplied list.
    pub fn seed_members(&mut self, members: Vec<Member>) {
        self.store.get_or_insert_with(MembershipStore::new).seed(members);
        self.refresh_available();
    }

    /// Move `user_id` from the available members to the current members.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipError`] when the engine is not ready, the user is
    /// already a member, or the user is not available.
    pub fn add(&mut self, user_id: &MemberId) -> Result<(), MembershipError> {
        if self.state() != EngineState::Ready {
            return Err(MembershipError::NotReady);
        }
        let Some(store) = self.store.as_mut() else {
            return Err(MembershipError::NotReady);
        };
        if store.contains(user_id) {
            return Err(MembershipError::AlreadyMember {
                user_id: user_id.clone(),
            });
        }
        let Some(position) = self
            .available
            .iter()
            .position(|member| member.user_id() == user_id)
        else {
            return Err(MembershipError::NotAvailable {
                user_id: user_id.clone(),
            });
        };

        let member = self.available.remove(position);
        store.push(member);
        self.debug_check_partition();
        Ok(())
    }

    /// Move `user_id` from the current members back to the available ones.
    ///
    /// The record re-inserted into the available members is the one from
    /// the most recently loaded universe, so a refresh is never undone by an
    /// older snapshot. A member missing from that universe is dropped from
    /// the current members without becoming available.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipError`] when the engine is not ready or the user
    /// is not a current member.
    pub fn remove(&mut self, user_id: &MemberId) -> Result<(), MembershipError> {
        if self.state() != EngineState::Ready {
            return Err(MembershipError::NotReady);
        }
        let Some(store) = self.store.as_mut() else {
            return Err(MembershipError::NotReady);
        };
        if store.take(user_id).is_none() {
            return Err(MembershipError::NotAMember {
                user_id: user_id.clone(),
            });
        }

        let freshest = self
            .universe
            .as_deref()
            .and_then(|universe| universe.iter().find(|member| member.user_id() == user_id));
        if let Some(member) = freshest {
            self.available.push(member.clone());
        }
        self.debug_check_partition();
        Ok(())
    }

    /// Members that can still be added. Empty until the engine is ready.
    pub fn available(&self) -> &[Member] {
        &self.available
    }

    /// Current members in display order.
    pub fn current(&self) -> &[Member] {
        self.store
            .as_ref()
            .map(MembershipStore::members)
            .unwrap_or_default()
    }

    /// Most recently loaded universe.
    pub fn universe(&self) -> &[Member] {
        self.universe.as_deref().unwrap_or_default()
    }

    /// Whether `user_id` is a current member.
    pub fn is_member(&self, user_id: &MemberId) -> bool {
        self.store
            .as_ref()
            .is_some_and(|store| store.contains(user_id))
    }

    /// Current members, verbatim, for the submit request body.
    pub fn submit(&self) -> Vec<Member> {
        self.store
            .as_ref()
            .map(MembershipStore::submit)
            .unwrap_or_default()
    }

    /// Compute `universe \ current` from scratch.
    ///
    /// Universe entries repeating an earlier user id are skipped. Returns an
    /// empty list until the engine is ready.
    pub fn rederive(&self) -> Vec<Member> {
        let (Some(universe), Some(store)) = (self.universe.as_deref(), self.store.as_ref()) else {
            return Vec::new();
        };

        let mut seen: HashSet<&MemberId> = store
            .members()
            .iter()
            .map(Member::user_id)
            .collect();
        universe
            .iter()
            .filter(|member| seen.insert(member.user_id()))
            .cloned()
            .collect()
    }

    fn refresh_available(&mut self) {
        self.available = self.rederive();
    }

    fn debug_check_partition(&self) {
        if cfg!(debug_assertions) {
            let patched: HashSet<&MemberId> = self.available.iter().map(Member::user_id).collect();
            let derived = self.rederive();
            let derived: HashSet<&MemberId> = derived.iter().map(Member::user_id).collect();
            debug_assert_eq!(patched, derived, "available members drifted from universe \\ current");
        }
    }
}
