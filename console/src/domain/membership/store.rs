//! Authoritative current-member collection of the entity being edited.

use std::collections::HashSet;

use tracing::warn;

use crate::domain::{Member, MemberId};

/// Ordered set of current members keyed by user id.
///
/// Insertion order is kept for display only. No user id ever appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipStore {
    members: Vec<Member>,
}

impl MembershipStore {
    /// Create an empty store, as used by the creation flow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current members wholesale.
    ///
    /// A second call fully replaces the first; nothing is merged. Repeated
    /// user ids in `members` collapse onto their first occurrence.
    ///
    /// # Examples
    /// ```
    /// use schedule_console::domain::Member;
    /// use schedule_console::domain::membership::MembershipStore;
    ///
    /// let mut store = MembershipStore::new();
    /// store.seed(vec![
    ///     Member::from_strings("u-1", "Kim", "kim@example.com"),
    ///     Member::from_strings("u-1", "Kim", "kim@example.com"),
    /// ]);
    /// assert_eq!(store.members().len(), 1);
    /// ```
    pub fn seed(&mut self, members: Vec<Member>) {
        let received = members.len();
        let mut seen = HashSet::with_capacity(received);
        self.members = members
            .into_iter()
            .filter(|member| seen.insert(member.user_id().clone()))
            .collect();

        let collapsed = received - self.members.len();
        if collapsed > 0 {
            warn!(collapsed, "collapsed duplicate user ids in seeded membership");
        }
    }

    /// Current members, verbatim, for the submit request body.
    pub fn submit(&self) -> Vec<Member> {
        self.members.clone()
    }

    /// Current members in display order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Whether `user_id` is a current member.
    pub fn contains(&self, user_id: &MemberId) -> bool {
        self.members.iter().any(|member| member.user_id() == user_id)
    }

    /// Append `member` unless its user id is already present.
    pub(super) fn push(&mut self, member: Member) -> bool {
        if self.contains(member.user_id()) {
            return false;
        }
        self.members.push(member);
        true
    }

    /// Remove and return the member with `user_id`, keeping the order of
    /// the others.
    pub(super) fn take(&mut self, user_id: &MemberId) -> Option<Member> {
        let position = self
            .members
            .iter()
            .position(|member| member.user_id() == user_id)?;
        Some(self.members.remove(position))
    }
}
