//! Simulated sign-in.
//!
//! # Responsibility
//! - Provide the identity-cycling collaborator used in place of real auth.
//!
//! # Invariants
//! - The cycle is `[signed out, users...]` and wraps around.

use crate::model::user::User;

/// Source of the next signed-in identity.
pub trait IdentityProvider {
    /// Returns the identity that follows `current` (`None` = signed out).
    fn next_identity(&self, current: Option<&User>) -> Option<User>;
}

/// Cycles through a fixed list of mock users, with a signed-out slot first.
#[derive(Debug, Clone)]
pub struct MockIdentityCycle {
    users: Vec<User>,
}

impl MockIdentityCycle {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }
}

impl IdentityProvider for MockIdentityCycle {
    fn next_identity(&self, current: Option<&User>) -> Option<User> {
        // Slot 0 is signed out; users occupy 1..=len.
        let slots = self.users.len() + 1;
        let current_slot = current
            .and_then(|user| self.users.iter().position(|known| known.id == user.id))
            .map_or(0, |index| index + 1);
        let next_slot = (current_slot + 1) % slots;
        next_slot
            .checked_sub(1)
            .and_then(|index| self.users.get(index))
            .cloned()
    }
}
