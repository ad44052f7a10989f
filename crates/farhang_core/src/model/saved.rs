//! Reader bookmarks.
//!
//! # Invariants
//! - Ids are unique; order carries no meaning.
//! - Membership only changes through [`SavedSet::toggle`].

use crate::model::article::ArticleId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Result of one bookmark toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Set of bookmarked article ids. Serialized as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedSet {
    ids: BTreeSet<ArticleId>,
}

impl SavedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` when absent, removes it when present.
    pub fn toggle(&mut self, id: ArticleId) -> ToggleOutcome {
        if self.ids.remove(&id) {
            ToggleOutcome::Removed
        } else {
            self.ids.insert(id);
            ToggleOutcome::Added
        }
    }

    pub fn contains(&self, id: ArticleId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = ArticleId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<ArticleId> for SavedSet {
    fn from_iter<T: IntoIterator<Item = ArticleId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SavedSet, ToggleOutcome};

    #[test]
    fn toggle_twice_restores_membership() {
        let mut saved: SavedSet = [3, 7].into_iter().collect();
        let original = saved.clone();

        assert_eq!(saved.toggle(5), ToggleOutcome::Added);
        assert_eq!(saved.toggle(5), ToggleOutcome::Removed);
        assert_eq!(saved, original);

        assert_eq!(saved.toggle(3), ToggleOutcome::Removed);
        assert_eq!(saved.toggle(3), ToggleOutcome::Added);
        assert_eq!(saved, original);
    }

    #[test]
    fn serializes_as_plain_array() {
        let saved: SavedSet = [7, 3].into_iter().collect();
        let json = serde_json::to_string(&saved).unwrap();
        assert_eq!(json, "[3,7]");

        let decoded: SavedSet = serde_json::from_str("[1,1,2]").unwrap();
        assert_eq!(decoded.len(), 2);
    }
}
