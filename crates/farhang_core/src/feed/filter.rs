//! Filter inputs for the article feed.

use crate::model::article::Category;
use serde::{Deserialize, Serialize};

/// Top-level page the reader is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Articles,
    Events,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Articles => "articles",
            Self::Events => "events",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "articles" => Some(Self::Articles),
            "events" => Some(Self::Events),
            _ => None,
        }
    }
}

/// Composite filter state consumed by [`select_articles`].
///
/// `active_tag` and a concrete category are not meant to be combined; when
/// both are present the tag wins, except over `Category::Saved`.
///
/// [`select_articles`]: crate::feed::selection::select_articles
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub active_category: Category,
    pub active_tag: Option<String>,
    pub search_term: String,
    pub current_view: View,
}

impl FilterState {
    /// Returns whether the inputs that drive pagination differ from `other`.
    ///
    /// `current_view` is not part of this key.
    pub fn pagination_key_differs(&self, other: &FilterState) -> bool {
        self.active_category != other.active_category
            || self.search_term != other.search_term
            || self.active_tag != other.active_tag
    }

    /// Whether a free-text search currently narrows the article feed.
    pub fn search_applies(&self) -> bool {
        !self.search_term.is_empty() && self.current_view == View::Articles
    }
}

#[cfg(test)]
mod tests {
    use super::{FilterState, View};
    use crate::model::article::Category;

    #[test]
    fn view_change_is_not_a_pagination_change() {
        let before = FilterState::default();
        let after = FilterState {
            current_view: View::Events,
            ..FilterState::default()
        };
        assert!(!before.pagination_key_differs(&after));
    }

    #[test]
    fn category_tag_and_search_are_pagination_changes() {
        let base = FilterState::default();
        let category = FilterState {
            active_category: Category::Music,
            ..FilterState::default()
        };
        let tag = FilterState {
            active_tag: Some("jazz".to_string()),
            ..FilterState::default()
        };
        let search = FilterState {
            search_term: "x".to_string(),
            ..FilterState::default()
        };
        assert!(base.pagination_key_differs(&category));
        assert!(base.pagination_key_differs(&tag));
        assert!(base.pagination_key_differs(&search));
    }

    #[test]
    fn search_only_applies_on_articles_view() {
        let mut state = FilterState {
            search_term: "شعر".to_string(),
            ..FilterState::default()
        };
        assert!(state.search_applies());
        state.current_view = View::Events;
        assert!(!state.search_applies());
    }
}
