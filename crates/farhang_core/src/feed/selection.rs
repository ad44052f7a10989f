//! Article selection: saved → search → tag XOR category.
//!
//! # Invariants
//! - A non-empty search on the articles view returns immediately, both for
//!   the saved base and the full collection; tag and category are ignored.
//! - `Category::Saved` is never overridden by a tag.
//! - Tag and category filters restart from the full collection, they do not
//!   compose with earlier narrowing.
//! - Relative input order is preserved.

use crate::feed::filter::FilterState;
use crate::model::article::{Article, Category};
use crate::model::saved::SavedSet;

/// Selects the ordered article subset for the current filter state.
pub fn select_articles<'a>(
    articles: &'a [Article],
    saved: &SavedSet,
    filter: &FilterState,
) -> Vec<&'a Article> {
    let saved_only = filter.active_category == Category::Saved;
    let base: Vec<&Article> = if saved_only {
        articles
            .iter()
            .filter(|article| saved.contains(article.id))
            .collect()
    } else {
        articles.iter().collect()
    };

    if filter.search_applies() {
        let term = filter.search_term.to_lowercase();
        return base
            .into_iter()
            .filter(|article| article.matches_term(&term))
            .collect();
    }

    if saved_only {
        return base;
    }

    if let Some(tag) = filter.active_tag.as_deref() {
        return articles
            .iter()
            .filter(|article| article.has_tag(tag))
            .collect();
    }

    if filter.active_category != Category::All {
        return articles
            .iter()
            .filter(|article| article.category == filter.active_category)
            .collect();
    }

    base
}

/// Empty-feed explanation shown instead of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Search or tag produced nothing.
    NoMatches,
    /// Saved tab with no bookmarks.
    NothingSaved,
}

impl EmptyState {
    /// Headline shown to the reader.
    pub fn title(self) -> &'static str {
        match self {
            Self::NoMatches => "مقاله‌ای یافت نشد",
            Self::NothingSaved => "هنوز مقاله‌ای ذخیره نکرده‌اید",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Self::NoMatches => "لطفاً فیلتر یا عبارت جستجوی خود را تغییر دهید.",
            Self::NothingSaved => {
                "مقاله‌های مورد علاقه خود را با کلیک روی آیکون بوکمارک ذخیره کنید."
            }
        }
    }
}

/// Classifies an empty selection. Returns `None` when `selected_len > 0`
/// or when no message applies (e.g. an empty concrete category).
pub fn empty_state(selected_len: usize, filter: &FilterState) -> Option<EmptyState> {
    if selected_len > 0 {
        return None;
    }
    if !filter.search_term.is_empty() || filter.active_tag.is_some() {
        return Some(EmptyState::NoMatches);
    }
    if filter.active_category == Category::Saved {
        return Some(EmptyState::NothingSaved);
    }
    None
}
