//! Visible prefix of the selected feed.

use crate::feed::config::FeedConfig;

/// Revealed prefix of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// `visible_count < total`.
    pub has_more: bool,
    /// Length of the full selection.
    pub total: usize,
}

/// Returns the first `visible_count` items.
///
/// Never yields more than `visible_count` items nor more than `items.len()`.
pub fn paginate<T>(items: &[T], visible_count: usize) -> Page<'_, T> {
    let end = visible_count.min(items.len());
    Page {
        items: &items[..end],
        has_more: visible_count < items.len(),
        total: items.len(),
    }
}

/// Number of revealed articles. Grows by a fixed step, resets on filter
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleCount {
    value: usize,
    initial: usize,
    step: usize,
}

impl VisibleCount {
    pub fn new(config: &FeedConfig) -> Self {
        Self {
            value: config.initial_visible,
            initial: config.initial_visible,
            step: config.load_more_step,
        }
    }

    pub fn get(&self) -> usize {
        self.value
    }

    /// Returns to the initial reveal size.
    pub fn reset(&mut self) {
        self.value = self.initial;
    }

    /// Reveals one more step.
    pub fn advance(&mut self) {
        self.value = self.value.saturating_add(self.step);
    }
}

impl Default for VisibleCount {
    fn default() -> Self {
        Self::new(&FeedConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{paginate, VisibleCount};

    #[test]
    fn paginate_caps_at_visible_count_and_length() {
        let items: Vec<u32> = (1..=20).collect();

        let first = paginate(&items, 12);
        assert_eq!(first.items.len(), 12);
        assert!(first.has_more);
        assert_eq!(first.total, 20);

        let capped = paginate(&items, 28);
        assert_eq!(capped.items.len(), 20);
        assert!(!capped.has_more);
    }

    #[test]
    fn paginate_exact_length_has_no_more() {
        let items = [1, 2, 3];
        let page = paginate(&items, 3);
        assert_eq!(page.items, &[1, 2, 3]);
        assert!(!page.has_more);
    }

    #[test]
    fn paginate_empty_input_is_empty_page() {
        let items: [u8; 0] = [];
        let page = paginate(&items, 12);
        assert!(page.items.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn visible_count_advances_by_step_and_resets() {
        let mut count = VisibleCount::default();
        assert_eq!(count.get(), 12);
        count.advance();
        count.advance();
        assert_eq!(count.get(), 28);
        count.reset();
        assert_eq!(count.get(), 12);
    }
}
