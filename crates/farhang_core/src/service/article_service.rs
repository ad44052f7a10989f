//! Article publishing and bookmark use-cases.
//!
//! # Responsibility
//! - Build a published article from editor input.
//! - Flip bookmark membership and produce the reader-facing confirmation.
//!
//! # Invariants
//! - New articles are prepended; existing order is untouched.
//! - A new id is never equal to any id already in the collection.

use crate::model::article::{
    to_persian_digits, Article, ArticleId, ArticleValidationError, Language, NewArticleData,
};
use crate::model::saved::{SavedSet, ToggleOutcome};
use chrono::{DateTime, Utc};
use log::info;

/// Confirmation shown after a successful publish.
pub const PUBLISHED_MESSAGE: &str = "مقاله با موفقیت منتشر شد!";
/// Confirmation shown when a bookmark is added.
pub const SAVED_MESSAGE: &str = "مقاله ذخیره شد";
/// Confirmation shown when a bookmark is removed.
pub const UNSAVED_MESSAGE: &str = "مقاله از ذخیره شده‌ها حذف شد";

/// Validates `data` and prepends the resulting article to `articles`.
///
/// The id is the publish time in epoch milliseconds, bumped past the
/// current maximum id when needed; the date is the UTC calendar day.
///
/// # Errors
/// - Returns the validation error when editor input is incomplete.
/// - `IdSpaceExhausted` when the current maximum id is `i64::MAX`.
pub fn publish_article(
    articles: &mut Vec<Article>,
    data: NewArticleData,
    published_at: DateTime<Utc>,
) -> Result<ArticleId, ArticleValidationError> {
    data.validate()?;

    let id = next_article_id(articles, published_at)?;
    let article = Article {
        id,
        title: data.title,
        excerpt: data.excerpt,
        content: data.content,
        image_url: data.image_url,
        image_height: data.image_height,
        category: data.category,
        date: published_at.format("%Y-%m-%d").to_string(),
        views: to_persian_digits(0),
        likes: to_persian_digits(0),
        language: Language::Fa,
        author_id: data.author_id,
        video_url: None,
        tags: Vec::new(),
    };
    articles.insert(0, article);

    info!(
        "event=article_publish module=service status=ok article_id={} category={} total={}",
        id,
        data.category.as_str(),
        articles.len()
    );
    Ok(id)
}

/// Flips bookmark membership of `id` and returns the confirmation text.
pub fn toggle_saved(saved: &mut SavedSet, id: ArticleId) -> &'static str {
    match saved.toggle(id) {
        ToggleOutcome::Added => SAVED_MESSAGE,
        ToggleOutcome::Removed => UNSAVED_MESSAGE,
    }
}

fn next_article_id(
    articles: &[Article],
    published_at: DateTime<Utc>,
) -> Result<ArticleId, ArticleValidationError> {
    let candidate = published_at.timestamp_millis();
    match articles.iter().map(|article| article.id).max() {
        Some(max_id) if max_id >= candidate => max_id
            .checked_add(1)
            .ok_or(ArticleValidationError::IdSpaceExhausted),
        _ => Ok(candidate),
    }
}

#[cfg(test)]
mod tests {
    use super::{publish_article, toggle_saved, SAVED_MESSAGE, UNSAVED_MESSAGE};
    use crate::fixtures::mock_articles;
    use crate::model::article::{ArticleValidationError, Category, NewArticleData};
    use crate::model::saved::SavedSet;
    use chrono::{TimeZone, Utc};

    fn draft() -> NewArticleData {
        NewArticleData {
            title: "موسیقی نواحی".to_string(),
            excerpt: "سفری به جنوب".to_string(),
            content: "متن کامل".to_string(),
            image_url: "https://example.com/a.jpg".to_string(),
            image_height: 320,
            category: Category::Music,
            author_id: 1,
        }
    }

    #[test]
    fn publish_prepends_with_defaults() {
        let mut articles = mock_articles();
        let before = articles.len();
        let published_at = Utc.with_ymd_and_hms(2024, 8, 1, 23, 30, 0).unwrap();

        let id = publish_article(&mut articles, draft(), published_at).unwrap();

        assert_eq!(articles.len(), before + 1);
        let first = &articles[0];
        assert_eq!(first.id, id);
        assert_eq!(id, published_at.timestamp_millis());
        assert_eq!(first.date, "2024-08-01");
        assert_eq!(first.views, "۰");
        assert_eq!(first.likes, "۰");
        assert!(first.tags.is_empty());
        assert_eq!(articles[1].id, 1);
    }

    #[test]
    fn publish_id_skips_past_existing_ids() {
        let mut articles = mock_articles();
        let published_at = Utc.timestamp_millis_opt(3).unwrap();
        let id = publish_article(&mut articles, draft(), published_at).unwrap();
        assert_eq!(id, 7);
    }

    #[test]
    fn publish_fails_cleanly_when_max_id_is_taken() {
        let mut articles = mock_articles();
        articles[0].id = i64::MAX;
        let err = publish_article(&mut articles, draft(), Utc::now()).unwrap_err();
        assert_eq!(err, ArticleValidationError::IdSpaceExhausted);
        assert_eq!(articles.len(), mock_articles().len());
    }

    #[test]
    fn publish_rejects_filter_only_category() {
        let mut articles = mock_articles();
        let mut data = draft();
        data.category = Category::Saved;
        let err = publish_article(&mut articles, data, Utc::now()).unwrap_err();
        assert_eq!(
            err,
            ArticleValidationError::UnpublishableCategory(Category::Saved)
        );
        assert_eq!(articles.len(), mock_articles().len());
    }

    #[test]
    fn toggle_returns_matching_confirmation() {
        let mut saved = SavedSet::new();
        assert_eq!(toggle_saved(&mut saved, 4), SAVED_MESSAGE);
        assert_eq!(toggle_saved(&mut saved, 4), UNSAVED_MESSAGE);
        assert!(saved.is_empty());
    }
}
