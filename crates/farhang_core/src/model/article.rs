//! Article domain model.
//!
//! # Responsibility
//! - Define the canonical article record shared by feed, detail and editor.
//! - Keep the JSON wire shape compatible with the persisted collection.
//!
//! # Invariants
//! - `id` is unique inside one collection and never reused.
//! - An article is immutable once published; edits replace it wholesale.
//! - `Category::All` and `Category::Saved` are filter values, never stored
//!   on a published article.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable numeric identifier for an article.
pub type ArticleId = i64;

/// Feed category. `All` and `Saved` only exist as filter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    All,
    Saved,
    Music,
    Literature,
    Theater,
    Photography,
    #[serde(rename = "Local Culture")]
    LocalCulture,
}

impl Category {
    /// Every category in tab order.
    pub const ALL: [Category; 7] = [
        Category::All,
        Category::Saved,
        Category::Music,
        Category::Literature,
        Category::Theater,
        Category::Photography,
        Category::LocalCulture,
    ];

    /// Stable string value used in storage and FFI payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Saved => "Saved",
            Self::Music => "Music",
            Self::Literature => "Literature",
            Self::Theater => "Theater",
            Self::Photography => "Photography",
            Self::LocalCulture => "Local Culture",
        }
    }

    /// Parses the stable string value. Returns `None` for unknown input.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value.trim())
    }

    /// Whether an article may be published under this category.
    pub fn is_publishable(self) -> bool {
        !matches!(self, Self::All | Self::Saved)
    }
}

/// Content language tag. The magazine only publishes Persian content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fa,
}

/// Canonical article record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub excerpt: String,
    /// Full body text.
    pub content: String,
    pub image_url: String,
    /// Layout hint for masonry grids, in logical pixels.
    pub image_height: u32,
    pub category: Category,
    /// Publication date, `YYYY-MM-DD`.
    pub date: String,
    /// Display counter, already localized (e.g. `"۱.۲ هزار"`).
    pub views: String,
    /// Display counter, already localized.
    pub likes: String,
    #[serde(default)]
    pub language: Language,
    pub author_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Free-form tags. Older stored collections may omit the field.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Article {
    /// Returns whether `tag` is one of this article's tags (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|value| value == tag)
    }

    /// Case-insensitive substring match against title or excerpt.
    ///
    /// `lowercased_term` must already be lowercased by the caller.
    pub fn matches_term(&self, lowercased_term: &str) -> bool {
        self.title.to_lowercase().contains(lowercased_term)
            || self.excerpt.to_lowercase().contains(lowercased_term)
    }
}

/// Editor payload for a new article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticleData {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
    pub image_height: u32,
    pub category: Category,
    pub author_id: i64,
}

impl NewArticleData {
    /// Validates editor input before it becomes a published article.
    ///
    /// # Errors
    /// - `EmptyTitle` / `EmptyContent` for blank required text.
    /// - `UnpublishableCategory` for `All` or `Saved`.
    /// - `ZeroImageHeight` when the layout hint is missing.
    pub fn validate(&self) -> Result<(), ArticleValidationError> {
        if self.title.trim().is_empty() {
            return Err(ArticleValidationError::EmptyTitle);
        }
        if self.content.trim().is_empty() {
            return Err(ArticleValidationError::EmptyContent);
        }
        if !self.category.is_publishable() {
            return Err(ArticleValidationError::UnpublishableCategory(self.category));
        }
        if self.image_height == 0 {
            return Err(ArticleValidationError::ZeroImageHeight);
        }
        Ok(())
    }
}

/// Reasons a publish is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleValidationError {
    EmptyTitle,
    EmptyContent,
    UnpublishableCategory(Category),
    ZeroImageHeight,
    /// The collection already holds the largest representable id.
    IdSpaceExhausted,
}

impl Display for ArticleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "article title must not be empty"),
            Self::EmptyContent => write!(f, "article content must not be empty"),
            Self::UnpublishableCategory(category) => write!(
                f,
                "category `{}` cannot be assigned to an article",
                category.as_str()
            ),
            Self::ZeroImageHeight => write!(f, "article image_height must be greater than 0"),
            Self::IdSpaceExhausted => write!(f, "no article id left after the current maximum"),
        }
    }
}

impl Error for ArticleValidationError {}

/// Renders a non-negative counter with Persian digits.
pub fn to_persian_digits(value: u64) -> String {
    value
        .to_string()
        .chars()
        .map(|ch| match ch.to_digit(10) {
            Some(digit) => char::from_u32(0x06F0 + digit).unwrap_or(ch),
            None => ch,
        })
        .collect()
}
