use farhang_core::fixtures::mock_articles;
use farhang_core::{Article, Category, EventType, User};

#[test]
fn article_serialization_uses_stored_field_names() {
    let mut article: Article = mock_articles().remove(0);
    article.category = Category::LocalCulture;
    article.video_url = None;

    let json = serde_json::to_value(&article).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["category"], "Local Culture");
    assert_eq!(json["language"], "fa");
    assert!(json.get("imageUrl").is_some());
    assert!(json.get("imageHeight").is_some());
    assert!(json.get("authorId").is_some());
    assert!(json.get("videoUrl").is_none());

    let decoded: Article = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, article);
}

#[test]
fn event_types_use_persian_wire_labels() {
    let json = serde_json::to_value(EventType::Exhibition).unwrap();
    assert_eq!(json, "نمایشگاه");
    assert_eq!(EventType::parse("کنسرت"), Some(EventType::Concert));
}

#[test]
fn only_authors_expose_author_profile() {
    let reader = User {
        id: 1,
        name: "r".to_string(),
        is_author: false,
        author_id: Some(3),
    };
    assert_eq!(reader.author_profile_id(), None);

    let author = User {
        is_author: true,
        ..reader
    };
    assert_eq!(author.author_profile_id(), Some(3));
}
