use chrono::{TimeZone, Utc};
use farhang_core::fixtures::{mock_articles, mock_users};
use farhang_core::store::persisted::{save_articles, ARTICLES_KEY, SAVED_ARTICLES_KEY};
use farhang_core::{
    Article, AuthNotice, Category, EditorAccess, EmptyState, EventType, FeedSession, KvStore,
    MemoryKvStore, MockIdentityCycle, NewArticleData, ObserveOutcome, TriggerOutcome, View,
};
use std::time::{Duration, Instant};

const DELAY: Duration = Duration::from_millis(300);

type Session = FeedSession<MemoryKvStore, MockIdentityCycle>;

fn numbered(count: i64) -> Vec<Article> {
    let template = mock_articles().remove(0);
    (1..=count)
        .map(|id| Article {
            id,
            title: format!("Title {id}"),
            excerpt: format!("Excerpt {id}"),
            tags: if id % 5 == 0 {
                vec!["jazz".to_string()]
            } else {
                Vec::new()
            },
            ..template.clone()
        })
        .collect()
}

fn session_with(articles: &[Article]) -> Session {
    let mut store = MemoryKvStore::new();
    assert!(save_articles(&mut store, articles));
    FeedSession::open(store, MockIdentityCycle::new(mock_users()))
}

fn draft() -> NewArticleData {
    NewArticleData {
        title: "تازه".to_string(),
        excerpt: "خلاصه".to_string(),
        content: "متن".to_string(),
        image_url: "img.jpg".to_string(),
        image_height: 300,
        category: Category::Theater,
        author_id: 1,
    }
}

#[test]
fn open_falls_back_to_fixtures_and_persists_them() {
    let session = FeedSession::open(MemoryKvStore::new(), MockIdentityCycle::new(mock_users()));
    assert_eq!(session.articles(), mock_articles().as_slice());
    assert!(session.store().get(ARTICLES_KEY).unwrap().is_some());
    assert_eq!(
        session.store().get(SAVED_ARTICLES_KEY).unwrap().as_deref(),
        Some("[]")
    );
}

#[test]
fn twenty_articles_reveal_twelve_then_cap_at_twenty() {
    let mut session = session_with(&numbered(20));
    let start = Instant::now();

    let page = session.page();
    assert_eq!(page.items.len(), 12);
    assert!(page.has_more);

    assert!(matches!(
        session.load_more(start),
        TriggerOutcome::Scheduled(_)
    ));
    assert!(!session.tick(start + Duration::from_millis(100)));
    assert!(session.tick(start + DELAY));

    let page = session.page();
    assert_eq!(page.items.len(), 20);
    assert!(!page.has_more);
    assert_eq!(page.total, 20);
}

#[test]
fn rapid_load_more_triggers_reveal_once() {
    let mut session = session_with(&numbered(40));
    let start = Instant::now();

    session.load_more(start);
    assert_eq!(
        session.load_more(start + Duration::from_millis(50)),
        TriggerOutcome::Coalesced
    );
    assert!(session.tick(start + DELAY));
    assert!(!session.tick(start + DELAY * 2));
    assert_eq!(session.visible_count(), 20);
}

#[test]
fn filter_changes_reset_visible_count_and_cancel_pending_reveal() {
    let mut session = session_with(&numbered(40));
    let start = Instant::now();

    session.load_more(start);
    session.tick(start + DELAY);
    assert_eq!(session.visible_count(), 20);

    session.set_search_term("Title");
    assert_eq!(session.visible_count(), 12);

    session.load_more(start + DELAY);
    session.set_category(Category::Music);
    assert_eq!(session.visible_count(), 12);
    assert!(!session.tick(start + DELAY * 4));

    session.load_more(start + DELAY * 4);
    session.tick(start + DELAY * 5);
    assert_eq!(session.visible_count(), 20);
    session.select_tag("jazz");
    assert_eq!(session.visible_count(), 12);
}

#[test]
fn unchanged_filter_values_do_not_reset() {
    let mut session = session_with(&numbered(40));
    let start = Instant::now();
    session.load_more(start);
    session.tick(start + DELAY);

    session.set_category(Category::All);
    session.set_search_term("");
    session.set_view(View::Events);
    assert_eq!(session.visible_count(), 20);
}

#[test]
fn sentinel_visibility_drives_load_more_until_exhausted() {
    let mut session = session_with(&numbered(20));
    let start = Instant::now();

    assert_eq!(session.bind_sentinel(Some(7)), ObserveOutcome::Attached);
    assert_eq!(session.bind_sentinel(Some(7)), ObserveOutcome::Unchanged);

    assert!(session.sentinel_visible(7, false, start).is_none());
    assert!(session.sentinel_visible(8, true, start).is_none());
    assert!(session.sentinel_visible(7, true, start).is_some());
    assert!(session.tick(start + DELAY));

    // has_more flipped, so the observation was rebuilt and now ignores
    // visibility reports.
    assert!(!session.has_more());
    assert!(session.sentinel_visible(7, true, start + DELAY).is_none());

    assert_eq!(session.bind_sentinel(None), ObserveOutcome::Detached);
}

#[test]
fn select_tag_resets_category_search_view_and_detail() {
    let mut session = session_with(&numbered(20));
    session.set_category(Category::Literature);
    session.set_search_term("Title");
    session.set_view(View::Events);
    assert!(session.select_article(3));

    session.select_tag("jazz");

    let filter = session.filter();
    assert_eq!(filter.active_category, Category::All);
    assert_eq!(filter.search_term, "");
    assert_eq!(filter.active_tag.as_deref(), Some("jazz"));
    assert_eq!(filter.current_view, View::Articles);
    assert!(session.selected_article().is_none());

    let ids: Vec<i64> = session.page().items.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![5, 10, 15, 20]);
}

#[test]
fn set_category_clears_tag() {
    let mut session = session_with(&numbered(10));
    session.select_tag("jazz");
    session.set_category(Category::Music);
    assert_eq!(session.filter().active_tag, None);
}

#[test]
fn blank_tag_clears_the_tag_filter() {
    let mut session = FeedSession::open(MemoryKvStore::new(), MockIdentityCycle::new(mock_users()));
    session.select_tag("جاز");
    assert_eq!(session.page().total, 2);

    session.select_tag("  ");
    assert_eq!(session.filter().active_tag, None);
    let page = session.page();
    assert_eq!(page.total, mock_articles().len());
    assert_eq!(page.empty_state, None);
}

#[test]
fn page_items_are_the_selection_prefix() {
    let session = session_with(&numbered(20));
    let page = session.page();
    let selected = session.selected_articles();
    assert_eq!(page.items.as_slice(), &selected[..12]);
    assert_eq!(page.total, selected.len());
}

#[test]
fn select_article_clears_search_term() {
    let mut session = session_with(&numbered(10));
    session.set_search_term("Title 3");
    assert!(session.select_article(3));
    assert_eq!(session.filter().search_term, "");
    assert_eq!(session.selected_article().map(|a| a.id), Some(3));
    assert!(session.is_modal_open());
    assert!(!session.select_article(999));
}

#[test]
fn toggle_save_persists_and_feeds_saved_tab() {
    let mut session = session_with(&numbered(10));
    let now = Instant::now();

    assert_eq!(session.toggle_save(7, now), "مقاله ذخیره شد");
    assert_eq!(session.toggle_save(3, now), "مقاله ذخیره شد");
    assert_eq!(
        session.store().get(SAVED_ARTICLES_KEY).unwrap().as_deref(),
        Some("[3,7]")
    );
    assert_eq!(session.toast_message(now), Some("مقاله ذخیره شد"));

    session.set_category(Category::Saved);
    let ids: Vec<i64> = session.page().items.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![3, 7]);

    assert_eq!(session.toggle_save(7, now), "مقاله از ذخیره شده‌ها حذف شد");
    assert!(!session.is_saved(7));
}

#[test]
fn saved_state_survives_reopen() {
    let mut session = session_with(&numbered(5));
    session.toggle_save(2, Instant::now());

    let reopened_store = session.store().clone();
    let reopened = FeedSession::open(reopened_store, MockIdentityCycle::new(mock_users()));
    assert!(reopened.is_saved(2));
    assert_eq!(reopened.articles().len(), 5);
}

#[test]
fn empty_states_follow_filter_context() {
    let mut session = session_with(&numbered(5));

    session.set_category(Category::Saved);
    assert_eq!(session.page().empty_state, Some(EmptyState::NothingSaved));

    session.set_search_term("missing");
    assert_eq!(session.page().empty_state, Some(EmptyState::NoMatches));

    session.set_search_term("");
    session.select_tag("missing-tag");
    assert_eq!(session.page().empty_state, Some(EmptyState::NoMatches));

    session.set_category(Category::Photography);
    assert_eq!(session.page().empty_state, None);
}

#[test]
fn editor_requires_author_identity() {
    let mut session = session_with(&numbered(3));
    let now = Instant::now();

    assert_eq!(
        session.request_editor(),
        EditorAccess::UpgradeRequired { logged_in: false }
    );
    session.close_upgrade_prompt();

    let notice = session.cycle_identity(now);
    assert_eq!(notice, AuthNotice::Welcome("خوش آمدید کاربر مهمان".to_string()));
    assert_eq!(
        session.request_editor(),
        EditorAccess::UpgradeRequired { logged_in: true }
    );
    session.close_upgrade_prompt();

    let notice = session.cycle_identity(now);
    assert_eq!(notice, AuthNotice::AuthorWelcome("سارا محمدی".to_string()));
    assert_eq!(session.author_welcome(), Some("سارا محمدی"));
    session.dismiss_author_welcome();
    assert_eq!(session.request_editor(), EditorAccess::Granted);
    assert_eq!(session.current_author_profile().map(|a| a.id), Some(1));

    let notice = session.cycle_identity(now);
    assert!(matches!(notice, AuthNotice::SignedOut(_)));
    assert!(session.current_user().is_none());
}

#[test]
fn publish_prepends_persists_and_returns_to_articles() {
    let mut session = session_with(&numbered(3));
    let now = Instant::now();
    session.set_view(View::Events);
    let published_at = Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap();

    let id = session.publish(draft(), published_at, now).unwrap();

    assert_eq!(session.articles()[0].id, id);
    assert_eq!(session.articles()[0].date, "2024-09-01");
    assert_eq!(session.filter().current_view, View::Articles);
    assert!(!session.is_editor_open());
    assert_eq!(session.toast_message(now), Some("مقاله با موفقیت منتشر شد!"));

    let stored = session.store().get(ARTICLES_KEY).unwrap().unwrap();
    let decoded: Vec<Article> = serde_json::from_str(&stored).unwrap();
    assert_eq!(decoded.len(), 4);
    assert_eq!(decoded[0].id, id);
}

#[test]
fn publish_rejects_invalid_input_without_changes() {
    let mut session = session_with(&numbered(3));
    let mut data = draft();
    data.title = "  ".to_string();
    assert!(session.publish(data, Utc::now(), Instant::now()).is_err());
    assert_eq!(session.articles().len(), 3);
}

#[test]
fn events_filter_by_type() {
    let mut session = session_with(&numbered(1));
    let all = session.visible_events().len();
    session.set_event_type(EventType::Concert);
    let concerts = session.visible_events();
    assert!(concerts.len() < all);
    assert!(concerts
        .iter()
        .all(|event| event.event_type == EventType::Concert));

    assert!(session.select_event(concerts[0].id));
    assert!(session.is_modal_open());
    session.close_event();
    assert!(!session.is_modal_open());
}
