//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the single process-wide reader session.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - All session access is serialized through one mutex.
//! - Storage failures degrade to an in-memory store; they never fail a call.

use chrono::Utc;
use farhang_core::service::article_service::PUBLISHED_MESSAGE;
use farhang_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Article, AuthNotice, Author, Category, EditorAccess, Event, EventType, FeedSession, KvStore,
    MemoryKvStore, MockIdentityCycle, NewArticleData, ObserveOutcome, SqliteKvStore, View,
};
use log::{error, warn};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};
use std::time::Instant;

const STORE_FILE_NAME: &str = "farhang_store.sqlite3";
static STORE_PATH: OnceLock<PathBuf> = OnceLock::new();

type SessionStore = Box<dyn KvStore + Send>;
type Session = FeedSession<SessionStore, MockIdentityCycle>;

static SESSION: Mutex<Option<Session>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Article card for grid rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub image_url: String,
    pub image_height: u32,
    /// Stable category value (e.g. `Local Culture`).
    pub category: String,
    pub author_id: i64,
    pub date: String,
    pub views: String,
    pub likes: String,
    pub tags: Vec<String>,
    pub is_saved: bool,
}

/// Revealed feed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPageResponse {
    pub items: Vec<ArticleCard>,
    pub has_more: bool,
    pub total: u32,
    pub visible_count: u32,
    /// Empty-state headline, when the grid is empty for a known reason.
    pub empty_title: Option<String>,
    pub empty_hint: Option<String>,
    pub active_tag: Option<String>,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Created article id, when applicable.
    pub article_id: Option<i64>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, article_id: Option<i64>) -> Self {
        Self {
            ok: true,
            article_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            article_id: None,
            message: message.into(),
        }
    }
}

/// Identity switch result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCycleResponse {
    pub user_name: Option<String>,
    pub is_author: bool,
    /// Show the author welcome modal instead of a toast.
    pub show_author_welcome: bool,
    /// Toast text (empty when the welcome modal is shown).
    pub message: String,
}

/// Author profile for detail and editor headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorCard {
    pub id: i64,
    pub name: String,
    pub avatar_url: String,
    pub bio: String,
}

/// Open article detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDetailResponse {
    pub article: ArticleCard,
    /// Full body text.
    pub content: String,
    pub video_url: Option<String>,
    pub author: Option<AuthorCard>,
}

/// Result of asking for the article editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorAccessResponse {
    /// Editor opened; otherwise the upgrade prompt is shown.
    pub granted: bool,
    pub logged_in: bool,
    /// Profile the new article will be published under.
    pub author: Option<AuthorCard>,
}

/// Event card for the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub id: i64,
    pub title: String,
    pub event_type: String,
    pub date: String,
    pub time: String,
    pub location_name: String,
    pub image_url: String,
}

/// Open event detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetailResponse {
    pub event: EventCard,
    pub description: String,
    pub location_map_url: String,
    pub ticket_url: String,
}

/// Returns the currently revealed article page.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_page() -> FeedPageResponse {
    with_session(|session| {
        let page = session.page();
        FeedPageResponse {
            items: page
                .items
                .iter()
                .map(|article| to_article_card(article, session.is_saved(article.id)))
                .collect(),
            has_more: page.has_more,
            total: saturating_u32(page.total),
            visible_count: saturating_u32(session.visible_count()),
            empty_title: page.empty_state.map(|state| state.title().to_string()),
            empty_hint: page.empty_state.map(|state| state.hint().to_string()),
            active_tag: session.filter().active_tag.clone(),
        }
    })
}

/// Switches category tab. Returns empty string or an error message.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_set_category(category: String) -> String {
    let Some(category) = Category::parse(&category) else {
        return format!("unknown category `{}`", category.trim());
    };
    with_session(|session| session.set_category(category));
    String::new()
}

#[flutter_rust_bridge::frb(sync)]
pub fn feed_set_search(term: String) {
    with_session(|session| session.set_search_term(term));
}

#[flutter_rust_bridge::frb(sync)]
pub fn feed_select_tag(tag: String) {
    with_session(|session| session.select_tag(tag));
}

#[flutter_rust_bridge::frb(sync)]
pub fn feed_clear_tag() {
    with_session(|session| session.clear_tag());
}

/// Switches between `articles` and `events`.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_set_view(view: String) -> String {
    let Some(view) = View::parse(&view) else {
        return format!("unknown view `{}`", view.trim());
    };
    with_session(|session| session.set_view(view));
    String::new()
}

/// Binds the load-more sentinel (`None` unbinds). Returns whether a new
/// observation was attached.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_bind_sentinel(sentinel_id: Option<u64>) -> bool {
    with_session(|session| {
        matches!(
            session.bind_sentinel(sentinel_id),
            ObserveOutcome::Attached | ObserveOutcome::Reattached
        )
    })
}

/// Reports sentinel visibility. Returns whether load-more was triggered.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_sentinel_visible(sentinel_id: u64, is_intersecting: bool) -> bool {
    with_session(|session| {
        session
            .sentinel_visible(sentinel_id, is_intersecting, Instant::now())
            .is_some()
    })
}

/// Drives the load-more timer. Returns whether more articles were revealed.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_tick() -> bool {
    with_session(|session| session.tick(Instant::now()))
}

/// Toggles a bookmark and returns the confirmation text.
#[flutter_rust_bridge::frb(sync)]
pub fn article_toggle_save(article_id: i64) -> String {
    with_session(|session| session.toggle_save(article_id, Instant::now()).to_string())
}

/// Opens the article detail. Returns `false` for unknown ids.
#[flutter_rust_bridge::frb(sync)]
pub fn article_select(article_id: i64) -> bool {
    with_session(|session| session.select_article(article_id))
}

#[flutter_rust_bridge::frb(sync)]
pub fn article_close() {
    with_session(|session| session.close_article());
}

/// Returns the open article detail, if any.
#[flutter_rust_bridge::frb(sync)]
pub fn article_detail() -> Option<ArticleDetailResponse> {
    with_session(|session| {
        let article = session.selected_article()?;
        Some(ArticleDetailResponse {
            article: to_article_card(article, session.is_saved(article.id)),
            content: article.content.clone(),
            video_url: article.video_url.clone(),
            author: session.selected_article_author().map(to_author_card),
        })
    })
}

/// Opens the editor for authors, or the upgrade prompt for everyone else.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_request() -> EditorAccessResponse {
    with_session(|session| match session.request_editor() {
        EditorAccess::Granted => EditorAccessResponse {
            granted: true,
            logged_in: true,
            author: session.current_author_profile().map(to_author_card),
        },
        EditorAccess::UpgradeRequired { logged_in } => EditorAccessResponse {
            granted: false,
            logged_in,
            author: None,
        },
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn editor_close() {
    with_session(|session| session.close_editor());
}

#[flutter_rust_bridge::frb(sync)]
pub fn upgrade_prompt_close() {
    with_session(|session| session.close_upgrade_prompt());
}

/// Name shown in the author welcome modal while it is open.
#[flutter_rust_bridge::frb(sync)]
pub fn author_welcome() -> Option<String> {
    with_session(|session| session.author_welcome().map(str::to_string))
}

#[flutter_rust_bridge::frb(sync)]
pub fn author_welcome_dismiss() {
    with_session(|session| session.dismiss_author_welcome());
}

/// Whether any overlay is open; the shell locks page scrolling meanwhile.
#[flutter_rust_bridge::frb(sync)]
pub fn ui_modal_open() -> bool {
    with_session(|session| session.is_modal_open())
}

/// Publishes a new article as the signed-in author.
///
/// # FFI contract
/// - Fails when no author is signed in or input is invalid.
/// - Returns the created article id on success.
#[flutter_rust_bridge::frb(sync)]
pub fn article_publish(
    title: String,
    excerpt: String,
    content: String,
    image_url: String,
    image_height: u32,
    category: String,
) -> ActionResponse {
    let Some(category) = Category::parse(&category) else {
        return ActionResponse::failure(format!("unknown category `{}`", category.trim()));
    };

    with_session(|session| {
        let Some(author_id) = session.current_author_profile().map(|author| author.id) else {
            return ActionResponse::failure("article_publish failed: author identity required");
        };
        let data = NewArticleData {
            title: title.trim().to_string(),
            excerpt: excerpt.trim().to_string(),
            content,
            image_url: image_url.trim().to_string(),
            image_height,
            category,
            author_id,
        };
        match session.publish(data, Utc::now(), Instant::now()) {
            Ok(id) => ActionResponse::success(PUBLISHED_MESSAGE, Some(id)),
            Err(err) => ActionResponse::failure(format!("article_publish failed: {err}")),
        }
    })
}

/// Switches to the next mock identity.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_cycle() -> AuthCycleResponse {
    with_session(|session| {
        let notice = session.cycle_identity(Instant::now());
        let user = session.current_user();
        let (show_author_welcome, message) = match notice {
            AuthNotice::AuthorWelcome(_) => (true, String::new()),
            AuthNotice::Welcome(message) | AuthNotice::SignedOut(message) => (false, message),
        };
        AuthCycleResponse {
            user_name: user.map(|user| user.name.clone()),
            is_author: user.is_some_and(|user| user.is_author),
            show_author_welcome,
            message,
        }
    })
}

/// Lists events of the given type (`All` for every event).
///
/// Returns an empty list for unknown types.
#[flutter_rust_bridge::frb(sync)]
pub fn events_list(event_type: String) -> Vec<EventCard> {
    let Some(event_type) = EventType::parse(&event_type) else {
        warn!("event=events_list module=ffi status=error error_code=unknown_event_type");
        return Vec::new();
    };
    with_session(|session| {
        session.set_event_type(event_type);
        session
            .visible_events()
            .iter()
            .map(to_event_card)
            .collect()
    })
}

/// Opens the event detail. Returns `false` for unknown ids.
#[flutter_rust_bridge::frb(sync)]
pub fn event_select(event_id: i64) -> bool {
    with_session(|session| session.select_event(event_id))
}

/// Returns the open event detail, if any.
#[flutter_rust_bridge::frb(sync)]
pub fn event_detail() -> Option<EventDetailResponse> {
    with_session(|session| {
        session.selected_event().map(|event| EventDetailResponse {
            event: to_event_card(event),
            description: event.description.clone(),
            location_map_url: event.location.map_url.clone(),
            ticket_url: event.ticket_url.clone(),
        })
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn event_close() {
    with_session(|session| session.close_event());
}

/// Toast text currently visible, if any.
#[flutter_rust_bridge::frb(sync)]
pub fn toast_current() -> Option<String> {
    with_session(|session| session.toast_message(Instant::now()).map(str::to_string))
}

fn with_session<T>(f: impl FnOnce(&mut Session) -> T) -> T {
    let mut guard = lock_session();
    let session = guard.get_or_insert_with(open_session);
    f(session)
}

fn lock_session() -> MutexGuard<'static, Option<Session>> {
    // A panic inside a previous call must not brick the session.
    SESSION
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn open_session() -> Session {
    let path = resolve_store_path();
    let store: SessionStore = match SqliteKvStore::open(&path) {
        Ok(store) => Box::new(store),
        Err(err) => {
            error!(
                "event=session_store module=ffi status=error error_code=store_open_failed fallback=memory error={err}"
            );
            Box::new(MemoryKvStore::new())
        }
    };
    FeedSession::open(store, MockIdentityCycle::new(farhang_core::fixtures::mock_users()))
}

fn resolve_store_path() -> PathBuf {
    STORE_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("FARHANG_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(STORE_FILE_NAME)
        })
        .clone()
}

fn to_article_card(article: &Article, is_saved: bool) -> ArticleCard {
    ArticleCard {
        id: article.id,
        title: article.title.clone(),
        excerpt: article.excerpt.clone(),
        image_url: article.image_url.clone(),
        image_height: article.image_height,
        category: article.category.as_str().to_string(),
        author_id: article.author_id,
        date: article.date.clone(),
        views: article.views.clone(),
        likes: article.likes.clone(),
        tags: article.tags.clone(),
        is_saved,
    }
}

fn to_author_card(author: &Author) -> AuthorCard {
    AuthorCard {
        id: author.id,
        name: author.name.clone(),
        avatar_url: author.avatar_url.clone(),
        bio: author.bio.clone(),
    }
}

fn to_event_card(event: &Event) -> EventCard {
    EventCard {
        id: event.id,
        title: event.title.clone(),
        event_type: event.event_type.as_str().to_string(),
        date: event.date.clone(),
        time: event.time.clone(),
        location_name: event.location.name.clone(),
        image_url: event.image_url.clone(),
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
