//! Reader session: the single owner of feed state.
//!
//! # Responsibility
//! - Own articles, bookmarks, filters, reveal state and modal flags.
//! - Expose named mutation entry points for the UI layer.
//! - Persist the collection and bookmarks after every change.
//!
//! # Invariants
//! - Any change to category, search term or tag resets the visible count
//!   and cancels a pending load-more.
//! - The sentinel observation is rebound whenever `has_more` or the
//!   load-more generation changes.
//! - Persistence failures are logged and never surfaced.

use crate::auth::IdentityProvider;
use crate::feed::config::FeedConfig;
use crate::feed::filter::{FilterState, View};
use crate::feed::pagination::{paginate, VisibleCount};
use crate::feed::reveal::{LoadMoreScheduler, TriggerOutcome};
use crate::feed::selection::{empty_state, select_articles, EmptyState};
use crate::feed::sentinel::{LoadMoreBinding, ObserveOutcome, SentinelId, SentinelObserver};
use crate::fixtures;
use crate::model::article::{Article, ArticleId, ArticleValidationError, Category, NewArticleData};
use crate::model::event::{filter_events, Event, EventType};
use crate::model::saved::SavedSet;
use crate::model::user::{Author, User};
use crate::service::article_service::{publish_article, toggle_saved, PUBLISHED_MESSAGE};
use crate::store::persisted::{load_articles, load_saved_ids, save_articles, save_saved_ids};
use crate::store::KvStore;
use crate::toast::Toast;
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::time::Instant;

/// Toast shown after signing out.
pub const SIGNED_OUT_MESSAGE: &str = "شما از حساب کاربری خارج شدید";

/// Revealed part of the article feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPage<'a> {
    pub items: Vec<&'a Article>,
    pub has_more: bool,
    /// Size of the full selection.
    pub total: usize,
    pub empty_state: Option<EmptyState>,
}

/// Whether the current user may open the article editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAccess {
    Granted,
    /// Readers see an upgrade prompt instead.
    UpgradeRequired { logged_in: bool },
}

/// What the UI should announce after an identity switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthNotice {
    /// Author signed in; show the welcome modal.
    AuthorWelcome(String),
    /// Reader signed in; toast text.
    Welcome(String),
    /// Signed out; toast text.
    SignedOut(String),
}

/// Reader session over a key-value store and an identity source.
pub struct FeedSession<S: KvStore, P: IdentityProvider> {
    store: S,
    identities: P,
    config: FeedConfig,
    articles: Vec<Article>,
    authors: Vec<Author>,
    events: Vec<Event>,
    saved: SavedSet,
    filter: FilterState,
    visible: VisibleCount,
    load_more: LoadMoreScheduler,
    sentinel: SentinelObserver,
    current_user: Option<User>,
    selected_article: Option<ArticleId>,
    selected_event: Option<i64>,
    active_event_type: EventType,
    editor_open: bool,
    upgrade_prompt_open: bool,
    author_welcome: Option<String>,
    toast: Toast,
}

impl<S: KvStore, P: IdentityProvider> FeedSession<S, P> {
    /// Opens a session with the default feed configuration.
    pub fn open(store: S, identities: P) -> Self {
        Self::open_with_config(store, identities, FeedConfig::default())
    }

    /// Loads persisted state (falling back to built-in fixtures) and
    /// writes it back so the store always mirrors the session.
    pub fn open_with_config(mut store: S, identities: P, config: FeedConfig) -> Self {
        let articles = load_articles(&store, fixtures::mock_articles);
        let saved = load_saved_ids(&store);
        save_articles(&mut store, &articles);
        save_saved_ids(&mut store, &saved);

        info!(
            "event=session_open module=service status=ok articles={} saved={}",
            articles.len(),
            saved.len()
        );

        Self {
            store,
            identities,
            config,
            articles,
            authors: fixtures::mock_authors(),
            events: fixtures::mock_events(),
            saved,
            filter: FilterState::default(),
            visible: VisibleCount::new(&config),
            load_more: LoadMoreScheduler::new(config.load_more_delay),
            sentinel: SentinelObserver::new(),
            current_user: None,
            selected_article: None,
            selected_event: None,
            active_event_type: EventType::All,
            editor_open: false,
            upgrade_prompt_open: false,
            author_welcome: None,
            toast: Toast::new(),
        }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn saved(&self) -> &SavedSet {
        &self.saved
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn visible_count(&self) -> usize {
        self.visible.get()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    // --- filters ---

    /// Switches category tab. Always clears the tag filter.
    pub fn set_category(&mut self, category: Category) {
        self.apply_filter_change(|filter| {
            filter.active_category = category;
            filter.active_tag = None;
        });
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.apply_filter_change(|filter| filter.search_term = term);
    }

    pub fn set_view(&mut self, view: View) {
        self.apply_filter_change(|filter| filter.current_view = view);
    }

    /// Filters by `tag` from an article's tag list.
    ///
    /// Resets category and search, returns to the articles view and closes
    /// the article detail so the results are visible. A blank tag clears
    /// the tag filter.
    pub fn select_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        let tag = (!tag.trim().is_empty()).then_some(tag);
        self.apply_filter_change(|filter| {
            filter.active_category = Category::All;
            filter.search_term.clear();
            filter.active_tag = tag;
            filter.current_view = View::Articles;
        });
        self.selected_article = None;
    }

    pub fn clear_tag(&mut self) {
        self.apply_filter_change(|filter| filter.active_tag = None);
    }

    // --- feed ---

    /// Ordered selection for the current filters.
    pub fn selected_articles(&self) -> Vec<&Article> {
        select_articles(&self.articles, &self.saved, &self.filter)
    }

    /// Revealed prefix of the selection.
    pub fn page(&self) -> FeedPage<'_> {
        let selected = self.selected_articles();
        let page = paginate(&selected, self.visible.get());
        FeedPage {
            items: page.items.to_vec(),
            has_more: page.has_more,
            total: page.total,
            empty_state: empty_state(page.total, &self.filter),
        }
    }

    pub fn has_more(&self) -> bool {
        self.visible.get() < self.selected_articles().len()
    }

    /// Binds the load-more observer to `sentinel` (`None` unbinds).
    pub fn bind_sentinel(&mut self, sentinel: Option<SentinelId>) -> ObserveOutcome {
        let binding = self.load_more_binding();
        self.sentinel.observe(sentinel, binding)
    }

    /// Handles a visibility report for `sentinel`.
    ///
    /// Returns the load-more outcome when the report triggered one.
    pub fn sentinel_visible(
        &mut self,
        sentinel: SentinelId,
        is_intersecting: bool,
        now: Instant,
    ) -> Option<TriggerOutcome> {
        if self.sentinel.on_intersection(sentinel, is_intersecting) {
            Some(self.load_more(now))
        } else {
            None
        }
    }

    /// Schedules one delayed reveal; repeated calls inside the delay
    /// coalesce.
    pub fn load_more(&mut self, now: Instant) -> TriggerOutcome {
        self.load_more.trigger(now)
    }

    /// Advances timers. Returns whether more articles were revealed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.load_more.poll(now) {
            return false;
        }
        if !self.has_more() {
            debug!(
                "event=feed_reveal module=feed status=skip reason=exhausted visible={}",
                self.visible.get()
            );
            return false;
        }
        self.visible.advance();
        debug!(
            "event=feed_reveal module=feed status=ok visible={}",
            self.visible.get()
        );
        self.refresh_sentinel();
        true
    }

    // --- bookmarks ---

    /// Flips bookmark membership and persists it. Returns the toast text.
    pub fn toggle_save(&mut self, id: ArticleId, now: Instant) -> &'static str {
        let message = toggle_saved(&mut self.saved, id);
        save_saved_ids(&mut self.store, &self.saved);
        self.toast.show(message, now);
        self.refresh_sentinel();
        message
    }

    pub fn is_saved(&self, id: ArticleId) -> bool {
        self.saved.contains(id)
    }

    // --- publishing ---

    /// Whether the editor may open for the current user; updates the
    /// editor or upgrade-prompt flag accordingly.
    pub fn request_editor(&mut self) -> EditorAccess {
        if self.current_author_profile().is_some() {
            self.editor_open = true;
            EditorAccess::Granted
        } else {
            self.upgrade_prompt_open = true;
            EditorAccess::UpgradeRequired {
                logged_in: self.current_user.is_some(),
            }
        }
    }

    pub fn close_editor(&mut self) {
        self.editor_open = false;
    }

    pub fn close_upgrade_prompt(&mut self) {
        self.upgrade_prompt_open = false;
    }

    /// Publishes editor input at the top of the collection.
    ///
    /// Persists the collection, closes the editor, switches to the articles
    /// view and returns the toast text.
    ///
    /// # Errors
    /// - Returns the validation error; nothing changes in that case.
    pub fn publish(
        &mut self,
        data: NewArticleData,
        published_at: DateTime<Utc>,
        now: Instant,
    ) -> Result<ArticleId, ArticleValidationError> {
        let id = publish_article(&mut self.articles, data, published_at)?;
        save_articles(&mut self.store, &self.articles);
        self.editor_open = false;
        self.set_view(View::Articles);
        self.toast.show(PUBLISHED_MESSAGE, now);
        self.refresh_sentinel();
        Ok(id)
    }

    // --- identity ---

    /// Moves to the next mock identity.
    pub fn cycle_identity(&mut self, now: Instant) -> AuthNotice {
        self.current_user = self.identities.next_identity(self.current_user.as_ref());
        let notice = match &self.current_user {
            Some(user) if user.is_author => {
                self.author_welcome = Some(user.name.clone());
                AuthNotice::AuthorWelcome(user.name.clone())
            }
            Some(user) => AuthNotice::Welcome(format!("خوش آمدید {}", user.name)),
            None => AuthNotice::SignedOut(SIGNED_OUT_MESSAGE.to_string()),
        };
        if let AuthNotice::Welcome(message) | AuthNotice::SignedOut(message) = &notice {
            self.toast.show(message.clone(), now);
        }
        info!(
            "event=identity_cycle module=service status=ok signed_in={} author={}",
            self.current_user.is_some(),
            self.current_author_profile().is_some()
        );
        notice
    }

    pub fn dismiss_author_welcome(&mut self) {
        self.author_welcome = None;
    }

    pub fn author_welcome(&self) -> Option<&str> {
        self.author_welcome.as_deref()
    }

    /// Author profile of the signed-in user, when they are an author.
    pub fn current_author_profile(&self) -> Option<&Author> {
        let author_id = self.current_user.as_ref()?.author_profile_id()?;
        self.authors.iter().find(|author| author.id == author_id)
    }

    // --- detail ---

    /// Opens the article detail. Clears the search term, as the detail
    /// replaces the search context. Returns `false` for unknown ids.
    pub fn select_article(&mut self, id: ArticleId) -> bool {
        if !self.articles.iter().any(|article| article.id == id) {
            return false;
        }
        self.selected_article = Some(id);
        self.set_search_term(String::new());
        true
    }

    pub fn close_article(&mut self) {
        self.selected_article = None;
    }

    pub fn selected_article(&self) -> Option<&Article> {
        let id = self.selected_article?;
        self.articles.iter().find(|article| article.id == id)
    }

    pub fn selected_article_author(&self) -> Option<&Author> {
        let author_id = self.selected_article()?.author_id;
        self.authors.iter().find(|author| author.id == author_id)
    }

    // --- events ---

    pub fn set_event_type(&mut self, event_type: EventType) {
        self.active_event_type = event_type;
    }

    pub fn event_type(&self) -> EventType {
        self.active_event_type
    }

    pub fn visible_events(&self) -> Vec<Event> {
        filter_events(&self.events, self.active_event_type)
    }

    pub fn select_event(&mut self, id: i64) -> bool {
        if !self.events.iter().any(|event| event.id == id) {
            return false;
        }
        self.selected_event = Some(id);
        true
    }

    pub fn close_event(&mut self) {
        self.selected_event = None;
    }

    pub fn selected_event(&self) -> Option<&Event> {
        let id = self.selected_event?;
        self.events.iter().find(|event| event.id == id)
    }

    // --- overlays ---

    /// Whether any modal overlay is open (page scrolling should lock).
    pub fn is_modal_open(&self) -> bool {
        self.selected_article.is_some()
            || self.editor_open
            || self.upgrade_prompt_open
            || self.author_welcome.is_some()
            || self.selected_event.is_some()
    }

    pub fn is_editor_open(&self) -> bool {
        self.editor_open
    }

    pub fn is_upgrade_prompt_open(&self) -> bool {
        self.upgrade_prompt_open
    }

    /// Toast text visible at `now`.
    pub fn toast_message(&mut self, now: Instant) -> Option<&str> {
        self.toast.current(now)
    }

    fn apply_filter_change(&mut self, change: impl FnOnce(&mut FilterState)) {
        let previous = self.filter.clone();
        change(&mut self.filter);
        if previous.pagination_key_differs(&self.filter) {
            self.visible.reset();
            let dropped = self.load_more.cancel();
            debug!(
                "event=feed_filter module=feed status=ok category={} tag_set={} search_chars={} pending_dropped={}",
                self.filter.active_category.as_str(),
                self.filter.active_tag.is_some(),
                self.filter.search_term.chars().count(),
                dropped
            );
        }
        self.refresh_sentinel();
    }

    fn load_more_binding(&self) -> LoadMoreBinding {
        LoadMoreBinding {
            has_more: self.has_more(),
            generation: self.load_more.generation(),
        }
    }

    fn refresh_sentinel(&mut self) {
        if let Some(sentinel) = self.sentinel.observed_sentinel() {
            let binding = self.load_more_binding();
            self.sentinel.observe(Some(sentinel), binding);
        }
    }
}
