// Page session - per-page view-state owner and timer lifecycle
//
// A session is created when a page mounts and discarded on navigation
// away. It owns the page's view-state and news feed behind one lock and
// keeps the cancellation handles of every timer it started; `close`
// releases them so no tick can act on discarded state.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Deserialize;

use crate::application::news_feed::{FeedStatus, NewsFeed};
use crate::application::news_gateway::{FetchError, NewsGateway};
use crate::application::scheduler::{self, TimerHandle};
use crate::domain::article::Article;
use crate::domain::climate::{Catalog, Metric};
use crate::domain::page::Page;
use crate::domain::rotation::{Carousel, NEWS_WINDOW};
use crate::domain::view_state::ViewState;
use thiserror::Error;

const NEWS_ROTATION_PERIOD: Duration = Duration::from_secs(10);
const HERO_ROTATION_PERIOD: Duration = Duration::from_secs(5);

/// A user action dispatched against a mounted page.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    ToggleDarkMode,
    ToggleMetric { metric: String },
    SelectRegion { region: String },
    SelectWarning { warning: u32 },
    OpenModal,
    CloseModal,
    SeekCarousel { page: usize },
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SelectionError {
    #[error("invalid selection: {0}")]
    InvalidSelection(String),
}

/// Owned copy of everything the presentation layer needs to render a
/// page: the view-state, the feed status and the currently visible
/// article window.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    pub page: Page,
    pub view: ViewState,
    pub feed_status: FeedStatus,
    pub visible_articles: Vec<Article>,
    pub article_total: usize,
    pub carousel_pages: usize,
}

struct SessionInner {
    view: ViewState,
    feed: NewsFeed,
}

pub struct PageSession {
    page: Page,
    catalog: Arc<Catalog>,
    inner: Mutex<SessionInner>,
    timers: Mutex<Vec<TimerHandle>>,
}

impl PageSession {
    /// Mount a page: fresh view-state, and for the home page one news
    /// fetch plus the hero rotation timer. The article rotation timer is
    /// only started once the fetch delivers a non-empty list, so an
    /// empty feed never rotates.
    pub fn mount(
        page: Page,
        catalog: Arc<Catalog>,
        gateway: Arc<dyn NewsGateway>,
        news_query: String,
    ) -> Arc<Self> {
        let default_region = catalog
            .regions
            .first()
            .map(|r| r.id.clone())
            .unwrap_or_default();
        let hero_count = if page.has_hero() {
            catalog.hero_slides.len()
        } else {
            0
        };

        let session = Arc::new(Self {
            page,
            catalog,
            inner: Mutex::new(SessionInner {
                view: ViewState::new(default_region, hero_count),
                feed: NewsFeed::new(),
            }),
            timers: Mutex::new(Vec::new()),
        });
        tracing::debug!("mounted page {}", page.as_str());

        if hero_count > 0 {
            let weak = Arc::downgrade(&session);
            let handle = scheduler::spawn_interval(HERO_ROTATION_PERIOD, move || {
                if let Some(session) = weak.upgrade() {
                    session.lock_inner().view.hero.advance();
                }
            });
            session.timers.lock().unwrap().push(handle);
        }

        if page.has_news() {
            let weak = Arc::downgrade(&session);
            tokio::spawn(async move {
                let result = gateway.fetch_articles(&news_query).await;
                if let Some(session) = weak.upgrade() {
                    session.finish_fetch(result);
                }
            });
        }

        session
    }

    /// Tear the page down: cancel every timer this session started.
    pub fn close(&self) {
        let mut timers = self.timers.lock().unwrap();
        for timer in timers.drain(..) {
            timer.cancel();
        }
        tracing::debug!("closed page {}", self.page.as_str());
    }

    /// Dispatch one user action. Selections are validated against the
    /// immutable catalog; unknown keys are rejected.
    pub fn apply(&self, event: UiEvent) -> Result<(), SelectionError> {
        let mut inner = self.lock_inner();
        match event {
            UiEvent::ToggleDarkMode => inner.view.toggle_dark_mode(),
            UiEvent::ToggleMetric { metric } => {
                let metric = Metric::parse(&metric).ok_or_else(|| {
                    SelectionError::InvalidSelection(format!("unknown metric: {metric}"))
                })?;
                inner.view.toggle_metric(metric);
            }
            UiEvent::SelectRegion { region } => {
                if self.catalog.region(&region).is_none() {
                    return Err(SelectionError::InvalidSelection(format!(
                        "unknown region: {region}"
                    )));
                }
                inner.view.select_region(region);
            }
            UiEvent::SelectWarning { warning } => {
                if self.catalog.warning(warning).is_none() {
                    return Err(SelectionError::InvalidSelection(format!(
                        "unknown warning: {warning}"
                    )));
                }
                inner.view.select_warning(warning);
            }
            UiEvent::OpenModal => inner.view.open_modal(),
            UiEvent::CloseModal => inner.view.close_modal(),
            UiEvent::SeekCarousel { page } => {
                let total = inner.feed.articles().len();
                if !inner.view.carousel.seek(page, total) {
                    return Err(SelectionError::InvalidSelection(format!(
                        "carousel page {page} out of range"
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn snapshot(&self) -> PageSnapshot {
        let inner = self.lock_inner();
        let articles = inner.feed.articles();
        let visible = inner.view.carousel.visible(articles.len());
        PageSnapshot {
            page: self.page,
            view: inner.view.clone(),
            feed_status: inner.feed.status().clone(),
            visible_articles: articles[visible].to_vec(),
            article_total: articles.len(),
            carousel_pages: Carousel::page_count(articles.len(), NEWS_WINDOW),
        }
    }

    fn finish_fetch(self: &Arc<Self>, result: Result<Vec<Article>, FetchError>) {
        let start_rotation = {
            let mut inner = self.lock_inner();
            let replaced = inner.feed.apply(result);
            if replaced {
                // List identity changed; a stale offset must not survive.
                inner.view.carousel.reset();
            }
            replaced && !inner.feed.articles().is_empty()
        };

        if start_rotation {
            let weak = Arc::downgrade(self);
            let handle = scheduler::spawn_interval(NEWS_ROTATION_PERIOD, move || {
                if let Some(session) = weak.upgrade() {
                    let mut inner = session.lock_inner();
                    let total = inner.feed.articles().len();
                    inner.view.carousel.advance(total);
                }
            });
            self.timers.lock().unwrap().push(handle);
        }
    }

    fn lock_inner(&self) -> std::sync::MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap()
    }
}
