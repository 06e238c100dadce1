// Application state for HTTP handlers
//
// Holds the immutable catalog, the news gateway and one session per
// mounted page. Pages are mounted on first visit and discarded on
// teardown; no state is shared between them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::application::news_gateway::NewsGateway;
use crate::application::page_session::PageSession;
use crate::domain::climate::Catalog;
use crate::domain::page::Page;

pub struct AppState {
    catalog: Arc<Catalog>,
    gateway: Arc<dyn NewsGateway>,
    news_query: String,
    sessions: Mutex<HashMap<Page, Arc<PageSession>>>,
}

impl AppState {
    pub fn new(catalog: Catalog, gateway: Arc<dyn NewsGateway>, news_query: String) -> Self {
        Self {
            catalog: Arc::new(catalog),
            gateway,
            news_query,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mount-on-demand: visiting a page creates its session, revisiting
    /// reuses it until it is torn down.
    pub fn session(&self, page: Page) -> Arc<PageSession> {
        let mut sessions = self.sessions.lock().unwrap();
        sessions
            .entry(page)
            .or_insert_with(|| {
                PageSession::mount(
                    page,
                    self.catalog.clone(),
                    self.gateway.clone(),
                    self.news_query.clone(),
                )
            })
            .clone()
    }

    /// Navigation away: cancel the page's timers and discard its state.
    /// Returns false when the page was not mounted.
    pub fn teardown(&self, page: Page) -> bool {
        let removed = self.sessions.lock().unwrap().remove(&page);
        match removed {
            Some(session) => {
                session.close();
                true
            }
            None => false,
        }
    }
}
