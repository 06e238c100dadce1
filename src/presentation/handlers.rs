// HTTP request handlers
use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::page_session::{SelectionError, UiEvent};
use crate::domain::page::Page;
use crate::presentation::app_state::AppState;
use crate::presentation::view_model::PageView;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// The fixed navigation surface.
pub async fn list_pages() -> Json<Vec<&'static str>> {
    Json(Page::ALL.iter().map(|p| p.as_str()).collect())
}

/// Visit a page: mounts its session on first access and returns the
/// current snapshot.
pub async fn get_page(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let Some(page) = Page::parse(&name) else {
        return (StatusCode::NOT_FOUND, format!("unknown page: {name}")).into_response();
    };
    let session = state.session(page);
    Json(PageView::build(&session.snapshot(), state.catalog())).into_response()
}

/// Dispatch one UI event against a mounted page and return the
/// refreshed snapshot.
pub async fn dispatch_event(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(event): Json<UiEvent>,
) -> Response {
    let Some(page) = Page::parse(&name) else {
        return (StatusCode::NOT_FOUND, format!("unknown page: {name}")).into_response();
    };
    let session = state.session(page);
    match session.apply(event) {
        Ok(()) => Json(PageView::build(&session.snapshot(), state.catalog())).into_response(),
        Err(SelectionError::InvalidSelection(message)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, message).into_response()
        }
    }
}

/// Navigate away from a page: cancels its timers and discards its state.
pub async fn close_page(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> StatusCode {
    let Some(page) = Page::parse(&name) else {
        return StatusCode::NOT_FOUND;
    };
    if state.teardown(page) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
