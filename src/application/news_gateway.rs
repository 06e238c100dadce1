// Gateway trait for the outbound news fetch
use crate::domain::article::Article;
use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of a single fetch. All of these are recoverable: the
/// owning page keeps its previous state and renders the error inline.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    #[error("news API key is not configured")]
    MissingCredential,
    #[error("news API returned status {0}")]
    Http(u16),
    #[error("news request failed: {0}")]
    Network(String),
    #[error("news API response could not be decoded: {0}")]
    Decode(String),
}

#[async_trait]
pub trait NewsGateway: Send + Sync {
    /// Fetch the latest articles for a query.
    ///
    /// Exactly one outbound call per invocation; no retry, no caching.
    /// `MissingCredential` must be returned before any network activity.
    async fn fetch_articles(&self, query: &str) -> Result<Vec<Article>, FetchError>;
}
