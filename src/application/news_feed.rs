// In-memory article store fed by the news gateway
use crate::application::news_gateway::FetchError;
use crate::domain::article::Article;

#[derive(Debug, Clone, PartialEq)]
pub enum FeedStatus {
    /// Initial state while the fetch is still in flight.
    Loading,
    Ready,
    Failed(String),
}

/// Holds the articles fetched for a page. Each successful fetch replaces
/// the collection wholesale; there is no merge and no dedup. A failed
/// fetch leaves whatever was there before untouched.
#[derive(Debug, Clone)]
pub struct NewsFeed {
    articles: Vec<Article>,
    status: FeedStatus,
}

impl NewsFeed {
    pub fn new() -> Self {
        Self {
            articles: Vec::new(),
            status: FeedStatus::Loading,
        }
    }

    /// Fold a fetch result into the feed. Returns true when the article
    /// list was replaced, so the caller can reset any offset that indexed
    /// into the old list.
    pub fn apply(&mut self, result: Result<Vec<Article>, FetchError>) -> bool {
        match result {
            Ok(articles) => {
                tracing::debug!("news feed replaced with {} articles", articles.len());
                self.articles = articles;
                self.status = FeedStatus::Ready;
                true
            }
            Err(e) => {
                tracing::warn!("news fetch failed: {e}");
                self.status = FeedStatus::Failed(e.to_string());
                false
            }
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn status(&self) -> &FeedStatus {
        &self.status
    }
}

impl Default for NewsFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article::new(
            title.to_string(),
            "description".to_string(),
            format!("https://example.com/{title}"),
            chrono::DateTime::UNIX_EPOCH,
            None,
            "Example Times".to_string(),
        )
    }

    #[test]
    fn test_successful_fetch_replaces_wholesale() {
        let mut feed = NewsFeed::new();
        assert_eq!(*feed.status(), FeedStatus::Loading);

        assert!(feed.apply(Ok(vec![article("a"), article("b")])));
        assert_eq!(feed.articles().len(), 2);
        assert_eq!(*feed.status(), FeedStatus::Ready);

        // A later fetch does not merge with the previous list.
        assert!(feed.apply(Ok(vec![article("c")])));
        assert_eq!(feed.articles().len(), 1);
        assert_eq!(feed.articles()[0].title, "c");
    }

    #[test]
    fn test_http_failure_leaves_previous_list_untouched() {
        let mut feed = NewsFeed::new();
        feed.apply(Ok(vec![article("a"), article("b"), article("c")]));

        assert!(!feed.apply(Err(FetchError::Http(503))));
        assert_eq!(feed.articles().len(), 3);
        assert_eq!(
            *feed.status(),
            FeedStatus::Failed("news API returned status 503".to_string())
        );
    }

    #[test]
    fn test_missing_credential_surfaces_as_failed_status() {
        let mut feed = NewsFeed::new();
        assert!(!feed.apply(Err(FetchError::MissingCredential)));
        assert!(feed.articles().is_empty());
        assert!(matches!(feed.status(), FeedStatus::Failed(_)));
    }
}
