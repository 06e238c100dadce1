// NewsAPI client implementation of the news gateway
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::application::news_gateway::{FetchError, NewsGateway};
use crate::domain::article::Article;
use crate::infrastructure::config::NewsSettings;

#[derive(Debug, Clone)]
pub struct NewsApiClient {
    client: reqwest::Client,
    settings: NewsSettings,
}

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    #[serde(default)]
    articles: Vec<NewsApiArticle>,
}

// The upstream marks removed articles by nulling out most fields, so
// everything is optional here and unusable entries are dropped during
// mapping instead of failing the whole decode.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsApiArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    url_to_image: Option<String>,
    #[serde(default)]
    source: Option<NewsApiSource>,
}

#[derive(Debug, Deserialize)]
struct NewsApiSource {
    #[serde(default)]
    name: Option<String>,
}

impl NewsApiArticle {
    fn into_domain(self) -> Option<Article> {
        let url = self.url?;
        let published_at = self.published_at?;
        Some(Article::new(
            self.title.unwrap_or_default(),
            self.description.unwrap_or_default(),
            url,
            published_at,
            self.url_to_image,
            self.source.and_then(|s| s.name).unwrap_or_default(),
        ))
    }
}

impl NewsApiClient {
    pub fn new(settings: NewsSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    fn build_url(&self, query: &str) -> String {
        format!(
            "{}?q={}&language={}&sortBy={}&pageSize={}",
            self.settings.endpoint.trim_end_matches('/'),
            urlencoding::encode(query),
            self.settings.language,
            self.settings.sort_by,
            self.settings.page_size,
        )
    }
}

#[async_trait]
impl NewsGateway for NewsApiClient {
    async fn fetch_articles(&self, query: &str) -> Result<Vec<Article>, FetchError> {
        // Must short-circuit before any network activity.
        let Some(api_key) = self.settings.api_key.as_deref() else {
            return Err(FetchError::MissingCredential);
        };

        let url = self.build_url(query);
        tracing::debug!("fetching news from {url}");

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(status.as_u16()));
        }

        let body = response
            .json::<NewsApiResponse>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        let articles: Vec<Article> = body
            .articles
            .into_iter()
            .filter_map(NewsApiArticle::into_domain)
            .collect();
        tracing::debug!("fetched {} usable articles", articles.len());
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(api_key: Option<&str>) -> NewsSettings {
        NewsSettings {
            endpoint: "https://newsapi.org/v2/everything".to_string(),
            query: "climate change".to_string(),
            language: "en".to_string(),
            sort_by: "publishedAt".to_string(),
            page_size: 9,
            api_key: api_key.map(str::to_string),
        }
    }

    #[test]
    fn test_build_url_encodes_the_query() {
        let client = NewsApiClient::new(settings(Some("k")));
        assert_eq!(
            client.build_url("climate change"),
            "https://newsapi.org/v2/everything?q=climate%20change&language=en&sortBy=publishedAt&pageSize=9"
        );
    }

    #[tokio::test]
    async fn test_missing_key_short_circuits_without_a_request() {
        // An unroutable endpoint would surface as a network error if the
        // client ever attempted the call.
        let mut settings = settings(None);
        settings.endpoint = "http://127.0.0.1:1".to_string();
        let client = NewsApiClient::new(settings);

        let err = client.fetch_articles("climate change").await.unwrap_err();
        assert_eq!(err, FetchError::MissingCredential);
    }

    #[test]
    fn test_response_mapping_drops_removed_articles() {
        let raw = r#"{
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {
                    "source": { "id": null, "name": "Example Times" },
                    "title": "Sea levels keep rising",
                    "description": "New measurements published.",
                    "url": "https://example.com/sea-levels",
                    "urlToImage": "https://example.com/sea.jpg",
                    "publishedAt": "2024-11-02T09:30:00Z"
                },
                {
                    "source": { "id": null, "name": "[Removed]" },
                    "title": "[Removed]",
                    "description": null,
                    "url": null,
                    "urlToImage": null,
                    "publishedAt": null
                }
            ]
        }"#;

        let parsed: NewsApiResponse = serde_json::from_str(raw).unwrap();
        let articles: Vec<Article> = parsed
            .articles
            .into_iter()
            .filter_map(NewsApiArticle::into_domain)
            .collect();

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Sea levels keep rising");
        assert_eq!(articles[0].source_name, "Example Times");
        assert_eq!(
            articles[0].image_url.as_deref(),
            Some("https://example.com/sea.jpg")
        );
    }
}
