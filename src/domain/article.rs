// News article domain model
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub image_url: Option<String>,
    pub source_name: String,
}

impl Article {
    pub fn new(
        title: String,
        description: String,
        url: String,
        published_at: DateTime<Utc>,
        image_url: Option<String>,
        source_name: String,
    ) -> Self {
        Self {
            title,
            description,
            url,
            published_at,
            image_url,
            source_name,
        }
    }
}
