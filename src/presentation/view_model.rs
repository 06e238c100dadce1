// JSON view models mapping domain state onto the wire
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::news_feed::FeedStatus;
use crate::application::page_session::PageSnapshot;
use crate::domain::article::Article;
use crate::domain::climate::{Catalog, ClimatePoint, GlobalTrendPoint, HeroSlide, Region, Warning};

/// Everything the rendering side needs to draw one page.
#[derive(Debug, Serialize)]
pub struct PageView {
    pub page: &'static str,
    pub dark_mode: bool,
    pub modal_open: bool,
    pub selected_region: String,
    pub selected_metrics: Vec<&'static str>,
    pub selected_warning: Option<u32>,
    pub region: Option<RegionView>,
    pub warnings: Vec<WarningView>,
    pub global_trend: Vec<TrendPointView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub news: Option<NewsView>,
}

#[derive(Debug, Serialize)]
pub struct RegionView {
    pub id: String,
    pub name: String,
    pub temperature: f64,
    pub co2: f64,
    pub projections: Vec<ProjectionView>,
}

#[derive(Debug, Serialize)]
pub struct ProjectionView {
    pub year: i32,
    pub temperature: f64,
    pub precipitation: f64,
}

#[derive(Debug, Serialize)]
pub struct WarningView {
    pub id: u32,
    pub kind: String,
    pub level: &'static str,
    pub region: String,
    pub description: String,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct TrendPointView {
    pub year: i32,
    pub temperature: f64,
    pub co2: f64,
    pub sea_level: f64,
}

#[derive(Debug, Serialize)]
pub struct HeroView {
    pub index: usize,
    pub title: String,
    pub tagline: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NewsView {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub articles: Vec<ArticleView>,
    pub offset: usize,
    pub total: usize,
    pub pages: usize,
}

#[derive(Debug, Serialize)]
pub struct ArticleView {
    pub title: String,
    pub description: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub image_url: Option<String>,
    pub source_name: String,
}

impl PageView {
    pub fn build(snapshot: &PageSnapshot, catalog: &Catalog) -> Self {
        let region = catalog
            .region(&snapshot.view.selected_region)
            .map(region_view);

        let warnings = catalog
            .warnings
            .iter()
            .map(|w| warning_view(w, snapshot.view.selected_warning))
            .collect();

        let hero = snapshot.page.has_hero().then(|| {
            catalog
                .hero_slides
                .get(snapshot.view.hero.index())
                .map(|slide| hero_view(snapshot.view.hero.index(), slide))
        });

        let news = snapshot.page.has_news().then(|| news_view(snapshot));

        Self {
            page: snapshot.page.as_str(),
            dark_mode: snapshot.view.dark_mode,
            modal_open: snapshot.view.modal_open,
            selected_region: snapshot.view.selected_region.clone(),
            selected_metrics: snapshot
                .view
                .selected_metrics
                .iter()
                .map(|m| m.as_str())
                .collect(),
            selected_warning: snapshot.view.selected_warning,
            region,
            warnings,
            global_trend: catalog.global_trend.iter().map(trend_view).collect(),
            hero: hero.flatten(),
            news,
        }
    }
}

fn region_view(region: &Region) -> RegionView {
    RegionView {
        id: region.id.clone(),
        name: region.name.clone(),
        temperature: region.temperature,
        co2: region.co2,
        projections: region.projections.iter().map(projection_view).collect(),
    }
}

fn projection_view(point: &ClimatePoint) -> ProjectionView {
    ProjectionView {
        year: point.year,
        temperature: point.temperature,
        precipitation: point.precipitation,
    }
}

fn warning_view(warning: &Warning, selected: Option<u32>) -> WarningView {
    WarningView {
        id: warning.id,
        kind: warning.kind.clone(),
        level: warning.level.as_str(),
        region: warning.region.clone(),
        description: warning.description.clone(),
        selected: selected == Some(warning.id),
    }
}

fn trend_view(point: &GlobalTrendPoint) -> TrendPointView {
    TrendPointView {
        year: point.year,
        temperature: point.temperature,
        co2: point.co2,
        sea_level: point.sea_level,
    }
}

fn hero_view(index: usize, slide: &HeroSlide) -> HeroView {
    HeroView {
        index,
        title: slide.title.clone(),
        tagline: slide.tagline.clone(),
        image_url: slide.image_url.clone(),
    }
}

fn news_view(snapshot: &PageSnapshot) -> NewsView {
    let (status, error) = match &snapshot.feed_status {
        FeedStatus::Loading => ("loading", None),
        FeedStatus::Ready => ("ready", None),
        FeedStatus::Failed(message) => ("error", Some(message.clone())),
    };
    NewsView {
        status,
        error,
        articles: snapshot.visible_articles.iter().map(article_view).collect(),
        offset: snapshot.view.carousel.offset(),
        total: snapshot.article_total,
        pages: snapshot.carousel_pages,
    }
}

fn article_view(article: &Article) -> ArticleView {
    ArticleView {
        title: article.title.clone(),
        description: article.description.clone(),
        url: article.url.clone(),
        published_at: article.published_at,
        image_url: article.image_url.clone(),
        source_name: article.source_name.clone(),
    }
}
