use serde::Deserialize;

use crate::domain::climate::{
    Catalog, ClimatePoint, GlobalTrendPoint, HeroSlide, Region, Warning, WarningLevel,
};

#[derive(Debug, Deserialize, Clone)]
pub struct NewsConfig {
    pub news: NewsSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewsSettings {
    pub endpoint: String,
    pub query: String,
    pub language: String,
    pub sort_by: String,
    pub page_size: u32,
    /// Absence is a recoverable condition, not a startup failure: the
    /// feed reports a missing key instead of the process refusing to boot.
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    #[serde(default)]
    pub regions: Vec<RegionConfig>,
    #[serde(default)]
    pub warnings: Vec<WarningConfig>,
    #[serde(default)]
    pub hero_slides: Vec<HeroSlideConfig>,
    #[serde(default)]
    pub global_trend: Vec<TrendPointConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RegionConfig {
    pub id: String,
    pub name: String,
    pub temperature: f64,
    pub co2: f64,
    #[serde(default)]
    pub projections: Vec<ProjectionConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProjectionConfig {
    pub year: i32,
    pub temperature: f64,
    pub precipitation: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WarningConfig {
    pub id: u32,
    pub kind: String,
    pub level: String,
    pub region: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HeroSlideConfig {
    pub title: String,
    pub tagline: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TrendPointConfig {
    pub year: i32,
    pub temperature: f64,
    pub co2: f64,
    pub sea_level: f64,
}

pub fn load_news_config() -> anyhow::Result<NewsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/news"))
        .add_source(
            config::Environment::with_prefix("CLIMATE_INSIGHT")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_content_config() -> anyhow::Result<ContentConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/content"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

impl ContentConfig {
    /// Validate and freeze the configured content into the immutable
    /// catalog injected into page sessions.
    pub fn into_catalog(self) -> anyhow::Result<Catalog> {
        let regions = self
            .regions
            .into_iter()
            .map(|r| Region {
                id: r.id,
                name: r.name,
                temperature: r.temperature,
                co2: r.co2,
                projections: r
                    .projections
                    .into_iter()
                    .map(|p| ClimatePoint {
                        year: p.year,
                        temperature: p.temperature,
                        precipitation: p.precipitation,
                    })
                    .collect(),
            })
            .collect();

        let warnings = self
            .warnings
            .into_iter()
            .map(|w| {
                let level = WarningLevel::parse(&w.level).ok_or_else(|| {
                    anyhow::anyhow!("warning {}: unknown level '{}'", w.id, w.level)
                })?;
                Ok(Warning {
                    id: w.id,
                    kind: w.kind,
                    level,
                    region: w.region,
                    description: w.description,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let hero_slides = self
            .hero_slides
            .into_iter()
            .map(|h| HeroSlide {
                title: h.title,
                tagline: h.tagline,
                image_url: h.image_url,
            })
            .collect();

        let global_trend = self
            .global_trend
            .into_iter()
            .map(|t| GlobalTrendPoint {
                year: t.year,
                temperature: t.temperature,
                co2: t.co2,
                sea_level: t.sea_level,
            })
            .collect();

        Ok(Catalog {
            regions,
            warnings,
            hero_slides,
            global_trend,
        })
    }
}
