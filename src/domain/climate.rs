// Static climate content domain models
//
// All of these are loaded once from the content configuration at startup
// and never mutated afterwards.

#[derive(Debug, Clone, PartialEq)]
pub struct ClimatePoint {
    pub year: i32,
    pub temperature: f64,
    pub precipitation: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub temperature: f64,
    pub co2: f64,
    pub projections: Vec<ClimatePoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningLevel {
    Low,
    Moderate,
    High,
    Severe,
}

impl WarningLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "high" => Some(Self::High),
            "severe" => Some(Self::Severe),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Severe => "severe",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub id: u32,
    pub kind: String,
    pub level: WarningLevel,
    pub region: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroSlide {
    pub title: String,
    pub tagline: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlobalTrendPoint {
    pub year: i32,
    pub temperature: f64,
    pub co2: f64,
    pub sea_level: f64,
}

/// Chartable metric toggled on the data-analysis page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Metric {
    Temperature,
    Co2,
    SeaLevel,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Temperature, Metric::Co2, Metric::SeaLevel];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "temperature" => Some(Self::Temperature),
            "co2" => Some(Self::Co2),
            "seaLevel" => Some(Self::SeaLevel),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Co2 => "co2",
            Self::SeaLevel => "seaLevel",
        }
    }
}

/// Immutable catalog of static content shared by every page session.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub regions: Vec<Region>,
    pub warnings: Vec<Warning>,
    pub hero_slides: Vec<HeroSlide>,
    pub global_trend: Vec<GlobalTrendPoint>,
}

impl Catalog {
    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn warning(&self, id: u32) -> Option<&Warning> {
        self.warnings.iter().find(|w| w.id == id)
    }
}
