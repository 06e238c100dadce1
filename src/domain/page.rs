// Navigation surface - the fixed set of dashboard pages
//
// Each page owns an independent view-state instance; nothing is shared
// between pages and nothing survives teardown.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    DataAnalysis,
    RegionalInsights,
    EarlyWarnings,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Home,
        Page::DataAnalysis,
        Page::RegionalInsights,
        Page::EarlyWarnings,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "home" => Some(Self::Home),
            "data-analysis" => Some(Self::DataAnalysis),
            "regional-insights" => Some(Self::RegionalInsights),
            "early-warnings" => Some(Self::EarlyWarnings),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::DataAnalysis => "data-analysis",
            Self::RegionalInsights => "regional-insights",
            Self::EarlyWarnings => "early-warnings",
        }
    }

    /// Only the home page carries the news carousel and hero banner.
    pub fn has_news(&self) -> bool {
        matches!(self, Self::Home)
    }

    pub fn has_hero(&self) -> bool {
        matches!(self, Self::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_parse_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::parse(page.as_str()), Some(page));
        }
        assert_eq!(Page::parse("login"), None);
    }
}
