// Per-page view-state and its reducer-style transitions
//
// One instance exists per mounted page. Every mutation is a total
// function driven by a user action or a timer tick; there is no ordering
// dependency between the individual flags.

use std::collections::BTreeSet;

use crate::domain::climate::Metric;
use crate::domain::rotation::{Carousel, HeroRotation, NEWS_WINDOW};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub dark_mode: bool,
    pub modal_open: bool,
    pub selected_region: String,
    pub selected_metrics: BTreeSet<Metric>,
    pub selected_warning: Option<u32>,
    pub carousel: Carousel,
    pub hero: HeroRotation,
}

impl ViewState {
    /// Fresh state for a newly mounted page: light theme, modal closed,
    /// every metric charted, first catalog region selected.
    pub fn new(default_region: String, hero_count: usize) -> Self {
        Self {
            dark_mode: false,
            modal_open: false,
            selected_region: default_region,
            selected_metrics: Metric::ALL.into_iter().collect(),
            selected_warning: None,
            carousel: Carousel::new(NEWS_WINDOW),
            hero: HeroRotation::new(hero_count),
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Symmetric difference with `{metric}`. Removing the last metric is
    /// valid and means "chart nothing".
    pub fn toggle_metric(&mut self, metric: Metric) {
        if !self.selected_metrics.remove(&metric) {
            self.selected_metrics.insert(metric);
        }
    }

    pub fn select_region(&mut self, region_id: String) {
        self.selected_region = region_id;
    }

    pub fn select_warning(&mut self, warning_id: u32) {
        self.selected_warning = Some(warning_id);
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    /// Idempotent: closing an already-closed modal is a no-op.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }
}
