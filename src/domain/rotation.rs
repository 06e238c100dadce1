// Carousel rotation arithmetic
//
// Pure offset bookkeeping for the rotating news window and the hero
// banner. The timers that drive these live in the application layer;
// everything here is synchronous and clock-free so the stepping rules
// can be tested exhaustively.

use std::ops::Range;

/// Number of articles shown at once in the news carousel.
pub const NEWS_WINDOW: usize = 3;

/// Start offset of the visible window into a larger list.
///
/// The offset is always a multiple of `window` and stays inside
/// `[0, total)` for any non-empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    offset: usize,
    window: usize,
}

impl Carousel {
    pub fn new(window: usize) -> Self {
        Self { offset: 0, window }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Advance by one window, wrapping to the start once the next window
    /// would begin at or past the end of the list. An empty list pins the
    /// offset at 0.
    pub fn advance(&mut self, total: usize) {
        if total == 0 {
            self.offset = 0;
            return;
        }
        self.offset = if self.offset + self.window >= total {
            0
        } else {
            self.offset + self.window
        };
    }

    /// Jump directly to the given window page (the carousel dots).
    /// Returns false when the page is out of range.
    pub fn seek(&mut self, page_idx: usize, total: usize) -> bool {
        if page_idx >= Self::page_count(total, self.window) {
            return false;
        }
        self.offset = page_idx * self.window;
        true
    }

    /// The list must be reset whenever the underlying collection is
    /// replaced, so a stale offset never indexes past the new length.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Index range of the currently visible items.
    pub fn visible(&self, total: usize) -> Range<usize> {
        let start = self.offset.min(total);
        let end = (self.offset + self.window).min(total);
        start..end
    }

    pub fn page_count(total: usize, window: usize) -> usize {
        total.div_ceil(window)
    }
}

/// Fixed-size slide cycler for the hero banner, advanced by simple
/// modulo stepping rather than window offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroRotation {
    index: usize,
    count: usize,
}

impl HeroRotation {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) {
        if self.count == 0 {
            return;
        }
        self.index = (self.index + 1) % self.count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps_after_ceil_n_over_window_steps() {
        for total in 0..=20usize {
            let mut carousel = Carousel::new(NEWS_WINDOW);
            let steps = Carousel::page_count(total, NEWS_WINDOW);
            for _ in 0..steps {
                carousel.advance(total);
                if total > 0 {
                    assert!(carousel.offset() < total);
                }
                assert_eq!(carousel.offset() % NEWS_WINDOW, 0);
            }
            assert_eq!(carousel.offset(), 0, "total = {total}");
        }
    }

    #[test]
    fn test_seven_articles_visit_offsets_in_order() {
        let mut carousel = Carousel::new(NEWS_WINDOW);
        let mut visited = vec![carousel.offset()];
        for _ in 0..5 {
            carousel.advance(7);
            visited.push(carousel.offset());
        }
        assert_eq!(visited, vec![0, 3, 6, 0, 3, 6]);
    }

    #[test]
    fn test_empty_list_never_moves() {
        let mut carousel = Carousel::new(NEWS_WINDOW);
        for _ in 0..10 {
            carousel.advance(0);
            assert_eq!(carousel.offset(), 0);
        }
    }

    #[test]
    fn test_visible_window_clamps_to_list_end() {
        let mut carousel = Carousel::new(NEWS_WINDOW);
        carousel.advance(7);
        carousel.advance(7);
        assert_eq!(carousel.visible(7), 6..7);
    }

    #[test]
    fn test_seek_rejects_out_of_range_page() {
        let mut carousel = Carousel::new(NEWS_WINDOW);
        assert!(carousel.seek(2, 7));
        assert_eq!(carousel.offset(), 6);
        assert!(!carousel.seek(3, 7));
        assert_eq!(carousel.offset(), 6);
    }

    #[test]
    fn test_hero_rotation_wraps_modulo_count() {
        let mut hero = HeroRotation::new(3);
        let indexes: Vec<usize> = (0..7)
            .map(|_| {
                hero.advance();
                hero.index()
            })
            .collect();
        assert_eq!(indexes, vec![1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_hero_rotation_with_no_slides_is_inert() {
        let mut hero = HeroRotation::new(0);
        hero.advance();
        assert_eq!(hero.index(), 0);
    }
}
