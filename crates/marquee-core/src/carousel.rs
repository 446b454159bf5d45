//! Carousel pagination state machine.
//!
//! Partitions a fetched result list into fixed-size pages and cycles
//! through them on a trigger (click or timer), guarding against
//! overlapping transitions. The first element of the list never enters
//! the carousel — it is reserved for the featured banner.

use std::ops::Range;

/// Default number of cards per carousel page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Transition phase of the carousel.
///
/// Only two edges exist: `Idle → Transitioning` on an accepted advance,
/// `Transitioning → Idle` when the animation reports completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Transitioning,
}

/// Pagination and transition controller for a fixed result list.
///
/// `len` counts the whole list including the banner entry at index 0.
/// While a transition is in flight, further advance requests are ignored
/// until [`Carousel::transition_complete`] is called by the animation
/// layer.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    page_size: usize,
    page: usize,
    phase: Phase,
}

impl Carousel {
    pub fn new(len: usize, page_size: usize) -> Self {
        Self {
            len,
            page_size: page_size.max(1),
            page: 0,
            phase: Phase::Idle,
        }
    }

    /// Reinitialize for a freshly fetched list: page 0, idle.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.page = 0;
        self.phase = Phase::Idle;
    }

    /// Total length of the underlying list, banner entry included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current page index, always within `[0, max_page]`.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    /// Highest reachable page index: `max(0, (len − 1) / page_size − 1)`.
    ///
    /// The trailing partial page is never shown, so the last full page is
    /// the wrap point. Clamped to 0 for lists of one or fewer entries.
    pub fn max_page(&self) -> usize {
        if self.len <= 1 {
            return 0;
        }
        ((self.len - 1) / self.page_size).saturating_sub(1)
    }

    /// Advance to the next page, wrapping at the end.
    ///
    /// Returns `false` without touching any state while a transition is
    /// already in flight — rapid repeated triggers advance at most once.
    /// On `true` the caller owns starting the slide animation and must
    /// eventually deliver [`Carousel::transition_complete`].
    pub fn request_advance(&mut self) -> bool {
        if self.phase == Phase::Transitioning {
            return false;
        }
        self.phase = Phase::Transitioning;
        self.page = if self.page == self.max_page() {
            0
        } else {
            self.page + 1
        };
        true
    }

    /// Mark the in-flight transition as finished.
    ///
    /// Idempotent: safe to call without a prior accepted advance (the
    /// initial-mount case), it simply leaves the carousel idle.
    pub fn transition_complete(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Index range of the currently visible page.
    ///
    /// Index 0 is reserved for the banner, so page 0 starts at index 1.
    /// Empty for lists of one or fewer entries.
    pub fn visible_range(&self) -> Range<usize> {
        let start = (1 + self.page * self.page_size).min(self.len);
        let end = (start + self.page_size).min(self.len);
        start..end
    }

    /// The visible page of `items`, clamped to the slice actually given.
    pub fn visible_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.visible_range();
        let start = range.start.min(items.len());
        let end = range.end.min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_page_formula() {
        // max_page = max(0, floor((n - 1) / 6) - 1) for every list length.
        for n in 2..=60 {
            let carousel = Carousel::new(n, 6);
            let expected = ((n - 1) / 6).saturating_sub(1);
            assert_eq!(carousel.max_page(), expected, "n = {n}");
        }
    }

    #[test]
    fn test_wraps_at_last_page() {
        // 20 results, page size 6: floor(19/6) - 1 = 2.
        let mut carousel = Carousel::new(20, 6);
        assert_eq!(carousel.max_page(), 2);

        for expected in [1, 2, 0, 1] {
            assert!(carousel.request_advance());
            assert_eq!(carousel.page(), expected);
            carousel.transition_complete();
        }
    }

    #[test]
    fn test_advance_is_guarded_while_transitioning() {
        let mut carousel = Carousel::new(20, 6);

        assert!(carousel.request_advance());
        assert!(carousel.is_transitioning());
        assert_eq!(carousel.page(), 1);

        // Rapid repeated triggers change the page at most once.
        assert!(!carousel.request_advance());
        assert!(!carousel.request_advance());
        assert_eq!(carousel.page(), 1);

        carousel.transition_complete();
        assert!(carousel.request_advance());
        assert_eq!(carousel.page(), 2);
    }

    #[test]
    fn test_visible_slice_skips_banner_entry() {
        let items: Vec<u32> = (0..20).collect();
        let carousel = Carousel::new(items.len(), 6);

        assert_eq!(carousel.visible_range(), 1..7);
        assert_eq!(carousel.visible_slice(&items), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_visible_slice_follows_page() {
        let items: Vec<u32> = (0..20).collect();
        let mut carousel = Carousel::new(items.len(), 6);

        carousel.request_advance();
        carousel.transition_complete();
        assert_eq!(carousel.visible_slice(&items), &[7, 8, 9, 10, 11, 12]);

        carousel.request_advance();
        carousel.transition_complete();
        assert_eq!(carousel.visible_slice(&items), &[13, 14, 15, 16, 17, 18]);
    }

    #[test]
    fn test_short_lists_clamp_to_empty() {
        for n in [0, 1] {
            let carousel = Carousel::new(n, 6);
            assert_eq!(carousel.max_page(), 0, "n = {n}");
            assert!(carousel.visible_range().is_empty(), "n = {n}");
            assert!(carousel.visible_slice(&[0u32; 1][..n]).is_empty());
        }
    }

    #[test]
    fn test_single_page_wraps_to_itself() {
        let mut carousel = Carousel::new(7, 6);
        assert_eq!(carousel.max_page(), 0);

        assert!(carousel.request_advance());
        assert_eq!(carousel.page(), 0);
        assert!(carousel.is_transitioning());
    }

    #[test]
    fn test_transition_complete_is_idempotent() {
        let mut carousel = Carousel::new(20, 6);

        // Initial-mount case: completion without a prior advance.
        carousel.transition_complete();
        assert!(!carousel.is_transitioning());

        carousel.request_advance();
        carousel.transition_complete();
        carousel.transition_complete();
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut carousel = Carousel::new(20, 6);
        carousel.request_advance();

        carousel.reset(13);
        assert_eq!(carousel.page(), 0);
        assert!(!carousel.is_transitioning());
        assert_eq!(carousel.max_page(), 1);
    }

    #[test]
    fn test_page_size_is_clamped() {
        let carousel = Carousel::new(20, 0);
        assert_eq!(carousel.visible_range(), 1..2);
    }
}
