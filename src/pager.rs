//! Carousel Paging
//!
//! Index arithmetic and slide state for the tile row.

use std::ops::Range;

use crate::config::PAGE_SIZE;

/// Carousel state: current page and whether the previous row is still sliding out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pager {
    page_size: usize,
    index: usize,
    /// Page whose row is animating out (Some while leaving)
    previous: Option<usize>,
    /// Bumped by every advance and reset; tags the pending exit animation
    epoch: u64,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            index: 0,
            previous: None,
            epoch: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    pub fn is_leaving(&self) -> bool {
        self.previous.is_some()
    }

    pub fn page_count(&self, tiles: usize) -> usize {
        tiles.div_ceil(self.page_size)
    }

    /// Move to the next page, wrapping after the last one.
    /// Returns the epoch to pass to `finish_leaving` once the exit animation
    /// ends, or None (changing nothing) while a row is still leaving or when
    /// there is only one page.
    pub fn advance(&mut self, tiles: usize) -> Option<u64> {
        if self.is_leaving() {
            return None;
        }
        let pages = self.page_count(tiles);
        if pages <= 1 {
            return None;
        }
        let current = self.index.min(pages - 1);
        self.previous = Some(current);
        self.index = if current + 1 >= pages { 0 } else { current + 1 };
        self.epoch += 1;
        Some(self.epoch)
    }

    /// Exit animation of the advance tagged `epoch` completed.
    /// Returns false if a later advance or reset superseded it.
    pub fn finish_leaving(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.previous = None;
        true
    }

    /// Go back to the first page, e.g. when the tile list changes
    pub fn reset(&mut self) {
        self.index = 0;
        self.previous = None;
        self.epoch += 1;
    }

    pub fn page_range(&self, index: usize, tiles: usize) -> Range<usize> {
        let start = (self.page_size * index).min(tiles);
        let end = (start + self.page_size).min(tiles);
        start..end
    }

    pub fn page<'a, T>(&self, items: &'a [T], index: usize) -> &'a [T] {
        &items[self.page_range(index, items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        let pager = Pager::new(6);
        assert_eq!(pager.page_count(0), 0);
        assert_eq!(pager.page_count(1), 1);
        assert_eq!(pager.page_count(6), 1);
        assert_eq!(pager.page_count(7), 2);
        assert_eq!(pager.page_count(19), 4);
    }

    #[test]
    fn test_advance_wraps_without_empty_page() {
        // 20 results: banner + 19 tiles -> pages of 6, 6, 6, 1
        let tiles: Vec<u32> = (0..19).collect();
        let mut pager = Pager::new(6);
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(pager.page(&tiles, pager.index()).len());
            let epoch = pager.advance(tiles.len()).unwrap();
            assert!(pager.finish_leaving(epoch));
        }
        assert_eq!(seen, vec![6, 6, 6, 1]);
        assert_eq!(pager.index(), 0);
    }

    #[test]
    fn test_advance_ignored_while_leaving() {
        let mut pager = Pager::new(6);
        let epoch = pager.advance(18).unwrap();
        assert_eq!(pager.index(), 1);
        assert_eq!(pager.previous(), Some(0));
        assert!(pager.advance(18).is_none());
        assert_eq!(pager.index(), 1);
        assert!(pager.finish_leaving(epoch));
        assert!(!pager.is_leaving());
        assert!(pager.advance(18).is_some());
        assert_eq!(pager.index(), 2);
    }

    #[test]
    fn test_single_page_never_leaves() {
        let mut pager = Pager::new(6);
        assert!(pager.advance(0).is_none());
        assert!(pager.advance(5).is_none());
        assert!(!pager.is_leaving());
        assert_eq!(pager.index(), 0);
    }

    #[test]
    fn test_shrunk_list_clamps_index() {
        let mut pager = Pager::new(6);
        for _ in 0..3 {
            let epoch = pager.advance(30).unwrap();
            pager.finish_leaving(epoch);
        }
        assert_eq!(pager.index(), 3);
        // list shrinks to 2 pages: index 3 is out of range, wrap from the last page
        assert!(pager.advance(12).is_some());
        assert_eq!(pager.previous(), Some(1));
        assert_eq!(pager.index(), 0);
    }

    #[test]
    fn test_page_slices() {
        let tiles: Vec<u32> = (0..8).collect();
        let pager = Pager::new(6);
        assert_eq!(pager.page(&tiles, 0), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(pager.page(&tiles, 1), &[6, 7]);
        assert!(pager.page(&tiles, 5).is_empty());
        assert_eq!(pager.page_range(1, 8), 6..8);
    }

    #[test]
    fn test_reset() {
        let mut pager = Pager::default();
        pager.advance(20);
        pager.reset();
        assert_eq!(pager.index(), 0);
        assert!(!pager.is_leaving());
    }

    #[test]
    fn test_finish_from_before_reset_is_ignored() {
        let mut pager = Pager::new(6);
        let stale = pager.advance(18).unwrap();
        pager.reset();
        let current = pager.advance(18).unwrap();

        // timer of the first advance fires while the second row is still entering
        assert!(!pager.finish_leaving(stale));
        assert!(pager.is_leaving());
        assert!(pager.advance(18).is_none());
        assert_eq!(pager.index(), 1);

        assert!(pager.finish_leaving(current));
        assert!(pager.advance(18).is_some());
    }
}
