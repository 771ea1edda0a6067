//! Viewport management for scrolling.
//!
//! The [`Viewport`] tracks which display rows of the transcript table are on
//! screen. A record occupies one row per wrapped content line, so row counts
//! come from [`super::layout`], not from the number of records.

use std::ops::Range;

/// Manages the visible portion of the transcript table.
///
/// # Example
///
/// ```
/// use parley::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 20, 100);
/// assert_eq!(vp.visible_range(), 0..20);
///
/// vp.ensure_visible(30);
/// assert_eq!(vp.visible_range(), 11..31);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    total_rows: usize,
}

impl Viewport {
    /// Create a viewport `height` rows tall over `total_rows` display rows.
    pub const fn new(width: u16, height: u16, total_rows: usize) -> Self {
        Self {
            width,
            height,
            offset: 0,
            total_rows,
        }
    }

    /// First visible row.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Rows currently on screen, clamped to the table.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset;
        let end = (self.offset + self.height as usize).min(self.total_rows);
        start..end
    }

    pub const fn can_scroll_up(&self) -> bool {
        self.offset > 0
    }

    pub const fn can_scroll_down(&self) -> bool {
        self.offset < self.max_offset()
    }

    pub const fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    /// Scroll the minimum amount that puts `row` on screen.
    pub fn ensure_visible(&mut self, row: usize) {
        let height = self.height as usize;
        if height == 0 {
            self.offset = row.min(self.max_offset());
            return;
        }
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + height {
            self.offset = row + 1 - height;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the row count after an edit or reflow.
    pub fn set_total_rows(&mut self, total: usize) {
        self.total_rows = total;
        self.offset = self.offset.min(self.max_offset());
    }

    const fn max_offset(&self) -> usize {
        self.total_rows.saturating_sub(self.height as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_viewport_starts_at_top() {
        let vp = Viewport::new(80, 24, 100);
        assert_eq!(vp.offset(), 0);
        assert_eq!(vp.visible_range(), 0..24);
    }

    #[test]
    fn test_visible_range_with_short_table() {
        let vp = Viewport::new(80, 24, 10);
        assert_eq!(vp.visible_range(), 0..10);
        assert!(!vp.can_scroll_down());
    }

    #[test]
    fn test_scroll_down_clamps_to_max() {
        let mut vp = Viewport::new(80, 24, 100);
        vp.scroll_down(1000);
        assert_eq!(vp.offset(), 76);
        assert!(!vp.can_scroll_down());
    }

    #[test]
    fn test_scroll_up_clamps_to_zero() {
        let mut vp = Viewport::new(80, 24, 100);
        vp.scroll_down(10);
        vp.scroll_up(100);
        assert_eq!(vp.offset(), 0);
        assert!(!vp.can_scroll_up());
    }

    #[test]
    fn test_ensure_visible_below_scrolls_minimally() {
        let mut vp = Viewport::new(80, 10, 100);
        vp.ensure_visible(15);
        assert_eq!(vp.offset(), 6);
        assert!(vp.visible_range().contains(&15));
    }

    #[test]
    fn test_ensure_visible_above_scrolls_to_row() {
        let mut vp = Viewport::new(80, 10, 100);
        vp.scroll_down(50);
        vp.ensure_visible(20);
        assert_eq!(vp.offset(), 20);
    }

    #[test]
    fn test_ensure_visible_inside_does_not_move() {
        let mut vp = Viewport::new(80, 10, 100);
        vp.scroll_down(5);
        vp.ensure_visible(9);
        assert_eq!(vp.offset(), 5);
    }

    #[test]
    fn test_resize_keeps_valid_offset() {
        let mut vp = Viewport::new(80, 24, 100);
        vp.scroll_down(50);
        vp.resize(80, 60);
        assert_eq!(vp.offset(), 40);
        assert_eq!(vp.width(), 80);
    }

    #[test]
    fn test_set_total_rows_adjusts_offset() {
        let mut vp = Viewport::new(80, 24, 100);
        vp.scroll_down(80);
        vp.set_total_rows(50);
        assert_eq!(vp.offset(), 26);
        assert_eq!(vp.total_rows(), 50);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn scroll_never_exceeds_bounds(
                total_rows in 1..10000usize,
                height in 1..100u16,
                scroll_amount in 0..10000usize,
            ) {
                let mut vp = Viewport::new(80, height, total_rows);
                vp.scroll_down(scroll_amount);

                let max = total_rows.saturating_sub(height as usize);
                prop_assert!(vp.offset() <= max);
            }

            #[test]
            fn ensure_visible_shows_row(
                total_rows in 1..10000usize,
                height in 1..100u16,
                start in 0..10000usize,
                row_seed in 0..10000usize,
            ) {
                let mut vp = Viewport::new(80, height, total_rows);
                vp.scroll_down(start);
                let row = row_seed % total_rows;
                vp.ensure_visible(row);
                prop_assert!(vp.visible_range().contains(&row));
            }

            #[test]
            fn visible_range_within_bounds(
                total_rows in 0..10000usize,
                height in 1..100u16,
                offset in 0..10000usize,
            ) {
                let mut vp = Viewport::new(80, height, total_rows);
                vp.scroll_down(offset);

                let range = vp.visible_range();
                prop_assert!(range.start <= range.end);
                prop_assert!(range.end <= total_rows);
            }
        }
    }
}
