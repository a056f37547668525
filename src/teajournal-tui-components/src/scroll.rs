//! Scroll state shared by list-like components.

use crate::style::{SURFACE_1, TEXT_MUTED};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget};

/// State for scrollable content.
///
/// # Example
///
/// ```rust
/// use teajournal_tui_components::scroll::ScrollState;
///
/// let mut scroll = ScrollState::new(12, 5); // 12 rows, 5 visible
///
/// scroll.ensure_visible(9);
/// assert_eq!(scroll.visible_range(), 5..10);
/// ```
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Total number of items
    total: usize,
    /// Number of visible items
    visible: usize,
    /// Current scroll offset
    offset: usize,
}

impl ScrollState {
    /// Create a new scroll state.
    pub fn new(total: usize, visible: usize) -> Self {
        Self {
            total,
            visible,
            offset: 0,
        }
    }

    /// Get the current scroll offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Set the total number of items.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.clamp_offset();
    }

    /// Set the number of visible items.
    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible;
        self.clamp_offset();
    }

    /// Scroll to the top.
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// Adjust the offset so that `index` is on screen.
    pub fn ensure_visible(&mut self, index: usize) {
        if self.visible == 0 {
            return;
        }
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.visible {
            self.offset = index.saturating_sub(self.visible.saturating_sub(1));
        }
        self.clamp_offset();
    }

    /// Check if an item at the given index is currently visible.
    pub fn is_visible(&self, index: usize) -> bool {
        index >= self.offset && index < self.offset + self.visible
    }

    /// Check if scrollbar is needed (total > visible).
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.visible
    }

    /// Get the range of currently visible items.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let start = self.offset;
        let end = (self.offset + self.visible).min(self.total);
        start..end
    }

    fn clamp_offset(&mut self) {
        if self.total <= self.visible {
            self.offset = 0;
        } else {
            self.offset = self.offset.min(self.total - self.visible);
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(0, 10)
    }
}

/// Render a vertical scrollbar for the given scroll state.
pub fn render_scrollbar(area: Rect, buf: &mut Buffer, scroll: &ScrollState) {
    if !scroll.needs_scrollbar() || area.width == 0 || area.height == 0 {
        return;
    }

    let scrollable_range = scroll.total.saturating_sub(scroll.visible);
    let mut scrollbar_state = ScrollbarState::new(scrollable_range).position(scroll.offset);

    Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .track_symbol(Some("│"))
        .track_style(Style::default().fg(SURFACE_1))
        .thumb_symbol("█")
        .thumb_style(Style::default().fg(TEXT_MUTED))
        .render(area, buf, &mut scrollbar_state);
}
