//! Modal dialog frame.
//!
//! Draws a centered, bordered overlay; dialogs render their content into
//! [`Modal::inner`].

use crate::borders::{ROUNDED_BORDER, RoundedBorder};
use crate::key_hints::{KeyHint, KeyHintsBar};
use crate::style::{AMBER, SURFACE_0};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Widget};

/// A modal container widget.
pub struct Modal<'a> {
    title: &'a str,
    width_percent: u16,
    height: u16,
    key_hints: Vec<KeyHint>,
}

impl<'a> Modal<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            width_percent: 60,
            height: 10,
            key_hints: Vec::new(),
        }
    }

    /// Set the width as percentage of screen.
    pub fn width_percent(mut self, percent: u16) -> Self {
        self.width_percent = percent.clamp(20, 90);
        self
    }

    /// Set the height in lines, borders included.
    pub fn height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }

    pub fn key_hints<H: Into<KeyHint>>(mut self, hints: impl IntoIterator<Item = H>) -> Self {
        self.key_hints = hints.into_iter().map(Into::into).collect();
        self
    }

    /// Calculate the modal area centered in the given area.
    pub fn centered_area(&self, area: Rect) -> Rect {
        let width = (area.width * self.width_percent / 100)
            .max(20)
            .min(area.width);
        let height = self.height.min(area.height.saturating_sub(2));

        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;

        Rect::new(x, y, width, height)
    }

    /// Content area inside the border, minus the key hints row.
    pub fn inner(&self, area: Rect) -> Rect {
        let modal_area = self.centered_area(area);
        let mut inner = RoundedBorder::new().inner(modal_area);

        if !self.key_hints.is_empty() && inner.height > 1 {
            inner.height -= 1;
        }

        inner
    }
}

impl Widget for Modal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = self.centered_area(area);

        if modal_area.height < 3 || modal_area.width < 10 {
            return;
        }

        Clear.render(modal_area, buf);
        for y in modal_area.y..modal_area.bottom() {
            for x in modal_area.x..modal_area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(SURFACE_0);
                }
            }
        }

        Block::default()
            .title(format!(" {} ", self.title))
            .title_style(Style::default().fg(AMBER).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDER)
            .border_style(Style::default().fg(AMBER))
            .render(modal_area, buf);

        if !self.key_hints.is_empty() {
            let inner = RoundedBorder::new().inner(modal_area);
            let hints_area = Rect::new(
                inner.x,
                inner.y + inner.height.saturating_sub(1),
                inner.width,
                1,
            );
            KeyHintsBar::new().hints(self.key_hints).render(hints_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_centered_area() {
        let modal = Modal::new("Delete").width_percent(50).height(10);
        let centered = modal.centered_area(Rect::new(0, 0, 100, 40));

        assert_eq!(centered, Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn test_modal_fits_small_screen() {
        let modal = Modal::new("Delete").height(12);
        let centered = modal.centered_area(Rect::new(0, 0, 16, 8));

        assert_eq!(centered.width, 16);
        assert_eq!(centered.height, 6);
    }

    #[test]
    fn test_inner_reserves_hint_row() {
        let area = Rect::new(0, 0, 100, 40);
        let plain = Modal::new("Delete").height(8).inner(area);
        let hinted = Modal::new("Delete")
            .height(8)
            .key_hints(vec![("Enter", "Confirm")])
            .inner(area);

        assert_eq!(plain.height, 6);
        assert_eq!(hinted.height, 5);
    }
}
