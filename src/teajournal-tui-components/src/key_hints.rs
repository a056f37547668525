//! Key hints bar component.
//!
//! Displays keyboard shortcut hints in the footer.

use crate::style::{MATCHA, SURFACE_1, TEXT_DIM};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

/// A single key hint (key + description).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: String,
    pub description: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }

    fn width(&self) -> usize {
        self.key.width() + 1 + self.description.width()
    }
}

impl<'a, 'b> From<(&'a str, &'b str)> for KeyHint {
    fn from((key, desc): (&'a str, &'b str)) -> Self {
        Self::new(key, desc)
    }
}

/// A horizontal bar of key hints.
///
/// Renders hints in a compact format: `Tab Next · Ctrl+A Add · Esc Close`.
/// Hints that do not fit are dropped.
pub struct KeyHintsBar {
    hints: Vec<KeyHint>,
    separator: String,
}

impl KeyHintsBar {
    pub fn new() -> Self {
        Self {
            hints: Vec::new(),
            separator: " · ".to_string(),
        }
    }

    pub fn hint(mut self, key: impl Into<String>, description: impl Into<String>) -> Self {
        self.hints.push(KeyHint::new(key, description));
        self
    }

    pub fn hints(mut self, hints: impl IntoIterator<Item = KeyHint>) -> Self {
        self.hints.extend(hints);
        self
    }

    /// Calculate the total width needed for all hints.
    pub fn total_width(&self) -> usize {
        let sep = self.separator.width();
        self.hints
            .iter()
            .enumerate()
            .map(|(i, hint)| if i > 0 { sep + hint.width() } else { hint.width() })
            .sum()
    }

    fn hints_that_fit(&self, max_width: usize) -> Vec<&KeyHint> {
        let mut result = Vec::new();
        let mut current_width = 0;

        for hint in &self.hints {
            let needed = if result.is_empty() {
                hint.width()
            } else {
                self.separator.width() + hint.width()
            };

            if current_width + needed <= max_width {
                result.push(hint);
                current_width += needed;
            }
        }

        result
    }
}

impl Default for KeyHintsBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for KeyHintsBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 10 {
            return;
        }

        let bg_style = Style::default().bg(SURFACE_1);
        for x in area.x..area.right() {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_style(bg_style);
            }
        }

        let hints = self.hints_that_fit(area.width.saturating_sub(2) as usize);
        let key_style = Style::default().fg(MATCHA).bg(SURFACE_1);
        let desc_style = Style::default().fg(TEXT_DIM).bg(SURFACE_1);

        let mut x = area.x + 1;
        let right = area.right();

        for (i, hint) in hints.iter().enumerate() {
            if i > 0 {
                x = buf.set_stringn(x, area.y, &self.separator, (right - x) as usize, desc_style).0;
            }
            x = buf.set_stringn(x, area.y, &hint.key, (right - x) as usize, key_style).0;
            x = buf.set_stringn(x, area.y, " ", (right - x) as usize, desc_style).0;
            x = buf.set_stringn(x, area.y, &hint.description, (right - x) as usize, desc_style).0;
        }
    }
}
