//! Border styles and utilities.

use crate::style::{BORDER, BORDER_FOCUS, MATCHA};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::border::Set as BorderSet;
use ratatui::widgets::{Block, Borders, Widget};

/// Rounded border character set used throughout the journal.
pub const ROUNDED_BORDER: BorderSet = BorderSet {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    horizontal_top: "─",
    horizontal_bottom: "─",
    vertical_left: "│",
    vertical_right: "│",
};

/// A pre-configured rounded border widget.
///
/// Used for tea cards and dialog frames.
#[derive(Clone, Default)]
pub struct RoundedBorder<'a> {
    title: Option<&'a str>,
    focused: bool,
}

impl<'a> RoundedBorder<'a> {
    /// Create a new rounded border.
    pub fn new() -> Self {
        Self {
            title: None,
            focused: false,
        }
    }

    /// Set the border title.
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the focused state.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Create a ratatui Block from this configuration.
    pub fn to_block(&self) -> Block<'_> {
        let border_color = if self.focused { BORDER_FOCUS } else { BORDER };
        let title_color = if self.focused { MATCHA } else { BORDER };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDER)
            .border_style(Style::default().fg(border_color));

        if let Some(title) = self.title {
            block = block
                .title(format!(" {} ", title))
                .title_style(Style::default().fg(title_color));
        }

        block
    }

    /// Calculate the inner area after accounting for borders.
    pub fn inner(&self, area: Rect) -> Rect {
        self.to_block().inner(area)
    }
}

impl Widget for RoundedBorder<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.to_block().render(area, buf);
    }
}
