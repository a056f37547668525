//! Tea Journal palette.
//!
//! Warm tea-house colors on a dark base. All components take their colors
//! from here, never hardcode them.

use ratatui::style::{Color, Modifier, Style};

// ============================================================
// BRAND COLORS
// ============================================================

/// Matcha green - main accent color
pub const MATCHA: Color = Color::Rgb(141, 190, 90); // #8DBE5A

/// Amber - secondary accent (pills, highlights)
pub const AMBER: Color = Color::Rgb(222, 164, 78); // #DEA44E

/// Oolong brown - dark accent
pub const OOLONG: Color = Color::Rgb(120, 78, 42); // #784E2A

// ============================================================
// BACKGROUND COLORS
// ============================================================

/// Main background
pub const VOID: Color = Color::Rgb(24, 20, 17); // #181411

/// Surface level 0 - darkest surface
pub const SURFACE_0: Color = Color::Rgb(32, 27, 23); // #201B17

/// Surface level 1 - input fields
pub const SURFACE_1: Color = Color::Rgb(46, 39, 33); // #2E2721

/// Surface level 2 - highlighted rows
pub const SURFACE_2: Color = Color::Rgb(66, 55, 45); // #42372D

// ============================================================
// TEXT COLORS
// ============================================================

/// Primary text
pub const TEXT: Color = Color::Rgb(242, 236, 226); // #F2ECE2

/// Dimmed text - secondary information
pub const TEXT_DIM: Color = Color::Rgb(176, 163, 146); // #B0A392

/// Muted text - placeholders
pub const TEXT_MUTED: Color = Color::Rgb(116, 104, 90); // #74685A

// ============================================================
// SEMANTIC COLORS
// ============================================================

/// Success messages
pub const SUCCESS: Color = Color::Rgb(141, 190, 90); // #8DBE5A

/// Errors and destructive actions
pub const ERROR: Color = Color::Rgb(232, 104, 92); // #E8685C

// ============================================================
// BORDER COLORS
// ============================================================

/// Normal border
pub const BORDER: Color = Color::Rgb(84, 70, 58); // #54463A

/// Focused border
pub const BORDER_FOCUS: Color = MATCHA;

/// Pre-configured styles for common elements.
pub struct JournalStyle;

impl JournalStyle {
    /// Header style: bold primary text
    #[inline]
    pub fn header() -> Style {
        Style::default().fg(MATCHA).add_modifier(Modifier::BOLD)
    }

    /// Label of the focused field
    #[inline]
    pub fn label_focused() -> Style {
        Style::default().fg(MATCHA).add_modifier(Modifier::BOLD)
    }

    #[inline]
    pub fn label() -> Style {
        Style::default().fg(TEXT)
    }

    /// Placeholder text inside an empty input
    #[inline]
    pub fn placeholder() -> Style {
        Style::default().fg(TEXT_MUTED)
    }

    /// Error style
    #[inline]
    pub fn error() -> Style {
        Style::default().fg(ERROR)
    }

    /// Success style
    #[inline]
    pub fn success() -> Style {
        Style::default().fg(SUCCESS)
    }

    /// Dimmed style: secondary text color
    #[inline]
    pub fn dimmed() -> Style {
        Style::default().fg(TEXT_DIM)
    }

    /// Selected pill body
    #[inline]
    pub fn pill() -> Style {
        Style::default().fg(VOID).bg(AMBER)
    }

    /// Removal control inside a pill
    #[inline]
    pub fn pill_remove() -> Style {
        Style::default()
            .fg(OOLONG)
            .bg(AMBER)
            .add_modifier(Modifier::BOLD)
    }

    /// Push button, focused or not
    #[inline]
    pub fn button(focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(SURFACE_0)
                .bg(MATCHA)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_DIM).bg(SURFACE_1)
        }
    }
}
