//! Text input component.
//!
//! Single-line text input with a grapheme-aware cursor.

use crate::component::{Component, ComponentResult, FocusState};
use crate::style::{MATCHA, SURFACE_1, TEXT, TEXT_MUTED};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use std::cell::Cell;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// State for a text input.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current text value
    pub value: String,
    /// Cursor position (in graphemes)
    pub cursor: usize,
    pub placeholder: Option<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial value, cursor at the end.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Replace the whole value and move the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.grapheme_count();
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        let byte_offset = self.grapheme_to_byte_offset(self.cursor);
        let before = self.grapheme_count();
        self.value.insert(byte_offset, c);
        // A combining mark merges into the previous grapheme.
        if self.grapheme_count() > before {
            self.cursor += 1;
        }
    }

    /// Insert text at cursor (for paste).
    pub fn insert_str(&mut self, text: &str) {
        let byte_offset = self.grapheme_to_byte_offset(self.cursor);
        let before = self.grapheme_count();
        self.value.insert_str(byte_offset, text);
        self.cursor += self.grapheme_count() - before;
    }

    /// Delete the grapheme before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let new_cursor = self.cursor - 1;
            let start_byte = self.grapheme_to_byte_offset(new_cursor);
            let end_byte = self.grapheme_to_byte_offset(self.cursor);
            self.value.replace_range(start_byte..end_byte, "");
            self.cursor = new_cursor;
        }
    }

    /// Delete the grapheme at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.grapheme_count() {
            let start_byte = self.grapheme_to_byte_offset(self.cursor);
            let end_byte = self.grapheme_to_byte_offset(self.cursor + 1);
            self.value.replace_range(start_byte..end_byte, "");
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.grapheme_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    /// Move the cursor to the grapheme under display column `column`.
    pub fn move_to_column(&mut self, column: usize) {
        let mut width = 0;
        for (idx, g) in self.value.graphemes(true).enumerate() {
            let w = g.width();
            if column < width + w {
                self.cursor = idx;
                return;
            }
            width += w;
        }
        self.move_end();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Display width of the text before the cursor.
    pub fn cursor_column(&self) -> usize {
        self.value.graphemes(true).take(self.cursor).map(|g| g.width()).sum()
    }

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    fn grapheme_to_byte_offset(&self, grapheme_idx: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(grapheme_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.value.len())
    }
}

/// Apply a line-editing key to `state`.
///
/// Shared by every component that embeds an [`InputState`]. Returns `None`
/// for keys that are not line-editing keys, otherwise `Some(changed)` where
/// `changed` is false when only the cursor moved.
pub fn apply_edit_key(state: &mut InputState, key: KeyEvent) -> Option<bool> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Backspace => {
            state.backspace();
            Some(true)
        }
        KeyCode::Delete => {
            state.delete();
            Some(true)
        }
        KeyCode::Char('u') if ctrl => {
            state.clear();
            Some(true)
        }
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            state.insert(c);
            Some(true)
        }
        KeyCode::Left => {
            state.move_left();
            Some(false)
        }
        KeyCode::Right => {
            state.move_right();
            Some(false)
        }
        KeyCode::Home => {
            state.move_home();
            Some(false)
        }
        KeyCode::End => {
            state.move_end();
            Some(false)
        }
        _ => None,
    }
}

/// A single-line text input widget.
pub struct TextInput<'a> {
    state: &'a InputState,
    focused: bool,
}

impl<'a> TextInput<'a> {
    pub fn new(state: &'a InputState) -> Self {
        Self {
            state,
            focused: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Number of leading display columns hidden so the cursor stays on screen.
    fn scroll_columns(&self, width: usize) -> usize {
        let cursor = self.state.cursor_column();
        if cursor < width { 0 } else { cursor + 1 - width }
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let bg_style = Style::default().bg(SURFACE_1);
        for col in area.x..area.right() {
            if let Some(cell) = buf.cell_mut((col, area.y)) {
                cell.reset();
                cell.set_style(bg_style);
            }
        }

        let width = area.width as usize;
        if self.state.is_empty() {
            let placeholder = self.state.placeholder.as_deref().unwrap_or("");
            buf.set_stringn(
                area.x,
                area.y,
                placeholder,
                width,
                Style::default().fg(TEXT_MUTED).bg(SURFACE_1),
            );
        } else {
            let skip = self.scroll_columns(width);
            let mut col = 0;
            let mut x = area.x;
            for g in self.state.value.graphemes(true) {
                let w = g.width();
                if col >= skip {
                    if x as usize + w > area.right() as usize {
                        break;
                    }
                    buf.set_string(x, area.y, g, Style::default().fg(TEXT).bg(SURFACE_1));
                    x += w as u16;
                }
                col += w;
            }
        }

        if self.focused {
            let offset = self.state.cursor_column() - self.scroll_columns(width);
            let cursor_x = area.x + offset as u16;
            if cursor_x < area.right()
                && let Some(cell) = buf.cell_mut((cursor_x, area.y))
            {
                cell.set_bg(MATCHA).set_fg(SURFACE_1);
            }
        }
    }
}

/// An interactive text input component.
pub struct TextInputComponent {
    pub state: InputState,
    focused: bool,
    last_area: Cell<Option<Rect>>,
}

impl TextInputComponent {
    pub fn new() -> Self {
        Self {
            state: InputState::new(),
            focused: false,
            last_area: Cell::new(None),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.state = self.state.with_value(value);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.state = self.state.with_placeholder(placeholder);
        self
    }

    pub fn value(&self) -> &str {
        &self.state.value
    }

    /// Value with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.state.value.trim()
    }
}

impl Default for TextInputComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TextInputComponent {
    type Output = String;

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let row = Rect { height: area.height.min(1), ..area };
        self.last_area.set(Some(row));
        TextInput::new(&self.state).focused(self.focused).render(row, buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<Self::Output> {
        if apply_edit_key(&mut self.state, key).is_some() {
            return ComponentResult::Handled;
        }
        match key.code {
            KeyCode::Enter => ComponentResult::Done(self.state.value.clone()),
            _ => ComponentResult::NotHandled,
        }
    }

    fn focus_state(&self) -> FocusState {
        if self.focused {
            FocusState::Editing
        } else {
            FocusState::Unfocused
        }
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![("Enter", "Next"), ("Ctrl+U", "Clear")]
    }

    fn handle_paste(&mut self, text: &str) -> bool {
        // Single-line field: newlines become spaces.
        let flat = text.replace(['\r', '\n'], " ");
        self.state.insert_str(&flat);
        true
    }

    fn handle_click(&mut self, column: u16, row: u16) -> ComponentResult<Self::Output> {
        match self.last_area.get() {
            Some(area) if area.contains((column, row).into()) => {
                let skip = TextInput::new(&self.state).scroll_columns(area.width as usize);
                self.state.move_to_column((column - area.x) as usize + skip);
                ComponentResult::Handled
            }
            _ => ComponentResult::NotHandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_input_state_basic() {
        let mut state = InputState::new();

        state.insert('G');
        state.insert('y');
        assert_eq!(state.value, "Gy");
        assert_eq!(state.cursor, 2);

        state.backspace();
        assert_eq!(state.value, "G");
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_input_state_navigation() {
        let mut state = InputState::new().with_value("Sencha");
        assert_eq!(state.cursor, 6);

        state.move_left();
        assert_eq!(state.cursor, 5);

        state.move_home();
        assert_eq!(state.cursor, 0);
        state.delete();
        assert_eq!(state.value, "encha");

        state.move_end();
        assert_eq!(state.cursor, 5);
    }

    #[test]
    fn test_input_state_graphemes() {
        let mut state = InputState::new().with_value("thé");
        assert_eq!(state.cursor, 3);
        state.backspace();
        assert_eq!(state.value, "th");

        state.insert_str("é vert");
        assert_eq!(state.value, "thé vert");
        assert_eq!(state.cursor, 8);
    }

    #[test]
    fn test_move_to_column_wide_chars() {
        let mut state = InputState::new().with_value("抹茶x");
        state.move_to_column(3);
        assert_eq!(state.cursor, 1);
        state.move_to_column(40);
        assert_eq!(state.cursor, 3);
    }

    #[test]
    fn test_component_control_chars_not_inserted() {
        let mut input = TextInputComponent::new();
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(input.handle_key(ctrl_a), ComponentResult::NotHandled);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_component_enter_completes() {
        let mut input = TextInputComponent::new().with_value("  Earl Grey ");
        assert_eq!(
            input.handle_key(key(KeyCode::Enter)),
            ComponentResult::Done("  Earl Grey ".to_string())
        );
        assert_eq!(input.trimmed(), "Earl Grey");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = TextInputComponent::new();
        assert!(input.handle_paste("Dragon\nWell"));
        assert_eq!(input.value(), "Dragon Well");
    }

    #[test]
    fn test_render_shows_placeholder_then_value() {
        let mut input = TextInputComponent::new().with_placeholder("Name");
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        input.render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "N");

        input.handle_paste("Oolong");
        let mut buf = Buffer::empty(area);
        input.render(area, &mut buf);
        let text: String = (0..6).map(|x| buf[(x, 0)].symbol()).collect();
        assert_eq!(text, "Oolong");
    }

    #[test]
    fn test_click_moves_cursor() {
        let mut input = TextInputComponent::new().with_value("Genmaicha");
        let area = Rect::new(2, 1, 20, 1);
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 3));
        input.render(area, &mut buf);

        assert_eq!(input.handle_click(5, 1), ComponentResult::Handled);
        assert_eq!(input.state.cursor, 3);
        assert_eq!(input.handle_click(5, 2), ComponentResult::NotHandled);
    }
}
