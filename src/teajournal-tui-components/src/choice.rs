//! Single-choice field: pick a known option or type a new one.

use crate::component::{Component, ComponentResult, FocusState};
use crate::input::{InputState, TextInput, apply_edit_key};
use crate::style::{AMBER, JournalStyle, SURFACE_1, TEXT};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::Widget;
use std::cell::Cell;
use unicode_width::UnicodeWidthStr;

/// Which row of the field owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Selector,
    Text,
}

#[derive(Debug, Clone, Copy, Default)]
struct ChoiceLayout {
    prev: Rect,
    next: Rect,
    selector: Rect,
    text: Rect,
}

/// A selector over known options plus an "other" entry.
///
/// Choosing "other" reveals a free-text input below the selector. Without
/// any known options the field is a plain text input.
///
/// ```rust
/// use teajournal_tui_components::choice::ChoiceField;
///
/// let mut field = ChoiceField::new(vec!["Green".into(), "Black".into()])
///     .placeholder("Choose a type")
///     .other_label("Other");
///
/// field.select(Some(1));
/// assert_eq!(field.value(), "Black");
///
/// field.select_other();
/// field.set_text("Pu-erh");
/// assert_eq!(field.value(), "Pu-erh");
/// ```
pub struct ChoiceField {
    options: Vec<String>,
    /// `None` is the placeholder, `Some(options.len())` is "other".
    selected: Option<usize>,
    placeholder: String,
    other_label: String,
    input: InputState,
    part: Part,
    focused: bool,
    last_layout: Cell<ChoiceLayout>,
}

impl ChoiceField {
    pub fn new(options: Vec<String>) -> Self {
        let part = if options.is_empty() {
            Part::Text
        } else {
            Part::Selector
        };
        Self {
            options,
            selected: None,
            placeholder: String::new(),
            other_label: "Other".to_string(),
            input: InputState::new(),
            part,
            focused: false,
            last_layout: Cell::new(ChoiceLayout::default()),
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self.input.placeholder = Some(self.placeholder.clone());
        self
    }

    pub fn other_label(mut self, label: impl Into<String>) -> Self {
        self.other_label = label.into();
        self
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Whether free text is the active source of the value.
    pub fn is_other(&self) -> bool {
        self.options.is_empty() || self.selected == Some(self.options.len())
    }

    /// Select an option by index, `None` for the placeholder.
    /// Out-of-range indices are ignored.
    pub fn select(&mut self, index: Option<usize>) {
        match index {
            Some(i) if i >= self.options.len() => {}
            _ => {
                self.selected = index;
                self.part = Part::Selector;
            }
        }
    }

    pub fn select_other(&mut self) {
        if !self.options.is_empty() {
            self.selected = Some(self.options.len());
        }
    }

    pub fn set_text(&mut self, text: &str) {
        self.input.set_value(text);
    }

    /// The chosen option, or the trimmed free text when "other" is active.
    /// Empty while the placeholder is shown.
    pub fn value(&self) -> String {
        if self.is_other() {
            return self.input.value.trim().to_string();
        }
        self.selected
            .and_then(|i| self.options.get(i))
            .cloned()
            .unwrap_or_default()
    }

    fn entry_count(&self) -> usize {
        self.options.len() + 1
    }

    fn cycle(&mut self, forward: bool) {
        let count = self.entry_count();
        self.selected = Some(match (self.selected, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        });
    }

    fn selector_text(&self) -> &str {
        match self.selected {
            None => &self.placeholder,
            Some(i) if i == self.options.len() => &self.other_label,
            Some(i) => self.options.get(i).map_or("", String::as_str),
        }
    }

    fn render_selector(&self, area: Rect, buf: &mut Buffer) -> ChoiceLayout {
        let mut layout = ChoiceLayout::default();
        if area.width < 5 {
            return layout;
        }

        for x in area.x..area.right() {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.reset();
                cell.set_bg(SURFACE_1);
            }
        }

        let active = self.focused && self.part == Part::Selector;
        let arrow_style = if active {
            Style::default().fg(AMBER).bg(SURFACE_1)
        } else {
            JournalStyle::dimmed().bg(SURFACE_1)
        };
        let text_style = if self.selected.is_none() {
            JournalStyle::placeholder().bg(SURFACE_1)
        } else {
            Style::default().fg(TEXT).bg(SURFACE_1)
        };

        layout.prev = Rect::new(area.x, area.y, 1, 1);
        layout.next = Rect::new(area.right() - 1, area.y, 1, 1);
        layout.selector = Rect::new(area.x, area.y, area.width, 1);
        buf.set_string(area.x, area.y, "‹", arrow_style);
        buf.set_string(area.right() - 1, area.y, "›", arrow_style);

        let text = self.selector_text();
        let room = area.width.saturating_sub(4);
        let offset = room.saturating_sub(text.width() as u16) / 2;
        buf.set_stringn(area.x + 2 + offset, area.y, text, room as usize, text_style);
        layout
    }
}

impl Component for ChoiceField {
    type Output = String;

    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        if self.options.is_empty() {
            let row = Rect { height: 1, ..area };
            TextInput::new(&self.input).focused(self.focused).render(row, buf);
            self.last_layout.set(ChoiceLayout {
                text: row,
                ..ChoiceLayout::default()
            });
            return;
        }

        let mut layout = self.render_selector(Rect { height: 1, ..area }, buf);
        if self.is_other() && area.height > 1 {
            let row = Rect::new(area.x, area.y + 1, area.width, 1);
            TextInput::new(&self.input)
                .focused(self.focused && self.part == Part::Text)
                .render(row, buf);
            layout.text = row;
        }
        self.last_layout.set(layout);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<Self::Output> {
        if self.part == Part::Text {
            if apply_edit_key(&mut self.input, key).is_some() {
                return ComponentResult::Handled;
            }
            return match key.code {
                KeyCode::Up if !self.options.is_empty() => {
                    self.part = Part::Selector;
                    ComponentResult::Handled
                }
                KeyCode::Enter => ComponentResult::Done(self.value()),
                _ => ComponentResult::NotHandled,
            };
        }

        match key.code {
            KeyCode::Left => {
                self.cycle(false);
                ComponentResult::Handled
            }
            KeyCode::Right | KeyCode::Char(' ') => {
                self.cycle(true);
                ComponentResult::Handled
            }
            KeyCode::Down | KeyCode::Enter if self.is_other() => {
                self.part = Part::Text;
                ComponentResult::Handled
            }
            KeyCode::Enter => ComponentResult::Done(self.value()),
            _ => ComponentResult::NotHandled,
        }
    }

    fn focus_state(&self) -> FocusState {
        match (self.focused, self.part) {
            (false, _) => FocusState::Unfocused,
            (true, Part::Text) => FocusState::Editing,
            (true, Part::Selector) => FocusState::Focused,
        }
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
        if focused && !self.options.is_empty() {
            self.part = Part::Selector;
        }
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.part {
            Part::Selector if self.is_other() => vec![("←→", "Choose"), ("↓", "Type")],
            Part::Selector => vec![("←→", "Choose")],
            Part::Text => vec![("Enter", "Next")],
        }
    }

    fn handle_paste(&mut self, text: &str) -> bool {
        if !self.is_other() {
            return false;
        }
        self.part = Part::Text;
        self.input.insert_str(&text.replace(['\r', '\n'], " "));
        true
    }

    fn handle_click(&mut self, column: u16, row: u16) -> ComponentResult<Self::Output> {
        let layout = self.last_layout.get();
        let pos = Position::new(column, row);

        if layout.text.contains(pos) {
            self.part = Part::Text;
            self.input.move_to_column((column - layout.text.x) as usize);
        } else if layout.prev.contains(pos) {
            self.part = Part::Selector;
            self.cycle(false);
        } else if layout.selector.contains(pos) {
            self.part = Part::Selector;
            self.cycle(true);
        } else {
            return ComponentResult::NotHandled;
        }
        ComponentResult::Handled
    }

    fn desired_height(&self, _width: u16) -> u16 {
        if !self.options.is_empty() && self.is_other() {
            2
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn field() -> ChoiceField {
        let mut f = ChoiceField::new(vec!["Green".to_string(), "Black".to_string()])
            .placeholder("Choose a type")
            .other_label("Other");
        f.set_focus(true);
        f
    }

    #[test]
    fn test_starts_on_placeholder() {
        let f = field();
        assert_eq!(f.value(), "");
        assert!(!f.is_other());
        assert_eq!(f.desired_height(20), 1);
    }

    #[test]
    fn test_cycle_through_options_and_other() {
        let mut f = field();
        f.handle_key(key(KeyCode::Right));
        assert_eq!(f.value(), "Green");
        f.handle_key(key(KeyCode::Right));
        assert_eq!(f.value(), "Black");
        f.handle_key(key(KeyCode::Right));
        assert!(f.is_other());
        assert_eq!(f.desired_height(20), 2);
        f.handle_key(key(KeyCode::Right));
        assert_eq!(f.value(), "Green");
        f.handle_key(key(KeyCode::Left));
        assert!(f.is_other());
    }

    #[test]
    fn test_other_reveals_text_input() {
        let mut f = field();
        f.select_other();
        assert_eq!(f.handle_key(key(KeyCode::Down)), ComponentResult::Handled);
        assert_eq!(f.focus_state(), FocusState::Editing);

        for c in " Oolong ".chars() {
            f.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(f.value(), "Oolong");

        assert_eq!(f.handle_key(key(KeyCode::Up)), ComponentResult::Handled);
        assert_eq!(f.focus_state(), FocusState::Focused);
    }

    #[test]
    fn test_down_not_consumed_without_other() {
        let mut f = field();
        f.select(Some(0));
        assert_eq!(f.handle_key(key(KeyCode::Down)), ComponentResult::NotHandled);
        assert_eq!(
            f.handle_key(key(KeyCode::Enter)),
            ComponentResult::Done("Green".to_string())
        );
    }

    #[test]
    fn test_no_options_is_plain_input() {
        let mut f = ChoiceField::new(Vec::new()).placeholder("Brand");
        f.set_focus(true);
        assert!(f.is_other());
        assert_eq!(f.focus_state(), FocusState::Editing);
        assert!(f.handle_paste("Mariage Frères"));
        assert_eq!(f.value(), "Mariage Frères");
        assert_eq!(f.desired_height(20), 1);
    }

    #[test]
    fn test_select_out_of_range_ignored() {
        let mut f = field();
        f.select(Some(1));
        f.select(Some(7));
        assert_eq!(f.value(), "Black");
    }

    #[test]
    fn test_paste_ignored_on_known_option() {
        let mut f = field();
        f.select(Some(0));
        assert!(!f.handle_paste("text"));
    }

    #[test]
    fn test_render_and_click_arrows() {
        let mut f = field();
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);
        f.render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "‹");
        assert_eq!(buf[(19, 0)].symbol(), "›");

        f.handle_click(19, 0);
        assert_eq!(f.value(), "Green");
        f.handle_click(0, 0);
        assert!(f.is_other());
    }
}
