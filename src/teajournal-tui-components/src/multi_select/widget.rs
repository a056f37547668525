//! The ingredient picker: text input, suggestion rows and removable pills.

use super::navigator::HighlightNavigator;
use super::selection::SelectionState;
use super::suggestions::filter_suggestions;
use crate::component::{Component, ComponentResult, FocusState};
use crate::input::{InputState, TextInput, apply_edit_key};
use crate::scroll::{ScrollState, render_scrollbar};
use crate::style::{AMBER, JournalStyle, SURFACE_1, SURFACE_2, TEXT};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use std::cell::RefCell;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Removal control drawn at the end of every pill.
pub const REMOVE_SYMBOL: &str = "×";

/// Columns between two pills on the same row.
const PILL_GAP: u16 = 1;

/// Padding around the text inside a pill: " text × ".
const PILL_CHROME: u16 = 4;

/// Construction parameters for [`IngredientMultiSelect`].
#[derive(Debug, Clone)]
pub struct MultiSelectConfig {
    /// Known entries, in the order they are offered.
    pub vocabulary: Vec<String>,
    pub placeholder: String,
    /// Identifier used in logs.
    pub input_id: String,
    /// Whether at least one entry must be selected.
    pub required: bool,
    /// Text of the add control, drawn as `[+ Add]`.
    pub add_label: String,
    /// Suggestion rows shown at once; more rows scroll.
    pub max_visible_suggestions: usize,
}

impl MultiSelectConfig {
    pub fn new(input_id: impl Into<String>, vocabulary: Vec<String>) -> Self {
        Self {
            vocabulary,
            placeholder: String::new(),
            input_id: input_id.into(),
            required: false,
            add_label: "Add".to_string(),
            max_visible_suggestions: 5,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn add_label(mut self, label: impl Into<String>) -> Self {
        self.add_label = label.into();
        self
    }

    pub fn max_visible_suggestions(mut self, rows: usize) -> Self {
        self.max_visible_suggestions = rows.max(1);
        self
    }
}

/// Where one pill was drawn, and for which selection it was drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PillSlot {
    /// Index into the selection at layout time.
    pub index: usize,
    /// Selection revision the slot was laid out for.
    pub revision: u64,
    /// The whole pill; taller than one row when the entry wraps.
    pub area: Rect,
    /// One area per row of entry text, top to bottom.
    pub text_rows: Vec<Rect>,
    /// The removal control, on the last row.
    pub remove_area: Rect,
}

#[derive(Debug, Clone, Default)]
struct MultiSelectLayout {
    input: Rect,
    add_button: Rect,
    /// (suggestion index, row)
    suggestions: Vec<(usize, Rect)>,
    suggestion_block: Rect,
    pills: Vec<PillSlot>,
}

enum Hit {
    Input(u16),
    AddButton,
    Suggestion(usize),
    RemovePill { index: usize, revision: u64 },
    Pill,
}

/// One pill positioned relative to the pill area.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PillPlacement {
    row: u16,
    col: u16,
    /// Entry text split into rows; joined they give the entry back.
    lines: Vec<String>,
}

impl PillPlacement {
    fn rows(&self) -> u16 {
        self.lines.len() as u16
    }

    fn text_width(&self) -> u16 {
        self.lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16
    }
}

/// Lay pills out left to right, wrapping to a new row when one does not
/// fit. An entry wider than a whole row is split across several rows so
/// its full text is always drawn.
fn place_pills(items: &[String], width: u16) -> Vec<PillPlacement> {
    if width <= PILL_CHROME {
        return Vec::new();
    }
    let max_text = width - PILL_CHROME;

    let mut placed = Vec::with_capacity(items.len());
    let mut row = 0u16;
    let mut col = 0u16;
    for item in items {
        let lines = split_to_width(item, max_text as usize);
        if lines.len() > 1 {
            if col > 0 {
                row += 1;
            }
            let rows = lines.len() as u16;
            placed.push(PillPlacement { row, col: 0, lines });
            row += rows;
            col = 0;
            continue;
        }

        let pill_width = item.width() as u16 + PILL_CHROME;
        if col > 0 && col + pill_width > width {
            row += 1;
            col = 0;
        }
        placed.push(PillPlacement { row, col, lines });
        col += pill_width + PILL_GAP;
    }
    placed
}

/// Split `text` into grapheme runs at most `max` columns wide. A single
/// grapheme wider than `max` gets a run of its own.
fn split_to_width(text: &str, max: usize) -> Vec<String> {
    let mut lines = vec![String::new()];
    let mut used = 0;
    for g in text.graphemes(true) {
        let w = g.width();
        if used + w > max && used > 0 {
            lines.push(String::new());
            used = 0;
        }
        if let Some(line) = lines.last_mut() {
            line.push_str(g);
        }
        used += w;
    }
    lines
}

/// Multi-select with autocomplete for the ingredients field.
///
/// Typing recomputes the suggestion rows, `↑`/`↓` move a wrapping
/// highlight, `Enter` copies the highlighted row into the input, and the
/// add control (`Ctrl+A` or a click on `[+ Add]`) commits the input into
/// the selection. Selected entries are drawn as pills whose `×` removes
/// them.
///
/// # Example
///
/// ```rust
/// use teajournal_tui_components::multi_select::{IngredientMultiSelect, MultiSelectConfig};
///
/// let vocabulary = vec!["Menthe".to_string(), "Citron".to_string()];
/// let mut picker = IngredientMultiSelect::new(MultiSelectConfig::new("ingredients", vocabulary));
///
/// picker.set_input("cit");
/// assert_eq!(picker.suggestions(), ["Citron"]);
///
/// picker.add_from_input();
/// assert_eq!(picker.selection(), ["Cit"]);
/// ```
pub struct IngredientMultiSelect {
    config: MultiSelectConfig,
    selection: SelectionState,
    input: InputState,
    suggestions: Vec<String>,
    navigator: HighlightNavigator,
    scroll: ScrollState,
    focused: bool,
    last_layout: RefCell<MultiSelectLayout>,
}

impl IngredientMultiSelect {
    pub fn new(config: MultiSelectConfig) -> Self {
        let input = InputState::new().with_placeholder(config.placeholder.clone());
        let scroll = ScrollState::new(0, config.max_visible_suggestions.max(1));
        Self {
            config,
            selection: SelectionState::new(),
            input,
            suggestions: Vec::new(),
            navigator: HighlightNavigator::new(),
            scroll,
            focused: false,
            last_layout: RefCell::new(MultiSelectLayout::default()),
        }
    }

    /// The selected entries, in display order.
    pub fn selection(&self) -> &[String] {
        self.selection.as_slice()
    }

    pub fn selection_state(&self) -> &SelectionState {
        &self.selection
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.config.vocabulary
    }

    pub fn input_id(&self) -> &str {
        &self.config.input_id
    }

    pub fn is_required(&self) -> bool {
        self.config.required
    }

    /// False only for a required field with nothing selected.
    pub fn is_satisfied(&self) -> bool {
        !self.config.required || !self.selection.is_empty()
    }

    pub fn input_value(&self) -> &str {
        &self.input.value
    }

    /// Current suggestion rows; empty when the list is dismissed.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Highlighted suggestion index, if any.
    pub fn highlighted(&self) -> Option<usize> {
        self.navigator.highlighted(self.suggestions.len())
    }

    /// Replace the input text as if typed, then recompute suggestions.
    pub fn set_input(&mut self, text: &str) {
        self.input.set_value(text);
        self.refresh_suggestions();
    }

    /// Commit the input text into the selection.
    ///
    /// The input and the suggestion rows are cleared whether or not the
    /// entry was new.
    pub fn add_from_input(&mut self) -> bool {
        let added = self.selection.add(&self.input.value);
        if added {
            tracing::debug!(
                field = %self.config.input_id,
                count = self.selection.len(),
                "ingredient added"
            );
        }
        self.input.clear();
        self.clear_suggestions();
        added
    }

    /// Remove the pill at `index`. Out-of-range indices are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        let removed = self.selection.remove_at(index)?;
        tracing::debug!(field = %self.config.input_id, ingredient = %removed, "ingredient removed");
        if !self.suggestions.is_empty() {
            self.refresh_suggestions();
        }
        Some(removed)
    }

    /// Replace the selection as is, without normalizing its entries again.
    pub fn restore_selection(&mut self, selection: SelectionState) {
        self.selection = selection;
        if !self.suggestions.is_empty() {
            self.refresh_suggestions();
        }
    }

    /// Pill slots from the most recent render.
    pub fn pill_slots(&self) -> Vec<PillSlot> {
        self.last_layout.borrow().pills.clone()
    }

    /// Read the pill texts back from a rendered buffer.
    ///
    /// This is the readout path for code that only has the drawn frame.
    /// Entries wider than the field wrap over several rows and are read
    /// back whole. Rendered into [`desired_height`](Component::desired_height)
    /// rows it returns the same entries as [`selection`](Self::selection).
    pub fn pill_texts_from_buffer(&self, buf: &Buffer) -> Vec<String> {
        self.last_layout
            .borrow()
            .pills
            .iter()
            .map(|slot| slot.text_rows.iter().map(|row| read_row(buf, *row)).collect())
            .collect()
    }

    /// Rows used by the suggestion list.
    fn suggestion_rows(&self) -> u16 {
        self.suggestions.len().min(self.scroll.visible()) as u16
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions =
            filter_suggestions(&self.config.vocabulary, &self.selection, &self.input.value);
        self.navigator.reset();
        self.scroll.set_total(self.suggestions.len());
        self.scroll.scroll_to_top();
    }

    fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.navigator.reset();
        self.scroll.set_total(0);
    }

    /// Copy the highlighted row into the input. Returns false without a
    /// valid highlight.
    fn commit_highlighted(&mut self) -> bool {
        let Some(index) = self.navigator.highlighted(self.suggestions.len()) else {
            return false;
        };
        self.pick_suggestion(index);
        true
    }

    fn pick_suggestion(&mut self, index: usize) {
        if let Some(text) = self.suggestions.get(index).cloned() {
            self.input.set_value(text);
            self.clear_suggestions();
        }
    }

    fn layout(&self, area: Rect) -> MultiSelectLayout {
        let mut layout = MultiSelectLayout::default();
        if area.height == 0 || area.width == 0 {
            return layout;
        }

        let button = self.add_button_label();
        let button_width = button.width() as u16;
        if area.width > button_width + 4 {
            layout.add_button = Rect::new(area.right() - button_width, area.y, button_width, 1);
            layout.input = Rect::new(area.x, area.y, area.width - button_width - 1, 1);
        } else {
            layout.input = Rect::new(area.x, area.y, area.width, 1);
        }

        let mut y = area.y + 1;
        let rows = self.suggestion_rows().min(area.bottom().saturating_sub(y));
        layout.suggestion_block = Rect::new(area.x, y, area.width, rows);
        for (i, index) in self.scroll.visible_range().take(rows as usize).enumerate() {
            layout
                .suggestions
                .push((index, Rect::new(area.x, y + i as u16, area.width, 1)));
        }
        y += rows;

        let revision = self.selection.revision();
        for (index, placement) in place_pills(self.selection.as_slice(), area.width)
            .into_iter()
            .enumerate()
        {
            let py = y + placement.row;
            // Only whole pills are laid out.
            if py + placement.rows() > area.bottom() {
                break;
            }
            let x = area.x + placement.col;
            let text_width = placement.text_width();
            let text_rows: Vec<Rect> = placement
                .lines
                .iter()
                .enumerate()
                .map(|(i, line)| Rect::new(x + 1, py + i as u16, line.width() as u16, 1))
                .collect();
            let last_y = py + placement.rows() - 1;
            layout.pills.push(PillSlot {
                index,
                revision,
                area: Rect::new(x, py, text_width + PILL_CHROME, placement.rows()),
                text_rows,
                remove_area: Rect::new(x + text_width + 2, last_y, 1, 1),
            });
        }

        layout
    }

    fn add_button_label(&self) -> String {
        format!("[+ {}]", self.config.add_label)
    }

    fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        let layout = self.last_layout.borrow();
        let pos = Position::new(column, row);

        if layout.add_button.contains(pos) {
            return Some(Hit::AddButton);
        }
        if layout.input.contains(pos) {
            return Some(Hit::Input(column - layout.input.x));
        }
        if let Some((index, _)) = layout.suggestions.iter().find(|(_, r)| r.contains(pos)) {
            return Some(Hit::Suggestion(*index));
        }
        for slot in &layout.pills {
            if slot.remove_area.contains(pos) {
                return Some(Hit::RemovePill {
                    index: slot.index,
                    revision: slot.revision,
                });
            }
            if slot.area.contains(pos) {
                return Some(Hit::Pill);
            }
        }
        None
    }

    fn render_suggestion(&self, text: &str, highlighted: bool, area: Rect, buf: &mut Buffer) {
        let bg = if highlighted { SURFACE_2 } else { SURFACE_1 };
        for x in area.x..area.right() {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.reset();
                cell.set_bg(bg);
            }
        }

        let style = if highlighted {
            Style::default()
                .fg(AMBER)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT).bg(bg)
        };
        buf.set_stringn(
            area.x + 2,
            area.y,
            text,
            area.width.saturating_sub(3) as usize,
            style,
        );

        if highlighted && let Some(cell) = buf.cell_mut((area.x, area.y)) {
            cell.set_char('>').set_style(Style::default().fg(AMBER).bg(bg));
        }
    }

    fn render_pill(&self, slot: &PillSlot, lines: &[String], buf: &mut Buffer) {
        for y in slot.area.top()..slot.area.bottom() {
            buf.set_string(
                slot.area.x,
                y,
                " ".repeat(slot.area.width as usize),
                JournalStyle::pill(),
            );
        }
        for (row, line) in slot.text_rows.iter().zip(lines) {
            buf.set_string(row.x, row.y, line, JournalStyle::pill());
        }
        buf.set_string(
            slot.remove_area.x,
            slot.remove_area.y,
            REMOVE_SYMBOL,
            JournalStyle::pill_remove(),
        );
    }
}

/// Text drawn in a one-row area, wide characters counted once.
fn read_row(buf: &Buffer, area: Rect) -> String {
    let mut text = String::new();
    let mut x = area.x;
    while x < area.right() {
        let Some(cell) = buf.cell((x, area.y)) else {
            break;
        };
        let symbol = cell.symbol();
        text.push_str(symbol);
        x += symbol.width().max(1) as u16;
    }
    text
}

impl Component for IngredientMultiSelect {
    type Output = ();

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout(area);

        TextInput::new(&self.input)
            .focused(self.focused)
            .render(layout.input, buf);

        if !layout.add_button.is_empty() {
            buf.set_string(
                layout.add_button.x,
                layout.add_button.y,
                self.add_button_label(),
                JournalStyle::button(false),
            );
        }

        let highlighted = self.highlighted();
        for (index, row) in &layout.suggestions {
            if let Some(text) = self.suggestions.get(*index) {
                self.render_suggestion(text, highlighted == Some(*index), *row, buf);
            }
        }
        render_scrollbar(layout.suggestion_block, buf, &self.scroll);

        let placed = place_pills(self.selection.as_slice(), area.width);
        for slot in &layout.pills {
            if let Some(placement) = placed.get(slot.index) {
                self.render_pill(slot, &placement.lines, buf);
            }
        }

        *self.last_layout.borrow_mut() = layout;
    }

    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<Self::Output> {
        let count = self.suggestions.len();
        match key.code {
            KeyCode::Down if count > 0 => {
                self.navigator.move_down(count);
                if let Some(i) = self.navigator.highlighted(count) {
                    self.scroll.ensure_visible(i);
                }
                return ComponentResult::Handled;
            }
            KeyCode::Up if count > 0 => {
                self.navigator.move_up(count);
                if let Some(i) = self.navigator.highlighted(count) {
                    self.scroll.ensure_visible(i);
                }
                return ComponentResult::Handled;
            }
            KeyCode::Enter => {
                return if self.commit_highlighted() {
                    ComponentResult::Handled
                } else {
                    ComponentResult::NotHandled
                };
            }
            KeyCode::Esc if count > 0 => {
                self.clear_suggestions();
                return ComponentResult::Handled;
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.add_from_input();
                return ComponentResult::Handled;
            }
            _ => {}
        }

        match apply_edit_key(&mut self.input, key) {
            Some(true) => {
                self.refresh_suggestions();
                ComponentResult::Handled
            }
            Some(false) => ComponentResult::Handled,
            None => ComponentResult::NotHandled,
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
        if !focused {
            self.clear_suggestions();
        }
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.suggestions.is_empty() {
            vec![("Ctrl+A", "Add"), ("Tab", "Next")]
        } else {
            vec![
                ("↑↓", "Navigate"),
                ("Enter", "Pick"),
                ("Esc", "Close"),
                ("Ctrl+A", "Add"),
            ]
        }
    }

    fn handle_paste(&mut self, text: &str) -> bool {
        let flat = text.replace(['\r', '\n'], " ");
        self.input.insert_str(&flat);
        self.refresh_suggestions();
        true
    }

    fn handle_click(&mut self, column: u16, row: u16) -> ComponentResult<Self::Output> {
        let Some(hit) = self.hit_test(column, row) else {
            return ComponentResult::NotHandled;
        };

        match hit {
            Hit::AddButton => {
                self.add_from_input();
            }
            Hit::Input(offset) => {
                let width = self.last_layout.borrow().input.width as usize;
                let cursor = self.input.cursor_column();
                let skip = if cursor < width { 0 } else { cursor + 1 - width };
                self.input.move_to_column(offset as usize + skip);
            }
            Hit::Suggestion(index) => self.pick_suggestion(index),
            Hit::RemovePill { index, revision } => {
                if revision == self.selection.revision() {
                    self.remove_at(index);
                } else {
                    tracing::debug!(
                        field = %self.config.input_id,
                        index,
                        "ignoring click on a pill from an outdated frame"
                    );
                }
            }
            Hit::Pill => {}
        }
        ComponentResult::Handled
    }

    fn desired_height(&self, width: u16) -> u16 {
        let pill_rows = place_pills(self.selection.as_slice(), width)
            .last()
            .map_or(0, |p| p.row + p.rows());
        1 + self.suggestion_rows() + pill_rows
    }
}
