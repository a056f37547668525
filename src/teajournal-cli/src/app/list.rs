//! Saved teas, one card each, with delete confirmation.

use std::cell::RefCell;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use teajournal_storage::TeaEntry;
use teajournal_tui_components::prelude::*;

use crate::labels::Labels;

/// Rows per card: borders plus type, brand, ingredients and comment.
const CARD_HEIGHT: u16 = 6;

/// What the list did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    Handled,
    NotHandled,
    /// Deletion of the tea at this index was confirmed.
    Delete(usize),
}

pub struct TeaList {
    selected: usize,
    scroll: RefCell<ScrollState>,
    confirm: Option<(usize, ConfirmDialog)>,
    /// Card areas from the last render.
    cards: RefCell<Vec<(usize, Rect)>>,
}

impl Default for TeaList {
    fn default() -> Self {
        Self::new()
    }
}

impl TeaList {
    pub fn new() -> Self {
        Self {
            selected: 0,
            scroll: RefCell::new(ScrollState::new(0, 1)),
            confirm: None,
            cards: RefCell::new(Vec::new()),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_confirming(&self) -> bool {
        self.confirm.is_some()
    }

    /// Keep the selection inside a list of `len` teas.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Ask before deleting the selected tea.
    pub fn request_delete(&mut self, teas: &[TeaEntry], labels: &Labels) -> bool {
        if self.selected >= teas.len() {
            return false;
        }
        let dialog = ConfirmDialog::new(&labels.delete_title, &labels.delete_message)
            .labels(&labels.yes, &labels.cancel)
            .hint_labels(
                labels.hint("Choose"),
                labels.hint("Confirm"),
                labels.hint("Cancel"),
            );
        self.confirm = Some((self.selected, dialog));
        true
    }

    pub fn handle_key(&mut self, key: KeyEvent, teas: &[TeaEntry], labels: &Labels) -> ListEvent {
        if let Some((index, dialog)) = self.confirm.as_mut() {
            let index = *index;
            let result = dialog.handle_key(key);
            return self.resolve_dialog(index, result);
        }

        let len = teas.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                ListEvent::Handled
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < len {
                    self.selected += 1;
                }
                ListEvent::Handled
            }
            KeyCode::Home => {
                self.selected = 0;
                ListEvent::Handled
            }
            KeyCode::End => {
                self.selected = len.saturating_sub(1);
                ListEvent::Handled
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                self.request_delete(teas, labels);
                ListEvent::Handled
            }
            _ => ListEvent::NotHandled,
        }
    }

    /// Close the dialog once it finished; confirming deletes `index`.
    fn resolve_dialog(&mut self, index: usize, result: ComponentResult<bool>) -> ListEvent {
        if !result.is_done() {
            return ListEvent::Handled;
        }
        self.confirm = None;
        if result == ComponentResult::Done(true) {
            ListEvent::Delete(index)
        } else {
            ListEvent::Handled
        }
    }

    /// Left click at absolute terminal coordinates.
    pub fn handle_click(&mut self, column: u16, row: u16) -> ListEvent {
        if let Some((index, dialog)) = self.confirm.as_mut() {
            let index = *index;
            let result = dialog.handle_click(column, row);
            return self.resolve_dialog(index, result);
        }

        let pos = Position::new(column, row);
        let hit = self
            .cards
            .borrow()
            .iter()
            .find(|(_, area)| area.contains(pos))
            .map(|(index, _)| *index);
        match hit {
            Some(index) => {
                self.selected = index;
                ListEvent::Handled
            }
            None => ListEvent::NotHandled,
        }
    }

    pub fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        match &self.confirm {
            Some((_, dialog)) => dialog.key_hints(),
            None => vec![("↑↓", "Select")],
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, teas: &[TeaEntry], labels: &Labels) {
        let mut cards = Vec::new();
        if teas.is_empty() {
            if area.height < 2 || area.width < 3 {
                *self.cards.borrow_mut() = cards;
                return;
            }
            buf.set_stringn(
                area.x + 1,
                area.y + 1,
                &labels.empty_list,
                area.width.saturating_sub(2) as usize,
                JournalStyle::dimmed(),
            );
            *self.cards.borrow_mut() = cards;
            return;
        }

        let mut scroll = self.scroll.borrow_mut();
        scroll.set_visible((area.height / CARD_HEIGHT).max(1) as usize);
        scroll.set_total(teas.len());
        scroll.ensure_visible(self.selected);

        let card_width = if scroll.needs_scrollbar() {
            area.width.saturating_sub(1)
        } else {
            area.width
        };

        let mut y = area.y;
        for index in scroll.visible_range() {
            let Some(tea) = teas.get(index) else {
                break;
            };
            if y + CARD_HEIGHT > area.bottom() {
                break;
            }
            let card = Rect::new(area.x, y, card_width, CARD_HEIGHT);
            render_card(tea, index == self.selected, card, buf, labels);
            cards.push((index, card));
            y += CARD_HEIGHT;
        }
        render_scrollbar(area, buf, &scroll);
        *self.cards.borrow_mut() = cards;
    }

    /// Draw the confirmation dialog over `area`, if open.
    pub fn render_overlay(&self, area: Rect, buf: &mut Buffer) {
        if let Some((_, dialog)) = &self.confirm {
            dialog.render(area, buf);
        }
    }
}

fn render_card(tea: &TeaEntry, selected: bool, area: Rect, buf: &mut Buffer, labels: &Labels) {
    let border = RoundedBorder::new().title(&tea.name).focused(selected);
    let inner = border.inner(area);
    border.to_block().render(area, buf);

    let ingredients = tea.ingredients.join(", ");
    let rows = [
        (&labels.kind, tea.kind.as_str()),
        (&labels.brand, tea.brand.as_str()),
        (&labels.ingredients, ingredients.as_str()),
        (&labels.comment, tea.comment.as_str()),
    ];
    for (offset, (label, value)) in rows.into_iter().enumerate() {
        let y = inner.y + offset as u16;
        if y >= inner.bottom() {
            break;
        }
        let value = if value.is_empty() { "-" } else { value };
        let line = Line::from(vec![
            Span::styled(format!("{label}: "), JournalStyle::dimmed()),
            Span::styled(value, JournalStyle::label()),
        ]);
        buf.set_line(inner.x, y, &line, inner.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{LabelSet, Language};
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn labels(language: Language) -> Labels {
        LabelSet::embedded().unwrap().get(language).clone()
    }

    fn teas() -> Vec<TeaEntry> {
        vec![
            TeaEntry::new(
                "Sencha",
                "Green",
                "Kusmi",
                vec!["Menthe".to_string(), "Citron".to_string()],
                "Fresh",
            ),
            TeaEntry::new("Assam", "Black", "", vec!["Malt".to_string()], ""),
            TeaEntry::new("Rooibos", "Infusion", "", vec!["Vanille".to_string()], ""),
        ]
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_empty_state() {
        let list = TeaList::new();
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        list.render(area, &mut buf, &[], &labels(Language::Fr));
        assert!(buffer_text(&buf).contains("Aucun thé enregistré"));
    }

    #[test]
    fn test_cards_show_fields() {
        let list = TeaList::new();
        let area = Rect::new(0, 0, 50, 12);
        let mut buf = Buffer::empty(area);
        list.render(area, &mut buf, &teas(), &labels(Language::En));

        let text = buffer_text(&buf);
        assert!(text.contains(" Sencha "));
        assert!(text.contains("Ingredients: Menthe, Citron"));
        assert!(text.contains("Brand: Kusmi"));
        assert!(text.contains("Brand: -"));
        assert!(!text.contains("Rooibos"));
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let mut list = TeaList::new();
        let en = labels(Language::En);
        list.handle_key(key(KeyCode::End), &teas(), &en);
        assert_eq!(list.selected(), 2);

        let area = Rect::new(0, 0, 50, 12);
        let mut buf = Buffer::empty(area);
        list.render(area, &mut buf, &teas(), &en);
        assert!(buffer_text(&buf).contains("Rooibos"));

        list.handle_key(key(KeyCode::Down), &teas(), &en);
        assert_eq!(list.selected(), 2);
        list.handle_key(key(KeyCode::Char('k')), &teas(), &en);
        assert_eq!(list.selected(), 1);
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let mut list = TeaList::new();
        let en = labels(Language::En);
        list.handle_key(key(KeyCode::Down), &teas(), &en);
        assert_eq!(list.handle_key(key(KeyCode::Char('d')), &teas(), &en), ListEvent::Handled);
        assert!(list.is_confirming());

        // Default button is Cancel
        assert_eq!(list.handle_key(key(KeyCode::Enter), &teas(), &en), ListEvent::Handled);
        assert!(!list.is_confirming());

        list.handle_key(key(KeyCode::Delete), &teas(), &en);
        assert_eq!(list.handle_key(key(KeyCode::Char('y')), &teas(), &en), ListEvent::Delete(1));
        assert!(!list.is_confirming());
    }

    #[test]
    fn test_escape_closes_dialog() {
        let mut list = TeaList::new();
        let en = labels(Language::En);
        list.handle_key(key(KeyCode::Char('d')), &teas(), &en);

        // Moving between buttons keeps the dialog open.
        assert_eq!(list.handle_key(key(KeyCode::Left), &teas(), &en), ListEvent::Handled);
        assert!(list.is_confirming());

        assert_eq!(list.handle_key(key(KeyCode::Esc), &teas(), &en), ListEvent::Handled);
        assert!(!list.is_confirming());
    }

    #[test]
    fn test_delete_on_empty_list_is_ignored() {
        let mut list = TeaList::new();
        let en = labels(Language::En);
        list.handle_key(key(KeyCode::Char('d')), &[], &en);
        assert!(!list.is_confirming());
    }

    #[test]
    fn test_dialog_renders_localized_question() {
        let mut list = TeaList::new();
        let fr = labels(Language::Fr);
        list.request_delete(&teas(), &fr);

        let area = Rect::new(0, 0, 100, 20);
        let mut buf = Buffer::empty(area);
        list.render_overlay(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Voulez-vous vraiment supprimer ce thé ?"));
        assert!(text.contains("[ Oui ]"));
        assert!(text.contains("[ Annuler ]"));
        assert!(text.contains("Enter Confirmer"));
    }

    #[test]
    fn test_click_selects_card() {
        let mut list = TeaList::new();
        let area = Rect::new(0, 0, 50, 12);
        let mut buf = Buffer::empty(area);
        list.render(area, &mut buf, &teas(), &labels(Language::En));

        assert_eq!(list.handle_click(5, 8), ListEvent::Handled);
        assert_eq!(list.selected(), 1);
        assert_eq!(list.handle_click(5, 40), ListEvent::NotHandled);
    }

    #[test]
    fn test_clamp_selection_after_delete() {
        let mut list = TeaList::new();
        let en = labels(Language::En);
        list.handle_key(key(KeyCode::End), &teas(), &en);
        list.clamp_selection(2);
        assert_eq!(list.selected(), 1);
        list.clamp_selection(0);
        assert_eq!(list.selected(), 0);
    }
}
