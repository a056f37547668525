//! Yes / Cancel confirmation dialog.

use crate::component::{Component, ComponentResult, FocusState};
use crate::modal::Modal;
use crate::style::{JournalStyle, TEXT};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget, Wrap};
use std::cell::Cell;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Confirm,
    Cancel,
}

/// A modal question answered with confirm or cancel.
///
/// Completes with `Done(true)` when confirmed and `Cancelled` otherwise.
/// The cancel button starts focused so a stray Enter never confirms a
/// destructive action.
pub struct ConfirmDialog {
    title: String,
    message: String,
    confirm_label: String,
    cancel_label: String,
    /// Hint descriptions for choose, confirm and cancel.
    hint_texts: [String; 3],
    choice: Choice,
    buttons: Cell<(Rect, Rect)>,
}

impl ConfirmDialog {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: "Yes".to_string(),
            cancel_label: "Cancel".to_string(),
            hint_texts: ["Choose", "Confirm", "Cancel"].map(String::from),
            choice: Choice::Cancel,
            buttons: Cell::new((Rect::default(), Rect::default())),
        }
    }

    pub fn labels(mut self, confirm: impl Into<String>, cancel: impl Into<String>) -> Self {
        self.confirm_label = confirm.into();
        self.cancel_label = cancel.into();
        self
    }

    /// Text of the hints drawn inside the dialog.
    pub fn hint_labels(
        mut self,
        choose: impl Into<String>,
        confirm: impl Into<String>,
        cancel: impl Into<String>,
    ) -> Self {
        self.hint_texts = [choose.into(), confirm.into(), cancel.into()];
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the confirm button is focused.
    pub fn is_confirm_focused(&self) -> bool {
        self.choice == Choice::Confirm
    }

    fn toggle(&mut self) {
        self.choice = match self.choice {
            Choice::Confirm => Choice::Cancel,
            Choice::Cancel => Choice::Confirm,
        };
    }

    fn finish(&self, choice: Choice) -> ComponentResult<bool> {
        match choice {
            Choice::Confirm => ComponentResult::Done(true),
            Choice::Cancel => ComponentResult::Cancelled,
        }
    }

    fn modal(&self) -> Modal<'_> {
        Modal::new(&self.title)
            .width_percent(50)
            .height(8)
            .key_hints([
                ("←→", self.hint_texts[0].as_str()),
                ("Enter", self.hint_texts[1].as_str()),
                ("Esc", self.hint_texts[2].as_str()),
            ])
    }
}

impl Component for ConfirmDialog {
    type Output = bool;

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let modal = self.modal();
        let inner = modal.inner(area);
        modal.render(area, buf);
        if inner.height < 2 || inner.width == 0 {
            return;
        }

        let message_area = Rect { height: inner.height - 1, ..inner };
        Paragraph::new(Line::from(self.message.as_str()))
            .style(Style::default().fg(TEXT))
            .wrap(Wrap { trim: true })
            .render(message_area, buf);

        let confirm = format!("[ {} ]", self.confirm_label);
        let cancel = format!("[ {} ]", self.cancel_label);
        let confirm_width = confirm.width() as u16;
        let cancel_width = cancel.width() as u16;
        let total = confirm_width + 2 + cancel_width;

        let y = inner.bottom() - 1;
        let x = inner.x + inner.width.saturating_sub(total) / 2;
        let confirm_rect = Rect::new(x, y, confirm_width, 1).intersection(inner);
        let cancel_rect = Rect::new(x + confirm_width + 2, y, cancel_width, 1).intersection(inner);

        buf.set_string(
            confirm_rect.x,
            y,
            &confirm,
            JournalStyle::button(self.choice == Choice::Confirm),
        );
        buf.set_string(
            cancel_rect.x,
            y,
            &cancel,
            JournalStyle::button(self.choice == Choice::Cancel),
        );
        self.buttons.set((confirm_rect, cancel_rect));
    }

    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<Self::Output> {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.toggle();
                ComponentResult::Handled
            }
            KeyCode::Enter => self.finish(self.choice),
            KeyCode::Char('y') | KeyCode::Char('o') => self.finish(Choice::Confirm),
            KeyCode::Char('n') | KeyCode::Esc => self.finish(Choice::Cancel),
            _ => ComponentResult::Handled,
        }
    }

    fn focus_state(&self) -> FocusState {
        FocusState::Focused
    }

    fn set_focus(&mut self, _focused: bool) {}

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![("←→", "Choose"), ("Enter", "Confirm"), ("Esc", "Cancel")]
    }

    fn handle_click(&mut self, column: u16, row: u16) -> ComponentResult<Self::Output> {
        let pos = Position::new(column, row);
        let (confirm, cancel) = self.buttons.get();
        if confirm.contains(pos) {
            self.finish(Choice::Confirm)
        } else if cancel.contains(pos) {
            self.finish(Choice::Cancel)
        } else {
            ComponentResult::Handled
        }
    }
}
