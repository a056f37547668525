//! Interactive journal.
//!
//! [`App`] holds all UI state and is driven by crossterm events; [`run`]
//! is the draw/poll loop around it. Everything is synchronous: the only
//! I/O besides the terminal is the small JSON store.

pub mod form;
pub mod list;
pub mod terminal;

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Widget;
use tracing::{debug, error, info, warn};
use unicode_width::UnicodeWidthStr;

use teajournal_storage::{TeaJournal, keys};
use teajournal_tui_components::prelude::*;

use crate::config::JournalConfig;
use crate::labels::{LabelSet, Labels, Language};
use form::{FormEvent, TeaForm};
use list::{ListEvent, TeaList};
use terminal::JournalTerminal;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Screen shown in the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Form,
    List,
}

/// Message in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

pub struct App {
    journal: TeaJournal,
    config: JournalConfig,
    label_set: LabelSet,
    language: Language,
    view: View,
    form: TeaForm,
    list: TeaList,
    status: Option<Status>,
    should_quit: bool,
}

impl App {
    pub fn new(
        journal: TeaJournal,
        config: JournalConfig,
        label_set: LabelSet,
        language: Language,
    ) -> Self {
        let form = TeaForm::new(&journal, label_set.get(language), config.max_suggestions);
        Self {
            journal,
            config,
            label_set,
            language,
            view: View::Form,
            form,
            list: TeaList::new(),
            status: None,
            should_quit: false,
        }
    }

    pub fn labels(&self) -> &Labels {
        self.label_set.get(self.language)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn journal(&self) -> &TeaJournal {
        &self.journal
    }

    pub fn form(&self) -> &TeaForm {
        &self.form
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Paste(text) => {
                if self.view == View::Form {
                    self.form.handle_paste(&text);
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::F(2) if !self.list.is_confirming() => {
                self.toggle_view();
                return;
            }
            KeyCode::F(3) if !self.list.is_confirming() => {
                self.cycle_language();
                return;
            }
            _ => {}
        }

        self.status = None;
        match self.view {
            View::Form => {
                if self.form.handle_key(key) == FormEvent::Submit {
                    self.submit();
                }
            }
            View::List => {
                let teas = self.journal.teas();
                let labels = self.label_set.get(self.language);
                if let ListEvent::Delete(index) = self.list.handle_key(key, &teas, labels) {
                    self.delete(index);
                }
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        match self.view {
            View::Form => {
                if self.form.handle_click(mouse.column, mouse.row) == FormEvent::Submit {
                    self.submit();
                }
            }
            View::List => {
                if let ListEvent::Delete(index) = self.list.handle_click(mouse.column, mouse.row) {
                    self.delete(index);
                }
            }
        }
    }

    fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Form => View::List,
            View::List => View::Form,
        };
        self.status = None;
        debug!(view = ?self.view, "View switched");
    }

    /// Switch to the next language, remember it, relabel the form.
    fn cycle_language(&mut self) {
        self.language = self.language.next();
        if let Err(e) = self
            .journal
            .store_mut()
            .set_item(keys::LANG, self.language.code())
        {
            warn!(error = %e, "Failed to persist language");
        }
        self.form
            .relabel(&self.journal, self.label_set.get(self.language));
        self.status = None;
        info!(language = self.language.code(), "Language changed");
    }

    fn submit(&mut self) {
        let entry = match self.form.validate() {
            Ok(entry) => entry,
            Err(e) => {
                debug!(error = %e, "Tea form rejected");
                self.form.set_error(e);
                return;
            }
        };

        let labels = self.label_set.get(self.language);
        match self.journal.save_tea(entry) {
            Ok(()) => {
                self.form = TeaForm::new(&self.journal, labels, self.config.max_suggestions);
                self.status = Some(Status::Info(labels.saved.clone()));
            }
            Err(e) => {
                error!(error = %e, "Failed to save tea");
                self.status = Some(Status::Error(labels.save_failed.clone()));
            }
        }
    }

    fn delete(&mut self, index: usize) {
        let labels = self.label_set.get(self.language);
        match self.journal.delete_tea(index) {
            Ok(Some(_)) => {
                self.list.clamp_selection(self.journal.teas().len());
                // Pruned choices must disappear from the form too.
                self.form.relabel(&self.journal, labels);
                self.status = Some(Status::Info(labels.deleted.clone()));
            }
            Ok(None) => {}
            Err(e) => {
                error!(error = %e, index, "Failed to delete tea");
                self.status = Some(Status::Error(e.to_string()));
            }
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let [header, body, status, hints] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let labels = self.labels();
        self.render_header(header, buf, labels);

        let title = match self.view {
            View::Form => &labels.form_title,
            View::List => &labels.list_title,
        };
        let border = RoundedBorder::new().title(title).focused(true);
        let inner = border.inner(body);
        border.to_block().render(body, buf);

        match self.view {
            View::Form => self.form.render(inner, buf),
            View::List => self.list.render(inner, buf, &self.journal.teas(), labels),
        }

        if let Some(message) = &self.status {
            let (text, style) = match message {
                Status::Info(text) => (text, JournalStyle::success()),
                Status::Error(text) => (text, JournalStyle::error()),
            };
            buf.set_stringn(status.x + 1, status.y, text, status.width.saturating_sub(1) as usize, style);
        }

        self.hints_bar(labels).render(hints, buf);

        if self.view == View::List {
            self.list.render_overlay(area, buf);
        }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer, labels: &Labels) {
        if area.height < 2 || area.width < 2 {
            return;
        }
        let width = area.width.saturating_sub(1) as usize;
        buf.set_stringn(area.x + 1, area.y, &self.config.site_name, width, JournalStyle::header());

        let language = labels.language_name.as_str();
        let language_width = language.width() as u16;
        if area.width > language_width + self.config.site_name.width() as u16 + 3 {
            buf.set_string(
                area.right() - language_width - 1,
                area.y,
                language,
                JournalStyle::dimmed(),
            );
        }

        let welcome = if self.config.welcome.is_empty() {
            &labels.welcome
        } else {
            &self.config.welcome
        };
        buf.set_stringn(area.x + 1, area.y + 1, welcome, width, JournalStyle::dimmed());
    }

    fn hints_bar(&self, labels: &Labels) -> KeyHintsBar {
        let localize = |hints: Vec<(&'static str, &'static str)>| {
            hints
                .into_iter()
                .map(|(key, text)| KeyHint::new(key, labels.hint(text)))
                .collect::<Vec<_>>()
        };

        if self.view == View::List && self.list.is_confirming() {
            return KeyHintsBar::new().hints(localize(self.list.key_hints()));
        }
        let bar = match self.view {
            View::Form => KeyHintsBar::new()
                .hints(localize(self.form.key_hints()))
                .hint("F2", &labels.hint_list),
            View::List => KeyHintsBar::new()
                .hints(localize(self.list.key_hints()))
                .hint("d", &labels.hint_delete)
                .hint("F2", &labels.hint_form),
        };
        bar.hint("F3", &labels.hint_language)
            .hint("Ctrl+Q", &labels.hint_quit)
    }
}

/// Draw and dispatch events until the user quits.
pub fn run(app: &mut App, terminal: &mut JournalTerminal) -> Result<()> {
    info!("Journal started");
    while !app.should_quit() {
        terminal.draw(|frame| {
            let area = frame.area();
            app.render(area, frame.buffer_mut());
        })?;

        if event::poll(POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }
    }
    info!("Journal closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::form::{FormError, FormField};
    use pretty_assertions::assert_eq;
    use teajournal_storage::{ChoiceKind, ListStore, TeaEntry};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn app_with(journal: TeaJournal, config: JournalConfig) -> App {
        App::new(journal, config, LabelSet::embedded().unwrap(), Language::En)
    }

    fn app() -> App {
        app_with(TeaJournal::new(ListStore::in_memory()), JournalConfig::default())
    }

    fn screen(app: &App, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        app.render(area, &mut buf);
        let mut text = String::new();
        for y in 0..height {
            for x in 0..width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn fill_form(app: &mut App) {
        type_text(app, "Earl Grey");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "Black");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "bergamote");
        app.handle_key(ctrl('a'));
    }

    #[test]
    fn test_quit_keys() {
        let mut a = app();
        a.handle_key(ctrl('q'));
        assert!(a.should_quit());

        let mut a = app();
        a.handle_key(ctrl('c'));
        assert!(a.should_quit());
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut a = app();
        let mut release = ctrl('q');
        release.kind = KeyEventKind::Release;
        a.handle_event(Event::Key(release));
        assert!(!a.should_quit());
    }

    #[test]
    fn test_f2_toggles_view() {
        let mut a = app();
        assert_eq!(a.view(), View::Form);
        a.handle_key(key(KeyCode::F(2)));
        assert_eq!(a.view(), View::List);
        a.handle_key(key(KeyCode::F(2)));
        assert_eq!(a.view(), View::Form);
    }

    #[test]
    fn test_f3_switches_and_persists_language() {
        let mut a = app();
        type_text(&mut a, "Sencha");
        a.handle_key(key(KeyCode::F(3)));

        assert_eq!(a.language(), Language::Fr);
        assert_eq!(a.journal().store().get_item(keys::LANG), Some("fr"));
        assert_eq!(a.form().validate(), Err(FormError::MissingType));

        let text = screen(&a, 60, 30);
        assert!(text.contains("Nom *"));
        assert!(text.contains("Français"));

        a.handle_key(key(KeyCode::F(3)));
        assert_eq!(a.language(), Language::En);
    }

    #[test]
    fn test_submit_saves_and_resets_form() {
        let mut a = app();
        fill_form(&mut a);
        a.handle_key(ctrl('s'));

        assert_eq!(a.journal().teas().len(), 1);
        assert_eq!(a.journal().teas()[0].ingredients, ["Bergamote"]);
        assert_eq!(a.status(), Some(&Status::Info("Tea saved.".to_string())));
        assert_eq!(a.form().validate(), Err(FormError::MissingName));
        assert_eq!(a.form().ingredients().vocabulary(), ["Bergamote"]);
        assert_eq!(a.journal().choices(ChoiceKind::Types), ["Black"]);
    }

    #[test]
    fn test_incomplete_submit_shows_error() {
        let mut a = app();
        type_text(&mut a, "Sencha");
        a.handle_key(key(KeyCode::Tab));
        type_text(&mut a, "Green");
        a.handle_key(ctrl('s'));

        assert!(a.journal().teas().is_empty());
        assert_eq!(a.form().error(), Some(FormError::MissingIngredients));
        assert_eq!(a.form().focused(), FormField::Ingredients);
        assert!(screen(&a, 60, 30).contains("Please add at least 1 ingredient."));
    }

    #[test]
    fn test_delete_flow() {
        let mut journal = TeaJournal::new(ListStore::in_memory());
        journal
            .save_tea(TeaEntry::new("Sencha", "Green", "", vec!["Menthe".to_string()], ""))
            .unwrap();
        let mut a = app_with(journal, JournalConfig::default());

        a.handle_key(key(KeyCode::F(2)));
        a.handle_key(key(KeyCode::Char('d')));
        assert!(screen(&a, 100, 30).contains("Do you really want to delete this tea?"));

        // F2 is ignored while the dialog is open
        a.handle_key(key(KeyCode::F(2)));
        assert_eq!(a.view(), View::List);

        a.handle_key(key(KeyCode::Char('y')));
        assert!(a.journal().teas().is_empty());
        assert!(a.journal().choices(ChoiceKind::Ingredients).is_empty());
        assert!(a.form().ingredients().vocabulary().is_empty());
        assert_eq!(a.status(), Some(&Status::Info("Tea deleted.".to_string())));
        assert!(screen(&a, 60, 20).contains("No tea saved yet."));
    }

    #[test]
    fn test_header_uses_config() {
        let config = JournalConfig {
            site_name: "Chez Moi".to_string(),
            welcome: "Bonjour".to_string(),
            ..JournalConfig::default()
        };
        let a = app_with(TeaJournal::new(ListStore::in_memory()), config);
        let text = screen(&a, 120, 30);
        assert!(text.contains("Chez Moi"));
        assert!(text.contains("Bonjour"));
        assert!(text.contains("F2 List"));
    }

    #[test]
    fn test_footer_hints_follow_language() {
        let mut a = app();
        assert!(screen(&a, 160, 30).contains("Tab Next field"));

        a.handle_key(key(KeyCode::F(3)));
        let text = screen(&a, 160, 30);
        assert!(text.contains("Tab Champ suivant"));
        assert!(text.contains("Ctrl+S Enregistrer"));
        assert!(!text.contains("Next field"));
    }

    #[test]
    fn test_default_welcome_is_localized() {
        let a = app();
        assert!(screen(&a, 60, 30).contains("Welcome! Note down the teas you love."));
    }

    #[test]
    fn test_paste_reaches_form() {
        let mut a = app();
        a.handle_event(Event::Paste("Gyokuro".to_string()));
        a.handle_key(key(KeyCode::Tab));
        type_text(&mut a, "Green");
        assert_eq!(a.form().validate(), Err(FormError::MissingIngredients));
    }
}
