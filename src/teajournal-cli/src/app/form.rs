//! The "new tea" form.
//!
//! Fields are stacked vertically, each with a label row above it. Keys go
//! to the focused component first; whatever it leaves unconsumed (Tab,
//! Up/Down at the edges, Enter) moves focus between fields.

use std::cell::RefCell;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthStr;

use teajournal_storage::{ChoiceKind, TeaEntry, TeaJournal};
use teajournal_tui_components::prelude::*;

use crate::labels::Labels;

/// Input id of the ingredients picker.
pub const INGREDIENTS_ID: &str = "ingredients";

/// Form fields in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Kind,
    Brand,
    Ingredients,
    Comment,
    Submit,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Kind,
        FormField::Brand,
        FormField::Ingredients,
        FormField::Comment,
        FormField::Submit,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn from_index(index: usize) -> FormField {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    fn is_required(self) -> bool {
        matches!(
            self,
            FormField::Name | FormField::Kind | FormField::Ingredients
        )
    }
}

/// Why a submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("tea name is missing")]
    MissingName,
    #[error("tea type is missing")]
    MissingType,
    #[error("no ingredient selected")]
    MissingIngredients,
}

impl FormError {
    /// Field the message is shown under.
    pub fn field(&self) -> FormField {
        match self {
            FormError::MissingName => FormField::Name,
            FormError::MissingType => FormField::Kind,
            FormError::MissingIngredients => FormField::Ingredients,
        }
    }

    /// Localized message.
    pub fn message<'a>(&self, labels: &'a Labels) -> &'a str {
        match self {
            FormError::MissingName => &labels.missing_name,
            FormError::MissingType => &labels.missing_type,
            FormError::MissingIngredients => &labels.missing_ingredients,
        }
    }
}

/// What the form did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Handled,
    NotHandled,
    /// The user asked to save.
    Submit,
}

pub struct TeaForm {
    labels: Labels,
    max_suggestions: usize,
    name: TextInputComponent,
    kind: ChoiceField,
    brand: ChoiceField,
    ingredients: IngredientMultiSelect,
    comment: TextInputComponent,
    focus: FocusManager,
    error: Option<FormError>,
    /// Field areas from the last render, for click routing.
    regions: RefCell<Vec<(FormField, Rect)>>,
}

impl TeaForm {
    /// Empty form with options taken from the journal.
    pub fn new(journal: &TeaJournal, labels: &Labels, max_suggestions: usize) -> Self {
        let mut form = Self {
            labels: labels.clone(),
            max_suggestions,
            name: TextInputComponent::new().with_placeholder(&labels.name_placeholder),
            kind: choice_field(journal.choices(ChoiceKind::Types), &labels.kind_placeholder, labels),
            brand: choice_field(journal.choices(ChoiceKind::Brands), &labels.brand_placeholder, labels),
            ingredients: IngredientMultiSelect::new(
                MultiSelectConfig::new(INGREDIENTS_ID, journal.choices(ChoiceKind::Ingredients))
                    .placeholder(&labels.ingredients_placeholder)
                    .add_label(&labels.add)
                    .required(true)
                    .max_visible_suggestions(max_suggestions),
            ),
            comment: TextInputComponent::new().with_placeholder(&labels.comment_placeholder),
            focus: FocusManager::new(FormField::ALL.len()),
            error: None,
            regions: RefCell::new(Vec::new()),
        };
        form.apply_focus();
        form
    }

    /// Rebuild with new labels, keeping what the user already entered.
    pub fn relabel(&mut self, journal: &TeaJournal, labels: &Labels) {
        let mut next = TeaForm::new(journal, labels, self.max_suggestions);

        next.name.state.set_value(self.name.value());
        restore_choice(&mut next.kind, &self.kind.value());
        restore_choice(&mut next.brand, &self.brand.value());
        next.ingredients
            .restore_selection(self.ingredients.selection_state().clone());
        if !self.ingredients.input_value().is_empty() {
            next.ingredients.set_input(self.ingredients.input_value());
        }
        next.comment.state.set_value(self.comment.value());
        next.error = self.error;
        next.focus.set(self.focus.current());
        next.apply_focus();

        *self = next;
    }

    pub fn focused(&self) -> FormField {
        FormField::from_index(self.focus.current())
    }

    pub fn focus(&mut self, field: FormField) {
        if self.focused() != field {
            self.focus.set(field.index());
            self.apply_focus();
        }
    }

    pub fn error(&self) -> Option<FormError> {
        self.error
    }

    /// Show `error` and move focus to its field.
    pub fn set_error(&mut self, error: FormError) {
        self.error = Some(error);
        self.focus(error.field());
    }

    pub fn ingredients(&self) -> &IngredientMultiSelect {
        &self.ingredients
    }

    /// Check required fields and build the entry to save.
    pub fn validate(&self) -> Result<TeaEntry, FormError> {
        let name = self.name.trimmed();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        let kind = self.kind.value();
        if kind.is_empty() {
            return Err(FormError::MissingType);
        }
        if !self.ingredients.is_satisfied() {
            return Err(FormError::MissingIngredients);
        }

        Ok(TeaEntry::new(
            name,
            kind,
            self.brand.value(),
            self.ingredients.selection().to_vec(),
            self.comment.trimmed(),
        ))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormEvent {
        match key.code {
            KeyCode::Tab => {
                self.move_focus(FocusDirection::Forward);
                return FormEvent::Handled;
            }
            KeyCode::BackTab => {
                self.move_focus(FocusDirection::Backward);
                return FormEvent::Handled;
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return FormEvent::Submit;
            }
            _ => {}
        }

        let focused = self.focused();
        if focused == FormField::Submit {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => FormEvent::Submit,
                KeyCode::Up => {
                    self.move_focus(FocusDirection::Backward);
                    FormEvent::Handled
                }
                KeyCode::Down => {
                    self.move_focus(FocusDirection::Forward);
                    FormEvent::Handled
                }
                _ => FormEvent::NotHandled,
            };
        }

        match self.route_key(focused, key) {
            ComponentResult::Handled => {
                if self.error.is_some_and(|e| e.field() == focused) {
                    self.error = None;
                }
                FormEvent::Handled
            }
            ComponentResult::Done(()) => {
                self.move_focus(FocusDirection::Forward);
                FormEvent::Handled
            }
            ComponentResult::Cancelled => FormEvent::Handled,
            ComponentResult::NotHandled => match key.code {
                KeyCode::Up => {
                    self.move_focus(FocusDirection::Backward);
                    FormEvent::Handled
                }
                KeyCode::Down | KeyCode::Enter => {
                    self.move_focus(FocusDirection::Forward);
                    FormEvent::Handled
                }
                _ => FormEvent::NotHandled,
            },
        }
    }

    pub fn handle_paste(&mut self, text: &str) -> bool {
        match self.focused() {
            FormField::Name => self.name.handle_paste(text),
            FormField::Kind => self.kind.handle_paste(text),
            FormField::Brand => self.brand.handle_paste(text),
            FormField::Ingredients => self.ingredients.handle_paste(text),
            FormField::Comment => self.comment.handle_paste(text),
            FormField::Submit => false,
        }
    }

    /// Left click at absolute terminal coordinates.
    pub fn handle_click(&mut self, column: u16, row: u16) -> FormEvent {
        let pos = Position::new(column, row);
        let hit = self
            .regions
            .borrow()
            .iter()
            .find(|(_, area)| area.contains(pos))
            .map(|(field, _)| *field);
        let Some(field) = hit else {
            return FormEvent::NotHandled;
        };

        self.focus(field);
        let result = match field {
            FormField::Name => self.name.handle_click(column, row).map(|_| ()),
            FormField::Kind => self.kind.handle_click(column, row).map(|_| ()),
            FormField::Brand => self.brand.handle_click(column, row).map(|_| ()),
            FormField::Ingredients => self.ingredients.handle_click(column, row),
            FormField::Comment => self.comment.handle_click(column, row).map(|_| ()),
            FormField::Submit => return FormEvent::Submit,
        };
        if result.is_handled() && self.error.is_some_and(|e| e.field() == field) {
            self.error = None;
        }
        FormEvent::Handled
    }

    pub fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = match self.focused() {
            FormField::Name => self.name.key_hints(),
            FormField::Kind => self.kind.key_hints(),
            FormField::Brand => self.brand.key_hints(),
            FormField::Ingredients => self.ingredients.key_hints(),
            FormField::Comment => self.comment.key_hints(),
            FormField::Submit => vec![("Enter", "Save")],
        };
        hints.push(("Tab", "Next field"));
        hints.push(("Ctrl+S", "Save"));
        hints
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let mut regions = Vec::new();
        if area.is_empty() {
            *self.regions.borrow_mut() = regions;
            return;
        }

        let heights: Vec<u16> = FormField::ALL
            .iter()
            .map(|field| self.block_height(*field, area.width))
            .collect();

        // Skip leading fields until the focused one fits.
        let focused = self.focus.current();
        let mut first = 0;
        while first < focused && heights[first..=focused].iter().sum::<u16>() > area.height {
            first += 1;
        }

        let mut y = area.y;
        for field in &FormField::ALL[first..] {
            if y >= area.bottom() {
                break;
            }
            let height = heights[field.index()].min(area.bottom() - y);
            let block = Rect::new(area.x, y, area.width, height);
            if let Some(region) = self.render_block(*field, block, buf) {
                regions.push((*field, region));
            }
            y = y.saturating_add(heights[field.index()]);
        }

        *self.regions.borrow_mut() = regions;
    }

    fn route_key(&mut self, field: FormField, key: KeyEvent) -> ComponentResult<()> {
        match field {
            FormField::Name => self.name.handle_key(key).map(|_| ()),
            FormField::Kind => self.kind.handle_key(key).map(|_| ()),
            FormField::Brand => self.brand.handle_key(key).map(|_| ()),
            FormField::Ingredients => self.ingredients.handle_key(key),
            FormField::Comment => self.comment.handle_key(key).map(|_| ()),
            FormField::Submit => ComponentResult::NotHandled,
        }
    }

    fn move_focus(&mut self, direction: FocusDirection) {
        self.focus.move_focus(direction);
        self.apply_focus();
    }

    fn apply_focus(&mut self) {
        let focused = self.focused();
        self.name.set_focus(focused == FormField::Name);
        self.kind.set_focus(focused == FormField::Kind);
        self.brand.set_focus(focused == FormField::Brand);
        self.ingredients.set_focus(focused == FormField::Ingredients);
        self.comment.set_focus(focused == FormField::Comment);
    }

    fn label(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.labels.name,
            FormField::Kind => &self.labels.kind,
            FormField::Brand => &self.labels.brand,
            FormField::Ingredients => &self.labels.ingredients,
            FormField::Comment => &self.labels.comment,
            FormField::Submit => &self.labels.submit,
        }
    }

    fn component_height(&self, field: FormField, width: u16) -> u16 {
        match field {
            FormField::Name => self.name.desired_height(width),
            FormField::Kind => self.kind.desired_height(width),
            FormField::Brand => self.brand.desired_height(width),
            FormField::Ingredients => self.ingredients.desired_height(width),
            FormField::Comment => self.comment.desired_height(width),
            FormField::Submit => 1,
        }
    }

    /// Rows used by one field: label, component, error line, spacer.
    fn block_height(&self, field: FormField, width: u16) -> u16 {
        if field == FormField::Submit {
            return 2;
        }
        let error_rows = u16::from(self.error.is_some_and(|e| e.field() == field));
        1 + self.component_height(field, width) + error_rows + 1
    }

    /// Draw one field block and return its interactive area.
    fn render_block(&self, field: FormField, block: Rect, buf: &mut Buffer) -> Option<Rect> {
        let focused = self.focused() == field;

        if field == FormField::Submit {
            let text = format!("[ {} ]", self.labels.submit);
            let width = (text.width() as u16).min(block.width);
            buf.set_stringn(
                block.x,
                block.y,
                &text,
                block.width as usize,
                JournalStyle::button(focused),
            );
            return Some(Rect::new(block.x, block.y, width, 1));
        }

        let mut label = self.label(field).to_string();
        if field.is_required() {
            label.push_str(" *");
        }
        let label_style = if focused {
            JournalStyle::label_focused()
        } else {
            JournalStyle::label()
        };
        buf.set_stringn(block.x, block.y, &label, block.width as usize, label_style);

        let component_area = Rect::new(
            block.x,
            block.y + 1,
            block.width,
            self.component_height(field, block.width),
        )
        .intersection(block);
        if component_area.is_empty() {
            return None;
        }

        match field {
            FormField::Name => self.name.render(component_area, buf),
            FormField::Kind => self.kind.render(component_area, buf),
            FormField::Brand => self.brand.render(component_area, buf),
            FormField::Ingredients => self.ingredients.render(component_area, buf),
            FormField::Comment => self.comment.render(component_area, buf),
            FormField::Submit => {}
        }

        if let Some(error) = self.error.filter(|e| e.field() == field) {
            let y = component_area.bottom();
            if y < block.bottom() {
                buf.set_stringn(
                    block.x,
                    y,
                    error.message(&self.labels),
                    block.width as usize,
                    JournalStyle::error(),
                );
            }
        }

        Some(component_area)
    }
}

fn choice_field(options: Vec<String>, placeholder: &str, labels: &Labels) -> ChoiceField {
    ChoiceField::new(options)
        .placeholder(placeholder)
        .other_label(&labels.other)
}

/// Select `value` among the field's options, or enter it as free text.
fn restore_choice(field: &mut ChoiceField, value: &str) {
    if value.is_empty() {
        return;
    }
    match field.options().iter().position(|o| o == value) {
        Some(index) => field.select(Some(index)),
        None => {
            field.select_other();
            field.set_text(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{LabelSet, Language};
    use pretty_assertions::assert_eq;
    use teajournal_storage::ListStore;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(form: &mut TeaForm, text: &str) {
        for c in text.chars() {
            form.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn labels(language: Language) -> Labels {
        LabelSet::embedded().unwrap().get(language).clone()
    }

    fn empty_journal() -> TeaJournal {
        TeaJournal::new(ListStore::in_memory())
    }

    fn seeded_journal() -> TeaJournal {
        let mut journal = empty_journal();
        journal
            .save_tea(TeaEntry::new(
                "Sencha",
                "Green",
                "Kusmi",
                vec!["Menthe".to_string(), "Citron".to_string()],
                "",
            ))
            .unwrap();
        journal
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

    /// Fill every required field of a form over an empty journal.
    fn fill_required(form: &mut TeaForm) {
        type_text(form, "Earl Grey");
        form.handle_key(key(KeyCode::Tab));
        type_text(form, "Black");
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Tab));
        type_text(form, "bergamote");
        form.handle_key(ctrl('a'));
    }

    #[test]
    fn test_new_form_focuses_name() {
        let form = TeaForm::new(&empty_journal(), &labels(Language::En), 5);
        assert_eq!(form.focused(), FormField::Name);
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_tab_cycles_fields() {
        let mut form = TeaForm::new(&empty_journal(), &labels(Language::En), 5);
        let mut seen = vec![form.focused()];
        for _ in 0..FormField::ALL.len() {
            form.handle_key(key(KeyCode::Tab));
            seen.push(form.focused());
        }
        assert_eq!(seen[..6], FormField::ALL);
        assert_eq!(seen[6], FormField::Name);

        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.focused(), FormField::Submit);
    }

    #[test]
    fn test_enter_in_text_field_moves_on() {
        let mut form = TeaForm::new(&empty_journal(), &labels(Language::En), 5);
        type_text(&mut form, "Sencha");
        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormEvent::Handled);
        assert_eq!(form.focused(), FormField::Kind);
    }

    #[test]
    fn test_empty_form_is_missing_name() {
        let form = TeaForm::new(&empty_journal(), &labels(Language::En), 5);
        assert_eq!(form.validate(), Err(FormError::MissingName));
    }

    #[test]
    fn test_missing_type() {
        let mut form = TeaForm::new(&empty_journal(), &labels(Language::En), 5);
        type_text(&mut form, "Sencha");
        assert_eq!(form.validate(), Err(FormError::MissingType));
    }

    #[test]
    fn test_missing_ingredients_message() {
        let en = labels(Language::En);
        let mut form = TeaForm::new(&empty_journal(), &en, 5);
        type_text(&mut form, "Sencha");
        form.handle_key(key(KeyCode::Tab));
        type_text(&mut form, "Green");

        let error = form.validate().unwrap_err();
        assert_eq!(error, FormError::MissingIngredients);
        assert_eq!(error.message(&en), "Please add at least 1 ingredient.");
        assert_eq!(
            error.message(&labels(Language::Fr)),
            "Veuillez ajouter au moins 1 ingrédient."
        );
    }

    #[test]
    fn test_valid_form_builds_entry() {
        let mut form = TeaForm::new(&empty_journal(), &labels(Language::En), 5);
        fill_required(&mut form);
        form.focus(FormField::Comment);
        type_text(&mut form, " lovely ");

        let entry = form.validate().unwrap();
        assert_eq!(
            entry,
            TeaEntry::new("Earl Grey", "Black", "", vec!["Bergamote".to_string()], "lovely")
        );
    }

    #[test]
    fn test_set_error_focuses_field_and_clears_on_edit() {
        let mut form = TeaForm::new(&empty_journal(), &labels(Language::En), 5);
        form.focus(FormField::Submit);
        form.set_error(FormError::MissingName);
        assert_eq!(form.focused(), FormField::Name);
        assert_eq!(form.error(), Some(FormError::MissingName));

        type_text(&mut form, "S");
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_submit_events() {
        let mut form = TeaForm::new(&empty_journal(), &labels(Language::En), 5);
        assert_eq!(form.handle_key(ctrl('s')), FormEvent::Submit);

        form.focus(FormField::Submit);
        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormEvent::Submit);
        assert_eq!(form.handle_key(key(KeyCode::Char('x'))), FormEvent::NotHandled);
    }

    #[test]
    fn test_choice_options_come_from_journal() {
        let mut form = TeaForm::new(&seeded_journal(), &labels(Language::En), 5);
        type_text(&mut form, "Gyokuro");
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Right));
        form.focus(FormField::Ingredients);
        type_text(&mut form, "men");
        assert_eq!(form.ingredients().suggestions(), ["Menthe"]);

        form.handle_key(key(KeyCode::Down));
        form.handle_key(key(KeyCode::Enter));
        form.handle_key(ctrl('a'));

        let entry = form.validate().unwrap();
        assert_eq!(entry.kind, "Green");
        assert_eq!(entry.brand, "");
        assert_eq!(entry.ingredients, ["Menthe"]);
    }

    #[test]
    fn test_arrows_leave_picker_without_suggestions() {
        let mut form = TeaForm::new(&seeded_journal(), &labels(Language::En), 5);
        form.focus(FormField::Ingredients);
        form.handle_key(key(KeyCode::Down));
        assert_eq!(form.focused(), FormField::Comment);
        form.handle_key(key(KeyCode::Up));
        assert_eq!(form.focused(), FormField::Ingredients);
        form.handle_key(key(KeyCode::Up));
        assert_eq!(form.focused(), FormField::Brand);
    }

    #[test]
    fn test_relabel_keeps_values() {
        let journal = seeded_journal();
        let mut form = TeaForm::new(&journal, &labels(Language::En), 5);
        type_text(&mut form, "Gyokuro");
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Right));
        form.focus(FormField::Brand);
        form.handle_key(key(KeyCode::Left));
        form.handle_key(key(KeyCode::Down));
        type_text(&mut form, "Maison");
        form.focus(FormField::Ingredients);
        type_text(&mut form, "thym");
        form.handle_key(ctrl('a'));
        let before = form.validate().unwrap();

        form.relabel(&journal, &labels(Language::Fr));
        assert_eq!(form.validate().unwrap(), before);
        assert_eq!(before.brand, "Maison");
        assert_eq!(form.focused(), FormField::Ingredients);
    }

    #[test]
    fn test_relabel_does_not_renormalize_ingredients() {
        let journal = empty_journal();
        let mut form = TeaForm::new(&journal, &labels(Language::En), 5);
        form.focus(FormField::Ingredients);
        type_text(&mut form, "ß");
        form.handle_key(ctrl('a'));
        assert_eq!(form.ingredients().selection(), ["SS"]);

        form.relabel(&journal, &labels(Language::Fr));
        assert_eq!(form.ingredients().selection(), ["SS"]);
        form.relabel(&journal, &labels(Language::En));
        assert_eq!(form.ingredients().selection(), ["SS"]);
    }

    #[test]
    fn test_render_shows_labels_and_error() {
        let mut form = TeaForm::new(&empty_journal(), &labels(Language::Fr), 5);
        form.set_error(FormError::MissingIngredients);

        let area = Rect::new(0, 0, 50, 24);
        let mut buf = Buffer::empty(area);
        form.render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Nom *"));
        assert!(text.contains("Ingrédients *"));
        assert!(text.contains("Veuillez ajouter au moins 1 ingrédient."));
        assert!(text.contains("[ Enregistrer ]"));
    }

    #[test]
    fn test_render_keeps_focused_field_visible() {
        let mut form = TeaForm::new(&empty_journal(), &labels(Language::En), 5);
        form.focus(FormField::Submit);

        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        form.render(area, &mut buf);
        assert!(buffer_text(&buf).contains("[ Save ]"));
    }

    #[test]
    fn test_click_routes_to_field() {
        let mut form = TeaForm::new(&empty_journal(), &labels(Language::En), 5);
        let area = Rect::new(0, 0, 40, 24);
        let mut buf = Buffer::empty(area);
        form.render(area, &mut buf);

        let submit = form
            .regions
            .borrow()
            .iter()
            .find(|(field, _)| *field == FormField::Submit)
            .map(|(_, rect)| *rect)
            .unwrap();
        assert_eq!(form.handle_click(submit.x, submit.y), FormEvent::Submit);
        assert_eq!(form.focused(), FormField::Submit);

        // Comment input row
        let comment = form
            .regions
            .borrow()
            .iter()
            .find(|(field, _)| *field == FormField::Comment)
            .map(|(_, rect)| *rect)
            .unwrap();
        assert_eq!(form.handle_click(comment.x, comment.y), FormEvent::Handled);
        assert_eq!(form.focused(), FormField::Comment);

        assert_eq!(form.handle_click(39, 23), FormEvent::NotHandled);
    }

    #[test]
    fn test_paste_goes_to_focused_field() {
        let mut form = TeaForm::new(&empty_journal(), &labels(Language::En), 5);
        assert!(form.handle_paste("Long\nJing"));
        form.handle_key(key(KeyCode::Tab));
        type_text(&mut form, "Green");
        form.focus(FormField::Ingredients);
        form.handle_paste("jasmin");
        form.handle_key(ctrl('a'));
        assert_eq!(form.validate().unwrap().name, "Long Jing");

        form.focus(FormField::Submit);
        assert!(!form.handle_paste("x"));
    }
}
