//! # Tea Journal TUI Components
//!
//! The interactive pieces of the tea journal form, built on ratatui.
//!
//! Every interactive element implements [`Component`](component::Component):
//! the application routes key, paste and mouse events to the focused
//! component and lets unconsumed keys fall through to form navigation.
//!
//! ## Components
//!
//! ### Input
//! - [`TextInputComponent`](input::TextInputComponent) - single-line text input
//! - [`ChoiceField`](choice::ChoiceField) - known options plus a free-text "other"
//! - [`IngredientMultiSelect`](multi_select::IngredientMultiSelect) - autocomplete
//!   multi-select with removable pills
//!
//! ### Dialogs
//! - [`Modal`](modal::Modal) - overlay frame
//! - [`ConfirmDialog`](confirm::ConfirmDialog) - confirm / cancel question
//!
//! ### Building blocks
//! - [`RoundedBorder`](borders::RoundedBorder), [`ScrollState`](scroll::ScrollState),
//!   [`FocusManager`](focus::FocusManager), [`KeyHintsBar`](key_hints::KeyHintsBar)
//!
//! Colors come from [`style`]; components never hardcode them.

pub mod borders;
pub mod choice;
pub mod component;
pub mod confirm;
pub mod focus;
pub mod input;
pub mod key_hints;
pub mod modal;
pub mod multi_select;
pub mod scroll;
pub mod style;

/// Commonly used types and traits for quick imports.
///
/// ```rust
/// use teajournal_tui_components::prelude::*;
/// ```
pub mod prelude {
    pub use crate::borders::RoundedBorder;
    pub use crate::choice::ChoiceField;
    pub use crate::component::{Component, ComponentResult, FocusState};
    pub use crate::confirm::ConfirmDialog;
    pub use crate::focus::{FocusDirection, FocusManager};
    pub use crate::input::{InputState, TextInput, TextInputComponent};
    pub use crate::key_hints::{KeyHint, KeyHintsBar};
    pub use crate::modal::Modal;
    pub use crate::multi_select::{IngredientMultiSelect, MultiSelectConfig};
    pub use crate::scroll::{ScrollState, render_scrollbar};
    pub use crate::style::JournalStyle;
}

/// Tea Journal TUI Components version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
