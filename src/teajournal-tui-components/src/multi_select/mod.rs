//! Autocomplete multi-select for the ingredients field.
//!
//! - [`SelectionState`]: the ordered, deduplicated entries
//! - [`filter_suggestions`]: candidates for the current input
//! - [`HighlightNavigator`]: wrapping highlight over the suggestion rows
//! - [`IngredientMultiSelect`]: the component tying them together

mod navigator;
mod selection;
mod suggestions;
mod widget;

pub use navigator::HighlightNavigator;
pub use selection::{SelectionState, capitalize_first};
pub use suggestions::filter_suggestions;
pub use widget::{IngredientMultiSelect, MultiSelectConfig, PillSlot, REMOVE_SYMBOL};
