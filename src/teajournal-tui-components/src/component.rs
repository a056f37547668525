//! Core Component trait and types.
//!
//! Every interactive form element implements [`Component`], so the form
//! can route keys, pastes and clicks without knowing what it is talking to.

use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Result of handling an event in a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentResult<T = ()> {
    /// Component consumed the event
    Handled,
    /// Component ignored the event, the parent applies its default behavior
    NotHandled,
    /// Component completed with a value
    Done(T),
    /// Component was cancelled (e.g., Escape pressed)
    Cancelled,
}

impl<T> ComponentResult<T> {
    /// Returns true if the component consumed the event.
    pub fn is_handled(&self) -> bool {
        matches!(self, ComponentResult::Handled | ComponentResult::Done(_))
    }

    /// Returns true if the component is done (completed or cancelled).
    pub fn is_done(&self) -> bool {
        matches!(self, ComponentResult::Done(_) | ComponentResult::Cancelled)
    }

    /// Maps the inner value if Done.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ComponentResult<U> {
        match self {
            ComponentResult::Handled => ComponentResult::Handled,
            ComponentResult::NotHandled => ComponentResult::NotHandled,
            ComponentResult::Done(v) => ComponentResult::Done(f(v)),
            ComponentResult::Cancelled => ComponentResult::Cancelled,
        }
    }
}

/// Focus state of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Unfocused,
    Focused,
    /// Component has focus and owns the text cursor
    Editing,
}

impl FocusState {
    /// Returns true if the component has any form of focus.
    pub fn has_focus(&self) -> bool {
        !matches!(self, FocusState::Unfocused)
    }

    /// Returns true if the component is in editing mode.
    pub fn is_editing(&self) -> bool {
        matches!(self, FocusState::Editing)
    }
}

/// Core trait for all interactive components.
///
/// # Example Implementation
///
/// ```rust,ignore
/// use teajournal_tui_components::component::{Component, ComponentResult, FocusState};
/// use crossterm::event::{KeyCode, KeyEvent};
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// struct SubmitButton {
///     focused: bool,
/// }
///
/// impl Component for SubmitButton {
///     type Output = ();
///
///     fn render(&self, area: Rect, buf: &mut Buffer) {
///         buf.set_string(area.x, area.y, "[ Send ]", Default::default());
///     }
///
///     fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<Self::Output> {
///         match key.code {
///             KeyCode::Enter => ComponentResult::Done(()),
///             _ => ComponentResult::NotHandled,
///         }
///     }
///
///     fn focus_state(&self) -> FocusState {
///         if self.focused { FocusState::Focused } else { FocusState::Unfocused }
///     }
///
///     fn set_focus(&mut self, focused: bool) {
///         self.focused = focused;
///     }
///
///     fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
///         vec![("Enter", "Send")]
///     }
/// }
/// ```
pub trait Component {
    /// The type of value this component produces when completed.
    type Output;

    /// Render the component to the buffer.
    fn render(&self, area: Rect, buf: &mut Buffer);

    /// Handle a key event.
    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<Self::Output>;

    /// Returns the current focus state of the component.
    fn focus_state(&self) -> FocusState;

    /// Set the focus state of the component.
    fn set_focus(&mut self, focused: bool);

    /// Returns key hints to display for this component.
    ///
    /// Each tuple is (key_label, description).
    fn key_hints(&self) -> Vec<(&'static str, &'static str)>;

    /// Handle pasted text. Returns true if handled.
    fn handle_paste(&mut self, _text: &str) -> bool {
        false
    }

    /// Handle a left click at absolute terminal coordinates.
    ///
    /// Coordinates are hit-tested against what the component drew in its
    /// last `render` call.
    fn handle_click(&mut self, _column: u16, _row: u16) -> ComponentResult<Self::Output> {
        ComponentResult::NotHandled
    }

    /// Number of rows the component wants for the given width.
    fn desired_height(&self, _width: u16) -> u16 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_result_is_handled() {
        assert!(ComponentResult::<()>::Handled.is_handled());
        assert!(ComponentResult::Done(42).is_handled());
        assert!(!ComponentResult::<()>::NotHandled.is_handled());
        assert!(!ComponentResult::<()>::Cancelled.is_handled());
    }

    #[test]
    fn test_component_result_is_done() {
        assert!(ComponentResult::Done(true).is_done());
        assert!(ComponentResult::<bool>::Cancelled.is_done());
        assert!(!ComponentResult::<bool>::Handled.is_done());
        assert!(!ComponentResult::<bool>::NotHandled.is_done());
    }

    #[test]
    fn test_component_result_map() {
        let result: ComponentResult<i32> = ComponentResult::Done(42);
        assert_eq!(result.map(|x| x * 2), ComponentResult::Done(84));

        let handled: ComponentResult<i32> = ComponentResult::Handled;
        assert_eq!(handled.map(|x| x * 2), ComponentResult::Handled);
    }

    #[test]
    fn test_focus_state() {
        assert!(!FocusState::Unfocused.has_focus());
        assert!(FocusState::Focused.has_focus());
        assert!(FocusState::Editing.is_editing());
        assert!(!FocusState::Focused.is_editing());
    }
}
