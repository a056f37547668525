//! Focus management utilities.
//!
//! Cycles focus across the fields of a form.

/// Direction of focus movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    /// Move focus forward (Tab, Down, Enter)
    Forward,
    /// Move focus backward (Shift+Tab, Up)
    Backward,
}

/// Manages focus state across multiple focusable elements.
///
/// # Example
///
/// ```rust
/// use teajournal_tui_components::focus::FocusManager;
///
/// let mut focus = FocusManager::new(3); // name, type, submit
///
/// assert_eq!(focus.current(), 0);
///
/// focus.prev();
/// assert_eq!(focus.current(), 2); // Wrapped around
/// ```
#[derive(Debug, Clone)]
pub struct FocusManager {
    current: usize,
    count: usize,
    wrap: bool,
}

impl FocusManager {
    /// Create a new focus manager with the given number of elements.
    pub fn new(count: usize) -> Self {
        Self {
            current: 0,
            count,
            wrap: true,
        }
    }

    /// Set whether focus should wrap around at boundaries.
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Get the current focused index.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Set the current focused index. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize) {
        if index < self.count {
            self.current = index;
        }
    }

    /// Move focus to the next element.
    pub fn next(&mut self) {
        if self.count == 0 {
            return;
        }

        if self.current + 1 < self.count {
            self.current += 1;
        } else if self.wrap {
            self.current = 0;
        }
    }

    /// Move focus to the previous element.
    pub fn prev(&mut self) {
        if self.count == 0 {
            return;
        }

        if self.current > 0 {
            self.current -= 1;
        } else if self.wrap {
            self.current = self.count - 1;
        }
    }

    /// Move focus in the given direction.
    pub fn move_focus(&mut self, direction: FocusDirection) {
        match direction {
            FocusDirection::Forward => self.next(),
            FocusDirection::Backward => self.prev(),
        }
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.current == index
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl Default for FocusManager {
    fn default() -> Self {
        Self::new(0)
    }
}
