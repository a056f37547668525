//! Highlight movement over the rendered suggestion rows.

/// Highlighted suggestion, `None` when nothing is highlighted.
///
/// The navigator does not own the suggestion list; every call takes the
/// current row count so an index can never outlive the list it was
/// computed for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightNavigator {
    index: Option<usize>,
}

impl HighlightNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move down with wrap-around. No-op when there are no rows.
    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = Some(match self.index {
            Some(i) if i < len => (i + 1) % len,
            _ => 0,
        });
    }

    /// Move up with wrap-around. No-op when there are no rows.
    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = Some(match self.index {
            Some(i) if i < len => (i + len - 1) % len,
            _ => len - 1,
        });
    }

    /// Drop the highlight.
    pub fn reset(&mut self) {
        self.index = None;
    }

    /// Highlighted index if it is valid for `len` rows.
    pub fn highlighted(&self, len: usize) -> Option<usize> {
        self.index.filter(|&i| i < len)
    }

    /// Raw index as stored, possibly stale.
    pub fn raw(&self) -> Option<usize> {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_from_none_then_wraps() {
        let mut nav = HighlightNavigator::new();
        nav.move_down(3);
        assert_eq!(nav.highlighted(3), Some(0));

        let mut seen = Vec::new();
        for _ in 0..3 {
            nav.move_down(3);
            seen.push(nav.highlighted(3));
        }
        assert_eq!(seen, [Some(1), Some(2), Some(0)]);
    }

    #[test]
    fn test_up_from_none_lands_on_last() {
        let mut nav = HighlightNavigator::new();
        nav.move_up(3);
        assert_eq!(nav.highlighted(3), Some(2));
        nav.move_up(3);
        nav.move_up(3);
        nav.move_up(3);
        assert_eq!(nav.highlighted(3), Some(2));
    }

    #[test]
    fn test_empty_list_is_noop() {
        let mut nav = HighlightNavigator::new();
        nav.move_down(0);
        nav.move_up(0);
        assert_eq!(nav.raw(), None);
    }

    #[test]
    fn test_stale_index_reads_as_none() {
        let mut nav = HighlightNavigator::new();
        nav.move_up(5);
        assert_eq!(nav.raw(), Some(4));
        assert_eq!(nav.highlighted(2), None);

        // Moving over a shorter list restarts from the edge.
        nav.move_down(2);
        assert_eq!(nav.highlighted(2), Some(0));
    }

    #[test]
    fn test_reset() {
        let mut nav = HighlightNavigator::new();
        nav.move_down(1);
        nav.reset();
        assert_eq!(nav.highlighted(1), None);
    }
}
