//! Ordered, deduplicated selection of ingredients.

/// Normalize a raw entry the way the journal stores it.
///
/// The first character is upper-cased and the rest is kept as typed,
/// except that a remainder written entirely in capitals is lower-cased.
/// Mixed-case remainders are not folded, so `"mEnthe"` becomes `"MEnthe"`
/// and stays distinct from `"Menthe"`.
///
/// Known limitation: acronyms are folded too, so `"CBD"` is stored as
/// `"Cbd"`. A first letter whose capital is several characters is not
/// stable under a second pass (`"ß"` gives `"SS"`, which gives `"Ss"`), so
/// entries that are already normalized must never be fed back through
/// this function.
///
/// ```rust
/// use teajournal_tui_components::multi_select::capitalize_first;
///
/// assert_eq!(capitalize_first("menthe"), "Menthe");
/// assert_eq!(capitalize_first("MENTHE"), "Menthe");
/// assert_eq!(capitalize_first("mEnthe"), "MEnthe");
/// assert_eq!(capitalize_first("CBD"), "Cbd");
/// ```
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str();

    let shouting = rest.chars().any(char::is_uppercase) && !rest.chars().any(char::is_lowercase);

    let mut out = String::with_capacity(text.len());
    out.extend(first.to_uppercase());
    if shouting {
        out.push_str(&rest.to_lowercase());
    } else {
        out.push_str(rest);
    }
    out
}

/// The chosen ingredients of one form field, in insertion order.
///
/// Only [`add`](Self::add) and [`remove_at`](Self::remove_at) mutate it.
/// Each successful mutation bumps [`revision`](Self::revision), which the
/// widget uses to invalidate pill slots laid out for an older state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    items: Vec<String>,
    revision: u64,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim, normalize and append `raw`.
    ///
    /// Returns false when nothing changed: blank input, or an entry equal
    /// after normalization is already selected.
    pub fn add(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return false;
        }

        let normalized = capitalize_first(trimmed);
        if self.contains(&normalized) {
            tracing::debug!(ingredient = %normalized, "ingredient already selected");
            return false;
        }

        self.items.push(normalized);
        self.revision += 1;
        true
    }

    /// Remove the entry at `index`; out-of-range indices are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index >= self.items.len() {
            return None;
        }
        self.revision += 1;
        Some(self.items.remove(index))
    }

    /// Like [`remove_at`](Self::remove_at) for callers holding a signed index.
    pub fn remove_at_signed(&mut self, index: isize) -> Option<String> {
        usize::try_from(index).ok().and_then(|i| self.remove_at(i))
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|existing| existing == item)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Counter bumped by every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}
