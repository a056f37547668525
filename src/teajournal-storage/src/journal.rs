//! Tea records and the choice lists derived from them.
//!
//! Every saved tea feeds the "available" lists (types, brands,
//! ingredients) that the form offers as options. Deleting a tea prunes
//! values that no remaining tea uses.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::keys;
use crate::store::{ListSource, ListStore};

/// A saved tea entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeaEntry {
    /// Tea name.
    pub name: String,
    /// Tea type (green, black, infusion...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Brand, may be empty.
    #[serde(default)]
    pub brand: String,
    /// Ingredients in display order.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Free-form comment.
    #[serde(default)]
    pub comment: String,
}

impl TeaEntry {
    /// Create a new tea entry.
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        brand: impl Into<String>,
        ingredients: Vec<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            brand: brand.into(),
            ingredients,
            comment: comment.into(),
        }
    }
}

/// Which available-choices list to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
    Types,
    Brands,
    Ingredients,
}

impl ChoiceKind {
    /// Store key holding this list.
    pub fn key(&self) -> &'static str {
        match self {
            ChoiceKind::Types => keys::TYPES_AVAILABLE,
            ChoiceKind::Brands => keys::BRANDS_AVAILABLE,
            ChoiceKind::Ingredients => keys::INGREDIENTS_AVAILABLE,
        }
    }

    /// Values of this kind carried by one tea.
    fn values_of(self, tea: &TeaEntry) -> Vec<&str> {
        match self {
            ChoiceKind::Types => vec![tea.kind.as_str()],
            ChoiceKind::Brands => vec![tea.brand.as_str()],
            ChoiceKind::Ingredients => tea.ingredients.iter().map(String::as_str).collect(),
        }
    }
}

/// Tea records on top of a [`ListStore`].
#[derive(Debug, Clone)]
pub struct TeaJournal {
    store: ListStore,
}

impl TeaJournal {
    /// Wrap a store.
    pub fn new(store: ListStore) -> Self {
        Self { store }
    }

    /// Underlying store.
    pub fn store(&self) -> &ListStore {
        &self.store
    }

    /// Mutable access to the underlying store.
    pub fn store_mut(&mut self) -> &mut ListStore {
        &mut self.store
    }

    /// All saved teas, oldest first. Malformed data reads as empty.
    pub fn teas(&self) -> Vec<TeaEntry> {
        self.store.get_json(keys::TEAS)
    }

    /// Available values for one choice list.
    pub fn choices(&self, kind: ChoiceKind) -> Vec<String> {
        self.store.get_list(kind.key())
    }

    /// Append a tea and record its type, brand and ingredients as choices.
    pub fn save_tea(&mut self, tea: TeaEntry) -> Result<()> {
        let mut teas = self.teas();
        teas.push(tea.clone());
        self.store.set_json(keys::TEAS, &teas)?;
        self.update_available_choices(&tea)?;
        info!(name = %tea.name, total = teas.len(), "Tea saved");
        Ok(())
    }

    /// Remove the tea at `index`.
    ///
    /// Out-of-range indices are ignored and return `Ok(None)`.
    pub fn delete_tea(&mut self, index: usize) -> Result<Option<TeaEntry>> {
        let mut teas = self.teas();
        if index >= teas.len() {
            debug!(index, total = teas.len(), "Delete ignored, index out of range");
            return Ok(None);
        }

        let removed = teas.remove(index);
        self.store.set_json(keys::TEAS, &teas)?;

        self.prune_unused(&teas, ChoiceKind::Types, &[removed.kind.as_str()])?;
        self.prune_unused(&teas, ChoiceKind::Brands, &[removed.brand.as_str()])?;
        let ingredients: Vec<&str> = removed.ingredients.iter().map(String::as_str).collect();
        self.prune_unused(&teas, ChoiceKind::Ingredients, &ingredients)?;

        info!(name = %removed.name, remaining = teas.len(), "Tea deleted");
        Ok(Some(removed))
    }

    fn update_available_choices(&mut self, tea: &TeaEntry) -> Result<()> {
        if !tea.brand.is_empty() {
            self.store.add_unique(keys::BRANDS_AVAILABLE, &tea.brand)?;
        }
        if !tea.kind.is_empty() {
            self.store.add_unique(keys::TYPES_AVAILABLE, &tea.kind)?;
        }
        for ingredient in &tea.ingredients {
            self.store.add_unique(keys::INGREDIENTS_AVAILABLE, ingredient)?;
        }
        Ok(())
    }

    /// Drop each of `candidates` from the `kind` list unless a remaining tea uses it.
    fn prune_unused(
        &mut self,
        remaining: &[TeaEntry],
        kind: ChoiceKind,
        candidates: &[&str],
    ) -> Result<()> {
        let in_use: Vec<&str> = remaining.iter().flat_map(|t| kind.values_of(t)).collect();
        let unused: Vec<&str> = candidates
            .iter()
            .copied()
            .filter(|c| !c.is_empty() && !in_use.contains(c))
            .collect();
        if unused.is_empty() {
            return Ok(());
        }

        let stored = self.store.get_list(kind.key());
        let updated: Vec<String> = stored
            .into_iter()
            .filter(|v| !unused.contains(&v.as_str()))
            .collect();
        debug!(key = kind.key(), ?unused, "Pruning unused choices");
        self.store.set_list(kind.key(), &updated)
    }
}
